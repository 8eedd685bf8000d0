use std::sync::LazyLock;

use anyhow::Result;
use regex::{Regex, RegexBuilder};

static EXPERIENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"(\d+(?:\.\d+)?)\s*(?:years|yrs|year)")
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// Recruiter-supplied matching profile for one batch run.
#[derive(Debug, Clone, Default)]
pub struct MatchCriteria {
    pub keywords: Vec<String>,
    pub domains: Vec<String>,
    pub tools: Vec<String>,
    pub skills: Vec<String>,
    pub min_experience: Option<f64>,
    pub relax: bool,
}

/// Split a comma-separated term list, trimming whitespace and dropping
/// empty entries.
pub fn parse_terms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

struct Term {
    text: String,
    re: Regex,
}

/// Criteria with every term compiled to an escaped, case-insensitive
/// pattern. Built once per batch run, not per document.
pub struct CompiledCriteria {
    keywords: Vec<Term>,
    domains: Vec<Term>,
    tools: Vec<Term>,
    skills: Vec<Term>,
    min_experience: Option<f64>,
    relax: bool,
}

impl CompiledCriteria {
    pub fn compile(criteria: &MatchCriteria) -> Result<Self> {
        Ok(CompiledCriteria {
            keywords: compile_terms(&criteria.keywords)?,
            domains: compile_terms(&criteria.domains)?,
            tools: compile_terms(&criteria.tools)?,
            skills: compile_terms(&criteria.skills)?,
            min_experience: criteria.min_experience,
            relax: criteria.relax,
        })
    }
}

fn compile_terms(terms: &[String]) -> Result<Vec<Term>> {
    terms
        .iter()
        .map(|t| {
            let re = RegexBuilder::new(&regex::escape(t))
                .case_insensitive(true)
                .build()?;
            Ok(Term { text: t.clone(), re })
        })
        .collect()
}

/// Scoring result for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub matched_keywords: Vec<String>,
    pub matched_domains: Vec<String>,
    pub matched_tools: Vec<String>,
    pub matched_skills: Vec<String>,
    pub experience_years: f64,
    pub experience_ok: bool,
    pub match_pct: f64,
}

/// Score text against compiled criteria. Pure: identical inputs always
/// produce identical outcomes.
pub fn score(text: &str, criteria: &CompiledCriteria) -> MatchOutcome {
    let experience_years = max_experience_years(text);

    let matched_keywords = matched_terms(text, &criteria.keywords);
    let match_pct = if criteria.keywords.is_empty() {
        0.0
    } else {
        round2(matched_keywords.len() as f64 / criteria.keywords.len() as f64 * 100.0)
    };

    let experience_ok = match criteria.min_experience {
        None => true,
        Some(min) => {
            let required = if criteria.relax && min > 0.0 { min - 1.0 } else { min };
            experience_years >= required
        }
    };

    MatchOutcome {
        matched_keywords,
        matched_domains: matched_terms(text, &criteria.domains),
        matched_tools: matched_terms(text, &criteria.tools),
        matched_skills: matched_terms(text, &criteria.skills),
        experience_years,
        experience_ok,
        match_pct,
    }
}

/// Largest "N years/yrs/year" figure in the text, or 0.0. Resumes state
/// tenure per role; the maximum stands in for the most relevant total.
fn max_experience_years(text: &str) -> f64 {
    EXPERIENCE_RE
        .captures_iter(text)
        .filter_map(|c| c[1].parse::<f64>().ok())
        .fold(0.0, f64::max)
}

fn matched_terms(text: &str, terms: &[Term]) -> Vec<String> {
    terms
        .iter()
        .filter(|t| t.re.is_match(text))
        .map(|t| t.text.clone())
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ── Tests ──
