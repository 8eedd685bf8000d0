use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+\.[A-Za-z]{2,}").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\+?\d[\d \-]{7,}\d").unwrap());

/// Contact fields inferred from resume text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactInfo {
    pub name: String,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}

/// Infer contact fields from raw text. Emails and phones are collected in
/// order of occurrence, duplicates included.
///
/// The name is a heuristic only: the local part of the first email, split on
/// `.`/`_` and capitalized. Role addresses produce junk ("hr@company.com"
/// becomes "Hr"), and the phone pattern accepts arbitrary digit runs with
/// spaces and hyphens. Both are accepted limitations, not bugs.
pub fn infer_contacts(text: &str) -> ContactInfo {
    let emails: Vec<String> = EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    let phones: Vec<String> = PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    let name = emails.first().map(|e| name_from_email(e)).unwrap_or_default();

    ContactInfo { name, emails, phones }
}

/// "jane.doe@example.com" becomes "Jane Doe".
fn name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or("");
    local
        .split(['.', '_'])
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

// ── Tests ──
