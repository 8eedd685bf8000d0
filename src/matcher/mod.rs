pub mod contacts;
pub mod criteria;

use anyhow::Result;
use tracing::info;

use crate::extract;
use crate::loader::Document;
use crate::report::{Report, ResumeRecord};

use contacts::infer_contacts;
use criteria::{score, CompiledCriteria, MatchCriteria};

/// Per-document pipeline: bytes → text → contacts + scores → record.
pub fn process_document(doc: &Document, criteria: &CompiledCriteria) -> ResumeRecord {
    let text = extract::extract_text(doc);
    let contact = infer_contacts(&text);
    let outcome = score(&text, criteria);

    ResumeRecord {
        filename: doc.filename.clone(),
        name: contact.name,
        emails: contact.emails,
        phones: contact.phones,
        matched_domains: outcome.matched_domains,
        matched_tools: outcome.matched_tools,
        matched_skills: outcome.matched_skills,
        experience_years: outcome.experience_years,
        experience_ok: outcome.experience_ok,
        matched_keywords: outcome.matched_keywords,
        match_pct: outcome.match_pct,
    }
}

/// Match every document against the criteria, in input order, one record
/// per document. `progress` is called with `(completed, total)` after each
/// document; pass `|_, _| {}` when no display is attached.
///
/// Criteria compilation is the only fallible step and happens before the
/// first document is touched. Per-document failures degrade to records with
/// empty fields; they never abort the batch.
pub fn run_batch(
    docs: &[Document],
    criteria: &MatchCriteria,
    mut progress: impl FnMut(usize, usize),
) -> Result<Report> {
    let compiled = CompiledCriteria::compile(criteria)?;
    let total = docs.len();
    info!("Resumes to process: {}", total);

    let mut report = Report::default();
    for (i, doc) in docs.iter().enumerate() {
        report.push(process_document(doc, &compiled));
        progress(i + 1, total);
    }
    Ok(report)
}

// ── Tests ──
