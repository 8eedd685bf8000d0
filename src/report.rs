use std::io;

use anyhow::Result;
use serde::Serialize;

/// One row of the matching report. Assembled once per document and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeRecord {
    pub filename: String,
    pub name: String,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub matched_domains: Vec<String>,
    pub matched_tools: Vec<String>,
    pub matched_skills: Vec<String>,
    pub experience_years: f64,
    pub experience_ok: bool,
    pub matched_keywords: Vec<String>,
    pub match_pct: f64,
}

/// Ordered record collection, one row per input document.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub records: Vec<ResumeRecord>,
}

/// Headline metrics for a finished report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportSummary {
    pub total: usize,
    pub matched: usize,
    pub avg_match_pct: f64,
}

pub const CSV_HEADER: &[&str] = &[
    "Filename",
    "Name",
    "Email",
    "Phone",
    "Domain",
    "Tools",
    "Skillset",
    "Experience_Years",
    "Experience_Match",
    "Matched_Keywords",
    "Match_Percentage",
];

impl Report {
    pub fn push(&mut self, record: ResumeRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total rows, experience-satisfied rows, mean match percentage.
    pub fn summary(&self) -> ReportSummary {
        let total = self.records.len();
        let matched = self.records.iter().filter(|r| r.experience_ok).count();
        let avg_match_pct = if total == 0 {
            0.0
        } else {
            self.records.iter().map(|r| r.match_pct).sum::<f64>() / total as f64
        };
        ReportSummary { total, matched, avg_match_pct }
    }

    /// Write the report as CSV: a header row of column names, then one row
    /// per record in report order. Contact lists join with ", ", matched
    /// term lists with ";".
    pub fn write_csv(&self, out: impl io::Write) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(out);
        wtr.write_record(CSV_HEADER)?;
        for r in &self.records {
            wtr.write_record([
                r.filename.clone(),
                r.name.clone(),
                r.emails.join(", "),
                r.phones.join(", "),
                r.matched_domains.join(";"),
                r.matched_tools.join(";"),
                r.matched_skills.join(";"),
                r.experience_years.to_string(),
                r.experience_ok.to_string(),
                r.matched_keywords.join(";"),
                r.match_pct.to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn record(filename: &str, ok: bool, pct: f64) -> ResumeRecord {
        ResumeRecord {
            filename: filename.to_string(),
            name: "Jane Doe".to_string(),
            emails: vec!["jane.doe@example.com".to_string()],
            phones: vec![],
            matched_domains: vec!["VLSI".to_string()],
            matched_tools: vec![],
            matched_skills: vec![],
            experience_years: 6.0,
            experience_ok: ok,
            matched_keywords: vec!["Verilog".to_string()],
            match_pct: pct,
        }
    }

    #[test]
    fn summary_counts_and_average() {
        let mut report = Report::default();
        report.push(record("a.pdf", true, 50.0));
        report.push(record("b.pdf", false, 100.0));
        let s = report.summary();
        assert_eq!(s.total, 2);
        assert_eq!(s.matched, 1);
        assert_eq!(s.avg_match_pct, 75.0);
    }

    #[test]
    fn empty_report_summary_is_zero() {
        let s = Report::default().summary();
        assert_eq!(s.total, 0);
        assert_eq!(s.matched, 0);
        assert_eq!(s.avg_match_pct, 0.0);
    }

    #[test]
    fn csv_has_header_and_one_row_per_record() {
        let mut report = Report::default();
        report.push(record("a.pdf", true, 50.0));
        report.push(record("b.pdf", false, 0.0));

        let mut buf = Vec::new();
        report.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER.join(","));
        assert!(lines[1].starts_with("a.pdf,Jane Doe,jane.doe@example.com"));
        assert!(lines[1].contains("Verilog"));
    }

    #[test]
    fn csv_joins_list_fields() {
        let mut r = record("a.pdf", true, 100.0);
        r.emails.push("alt@example.com".to_string());
        r.matched_keywords.push("TCL".to_string());
        let mut report = Report::default();
        report.push(r);

        let mut buf = Vec::new();
        report.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"jane.doe@example.com, alt@example.com\""));
        assert!(text.contains("Verilog;TCL"));
    }

    #[test]
    fn report_serializes_to_json() {
        let mut report = Report::default();
        report.push(record("a.pdf", true, 50.0));
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"filename\":\"a.pdf\""));
        assert!(json.contains("\"match_pct\":50.0"));
    }
}
