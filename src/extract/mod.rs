pub mod docx;
pub mod pdf;

use std::path::Path;

use tracing::warn;

use crate::loader::{DocFormat, Document};

/// Extract the full text of a document. Any extraction failure is logged
/// and degrades to an empty string; a bad file must never abort the batch.
pub fn extract_text(doc: &Document) -> String {
    let result = match doc.format {
        DocFormat::Pdf => pdf::read_text(&doc.bytes),
        DocFormat::Docx => docx::read_text(&doc.bytes),
    };
    match result {
        Ok(text) => text,
        Err(e) => {
            warn!("Error extracting text from {}: {}", doc.filename, e);
            String::new()
        }
    }
}

/// Path-based variant for one-off inspection: reads the file and dispatches
/// on its extension. Unknown extensions and unreadable files yield an empty
/// string.
pub fn extract_file(path: &Path) -> String {
    let Some(format) = DocFormat::from_path(path) else {
        warn!("Unsupported file extension: {}", path.display());
        return String::new();
    };
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match std::fs::read(path) {
        Ok(bytes) => extract_text(&Document { filename, format, bytes }),
        Err(e) => {
            warn!("Error reading {}: {}", path.display(), e);
            String::new()
        }
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(filename: &str, format: DocFormat, bytes: &[u8]) -> Document {
        Document {
            filename: filename.to_string(),
            format,
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn malformed_docx_degrades_to_empty() {
        let text = extract_text(&doc("broken.docx", DocFormat::Docx, b"not a zip archive"));
        assert_eq!(text, "");
    }

    #[test]
    fn malformed_pdf_degrades_to_empty() {
        let text = extract_text(&doc("broken.pdf", DocFormat::Pdf, b"not a pdf"));
        assert_eq!(text, "");
    }

    #[test]
    fn unknown_extension_yields_empty() {
        assert_eq!(extract_file(Path::new("resume.odt")), "");
        assert_eq!(extract_file(Path::new("no_extension")), "");
    }

    #[test]
    fn unreadable_path_yields_empty() {
        assert_eq!(extract_file(Path::new("/no/such/file.pdf")), "");
    }
}
