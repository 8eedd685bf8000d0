use std::io::{Cursor, Read};

use anyhow::{anyhow, Context, Result};
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use quick_xml::events::Event;

/// Extract DOCX text: the structured document reader first, then a raw
/// package scan for files the reader rejects (truncated or nonstandard
/// packages that still carry a readable document part).
pub fn read_text(bytes: &[u8]) -> Result<String> {
    match read_paragraphs(bytes) {
        Ok(text) => Ok(text),
        Err(_) => read_package_xml(bytes),
    }
}

/// Primary path: walk the document object and join paragraph text.
fn read_paragraphs(bytes: &[u8]) -> Result<String> {
    let docx = read_docx(bytes).map_err(|e| anyhow!("docx reader: {e:?}"))?;
    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(para) = child {
            let mut line = String::new();
            for pc in &para.children {
                if let ParagraphChild::Run(run) = pc {
                    for rc in &run.children {
                        if let RunChild::Text(t) = rc {
                            line.push_str(&t.text);
                        }
                    }
                }
            }
            paragraphs.push(line);
        }
    }
    Ok(paragraphs.join("\n"))
}

/// Fallback path: open the bytes as a zip archive, read the main document
/// part, and collect the text of every `t` element. Matching is on the
/// local tag name, so both `w:t` and bare `t` count.
fn read_package_xml(bytes: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut entry = archive
        .by_name("word/document.xml")
        .context("no word/document.xml entry")?;
    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;

    let mut reader = quick_xml::Reader::from_str(&xml);
    let mut fragments: Vec<String> = Vec::new();
    let mut in_text = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().local_name().as_ref() == b"t" => in_text = true,
            Ok(Event::Text(e)) if in_text => {
                fragments.push(e.unescape()?.to_string());
            }
            Ok(Event::End(e)) if e.name().local_name().as_ref() == b"t" => in_text = false,
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    Ok(fragments.join(" "))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    /// Build a bare package holding only the main document part. The
    /// structured reader rejects it (no content types), which is exactly
    /// what drives the fallback path.
    fn package_with(document_xml: &str) -> Vec<u8> {
        let mut zw = zip::ZipWriter::new(Cursor::new(Vec::new()));
        zw.start_file("word/document.xml", SimpleFileOptions::default()).unwrap();
        zw.write_all(document_xml.as_bytes()).unwrap();
        zw.finish().unwrap().into_inner()
    }

    #[test]
    fn fallback_collects_namespaced_text() {
        let bytes = package_with(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
                 <w:body>
                   <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
                   <w:p><w:r><w:t>6 years experience</w:t></w:r></w:p>
                 </w:body>
               </w:document>"#,
        );
        assert_eq!(read_text(&bytes).unwrap(), "Jane Doe 6 years experience");
    }

    #[test]
    fn fallback_collects_unqualified_text() {
        let bytes = package_with("<document><body><p><r><t>plain</t></r></p></body></document>");
        assert_eq!(read_text(&bytes).unwrap(), "plain");
    }

    #[test]
    fn fragments_join_with_single_space() {
        let bytes = package_with("<d><t>alpha</t><t>beta</t><t>gamma</t></d>");
        assert_eq!(read_text(&bytes).unwrap(), "alpha beta gamma");
    }

    #[test]
    fn entities_are_unescaped() {
        let bytes = package_with("<d><t>C &amp; D</t></d>");
        assert_eq!(read_text(&bytes).unwrap(), "C & D");
    }

    #[test]
    fn non_zip_bytes_error() {
        assert!(read_text(b"not a zip archive").is_err());
    }

    #[test]
    fn missing_document_entry_errors() {
        let mut zw = zip::ZipWriter::new(Cursor::new(Vec::new()));
        zw.start_file("other.txt", SimpleFileOptions::default()).unwrap();
        zw.write_all(b"hello").unwrap();
        let bytes = zw.finish().unwrap().into_inner();
        assert!(read_text(&bytes).is_err());
    }
}
