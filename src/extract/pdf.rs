use std::panic;

use anyhow::{anyhow, Result};

/// Extract all recoverable text from a PDF, in the extractor's reading
/// order. No structural reconstruction is attempted.
pub fn read_text(bytes: &[u8]) -> Result<String> {
    // pdf-extract aborts with a panic on some malformed files; contain that
    // to this call so a corrupt PDF degrades like any other bad document.
    let outcome = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    }));
    match outcome {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(anyhow!("pdf extraction failed: {e}")),
        Err(_) => Err(anyhow!("pdf parser panicked")),
    }
}
