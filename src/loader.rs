use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Supported resume formats, tagged by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Pdf,
    Docx,
}

impl DocFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocFormat::Pdf),
            "docx" => Some(DocFormat::Docx),
            _ => None,
        }
    }
}

/// A resume file loaded into memory. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Document {
    pub filename: String,
    pub format: DocFormat,
    pub bytes: Vec<u8>,
}

/// Walk `dir` and load every PDF/DOCX file, sorted by path so batch order is
/// deterministic. Unsupported and unreadable files are skipped with a log
/// line; they never abort the load.
pub fn load_dir(dir: &Path) -> Result<Vec<Document>> {
    if !dir.is_dir() {
        return Err(anyhow::anyhow!("resume directory not found: {}", dir.display()));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        match DocFormat::from_path(entry.path()) {
            Some(format) => paths.push((entry.path().to_path_buf(), format)),
            None => debug!("Skipping unsupported file: {}", entry.path().display()),
        }
    }
    paths.sort_by(|a, b| a.0.cmp(&b.0));

    let mut docs = Vec::with_capacity(paths.len());
    for (path, format) in paths {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match fs::read(&path) {
            Ok(bytes) => docs.push(Document { filename, format, bytes }),
            Err(e) => warn!("Skipping unreadable file {}: {}", path.display(), e),
        }
    }

    info!("Loaded {} resumes from {}", docs.len(), dir.display());
    Ok(docs)
}

// ── Tests ──
