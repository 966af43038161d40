//! Discovery of analyzable files under a `data/sources/<source>/` tree.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Kind of file the profiler knows how to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Delimited text (.tsv, .csv, .txt).
    Tabular,
    Json,
    Xml,
}

/// A discovered data file, attributed to its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveredFile {
    /// Source name, taken from the first directory level (e.g. "clinvar").
    pub source: String,
    pub path: PathBuf,
    pub kind: FileKind,
}

/// Classify a path by extension. Gzip-compressed files classify by the
/// extension before `.gz`, so `variant_summary.txt.gz` is tabular. Returns
/// `None` for unsupported files.
pub fn classify(path: &Path) -> Option<FileKind> {
    let name = path.file_name()?.to_str()?.to_lowercase();
    let inner = name.strip_suffix(".gz").unwrap_or(&name);
    let (_, extension) = inner.rsplit_once('.')?;
    match extension {
        "tsv" | "csv" | "txt" => Some(FileKind::Tabular),
        "json" => Some(FileKind::Json),
        "xml" => Some(FileKind::Xml),
        _ => None,
    }
}

/// Discover all analyzable files under `base`, one directory per source.
///
/// Hidden files and `manifest.json` provenance files are skipped. Results
/// are sorted by source then path so batch runs are deterministic.
pub fn discover_sources(base: &Path) -> Result<Vec<DiscoveredFile>> {
    if !base.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: base.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in read_dir_sorted(base)? {
        if !entry.is_dir() {
            continue;
        }
        let source = entry
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
            .to_string();
        if source.is_empty() || source.starts_with('.') {
            continue;
        }
        collect_files(&entry, &source, &mut files)?;
    }

    files.sort_by(|a, b| (&a.source, &a.path).cmp(&(&b.source, &b.path)));
    Ok(files)
}

fn collect_files(dir: &Path, source: &str, files: &mut Vec<DiscoveredFile>) -> Result<()> {
    for path in read_dir_sorted(dir)? {
        if path.is_dir() {
            collect_files(&path, source, files)?;
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if name.starts_with('.') || name == "manifest.json" {
            continue;
        }
        if let Some(kind) = classify(&path) {
            files.push(DiscoveredFile {
                source: source.to_string(),
                path,
                kind,
            });
        }
    }
    Ok(())
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}
