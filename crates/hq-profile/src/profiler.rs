//! File-level profiling orchestration.
//!
//! Each file is profiled independently on a rayon worker; a failure becomes
//! a `Failed` profile detail and never aborts the batch.

use std::path::Path;

use rayon::prelude::*;

use hq_ingest::{DiscoveredFile, FileKind, TableOptions};
use hq_model::{FileProfile, ProfileDetail};

use crate::semistructured::{profile_json, profile_xml};
use crate::tabular::profile_tabular;

/// Options controlling a profiling run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileOptions {
    /// Cap the number of data rows read from each tabular file.
    pub sample_rows: Option<usize>,
}

/// Profile a single discovered file. Never fails: errors are recorded on
/// the returned profile.
pub fn profile_file(file: &DiscoveredFile, options: ProfileOptions) -> FileProfile {
    let detail = match file.kind {
        FileKind::Tabular => profile_tabular(
            &file.path,
            TableOptions {
                sample_rows: options.sample_rows,
            },
        )
        .map(ProfileDetail::Tabular),
        FileKind::Json => profile_json(&file.path).map(ProfileDetail::SemiStructured),
        FileKind::Xml => profile_xml(&file.path).map(ProfileDetail::SemiStructured),
    };

    let detail = detail.unwrap_or_else(|error| {
        tracing::warn!(path = %file.path.display(), %error, "failed to profile file");
        ProfileDetail::Failed {
            error: error.to_string(),
        }
    });

    FileProfile {
        source: file.source.clone(),
        filepath: file.path.clone(),
        filename: filename_of(&file.path),
        file_size_mb: file_size_mb(&file.path),
        detail,
    }
}

/// Profile a batch of files in parallel.
///
/// Files are independent tasks with no shared mutable state; results are
/// appended order-insensitively and then sorted by source and path.
pub fn profile_batch(files: &[DiscoveredFile], options: ProfileOptions) -> Vec<FileProfile> {
    let mut profiles: Vec<FileProfile> = files
        .par_iter()
        .map(|file| profile_file(file, options))
        .collect();
    profiles.sort_by(|a, b| (&a.source, &a.filepath).cmp(&(&b.source, &b.filepath)));
    profiles
}

fn filename_of(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("")
        .to_string()
}

fn file_size_mb(path: &Path) -> f64 {
    std::fs::metadata(path)
        .map(|meta| meta.len() as f64 / (1024.0 * 1024.0))
        .unwrap_or(0.0)
}
