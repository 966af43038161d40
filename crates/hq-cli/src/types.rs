use std::path::PathBuf;

use hq_model::FileProfile;

/// Result of a profiling run, consumed by the summary printer.
#[derive(Debug)]
pub struct ScanResult {
    pub output_dir: PathBuf,
    pub profiles: Vec<FileProfile>,
    /// Path of the written cross-source report, when one was produced.
    pub cross_report: Option<PathBuf>,
    /// Path of the aggregated field-level TSV, when one was produced.
    pub fields_tsv: Option<PathBuf>,
}

impl ScanResult {
    /// Whether any file failed to profile.
    pub fn has_failures(&self) -> bool {
        self.profiles.iter().any(|p| p.error().is_some())
    }
}
