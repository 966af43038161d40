//! Output directory layout.
//!
//! Per-file reports land under `<output>/sources/<source>/`, named after the
//! file stem; batch-level reports live at the output root.

use std::path::{Path, PathBuf};

use hq_model::FileProfile;

/// Destinations for one file's reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileReportPaths {
    pub json: PathBuf,
    pub markdown: PathBuf,
    pub fields_tsv: PathBuf,
}

/// Compute the report paths for one profiled file.
pub fn profile_report_paths(output_dir: &Path, profile: &FileProfile) -> ProfileReportPaths {
    let dir = output_dir.join("sources").join(&profile.source);
    let stem = Path::new(&profile.filename)
        .file_stem()
        .map_or_else(|| profile.filename.clone(), |s| s.to_string_lossy().into_owned());
    ProfileReportPaths {
        json: dir.join(format!("{stem}_profile.json")),
        markdown: dir.join(format!("{stem}_report.md")),
        fields_tsv: dir.join(format!("{stem}_fields.tsv")),
    }
}

/// Path of the cross-source analysis report.
pub fn cross_report_path(output_dir: &Path) -> PathBuf {
    output_dir.join("cross_source_analysis.json")
}

/// Path of the aggregated field-level TSV.
pub fn fields_tsv_path(output_dir: &Path) -> PathBuf {
    output_dir.join("fields.tsv")
}
