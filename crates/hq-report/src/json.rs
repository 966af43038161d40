//! Pretty-printed JSON reports.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use hq_cross::CrossSourceReport;
use hq_model::FileProfile;

/// Write one file profile as pretty-printed JSON.
pub fn write_profile_json(profile: &FileProfile, output_path: &Path) -> Result<()> {
    write_pretty(profile, output_path)
}

/// Write the cross-source report as pretty-printed JSON.
pub fn write_cross_report_json(report: &CrossSourceReport, output_path: &Path) -> Result<()> {
    write_pretty(report, output_path)
}

fn write_pretty<T: Serialize>(value: &T, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value).context("serialize report")?;
    fs::write(output_path, json).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hq_model::ProfileDetail;
    use std::path::PathBuf;

    #[test]
    fn writes_and_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let profile = FileProfile {
            source: "gencc".to_string(),
            filepath: PathBuf::from("data/sources/gencc/submissions.tsv"),
            filename: "submissions.tsv".to_string(),
            file_size_mb: 0.2,
            detail: ProfileDetail::Failed {
                error: "unreadable".to_string(),
            },
        };
        let path = dir.path().join("sources/gencc/submissions_profile.json");
        write_profile_json(&profile, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["source"], "gencc");
        assert_eq!(value["kind"], "failed");
        // Pretty printing: multi-line output
        assert!(text.contains('\n'));
    }
}
