//! Field-level TSV reports.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use hq_model::FileProfile;

const FIELD_HEADERS: [&str; 10] = [
    "source",
    "filename",
    "field_name",
    "data_type",
    "total_count",
    "non_null_count",
    "null_percentage",
    "unique_count",
    "cardinality",
    "pattern",
];

/// Write one row per field across all profiles, tab-delimited.
///
/// Failed and semi-structured profiles contribute no rows; the header is
/// always written so downstream tooling sees a well-formed file.
pub fn write_fields_tsv(profiles: &[FileProfile], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(output_path)
        .with_context(|| format!("create {}", output_path.display()))?;

    writer.write_record(FIELD_HEADERS).context("write header")?;
    for profile in profiles {
        for field in profile.fields() {
            writer
                .write_record([
                    profile.source.as_str(),
                    profile.filename.as_str(),
                    field.name.as_str(),
                    field.data_type.as_str(),
                    &field.total_count.to_string(),
                    &field.non_null_count.to_string(),
                    &format!("{:.2}", field.null_percentage),
                    &field.unique_count.to_string(),
                    field.cardinality.as_str(),
                    field.pattern.map_or("", |p| p.as_str()),
                ])
                .with_context(|| format!("write field row for {}", field.name))?;
        }
    }
    writer.flush().context("flush TSV")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hq_model::{
        Cardinality, DataType, FieldProfile, FieldStats, IdentifierPattern, ProfileDetail,
        TabularProfile, TextStats,
    };
    use std::path::PathBuf;

    fn profile() -> FileProfile {
        FileProfile {
            source: "gencc".to_string(),
            filepath: PathBuf::from("data/sources/gencc/submissions.tsv"),
            filename: "submissions.tsv".to_string(),
            file_size_mb: 1.0,
            detail: ProfileDetail::Tabular(TabularProfile {
                row_count: 10,
                column_count: 1,
                delimiter: '\t',
                encoding: "UTF-8".to_string(),
                field_analyses: vec![FieldProfile {
                    name: "hgnc_id".to_string(),
                    data_type: DataType::String,
                    total_count: 10,
                    non_null_count: 9,
                    null_count: 1,
                    null_percentage: 10.0,
                    unique_count: 9,
                    cardinality: Cardinality::Unique,
                    pattern: Some(IdentifierPattern::HgncId),
                    stats: FieldStats::Text(TextStats {
                        min_length: 8,
                        max_length: 10,
                        mean_length: 9.0,
                        top_values: Vec::new(),
                    }),
                }],
            }),
        }
    }

    #[test]
    fn rows_are_tab_delimited_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fields.tsv");
        write_fields_tsv(&[profile()], &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "source\tfilename\tfield_name\tdata_type\ttotal_count\tnon_null_count\tnull_percentage\tunique_count\tcardinality\tpattern"
        );
        assert_eq!(
            lines.next().unwrap(),
            "gencc\tsubmissions.tsv\thgnc_id\tstring\t10\t9\t10.00\t9\tunique\tHGNC ID"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn failed_profiles_yield_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fields.tsv");
        let failed = FileProfile {
            detail: ProfileDetail::Failed {
                error: "bad".to_string(),
            },
            ..profile()
        };
        write_fields_tsv(&[failed], &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
