//! File-level profile types for tabular and semi-structured sources.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::field::FieldProfile;

/// Semi-structured document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    Xml,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => f.write_str("json"),
            DocumentFormat::Xml => f.write_str("xml"),
        }
    }
}

/// Profile of a delimited tabular file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularProfile {
    pub row_count: usize,
    pub column_count: usize,
    pub delimiter: char,
    /// Encoding name as reported by the detector (e.g. "UTF-8").
    pub encoding: String,
    /// One profile per column, in header order.
    pub field_analyses: Vec<FieldProfile>,
}

/// Structural summary of a JSON or XML document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureProfile {
    pub format: DocumentFormat,
    /// Root element name; XML only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_tag: Option<String>,
    pub max_depth: usize,
    pub node_count: usize,
    pub unique_paths: usize,
    /// Sorted paths; XML paths are capped at 50 for readability.
    pub paths: Vec<String>,
    /// Tag name frequencies, most common first, top 20; XML only.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tag_frequencies: Vec<(String, usize)>,
    /// Inferred schema sketch; JSON only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

/// Format-specific part of a file profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileDetail {
    Tabular(TabularProfile),
    SemiStructured(StructureProfile),
    /// The file could not be analyzed; the batch continues regardless.
    Failed { error: String },
}

/// Complete profile of one analyzed file. Created once, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileProfile {
    /// Source name the file belongs to (e.g. "gencc").
    pub source: String,
    pub filepath: PathBuf,
    pub filename: String,
    pub file_size_mb: f64,
    #[serde(flatten)]
    pub detail: ProfileDetail,
}

impl FileProfile {
    /// Field profiles when tabular, empty slice otherwise.
    pub fn fields(&self) -> &[FieldProfile] {
        match &self.detail {
            ProfileDetail::Tabular(tabular) => &tabular.field_analyses,
            _ => &[],
        }
    }

    /// Error message for failed profiles.
    pub fn error(&self) -> Option<&str> {
        match &self.detail {
            ProfileDetail::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// Group profiles by source name, preserving per-source order.
    pub fn group_by_source(profiles: &[FileProfile]) -> BTreeMap<&str, Vec<&FileProfile>> {
        let mut grouped: BTreeMap<&str, Vec<&FileProfile>> = BTreeMap::new();
        for profile in profiles {
            grouped.entry(profile.source.as_str()).or_default().push(profile);
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_profile_flattens_kind_and_error() {
        let profile = FileProfile {
            source: "clinvar".to_string(),
            filepath: PathBuf::from("data/sources/clinvar/bad.xml"),
            filename: "bad.xml".to_string(),
            file_size_mb: 0.1,
            detail: ProfileDetail::Failed {
                error: "corrupt XML".to_string(),
            },
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["kind"], "failed");
        assert_eq!(json["error"], "corrupt XML");
        assert_eq!(profile.error(), Some("corrupt XML"));
        assert!(profile.fields().is_empty());
    }

    #[test]
    fn group_by_source_preserves_order() {
        let make = |source: &str, name: &str| FileProfile {
            source: source.to_string(),
            filepath: PathBuf::from(name),
            filename: name.to_string(),
            file_size_mb: 0.0,
            detail: ProfileDetail::Failed {
                error: String::new(),
            },
        };
        let profiles = vec![make("b", "1"), make("a", "2"), make("b", "3")];
        let grouped = FileProfile::group_by_source(&profiles);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["b"].len(), 2);
        assert_eq!(grouped["b"][0].filename, "1");
    }
}
