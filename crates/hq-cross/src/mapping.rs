//! Fuzzy field-name mapping across sources.
//!
//! Similarity is the rapidfuzz Indel normalized similarity
//! (2*LCS / (len1 + len2)) over normalized names. The algorithm is fixed:
//! swapping in a different string metric moves scores near the confidence
//! tier boundaries and breaks reproducibility.

use std::collections::BTreeMap;

use rapidfuzz::distance::indel;

use hq_model::{DataType, FileProfile, IdentifierPattern};

use crate::types::{Confidence, FieldMapping};

/// Minimum similarity for a suggestion, unless overridden.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Declared type and pattern of one field, as seen by the matcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSummary {
    pub data_type: DataType,
    pub pattern: Option<IdentifierPattern>,
}

/// Normalize a field name for comparison: lowercase, separators to spaces.
pub fn normalize(name: &str) -> String {
    name.to_lowercase().replace(['_', '-'], " ")
}

/// Similarity of two field names in [0, 1].
pub fn field_name_similarity(name1: &str, name2: &str) -> f64 {
    indel::normalized_similarity(normalize(name1).chars(), normalize(name2).chars())
}

/// Collect each source's fields from its profiles. A field name appearing
/// in several files of one source keeps the last profile's summary.
pub fn collect_source_fields(
    grouped: &BTreeMap<&str, Vec<&FileProfile>>,
) -> BTreeMap<String, BTreeMap<String, FieldSummary>> {
    let mut by_source = BTreeMap::new();
    for (source, profiles) in grouped {
        let mut fields: BTreeMap<String, FieldSummary> = BTreeMap::new();
        for profile in profiles {
            for field in profile.fields() {
                fields.insert(
                    field.name.clone(),
                    FieldSummary {
                        data_type: field.data_type,
                        pattern: field.pattern,
                    },
                );
            }
        }
        by_source.insert((*source).to_string(), fields);
    }
    by_source
}

/// Suggest mappings for every cross-source field pair at or above the
/// threshold, sorted by similarity descending.
pub fn suggest_field_mappings(
    by_source: &BTreeMap<String, BTreeMap<String, FieldSummary>>,
    threshold: f64,
) -> Vec<FieldMapping> {
    let sources: Vec<&String> = by_source.keys().collect();
    let mut mappings = Vec::new();

    for (i, source1) in sources.iter().enumerate() {
        for source2 in &sources[i + 1..] {
            let fields1 = &by_source[*source1];
            let fields2 = &by_source[*source2];

            for (field1, summary1) in fields1 {
                for (field2, summary2) in fields2 {
                    let similarity = field_name_similarity(field1, field2);
                    if similarity < threshold {
                        continue;
                    }
                    let type_compatible = summary1.data_type == summary2.data_type;
                    mappings.push(FieldMapping {
                        source1: (*source1).clone(),
                        field1: field1.clone(),
                        source2: (*source2).clone(),
                        field2: field2.clone(),
                        similarity,
                        type_compatible,
                        pattern_match: summary1.pattern == summary2.pattern,
                        confidence: confidence_tier(similarity, type_compatible),
                        type1: summary1.data_type,
                        type2: summary2.data_type,
                    });
                }
            }
        }
    }

    mappings.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                (&a.source1, &a.field1, &a.source2, &a.field2).cmp(&(
                    &b.source1,
                    &b.field1,
                    &b.source2,
                    &b.field2,
                ))
            })
    });
    mappings
}

fn confidence_tier(similarity: f64, type_compatible: bool) -> Confidence {
    if similarity >= 0.9 && type_compatible {
        Confidence::High
    } else if similarity >= 0.8 && type_compatible {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}
