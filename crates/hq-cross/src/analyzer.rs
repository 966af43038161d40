//! Cross-source analysis entry point.

use std::collections::{BTreeMap, BTreeSet};

use tracing::info;

use hq_model::FileProfile;

use crate::coverage::identifier_coverage;
use crate::entities::extract_entities;
use crate::mapping::{DEFAULT_SIMILARITY_THRESHOLD, collect_source_fields, suggest_field_mappings};
use crate::overlap::calculate_overlap;
use crate::types::{CrossSourceReport, EntityKind, OverlapSummary};

/// Limit on retained field-mapping suggestions.
pub const DEFAULT_MAPPING_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy)]
pub struct AnalyzerOptions {
    pub similarity_threshold: f64,
    pub mapping_limit: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            mapping_limit: DEFAULT_MAPPING_LIMIT,
        }
    }
}

/// Run the full cross-source analysis over a batch of file profiles.
///
/// Failed profiles contribute no fields or entities but their source still
/// appears in `sources_analyzed`.
pub fn analyze_cross_source(
    profiles: &[FileProfile],
    options: AnalyzerOptions,
) -> CrossSourceReport {
    let grouped = FileProfile::group_by_source(profiles);
    let sources_analyzed: Vec<String> = grouped.keys().map(|s| (*s).to_string()).collect();
    info!(sources = sources_analyzed.len(), "cross-source analysis");

    let entities_by_source: BTreeMap<&str, _> = grouped
        .iter()
        .map(|(source, profiles)| (*source, extract_entities(profiles)))
        .collect();

    let gene_overlap = kind_overlap(&entities_by_source, EntityKind::GeneSymbol);
    let disease_overlap = kind_overlap(&entities_by_source, EntityKind::DiseaseName);

    let by_source = collect_source_fields(&grouped);
    let mut field_mappings = suggest_field_mappings(&by_source, options.similarity_threshold);
    field_mappings.truncate(options.mapping_limit);

    CrossSourceReport {
        gene_overlap,
        disease_overlap,
        field_mappings,
        identifier_coverage: identifier_coverage(&grouped),
        sources_analyzed,
    }
}

/// Overlap over all sources with a non-empty set of the given kind;
/// `None` when no source has one.
fn kind_overlap(
    entities_by_source: &BTreeMap<&str, crate::types::SourceEntities>,
    kind: EntityKind,
) -> Option<OverlapSummary> {
    let sets: BTreeMap<String, BTreeSet<String>> = entities_by_source
        .iter()
        .filter(|(_, entities)| !entities.set(kind).is_empty())
        .map(|(source, entities)| ((*source).to_string(), entities.set(kind).clone()))
        .collect();

    if sets.is_empty() {
        None
    } else {
        Some(calculate_overlap(&sets))
    }
}
