//! Cross-source analysis: entity extraction, pairwise overlap, fuzzy
//! field-name mapping, and identifier coverage.

pub mod analyzer;
pub mod coverage;
pub mod entities;
pub mod mapping;
pub mod overlap;
pub mod types;

pub use analyzer::{AnalyzerOptions, DEFAULT_MAPPING_LIMIT, analyze_cross_source};
pub use coverage::identifier_coverage;
pub use entities::extract_entities;
pub use mapping::{DEFAULT_SIMILARITY_THRESHOLD, field_name_similarity, suggest_field_mappings};
pub use overlap::{calculate_overlap, jaccard_similarity};
pub use types::{
    Confidence, CoverageMatrix, CrossSourceReport, EntityKind, FieldMapping, OverlapResult,
    OverlapSummary, SourceEntities,
};
