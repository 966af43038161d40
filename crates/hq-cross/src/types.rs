//! Types produced by cross-source analysis.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::LazyLock;

use hq_model::{DataType, IdentifierPattern};

/// Kind of extracted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    GeneSymbol,
    HgncId,
    DiseaseName,
    MondoId,
    OmimId,
    DbSnpId,
    ClinVarId,
    Hgvs,
}

static EMPTY_SET: LazyLock<BTreeSet<String>> = LazyLock::new(BTreeSet::new);

/// Entities extracted from one source's profiles, partitioned by kind.
///
/// Derived read-only from the recorded top values of field profiles; the
/// extraction is sample-limited by contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceEntities {
    sets: BTreeMap<EntityKind, BTreeSet<String>>,
}

impl SourceEntities {
    pub fn insert(&mut self, kind: EntityKind, value: String) {
        self.sets.entry(kind).or_default().insert(value);
    }

    /// Entities of one kind; empty set when none were extracted.
    pub fn set(&self, kind: EntityKind) -> &BTreeSet<String> {
        self.sets.get(&kind).unwrap_or(&EMPTY_SET)
    }

    pub fn is_empty(&self) -> bool {
        self.sets.values().all(BTreeSet::is_empty)
    }
}

/// Overlap statistics for one unordered source pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapResult {
    pub source1: String,
    pub source2: String,
    pub source1_count: usize,
    pub source2_count: usize,
    pub intersection_count: usize,
    pub union_count: usize,
    /// |intersection| / |union|; 0 when the union is empty.
    pub jaccard_similarity: f64,
    /// Intersection share of source1's set, in percent; 0 when empty.
    pub overlap_percentage_1: f64,
    /// Intersection share of source2's set, in percent; 0 when empty.
    pub overlap_percentage_2: f64,
}

/// Overlap statistics for a whole batch of entity sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapSummary {
    pub total_unique_entities: usize,
    pub source_counts: BTreeMap<String, usize>,
    /// Pairwise results keyed `source1_vs_source2` with sources in sorted
    /// order.
    pub pairwise_overlaps: BTreeMap<String, OverlapResult>,
}

/// Confidence tier for a suggested field mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => f.write_str("high"),
            Confidence::Medium => f.write_str("medium"),
            Confidence::Low => f.write_str("low"),
        }
    }
}

/// A suggested mapping between two fields in different sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub source1: String,
    pub field1: String,
    pub source2: String,
    pub field2: String,
    /// Name similarity in [0, 1].
    pub similarity: f64,
    pub type_compatible: bool,
    pub pattern_match: bool,
    pub confidence: Confidence,
    pub type1: DataType,
    pub type2: DataType,
}

/// Per-source presence of each tracked identifier pattern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageMatrix {
    pub coverage: BTreeMap<IdentifierPattern, BTreeMap<String, bool>>,
}

impl CoverageMatrix {
    /// Whether any field of the given source carries the pattern.
    pub fn has(&self, pattern: IdentifierPattern, source: &str) -> bool {
        self.coverage
            .get(&pattern)
            .and_then(|sources| sources.get(source))
            .copied()
            .unwrap_or(false)
    }
}

/// Complete cross-source analysis output, consumed by report renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSourceReport {
    /// Gene-symbol overlap; `None` when no source yielded symbols.
    pub gene_overlap: Option<OverlapSummary>,
    /// Disease-name overlap; `None` when no source yielded names.
    pub disease_overlap: Option<OverlapSummary>,
    /// Top suggestions, similarity descending.
    pub field_mappings: Vec<FieldMapping>,
    pub identifier_coverage: CoverageMatrix,
    pub sources_analyzed: Vec<String>,
}
