//! Entity extraction from file profiles.
//!
//! Extraction reads only the recorded top values of each field, not full
//! columns: recall is capped by the profiling sample and that cap is part
//! of the contract. Heuristics mirror the profiler's pattern detection and
//! simple field-name cues; this is not exact entity resolution.

use std::sync::LazyLock;

use regex::Regex;

use hq_model::{FieldProfile, FileProfile, IdentifierPattern};

use crate::types::{EntityKind, SourceEntities};

static GENE_SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9-]+$").expect("valid gene symbol regex"));

const GENE_FIELD_CUES: [&str; 3] = ["gene", "symbol", "hgnc"];
const DISEASE_FIELD_CUES: [&str; 4] = ["disease", "phenotype", "condition", "diagnosis"];

/// Extract all entity kinds from one source's profiles.
pub fn extract_entities(profiles: &[&FileProfile]) -> SourceEntities {
    let mut entities = SourceEntities::default();
    for profile in profiles {
        for field in profile.fields() {
            extract_from_field(field, &mut entities);
        }
    }
    entities
}

fn extract_from_field(field: &FieldProfile, entities: &mut SourceEntities) {
    let field_name = field.name.to_lowercase();
    let top_values = field.top_values();

    if field.pattern == Some(IdentifierPattern::HgncId) {
        for top in top_values {
            if top.value.starts_with("HGNC:") {
                entities.insert(EntityKind::HgncId, top.value.clone());
            }
        }
    }

    if GENE_FIELD_CUES.iter().any(|cue| field_name.contains(cue)) {
        for top in top_values {
            if looks_like_gene_symbol(&top.value) {
                entities.insert(EntityKind::GeneSymbol, top.value.clone());
            }
        }
    }

    if field.pattern == Some(IdentifierPattern::MondoId) {
        for top in top_values {
            if top.value.starts_with("MONDO:") {
                entities.insert(EntityKind::MondoId, top.value.clone());
            }
        }
    }

    if field.pattern == Some(IdentifierPattern::OmimId) {
        for top in top_values {
            if top.value.len() == 6 && top.value.bytes().all(|b| b.is_ascii_digit()) {
                entities.insert(EntityKind::OmimId, top.value.clone());
            }
        }
    }

    if DISEASE_FIELD_CUES.iter().any(|cue| field_name.contains(cue)) {
        for top in top_values {
            // Length gate counts characters, not bytes
            if top.value.chars().count() > 3
                && !top.value.starts_with("MONDO:")
                && !top.value.starts_with("OMIM:")
            {
                entities.insert(EntityKind::DiseaseName, top.value.clone());
            }
        }
    }

    if field.pattern == Some(IdentifierPattern::DbSnpRsId) {
        for top in top_values {
            if top.value.starts_with("rs") {
                entities.insert(EntityKind::DbSnpId, top.value.clone());
            }
        }
    }

    if field.pattern == Some(IdentifierPattern::ClinVarId) {
        for top in top_values {
            if top.value.starts_with("VCV") {
                entities.insert(EntityKind::ClinVarId, top.value.clone());
            }
        }
    }

    if field.pattern == Some(IdentifierPattern::Hgvs) {
        for top in top_values {
            entities.insert(EntityKind::Hgvs, top.value.clone());
        }
    }
}

/// Gene symbol heuristic: uppercase, 1-20 characters, alphanumeric with
/// hyphens, and at least one letter. The regex confines matches to ASCII,
/// so chars and bytes agree here; counted as chars anyway.
fn looks_like_gene_symbol(value: &str) -> bool {
    (1..=20).contains(&value.chars().count())
        && value.bytes().any(|b| b.is_ascii_uppercase())
        && !value.bytes().any(|b| b.is_ascii_lowercase())
        && GENE_SYMBOL_RE.is_match(value)
}
