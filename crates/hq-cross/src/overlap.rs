//! Pairwise set-overlap computation between sources.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;

use crate::types::{OverlapResult, OverlapSummary};

/// Jaccard similarity of two sets; 0 when the union is empty.
pub fn jaccard_similarity(intersection: usize, union: usize) -> f64 {
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Compute overlap statistics for every unordered source pair.
///
/// Pairs are independent and computed in parallel; each pair owns a
/// distinct `source1_vs_source2` key, so results merge without contention.
pub fn calculate_overlap(entity_sets: &BTreeMap<String, BTreeSet<String>>) -> OverlapSummary {
    let sources: Vec<&String> = entity_sets.keys().collect();

    let mut pairs = Vec::new();
    for (i, source1) in sources.iter().enumerate() {
        for source2 in &sources[i + 1..] {
            pairs.push((*source1, *source2));
        }
    }

    let pairwise_overlaps: BTreeMap<String, OverlapResult> = pairs
        .par_iter()
        .map(|(source1, source2)| {
            let result = overlap_pair(source1, &entity_sets[*source1], source2, &entity_sets[*source2]);
            (format!("{source1}_vs_{source2}"), result)
        })
        .collect();

    let mut all_entities: BTreeSet<&String> = BTreeSet::new();
    for set in entity_sets.values() {
        all_entities.extend(set);
    }
    let source_counts = entity_sets
        .iter()
        .map(|(source, set)| (source.clone(), set.len()))
        .collect();

    OverlapSummary {
        total_unique_entities: all_entities.len(),
        source_counts,
        pairwise_overlaps,
    }
}

fn overlap_pair(
    source1: &str,
    set1: &BTreeSet<String>,
    source2: &str,
    set2: &BTreeSet<String>,
) -> OverlapResult {
    let intersection_count = set1.intersection(set2).count();
    let union_count = set1.union(set2).count();

    let percentage = |count: usize| {
        if count == 0 {
            0.0
        } else {
            intersection_count as f64 / count as f64 * 100.0
        }
    };

    OverlapResult {
        source1: source1.to_string(),
        source2: source2.to_string(),
        source1_count: set1.len(),
        source2_count: set2.len(),
        intersection_count,
        union_count,
        jaccard_similarity: jaccard_similarity(intersection_count, union_count),
        overlap_percentage_1: percentage(set1.len()),
        overlap_percentage_2: percentage(set2.len()),
    }
}
