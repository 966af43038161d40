//! Identifier coverage matrix: which tracked identifier schemes appear
//! in which sources.

use std::collections::BTreeMap;

use hq_model::{FileProfile, IdentifierPattern};

use crate::types::CoverageMatrix;

/// Build the coverage matrix over all grouped profiles. Every tracked
/// pattern gets a row and every source a cell, so absence is explicit.
pub fn identifier_coverage(grouped: &BTreeMap<&str, Vec<&FileProfile>>) -> CoverageMatrix {
    let mut coverage: BTreeMap<IdentifierPattern, BTreeMap<String, bool>> = BTreeMap::new();

    for pattern in IdentifierPattern::TRACKED {
        let row: BTreeMap<String, bool> = grouped
            .iter()
            .map(|(source, profiles)| {
                let present = profiles
                    .iter()
                    .flat_map(|profile| profile.fields())
                    .any(|field| field.pattern == Some(pattern));
                ((*source).to_string(), present)
            })
            .collect();
        coverage.insert(pattern, row);
    }

    CoverageMatrix { coverage }
}
