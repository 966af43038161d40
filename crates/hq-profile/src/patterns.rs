//! Identifier pattern detection over a sampled prefix of a column.
//!
//! Only the first [`PATTERN_SAMPLE_LEN`] non-null values are tested, in
//! source order. This caps recall by contract: downstream consumers expect
//! the sampled behavior, so the cap is documented rather than removed.

use std::sync::LazyLock;

use regex::Regex;

use hq_model::IdentifierPattern;

/// Number of leading non-null values sampled for pattern detection.
pub const PATTERN_SAMPLE_LEN: usize = 100;

/// Required fraction of sampled values that must match; strictly exceeded.
pub const PATTERN_MATCH_THRESHOLD: f64 = 0.8;

static PATTERN_REGEXES: LazyLock<Vec<(IdentifierPattern, Regex)>> = LazyLock::new(|| {
    IdentifierPattern::ALL
        .into_iter()
        .map(|pattern| {
            let regex = Regex::new(&format!("(?i){}", pattern.regex_source()))
                .expect("valid identifier pattern regex");
            (pattern, regex)
        })
        .collect()
});

/// Detect an identifier pattern over the first 100 non-null values.
///
/// Patterns are evaluated case-insensitively in the fixed
/// [`IdentifierPattern::ALL`] order; the first whose match ratio is strictly
/// greater than 0.8 wins.
pub fn detect_pattern(values: &[&str]) -> Option<IdentifierPattern> {
    if values.is_empty() {
        return None;
    }
    let sample = &values[..values.len().min(PATTERN_SAMPLE_LEN)];

    for (pattern, regex) in PATTERN_REGEXES.iter() {
        let matches = sample.iter().filter(|value| regex.is_match(value)).count();
        if matches as f64 / sample.len() as f64 > PATTERN_MATCH_THRESHOLD {
            return Some(*pattern);
        }
    }
    None
}
