//! Type-specific statistics for classified columns.

use std::collections::HashMap;

use hq_model::{BooleanStats, DateStats, Distribution, NumericStats, TextStats, TopValue};

use crate::infer::{DateFormat, TRUE_TOKENS};

/// Number of most-frequent values recorded for text fields.
pub const TOP_VALUE_LEN: usize = 10;

/// Quantile with linear interpolation over a sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let position = q * (n - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Adjusted Fisher-Pearson skewness; 0 for fewer than 3 values or a
/// constant column.
fn skewness(values: &[f64], mean: f64) -> f64 {
    let n = values.len();
    if n < 3 {
        return 0.0;
    }
    let nf = n as f64;
    let m2 = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / nf;
    let m3 = values.iter().map(|v| (v - mean).powi(3)).sum::<f64>() / nf;
    if m2 == 0.0 {
        return 0.0;
    }
    let g1 = m3 / m2.powf(1.5);
    g1 * (nf * (nf - 1.0)).sqrt() / (nf - 2.0)
}

/// Compute numeric statistics for a non-empty set of parsed values.
pub fn numeric_stats(values: &[f64]) -> NumericStats {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let std = if n > 1 {
        (sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64).sqrt()
    } else {
        0.0
    };
    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;

    // Tukey fences at 1.5 x IQR
    let lower_bound = q1 - 1.5 * iqr;
    let upper_bound = q3 + 1.5 * iqr;
    let outlier_count = sorted
        .iter()
        .filter(|v| **v < lower_bound || **v > upper_bound)
        .count();

    let skewness = skewness(&sorted, mean);
    let distribution_type = if skewness.abs() < 0.5 {
        Distribution::Normal
    } else if skewness > 0.0 {
        Distribution::SkewedRight
    } else {
        Distribution::SkewedLeft
    };

    NumericStats {
        min: sorted[0],
        max: sorted[n - 1],
        mean,
        median,
        std,
        q1,
        q3,
        iqr,
        outlier_count,
        outlier_percentage: outlier_count as f64 / n as f64 * 100.0,
        skewness,
        distribution_type,
        top_values: Vec::new(),
    }
}

/// Rank the most frequent raw values, count descending with count ties
/// broken by value ascending. Percentages use all rows, nulls included.
pub fn top_values(values: &[&str], total_count: usize) -> Vec<TopValue> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(TOP_VALUE_LEN);

    ranked
        .into_iter()
        .map(|(value, count)| TopValue {
            value: value.to_string(),
            count,
            percentage: if total_count > 0 {
                count as f64 / total_count as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Compute text statistics. See [`top_values`] for the ranking rules.
pub fn text_stats(values: &[&str], total_count: usize) -> TextStats {
    let lengths: Vec<usize> = values.iter().map(|v| v.chars().count()).collect();
    let min_length = lengths.iter().copied().min().unwrap_or(0);
    let max_length = lengths.iter().copied().max().unwrap_or(0);
    let mean_length = if lengths.is_empty() {
        0.0
    } else {
        lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
    };

    TextStats {
        min_length,
        max_length,
        mean_length,
        top_values: top_values(values, total_count),
    }
}

/// Compute boolean statistics. True tokens: true, 1, yes, t, y.
pub fn boolean_stats(values: &[&str]) -> BooleanStats {
    let true_count = values
        .iter()
        .filter(|value| TRUE_TOKENS.contains(&value.to_lowercase().as_str()))
        .count();
    let false_count = values.len() - true_count;
    BooleanStats {
        true_count,
        false_count,
        true_percentage: if values.is_empty() {
            0.0
        } else {
            true_count as f64 / values.len() as f64 * 100.0
        },
    }
}

/// Compute date statistics with the column's winning format.
pub fn date_stats(values: &[&str], format: DateFormat) -> Option<DateStats> {
    let dates: Vec<_> = values.iter().filter_map(|value| format.parse(value)).collect();
    let min_date = dates.iter().min().copied()?;
    let max_date = dates.iter().max().copied()?;
    let range_days = (max_date - min_date).num_days();
    Some(DateStats {
        min_date,
        max_date,
        range_days,
        range_years: range_days as f64 / 365.25,
    })
}
