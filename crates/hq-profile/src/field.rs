//! Per-field analysis: counts, cardinality, type inference, statistics,
//! and identifier-pattern detection for one column.

use std::collections::HashSet;

use hq_model::{Cardinality, DataType, FieldProfile, FieldStats};

use crate::infer::{Inference, infer_data_type};
use crate::patterns::detect_pattern;
use crate::stats::{boolean_stats, date_stats, numeric_stats, text_stats, top_values};

/// Analyze a single column of raw cell values.
pub fn analyze_field(name: &str, column: &[Option<String>]) -> FieldProfile {
    let total_count = column.len();
    let values: Vec<&str> = column.iter().flatten().map(String::as_str).collect();
    let non_null_count = values.len();
    let null_count = total_count - non_null_count;
    let null_percentage = if total_count > 0 {
        null_count as f64 / total_count as f64 * 100.0
    } else {
        0.0
    };
    let unique_count = values.iter().copied().collect::<HashSet<&str>>().len();
    let cardinality = Cardinality::classify(unique_count, non_null_count);

    let Inference {
        data_type,
        date_format,
    } = infer_data_type(&values);

    // Identifier shapes appear in string columns and, for all-digit ids
    // like OMIM, in integer columns.
    let pattern = match data_type {
        DataType::String | DataType::Integer => detect_pattern(&values),
        _ => None,
    };

    let stats = match data_type {
        DataType::Empty => FieldStats::Empty,
        DataType::Boolean => FieldStats::Boolean(boolean_stats(&values)),
        DataType::Integer | DataType::Float => {
            let parsed: Vec<f64> = values
                .iter()
                .filter_map(|value| value.trim().parse::<f64>().ok())
                .collect();
            let mut stats = numeric_stats(&parsed);
            // Keep the raw values of identifier-bearing columns so entity
            // extraction can read them alongside the numeric summary.
            if pattern.is_some() {
                stats.top_values = top_values(&values, total_count);
            }
            FieldStats::Numeric(stats)
        }
        DataType::Date => date_format
            .and_then(|format| date_stats(&values, format))
            .map_or(FieldStats::Empty, FieldStats::Date),
        DataType::String => FieldStats::Text(text_stats(&values, total_count)),
    };

    FieldProfile {
        name: name.to_string(),
        data_type,
        total_count,
        non_null_count,
        null_count,
        null_percentage,
        unique_count,
        cardinality,
        pattern,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hq_model::IdentifierPattern;

    fn column(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(String::from)).collect()
    }

    #[test]
    fn test_count_invariants() {
        let col = column(&[Some("a"), None, Some("b"), Some("a"), None]);
        let field = analyze_field("label", &col);
        assert_eq!(field.total_count, 5);
        assert_eq!(field.non_null_count, 3);
        assert_eq!(field.null_count, 2);
        assert_eq!(field.null_count + field.non_null_count, field.total_count);
        assert_eq!(field.unique_count, 2);
        assert!(field.unique_count <= field.non_null_count);
        assert!((field.null_percentage - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_column_has_no_stats() {
        let col = column(&[None, None, None]);
        let field = analyze_field("unused", &col);
        assert_eq!(field.data_type, DataType::Empty);
        assert_eq!(field.stats, FieldStats::Empty);
        assert_eq!(field.pattern, None);
        assert_eq!(field.cardinality, Cardinality::Unique);
    }

    #[test]
    fn test_integer_scenario() {
        let col = column(&[Some("1"), Some("2"), Some("3"), Some("4"), Some("5")]);
        let field = analyze_field("score", &col);
        assert_eq!(field.data_type, DataType::Integer);
        match field.stats {
            FieldStats::Numeric(stats) => {
                assert!((stats.mean - 3.0).abs() < 1e-9);
                assert!((stats.median - 3.0).abs() < 1e-9);
                // Plain counts carry no raw values
                assert!(stats.top_values.is_empty());
            }
            other => panic!("expected numeric stats, got {other:?}"),
        }
    }

    #[test]
    fn test_rsid_column_reports_pattern() {
        let col = column(&[Some("rs123456"), Some("rs789012"), Some("rs345678")]);
        let field = analyze_field("variant", &col);
        assert_eq!(field.data_type, DataType::String);
        assert_eq!(field.pattern, Some(IdentifierPattern::DbSnpRsId));
    }

    #[test]
    fn test_omim_integer_column_reports_pattern() {
        let col = column(&[Some("114480"), Some("604370"), Some("191170")]);
        let field = analyze_field("omim", &col);
        assert_eq!(field.data_type, DataType::Integer);
        assert_eq!(field.pattern, Some(IdentifierPattern::OmimId));
    }

    #[test]
    fn test_omim_integer_column_keeps_raw_values() {
        let col = column(&[Some("114480"), Some("114480"), Some("604370"), None]);
        let field = analyze_field("omim_id", &col);
        let values: Vec<&str> = field.top_values().iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["114480", "604370"]);
        assert_eq!(field.top_values()[0].count, 2);
        assert!((field.top_values()[0].percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_date_column() {
        let col = column(&[Some("2020-01-01"), Some("2021-01-01"), None]);
        let field = analyze_field("submitted", &col);
        assert_eq!(field.data_type, DataType::Date);
        match field.stats {
            FieldStats::Date(stats) => assert_eq!(stats.range_days, 366),
            other => panic!("expected date stats, got {other:?}"),
        }
    }

    #[test]
    fn test_boolean_column() {
        let col = column(&[Some("yes"), Some("no"), Some("yes")]);
        let field = analyze_field("flag", &col);
        assert_eq!(field.data_type, DataType::Boolean);
        match field.stats {
            FieldStats::Boolean(stats) => {
                assert_eq!(stats.true_count, 2);
                assert_eq!(stats.false_count, 1);
            }
            other => panic!("expected boolean stats, got {other:?}"),
        }
    }
}
