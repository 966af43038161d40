//! Semantic type inference for columns of raw string values.
//!
//! Candidate types are evaluated in strict precedence order, stopping at the
//! first that accepts every non-null value: empty, boolean, integer, float,
//! date, string. A failed coercion simply cascades to the next candidate.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use hq_model::DataType;

/// Token set accepted for boolean columns, compared case-insensitively.
pub const BOOLEAN_TOKENS: [&str; 10] = ["true", "false", "1", "0", "yes", "no", "t", "f", "y", "n"];

/// Tokens that count as true when computing boolean statistics.
pub const TRUE_TOKENS: [&str; 5] = ["true", "1", "yes", "t", "y"];

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+$").expect("valid integer regex"));

/// A date format candidate. The list order is fixed: the first format that
/// parses every value in a column wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    pub pattern: &'static str,
    pub has_time: bool,
}

/// Recognized date formats in evaluation order.
pub const DATE_FORMATS: [DateFormat; 6] = [
    DateFormat {
        pattern: "%Y-%m-%d",
        has_time: false,
    },
    DateFormat {
        pattern: "%Y/%m/%d",
        has_time: false,
    },
    DateFormat {
        pattern: "%m/%d/%Y",
        has_time: false,
    },
    DateFormat {
        pattern: "%d/%m/%Y",
        has_time: false,
    },
    DateFormat {
        pattern: "%Y-%m-%d %H:%M:%S",
        has_time: true,
    },
    DateFormat {
        pattern: "%Y-%m-%dT%H:%M:%S",
        has_time: true,
    },
];

impl DateFormat {
    /// Parse a single value with this format. Date-only formats resolve to
    /// midnight.
    pub fn parse(&self, value: &str) -> Option<NaiveDateTime> {
        if self.has_time {
            NaiveDateTime::parse_from_str(value, self.pattern).ok()
        } else {
            NaiveDate::parse_from_str(value, self.pattern)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        }
    }
}

/// Outcome of type inference for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inference {
    pub data_type: DataType,
    /// The winning format for date columns.
    pub date_format: Option<DateFormat>,
}

/// Infer the semantic type of a column from its non-null values.
pub fn infer_data_type(values: &[&str]) -> Inference {
    let data_type = if values.is_empty() {
        DataType::Empty
    } else if is_boolean(values) {
        DataType::Boolean
    } else if values.iter().all(|v| INTEGER_RE.is_match(v)) {
        DataType::Integer
    } else if values.iter().all(|v| is_numeric(v)) {
        DataType::Float
    } else if let Some(format) = detect_date_format(values) {
        return Inference {
            data_type: DataType::Date,
            date_format: Some(format),
        };
    } else {
        DataType::String
    };
    Inference {
        data_type,
        date_format: None,
    }
}

/// The first format in [`DATE_FORMATS`] that parses every value, if any.
pub fn detect_date_format(values: &[&str]) -> Option<DateFormat> {
    DATE_FORMATS
        .into_iter()
        .find(|format| values.iter().all(|value| format.parse(value).is_some()))
}

fn is_boolean(values: &[&str]) -> bool {
    let distinct: HashSet<&str> = values.iter().copied().collect();
    distinct.len() <= 2
        && distinct
            .iter()
            .all(|value| BOOLEAN_TOKENS.contains(&value.to_lowercase().as_str()))
}

fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infer(values: &[&str]) -> DataType {
        infer_data_type(values).data_type
    }

    #[test]
    fn test_empty_column() {
        assert_eq!(infer(&[]), DataType::Empty);
    }

    #[test]
    fn test_boolean_tokens() {
        assert_eq!(infer(&["true", "false", "true"]), DataType::Boolean);
        assert_eq!(infer(&["Y", "N"]), DataType::Boolean);
        assert_eq!(infer(&["1", "0", "1", "0"]), DataType::Boolean);
        assert_eq!(infer(&["yes"]), DataType::Boolean);
    }

    #[test]
    fn test_boolean_needs_at_most_two_distinct() {
        // Three distinct boolean-ish tokens fall through to integer/string
        assert_eq!(infer(&["1", "0", "t"]), DataType::String);
    }

    #[test]
    fn test_integer_column() {
        assert_eq!(infer(&["1", "2", "3", "4", "5"]), DataType::Integer);
        assert_eq!(infer(&["-7", "42"]), DataType::Integer);
    }

    #[test]
    fn test_float_column() {
        assert_eq!(infer(&["1.5", "2", "3.25"]), DataType::Float);
        assert_eq!(infer(&["1e3", "2.5"]), DataType::Float);
    }

    #[test]
    fn test_date_first_matching_format_wins() {
        let inference = infer_data_type(&["2020-01-02", "2021-12-31"]);
        assert_eq!(inference.data_type, DataType::Date);
        assert_eq!(inference.date_format.unwrap().pattern, "%Y-%m-%d");

        // Ambiguous day/month resolves to the earlier format in the list
        let inference = infer_data_type(&["01/02/2020", "03/04/2021"]);
        assert_eq!(inference.date_format.unwrap().pattern, "%m/%d/%Y");
    }

    #[test]
    fn test_datetime_formats() {
        let inference = infer_data_type(&["2020-01-02 10:30:00"]);
        assert_eq!(inference.data_type, DataType::Date);
        assert_eq!(inference.date_format.unwrap().pattern, "%Y-%m-%d %H:%M:%S");

        let inference = infer_data_type(&["2020-01-02T10:30:00"]);
        assert_eq!(inference.date_format.unwrap().pattern, "%Y-%m-%dT%H:%M:%S");
    }

    #[test]
    fn test_single_format_must_cover_all_values() {
        // Mixed formats do not classify as date
        assert_eq!(infer(&["2020-01-02", "01/02/2020"]), DataType::String);
    }

    #[test]
    fn test_string_fallback() {
        assert_eq!(infer(&["BRCA1", "TP53"]), DataType::String);
        assert_eq!(infer(&["1", "2", "x"]), DataType::String);
    }
}
