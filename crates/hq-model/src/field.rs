//! Per-field profile types: inferred data type, counts, cardinality, and the
//! type-specific statistics union.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pattern::IdentifierPattern;

/// Semantic type inferred for a column of raw string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Column has zero non-null values.
    Empty,
    Boolean,
    Integer,
    Float,
    Date,
    String,
}

impl DataType {
    /// Canonical lowercase name as used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Empty => "empty",
            DataType::Boolean => "boolean",
            DataType::Integer => "integer",
            DataType::Float => "float",
            DataType::Date => "date",
            DataType::String => "string",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical bucket describing how many distinct values a field has
/// relative to its non-null count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// Every non-null value is distinct.
    Unique,
    /// Fewer than 10 distinct values.
    Low,
    /// Fewer than 1000 distinct values.
    Medium,
    /// 1000 or more distinct values.
    High,
}

impl Cardinality {
    /// Classify from exact integer counts. Boundary-inclusive as stated:
    /// 9 distinct values are `Low`, 10 are `Medium`, 999 are `Medium`,
    /// 1000 are `High`.
    pub fn classify(unique_count: usize, non_null_count: usize) -> Self {
        if unique_count == non_null_count {
            Cardinality::Unique
        } else if unique_count < 10 {
            Cardinality::Low
        } else if unique_count < 1000 {
            Cardinality::Medium
        } else {
            Cardinality::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::Unique => "unique",
            Cardinality::Low => "low",
            Cardinality::Medium => "medium",
            Cardinality::High => "high",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the ten most frequent values of a text field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopValue {
    pub value: String,
    pub count: usize,
    /// Share of all rows, nulls included in the denominator.
    pub percentage: f64,
}

/// Statistics for text fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    /// Shortest value length in characters.
    pub min_length: usize,
    /// Longest value length in characters.
    pub max_length: usize,
    pub mean_length: f64,
    /// Up to 10 most frequent values, count descending.
    pub top_values: Vec<TopValue>,
}

/// Distribution shape classified from skewness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    /// |skewness| < 0.5.
    Normal,
    SkewedRight,
    SkewedLeft,
}

/// Statistics for integer and float fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation; 0 for a single value.
    pub std: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    /// Values beyond the Tukey fences at 1.5 x IQR.
    pub outlier_count: usize,
    pub outlier_percentage: f64,
    pub skewness: f64,
    pub distribution_type: Distribution,
    /// Most frequent raw values. Populated only for columns that carry an
    /// identifier pattern, so all-digit ids like OMIM stay visible to
    /// entity extraction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_values: Vec<TopValue>,
}

/// Statistics for date fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateStats {
    pub min_date: NaiveDateTime,
    pub max_date: NaiveDateTime,
    pub range_days: i64,
    /// Range in years using a 365.25-day divisor.
    pub range_years: f64,
}

/// Statistics for boolean fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanStats {
    pub true_count: usize,
    pub false_count: usize,
    pub true_percentage: f64,
}

/// Type-specific statistics, selected by the field's [`DataType`].
///
/// Integer and float fields share the [`NumericStats`] variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldStats {
    /// No statistics: the column has zero non-null values.
    Empty,
    Boolean(BooleanStats),
    Numeric(NumericStats),
    Date(DateStats),
    Text(TextStats),
}

/// Complete profile of one field (column).
///
/// Invariants maintained by the profiler:
/// - `null_count + non_null_count == total_count`
/// - `unique_count <= non_null_count`
/// - `0 <= null_percentage <= 100`
/// - `pattern` is set only when the sampled match ratio is strictly
///   greater than 0.8.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldProfile {
    pub name: String,
    pub data_type: DataType,
    pub total_count: usize,
    pub non_null_count: usize,
    pub null_count: usize,
    pub null_percentage: f64,
    pub unique_count: usize,
    pub cardinality: Cardinality,
    /// Detected identifier pattern, if any.
    pub pattern: Option<IdentifierPattern>,
    pub stats: FieldStats,
}

impl FieldProfile {
    /// Top sampled values recorded for this field. Text fields always carry
    /// them; numeric fields only when an identifier pattern was detected.
    pub fn top_values(&self) -> &[TopValue] {
        match &self.stats {
            FieldStats::Text(stats) => &stats.top_values,
            FieldStats::Numeric(stats) => &stats.top_values,
            _ => &[],
        }
    }
}
