//! Round-trip and invariant checks for the profile data model.

use chrono::NaiveDate;
use hq_model::{
    Cardinality, DataType, DateStats, FieldProfile, FieldStats, FileProfile, IdentifierPattern,
    ProfileDetail, TabularProfile, TextStats, TopValue,
};
use std::path::PathBuf;

fn sample_field() -> FieldProfile {
    FieldProfile {
        name: "gene_symbol".to_string(),
        data_type: DataType::String,
        total_count: 100,
        non_null_count: 95,
        null_count: 5,
        null_percentage: 5.0,
        unique_count: 40,
        cardinality: Cardinality::Medium,
        pattern: None,
        stats: FieldStats::Text(TextStats {
            min_length: 2,
            max_length: 8,
            mean_length: 4.5,
            top_values: vec![TopValue {
                value: "BRCA1".to_string(),
                count: 12,
                percentage: 12.0,
            }],
        }),
    }
}

#[test]
fn field_profile_round_trips_through_json() {
    let field = sample_field();
    let json = serde_json::to_string(&field).expect("serialize field");
    let back: FieldProfile = serde_json::from_str(&json).expect("deserialize field");
    assert_eq!(back, field);
}

#[test]
fn field_count_invariants_hold() {
    let field = sample_field();
    assert_eq!(field.null_count + field.non_null_count, field.total_count);
    assert!(field.unique_count <= field.non_null_count);
    assert!((0.0..=100.0).contains(&field.null_percentage));
}

#[test]
fn tabular_profile_exposes_fields() {
    let profile = FileProfile {
        source: "gencc".to_string(),
        filepath: PathBuf::from("data/sources/gencc/submissions.tsv"),
        filename: "submissions.tsv".to_string(),
        file_size_mb: 1.5,
        detail: ProfileDetail::Tabular(TabularProfile {
            row_count: 100,
            column_count: 1,
            delimiter: '\t',
            encoding: "UTF-8".to_string(),
            field_analyses: vec![sample_field()],
        }),
    };
    assert_eq!(profile.fields().len(), 1);
    assert_eq!(profile.fields()[0].top_values()[0].value, "BRCA1");
    assert!(profile.error().is_none());

    let json = serde_json::to_value(&profile).expect("serialize profile");
    assert_eq!(json["kind"], "tabular");
    assert_eq!(json["row_count"], 100);
    assert_eq!(json["field_analyses"][0]["data_type"], "string");
}

#[test]
fn date_stats_serialize_with_iso_timestamps() {
    let min = NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let max = NaiveDate::from_ymd_opt(2021, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let stats = FieldStats::Date(DateStats {
        min_date: min,
        max_date: max,
        range_days: 366,
        range_years: 366.0 / 365.25,
    });
    let json = serde_json::to_value(&stats).expect("serialize date stats");
    assert_eq!(json["kind"], "date");
    assert_eq!(json["min_date"], "2020-01-01T00:00:00");
}

#[test]
fn pattern_names_match_reports() {
    assert_eq!(IdentifierPattern::HgncId.to_string(), "HGNC ID");
    assert_eq!(IdentifierPattern::ClinVarId.to_string(), "ClinVar ID");
    assert_eq!(IdentifierPattern::ALL.len(), 9);
    assert_eq!(IdentifierPattern::TRACKED.len(), 5);
}
