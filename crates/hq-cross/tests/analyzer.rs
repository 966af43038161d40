//! End-to-end cross-source analysis over hand-built profiles.

use std::path::PathBuf;

use hq_cross::{AnalyzerOptions, Confidence, analyze_cross_source};
use hq_model::{
    Cardinality, DataType, FieldProfile, FieldStats, FileProfile, IdentifierPattern,
    ProfileDetail, TabularProfile, TextStats, TopValue,
};

fn text_field(name: &str, pattern: Option<IdentifierPattern>, values: &[&str]) -> FieldProfile {
    FieldProfile {
        name: name.to_string(),
        data_type: DataType::String,
        total_count: values.len(),
        non_null_count: values.len(),
        null_count: 0,
        null_percentage: 0.0,
        unique_count: values.len(),
        cardinality: Cardinality::Unique,
        pattern,
        stats: FieldStats::Text(TextStats {
            min_length: 1,
            max_length: 30,
            mean_length: 8.0,
            top_values: values
                .iter()
                .map(|v| TopValue {
                    value: (*v).to_string(),
                    count: 1,
                    percentage: 100.0 / values.len() as f64,
                })
                .collect(),
        }),
    }
}

fn tabular(source: &str, filename: &str, fields: Vec<FieldProfile>) -> FileProfile {
    FileProfile {
        source: source.to_string(),
        filepath: PathBuf::from(format!("data/sources/{source}/{filename}")),
        filename: filename.to_string(),
        file_size_mb: 0.5,
        detail: ProfileDetail::Tabular(TabularProfile {
            row_count: fields.first().map_or(0, |f| f.total_count),
            column_count: fields.len(),
            delimiter: '\t',
            encoding: "UTF-8".to_string(),
            field_analyses: fields,
        }),
    }
}

fn sample_profiles() -> Vec<FileProfile> {
    vec![
        tabular(
            "gencc",
            "submissions.tsv",
            vec![
                text_field("gene_symbol", None, &["BRCA1", "TP53", "MLH1"]),
                text_field(
                    "hgnc_id",
                    Some(IdentifierPattern::HgncId),
                    &["HGNC:1100", "HGNC:11998"],
                ),
                text_field(
                    "disease_title",
                    None,
                    &["breast cancer", "lynch syndrome"],
                ),
            ],
        ),
        tabular(
            "clinvar",
            "variant_summary.txt",
            vec![
                text_field("GeneSymbol", None, &["BRCA1", "APC"]),
                text_field(
                    "PhenotypeList",
                    None,
                    &["breast cancer", "familial adenomatous polyposis"],
                ),
                text_field(
                    "RS# (dbSNP)",
                    Some(IdentifierPattern::DbSnpRsId),
                    &["rs80357906"],
                ),
            ],
        ),
        FileProfile {
            source: "cbioportal".to_string(),
            filepath: PathBuf::from("data/sources/cbioportal/broken.json"),
            filename: "broken.json".to_string(),
            file_size_mb: 0.0,
            detail: ProfileDetail::Failed {
                error: "invalid JSON".to_string(),
            },
        },
    ]
}

#[test]
fn test_full_report_shape() {
    let report = analyze_cross_source(&sample_profiles(), AnalyzerOptions::default());

    assert_eq!(
        report.sources_analyzed,
        vec!["cbioportal", "clinvar", "gencc"]
    );

    let genes = report.gene_overlap.expect("gene overlap present");
    assert_eq!(genes.source_counts["gencc"], 3);
    assert_eq!(genes.source_counts["clinvar"], 2);
    // cbioportal failed: it has no entities and no entry
    assert!(!genes.source_counts.contains_key("cbioportal"));
    let pair = &genes.pairwise_overlaps["clinvar_vs_gencc"];
    assert_eq!(pair.intersection_count, 1); // BRCA1
    assert_eq!(pair.union_count, 4);
    assert!((pair.jaccard_similarity - 0.25).abs() < 1e-9);

    let diseases = report.disease_overlap.expect("disease overlap present");
    let pair = &diseases.pairwise_overlaps["clinvar_vs_gencc"];
    assert_eq!(pair.intersection_count, 1); // breast cancer

    assert!(
        report
            .identifier_coverage
            .has(IdentifierPattern::HgncId, "gencc")
    );
    assert!(
        report
            .identifier_coverage
            .has(IdentifierPattern::DbSnpRsId, "clinvar")
    );
    assert!(
        !report
            .identifier_coverage
            .has(IdentifierPattern::HgncId, "clinvar")
    );
}

#[test]
fn test_field_mappings_rank_exact_name_first() {
    let profiles = vec![
        tabular(
            "a",
            "x.tsv",
            vec![text_field("gene_symbol", None, &["BRCA1"])],
        ),
        tabular(
            "b",
            "y.tsv",
            vec![
                text_field("gene_symbol", None, &["TP53"]),
                text_field("gene_symbols", None, &["APC"]),
            ],
        ),
    ];
    let report = analyze_cross_source(&profiles, AnalyzerOptions::default());

    assert!(!report.field_mappings.is_empty());
    let best = &report.field_mappings[0];
    assert_eq!(best.field1, "gene_symbol");
    assert_eq!(best.field2, "gene_symbol");
    assert!((best.similarity - 1.0).abs() < 1e-9);
    assert_eq!(best.confidence, Confidence::High);
}

#[test]
fn test_mapping_limit_is_honored() {
    let many = |prefix: &str| -> Vec<FieldProfile> {
        (0..12)
            .map(|i| text_field(&format!("{prefix}_field_{i:02}"), None, &["v"]))
            .collect()
    };
    let profiles = vec![
        tabular("a", "x.tsv", many("shared")),
        tabular("b", "y.tsv", many("shared")),
    ];
    let options = AnalyzerOptions {
        mapping_limit: 5,
        ..AnalyzerOptions::default()
    };
    let report = analyze_cross_source(&profiles, options);
    assert_eq!(report.field_mappings.len(), 5);
}

#[test]
fn test_no_entities_means_no_overlap_sections() {
    let profiles = vec![
        tabular("a", "x.tsv", vec![text_field("note", None, &["hi"])]),
        tabular("b", "y.tsv", vec![text_field("memo", None, &["yo"])]),
    ];
    let report = analyze_cross_source(&profiles, AnalyzerOptions::default());
    assert!(report.gene_overlap.is_none());
    assert!(report.disease_overlap.is_none());
}

#[test]
fn test_report_round_trips_through_json() {
    let report = analyze_cross_source(&sample_profiles(), AnalyzerOptions::default());
    let json = serde_json::to_string(&report).unwrap();
    let back: hq_cross::CrossSourceReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
