//! Per-file Markdown reports.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use hq_model::{FieldProfile, FieldStats, FileProfile, ProfileDetail, StructureProfile};

const TOP_VALUE_DISPLAY_LEN: usize = 5;
const PATH_DISPLAY_LEN: usize = 20;

/// Render and write the Markdown report for one profiled file.
pub fn write_markdown(profile: &FileProfile, output_path: &Path) -> Result<()> {
    let report = render_markdown(profile, &Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(output_path, report).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

/// Render the report body. The timestamp is injected so output is testable.
pub fn render_markdown(profile: &FileProfile, generated: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Data Analysis Report: {}\n", profile.filename);
    let _ = writeln!(out, "**Generated**: {generated}\n");
    out.push_str("---\n\n");

    out.push_str("## File Information\n\n");
    let _ = writeln!(out, "- **File**: {}", profile.filepath.display());
    let _ = writeln!(out, "- **Source**: {}", profile.source);
    let _ = writeln!(out, "- **Size**: {:.2} MB", profile.file_size_mb);

    match &profile.detail {
        ProfileDetail::Tabular(tabular) => {
            let _ = writeln!(out, "- **Rows**: {}", tabular.row_count);
            let _ = writeln!(out, "- **Columns**: {}", tabular.column_count);
            let _ = writeln!(out, "- **Delimiter**: `{}`", delimiter_label(tabular.delimiter));
            let _ = writeln!(out, "- **Encoding**: {}", tabular.encoding);
            out.push('\n');
            render_field_analysis(&mut out, &tabular.field_analyses);
        }
        ProfileDetail::SemiStructured(structure) => {
            let _ = writeln!(out, "- **Format**: {}", structure.format);
            let _ = writeln!(out, "- **Max Depth**: {}", structure.max_depth);
            let _ = writeln!(out, "- **Node Count**: {}", structure.node_count);
            let _ = writeln!(out, "- **Unique Paths**: {}", structure.unique_paths);
            out.push('\n');
            render_structure_analysis(&mut out, structure);
        }
        ProfileDetail::Failed { error } => {
            out.push('\n');
            out.push_str("## Analysis Failed\n\n");
            let _ = writeln!(out, "- **Error**: {error}");
        }
    }

    out
}

fn render_field_analysis(out: &mut String, fields: &[FieldProfile]) {
    out.push_str("## Field Analysis\n\n");
    let _ = writeln!(out, "Total fields: **{}**\n", fields.len());

    for field in fields {
        let _ = writeln!(out, "### {}\n", field.name);
        let _ = writeln!(out, "- **Type**: {}", field.data_type);
        let _ = writeln!(
            out,
            "- **Non-null**: {} / {} ({:.1}%)",
            field.non_null_count,
            field.total_count,
            100.0 - field.null_percentage
        );
        let _ = writeln!(out, "- **Unique values**: {}", field.unique_count);
        let _ = writeln!(out, "- **Cardinality**: {}", field.cardinality);
        if let Some(pattern) = field.pattern {
            let _ = writeln!(out, "- **Pattern**: {}", pattern.as_str());
        }
        render_field_stats(out, field);
        out.push('\n');
    }
}

fn render_field_stats(out: &mut String, field: &FieldProfile) {
    match &field.stats {
        FieldStats::Text(stats) => {
            let _ = writeln!(
                out,
                "- **Length**: {}-{} chars (avg: {:.1})",
                stats.min_length, stats.max_length, stats.mean_length
            );
            render_top_values(out, &stats.top_values);
        }
        FieldStats::Numeric(stats) => {
            let _ = writeln!(out, "- **Range**: {:.2} - {:.2}", stats.min, stats.max);
            let _ = writeln!(out, "- **Mean**: {:.2} (±{:.2})", stats.mean, stats.std);
            let _ = writeln!(out, "- **Median**: {:.2}", stats.median);
            let _ = writeln!(
                out,
                "- **Outliers**: {} ({:.1}%)",
                stats.outlier_count, stats.outlier_percentage
            );
            // Present only on identifier-bearing numeric columns
            render_top_values(out, &stats.top_values);
        }
        FieldStats::Date(stats) => {
            let _ = writeln!(
                out,
                "- **Range**: {} - {} ({} days)",
                stats.min_date.date(),
                stats.max_date.date(),
                stats.range_days
            );
        }
        FieldStats::Boolean(stats) => {
            let _ = writeln!(
                out,
                "- **True**: {} ({:.1}%), **False**: {}",
                stats.true_count, stats.true_percentage, stats.false_count
            );
        }
        FieldStats::Empty => {}
    }
}

fn render_top_values(out: &mut String, top_values: &[hq_model::TopValue]) {
    if top_values.is_empty() {
        return;
    }
    out.push_str("- **Top values**:\n");
    for top in top_values.iter().take(TOP_VALUE_DISPLAY_LEN) {
        let _ = writeln!(
            out,
            "  - `{}`: {} ({:.1}%)",
            top.value, top.count, top.percentage
        );
    }
}

fn render_structure_analysis(out: &mut String, structure: &StructureProfile) {
    out.push_str("## Structure Analysis\n\n");
    out.push_str("### Top Paths\n\n");
    for path in structure.paths.iter().take(PATH_DISPLAY_LEN) {
        let _ = writeln!(out, "- `{path}`");
    }
    out.push('\n');
    if structure.paths.len() > PATH_DISPLAY_LEN {
        let _ = writeln!(
            out,
            "*...and {} more paths*\n",
            structure.paths.len() - PATH_DISPLAY_LEN
        );
    }
    if !structure.tag_frequencies.is_empty() {
        out.push_str("### Tag Frequencies\n\n");
        for (tag, count) in &structure.tag_frequencies {
            let _ = writeln!(out, "- `{tag}`: {count}");
        }
        out.push('\n');
    }
}

fn delimiter_label(delimiter: char) -> &'static str {
    match delimiter {
        '\t' => "\\t",
        ',' => ",",
        '|' => "|",
        ';' => ";",
        _ => "?",
    }
}
