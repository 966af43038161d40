//! Report generation for profiling results in multiple formats:
//!
//! - **JSON**: complete per-file profiles and the cross-source report
//! - **Markdown**: human-readable per-file reports
//! - **TSV**: aggregated field-level table for downstream tooling

mod json;
mod layout;
mod markdown;
mod tsv;

pub use json::{write_cross_report_json, write_profile_json};
pub use layout::{ProfileReportPaths, cross_report_path, fields_tsv_path, profile_report_paths};
pub use markdown::{render_markdown, write_markdown};
pub use tsv::write_fields_tsv;
