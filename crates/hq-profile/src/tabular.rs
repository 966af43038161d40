//! Profiling of delimited tabular files.

use std::path::Path;

use hq_ingest::{TableOptions, read_table};
use hq_model::TabularProfile;

use crate::error::Result;
use crate::field::analyze_field;

/// Profile a delimited file: detect encoding and delimiter, load the rows,
/// and analyze every column in header order.
pub fn profile_tabular(path: &Path, options: TableOptions) -> Result<TabularProfile> {
    let table = read_table(path, options)?;
    if table.skipped_rows > 0 {
        tracing::warn!(
            path = %path.display(),
            skipped = table.skipped_rows,
            "profiled file with skipped rows"
        );
    }

    let field_analyses = table
        .headers
        .iter()
        .zip(&table.columns)
        .map(|(name, column)| analyze_field(name, column))
        .collect();

    Ok(TabularProfile {
        row_count: table.row_count,
        column_count: table.headers.len(),
        delimiter: table.delimiter,
        encoding: table.encoding,
        field_analyses,
    })
}
