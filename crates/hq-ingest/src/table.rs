//! Whole-file reading of delimited data into raw string columns.
//!
//! The profiler works on the raw text of every cell, so no type coercion
//! happens here: cells are kept as strings, with the null-token set mapped
//! to `None`. Files are loaded fully into memory; streaming is out of scope.

use std::path::Path;

use crate::encoding::{detect_delimiter, read_decoded};
use crate::error::{IngestError, Result};

/// Tokens treated as null, case-sensitive as listed.
pub const NULL_TOKENS: [&str; 12] = [
    "", "NA", "N/A", "NULL", "None", "NaN", "-", ".", "?", "na", "n/a", "null",
];

/// Options for reading a delimited file.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableOptions {
    /// Read at most this many data rows (header excluded).
    pub sample_rows: Option<usize>,
}

/// A delimited file loaded as raw string columns.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Encoding name chosen by the detector.
    pub encoding: String,
    pub delimiter: char,
    /// Header row, in file order.
    pub headers: Vec<String>,
    /// One column per header; null tokens mapped to `None`.
    pub columns: Vec<Vec<Option<String>>>,
    /// Number of data rows kept.
    pub row_count: usize,
    /// Number of malformed rows skipped.
    pub skipped_rows: usize,
}

/// Returns true for a cell that should be treated as null.
pub fn is_null_token(cell: &str) -> bool {
    NULL_TOKENS.contains(&cell)
}

/// Read a delimited file with exactly one header row.
///
/// `#`-prefixed lines are comments and skipped. Rows whose field count does
/// not match the header are warned about and skipped; reading continues with
/// the remaining rows.
pub fn read_table(path: &Path, options: TableOptions) -> Result<RawTable> {
    let (text, encoding) = read_decoded(path)?;
    let delimiter = detect_delimiter(strip_leading_comments(&text));

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .comment(Some(b'#'))
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    let mut row_count = 0usize;
    let mut skipped_rows = 0usize;

    for (index, record) in reader.records().enumerate() {
        if let Some(limit) = options.sample_rows {
            if row_count >= limit {
                break;
            }
        }
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                skipped_rows += 1;
                tracing::warn!(
                    path = %path.display(),
                    row = index + 1,
                    %error,
                    "skipping unparseable row"
                );
                continue;
            }
        };
        if record.len() != headers.len() {
            skipped_rows += 1;
            tracing::warn!(
                path = %path.display(),
                row = index + 1,
                expected = headers.len(),
                found = record.len(),
                "skipping row with mismatched field count"
            );
            continue;
        }
        for (column, cell) in columns.iter_mut().zip(record.iter()) {
            if is_null_token(cell) {
                column.push(None);
            } else {
                column.push(Some(cell.to_string()));
            }
        }
        row_count += 1;
    }

    Ok(RawTable {
        encoding: encoding.to_string(),
        delimiter,
        headers,
        columns,
        row_count,
        skipped_rows,
    })
}

/// First non-comment portion of the text, used for delimiter sniffing.
fn strip_leading_comments(text: &str) -> &str {
    let mut rest = text;
    while rest.starts_with('#') {
        match rest.find('\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return "",
        }
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_reads_tsv_with_nulls() {
        let file = write_file(b"gene\tscore\nBRCA1\t1\nNA\t2\nTP53\tN/A\n");
        let table = read_table(file.path(), TableOptions::default()).unwrap();

        assert_eq!(table.delimiter, '\t');
        assert_eq!(table.encoding, "UTF-8");
        assert_eq!(table.headers, vec!["gene", "score"]);
        assert_eq!(table.row_count, 3);
        assert_eq!(table.columns[0][1], None);
        assert_eq!(table.columns[1][2], None);
        assert_eq!(table.columns[0][0].as_deref(), Some("BRCA1"));
    }

    #[test]
    fn test_reads_gzipped_tsv() {
        let mut encoder =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(b"gene\tdisease\nBRCA1\tbreast cancer\nTP53\tli-fraumeni\n")
            .unwrap();
        let file = write_file(&encoder.finish().unwrap());

        let table = read_table(file.path(), TableOptions::default()).unwrap();
        assert_eq!(table.delimiter, '\t');
        assert_eq!(table.headers, vec!["gene", "disease"]);
        assert_eq!(table.row_count, 2);
        assert_eq!(table.columns[1][0].as_deref(), Some("breast cancer"));
    }

    #[test]
    fn test_skips_comment_lines() {
        let file = write_file(b"# generated 2024-01-01\n# source: gencc\ngene,score\nBRCA1,1\n");
        let table = read_table(file.path(), TableOptions::default()).unwrap();

        assert_eq!(table.delimiter, ',');
        assert_eq!(table.headers, vec!["gene", "score"]);
        assert_eq!(table.row_count, 1);
    }

    #[test]
    fn test_skips_malformed_rows() {
        let file = write_file(b"a,b,c\n1,2,3\n1,2\n4,5,6\n");
        let table = read_table(file.path(), TableOptions::default()).unwrap();

        assert_eq!(table.row_count, 2);
        assert_eq!(table.skipped_rows, 1);
        assert_eq!(table.columns[0].len(), 2);
    }

    #[test]
    fn test_sample_rows_caps_reading() {
        let file = write_file(b"a\n1\n2\n3\n4\n");
        let table = read_table(
            file.path(),
            TableOptions {
                sample_rows: Some(2),
            },
        )
        .unwrap();
        assert_eq!(table.row_count, 2);
    }

    #[test]
    fn test_case_sensitive_null_tokens() {
        assert!(is_null_token("NA"));
        assert!(is_null_token("na"));
        assert!(is_null_token(""));
        assert!(is_null_token("?"));
        // Only the listed spellings count
        assert!(!is_null_token("Na"));
        assert!(!is_null_token("none"));
    }

    #[test]
    fn test_missing_file_reports_error() {
        let err = read_table(Path::new("/nonexistent/x.tsv"), TableOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
