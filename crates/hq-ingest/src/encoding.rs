//! Encoding and delimiter detection for delimited text files.
//!
//! Encoding is guessed from the first 100 KB: BOM first, then UTF-8
//! validity, with windows-1252 as the fallback that can decode any byte
//! sequence. ASCII-only content therefore reports as UTF-8. Detection is
//! never fatal; only the initial file read can fail.

use std::io::Read as _;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use flate2::bufread::MultiGzDecoder;

use crate::error::{IngestError, Result};

/// Number of bytes inspected for the encoding guess.
pub const ENCODING_SNIFF_LEN: usize = 100 * 1024;

/// Leading bytes of every gzip stream.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Candidate delimiters in tie-break priority order: tab beats comma beats
/// pipe beats semicolon.
pub const DELIMITER_PRIORITY: [char; 4] = ['\t', ',', '|', ';'];

/// Pick an encoding for the given leading bytes.
pub fn sniff_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    if std::str::from_utf8(bytes).is_ok() {
        UTF_8
    } else {
        WINDOWS_1252
    }
}

/// Decode a whole file with the detected encoding.
///
/// Gzip-compressed files (recognized by magic bytes, not extension) are
/// decompressed first, so `variant_summary.txt.gz` reads like its inner
/// text file. Returns the decoded text and the encoding name. Undecodable
/// bytes are replaced, never fatal.
pub fn read_decoded(path: &Path) -> Result<(String, &'static str)> {
    let mut bytes = std::fs::read(path).map_err(|e| IngestError::from_io(path, e))?;
    if bytes.starts_with(&GZIP_MAGIC) {
        let mut inflated = Vec::new();
        MultiGzDecoder::new(&bytes[..])
            .read_to_end(&mut inflated)
            .map_err(|e| IngestError::Parse {
                path: path.to_path_buf(),
                message: format!("gzip decompression failed: {e}"),
            })?;
        bytes = inflated;
    }
    let encoding = sniff_encoding(&bytes[..bytes.len().min(ENCODING_SNIFF_LEN)]);
    let (text, actual, had_errors) = encoding.decode(&bytes);
    if had_errors {
        tracing::warn!(
            path = %path.display(),
            encoding = actual.name(),
            "replaced undecodable bytes while reading file"
        );
    }
    Ok((text.into_owned(), actual.name()))
}

/// Choose the field delimiter from the first line of decoded text.
///
/// The candidate with the highest occurrence count wins; ties are broken by
/// the fixed [`DELIMITER_PRIORITY`] order so detection is deterministic.
pub fn detect_delimiter(text: &str) -> char {
    let first_line = text.lines().next().unwrap_or("");
    let mut best = DELIMITER_PRIORITY[0];
    let mut best_count = 0usize;
    for candidate in DELIMITER_PRIORITY {
        let count = first_line.matches(candidate).count();
        // Strictly greater: earlier candidates win ties
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}
