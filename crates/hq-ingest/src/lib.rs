pub mod discovery;
pub mod encoding;
pub mod error;
pub mod table;

pub use discovery::{DiscoveredFile, FileKind, classify, discover_sources};
pub use encoding::{
    DELIMITER_PRIORITY, ENCODING_SNIFF_LEN, detect_delimiter, read_decoded, sniff_encoding,
};
pub use error::{IngestError, Result};
pub use table::{NULL_TOKENS, RawTable, TableOptions, is_null_token, read_table};
