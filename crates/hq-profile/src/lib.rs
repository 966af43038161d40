pub mod error;
pub mod field;
pub mod infer;
pub mod patterns;
pub mod profiler;
pub mod semistructured;
pub mod stats;
pub mod tabular;

pub use error::{ProfileError, Result};
pub use field::analyze_field;
pub use infer::{BOOLEAN_TOKENS, DATE_FORMATS, DateFormat, Inference, infer_data_type};
pub use patterns::{PATTERN_MATCH_THRESHOLD, PATTERN_SAMPLE_LEN, detect_pattern};
pub use profiler::{ProfileOptions, profile_batch, profile_file};
pub use semistructured::{profile_json, profile_xml};
pub use tabular::profile_tabular;
