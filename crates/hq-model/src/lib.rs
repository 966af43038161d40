pub mod field;
pub mod pattern;
pub mod profile;

pub use field::{
    BooleanStats, Cardinality, DataType, DateStats, Distribution, FieldProfile, FieldStats,
    NumericStats, TextStats, TopValue,
};
pub use pattern::IdentifierPattern;
pub use profile::{DocumentFormat, FileProfile, ProfileDetail, StructureProfile, TabularProfile};
