//! Named identifier patterns recognized by the profiler.
//!
//! The evaluation order of these patterns is correctness-relevant: the
//! detector reports the first pattern in [`IdentifierPattern::ALL`] whose
//! match ratio clears the threshold, so the list order decides which
//! pattern wins on ambiguous input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A known identifier pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IdentifierPattern {
    /// HUGO Gene Nomenclature Committee id, `HGNC:<digits>`.
    #[serde(rename = "HGNC ID")]
    HgncId,
    /// Monarch Disease Ontology id, `MONDO:<7 digits>`.
    #[serde(rename = "MONDO ID")]
    MondoId,
    /// Online Mendelian Inheritance in Man id, 6 digits.
    #[serde(rename = "OMIM ID")]
    OmimId,
    /// Reference SNP id, `rs<digits>`.
    #[serde(rename = "dbSNP rsID")]
    DbSnpRsId,
    /// ClinVar variation id, `VCV<digits>`.
    #[serde(rename = "ClinVar ID")]
    ClinVarId,
    /// HGVS sequence variant notation.
    #[serde(rename = "HGVS")]
    Hgvs,
    #[serde(rename = "Email")]
    Email,
    #[serde(rename = "URL")]
    Url,
    #[serde(rename = "UUID")]
    Uuid,
}

impl IdentifierPattern {
    /// All patterns in detection order.
    pub const ALL: [IdentifierPattern; 9] = [
        IdentifierPattern::HgncId,
        IdentifierPattern::MondoId,
        IdentifierPattern::OmimId,
        IdentifierPattern::DbSnpRsId,
        IdentifierPattern::ClinVarId,
        IdentifierPattern::Hgvs,
        IdentifierPattern::Email,
        IdentifierPattern::Url,
        IdentifierPattern::Uuid,
    ];

    /// The five kinds tracked by the identifier coverage matrix.
    pub const TRACKED: [IdentifierPattern; 5] = [
        IdentifierPattern::HgncId,
        IdentifierPattern::MondoId,
        IdentifierPattern::OmimId,
        IdentifierPattern::DbSnpRsId,
        IdentifierPattern::ClinVarId,
    ];

    /// Display name as used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierPattern::HgncId => "HGNC ID",
            IdentifierPattern::MondoId => "MONDO ID",
            IdentifierPattern::OmimId => "OMIM ID",
            IdentifierPattern::DbSnpRsId => "dbSNP rsID",
            IdentifierPattern::ClinVarId => "ClinVar ID",
            IdentifierPattern::Hgvs => "HGVS",
            IdentifierPattern::Email => "Email",
            IdentifierPattern::Url => "URL",
            IdentifierPattern::Uuid => "UUID",
        }
    }

    /// Anchored regular expression source for this pattern.
    ///
    /// Compiled case-insensitively by the detector.
    pub fn regex_source(&self) -> &'static str {
        match self {
            IdentifierPattern::HgncId => r"^HGNC:\d+$",
            IdentifierPattern::MondoId => r"^MONDO:\d{7}$",
            IdentifierPattern::OmimId => r"^\d{6}$",
            IdentifierPattern::DbSnpRsId => r"^rs\d+$",
            IdentifierPattern::ClinVarId => r"^VCV\d+$",
            IdentifierPattern::Hgvs => r"^[A-Z]{2,3}_\d+\.\d+:",
            IdentifierPattern::Email => r"^[\w\.-]+@[\w\.-]+\.\w+$",
            IdentifierPattern::Url => r"^https?://",
            IdentifierPattern::Uuid => {
                r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$"
            }
        }
    }
}

impl fmt::Display for IdentifierPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
