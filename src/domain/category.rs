//! PII category enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of PII categories handled by the vault.
///
/// The enumeration is deliberately closed rather than an open string so that
/// every call site branching on category is checked for exhaustiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PiiCategory {
    /// Email addresses
    Email,
    /// Telephone numbers
    Phone,
    /// Personal names (tokenized per word)
    Name,
}

impl PiiCategory {
    /// Anonymization pass order.
    ///
    /// Phones go first because the phone pattern is the most permissive (any
    /// long digit-ish run) and must claim its matches before narrower
    /// patterns see the text. Names go last: by then the only new text is
    /// tokens, which never match the capitalized-word pattern.
    pub const DETECTION_ORDER: [PiiCategory; 3] =
        [PiiCategory::Phone, PiiCategory::Email, PiiCategory::Name];

    /// Uppercase token prefix for this category (`EMAIL`, `PHONE`, `NAME`)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Name => "NAME",
        }
    }

    /// Lowercase key used in stats and serialized mappings
    pub fn key(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Name => "name",
        }
    }

    /// Parse a category from its label or key (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "EMAIL" => Some(Self::Email),
            "PHONE" => Some(Self::Phone),
            "NAME" => Some(Self::Name),
            _ => None,
        }
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
