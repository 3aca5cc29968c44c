use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const PENDING: &str = "Pending";

/// International Standard Musical Work Code.
///
/// Unregistered songs carry [`Iswc::Pending`]. The textual form of a
/// pending code is `"Pending"`, and that is also what search matches on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Iswc {
    Assigned(String),
    #[default]
    Pending,
}

impl Iswc {
    /// Parse a code as it appears in catalog data.
    ///
    /// Blank strings and `"pending"` (any case) mean no code has been
    /// assigned yet. The code itself is stored trimmed but otherwise
    /// untouched; check digits are not verified.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(PENDING) {
            Self::Pending
        } else {
            Self::Assigned(trimmed.to_string())
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Assigned(code) => code,
            Self::Pending => PENDING,
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl fmt::Display for Iswc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Iswc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Iswc {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
