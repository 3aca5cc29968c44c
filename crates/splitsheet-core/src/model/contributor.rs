use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::ContributorId;

/// The two roles a rights holder can play on a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributorRole {
    Writer,
    Publisher,
}

impl ContributorRole {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Writer => "Writer",
            Self::Publisher => "Publisher",
        }
    }
}

impl fmt::Display for ContributorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A writer or publisher.
///
/// Contributors are embedded in every song they appear on. Two embedded
/// copies with the same [`ContributorId`] are the same entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub id: ContributorId,
    pub name: String,

    #[serde(rename = "type")]
    pub role: ContributorRole,

    /// Interested Parties Information number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipi_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_url: Option<String>,
}

impl Contributor {
    #[must_use]
    pub fn new(id: impl Into<ContributorId>, name: impl Into<String>, role: ContributorRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            ipi_number: None,
            bio: None,
            photo_url: None,
            contact_url: None,
        }
    }

    #[must_use]
    pub fn writer(id: impl Into<ContributorId>, name: impl Into<String>) -> Self {
        Self::new(id, name, ContributorRole::Writer)
    }

    #[must_use]
    pub fn publisher(id: impl Into<ContributorId>, name: impl Into<String>) -> Self {
        Self::new(id, name, ContributorRole::Publisher)
    }

    #[must_use]
    pub fn with_ipi_number(mut self, ipi: impl Into<String>) -> Self {
        self.ipi_number = Some(ipi.into());
        self
    }

    #[must_use]
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    #[must_use]
    pub fn with_contact_url(mut self, url: impl Into<String>) -> Self {
        self.contact_url = Some(url.into());
        self
    }

    /// First character of the display name, used as an avatar initial.
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}
