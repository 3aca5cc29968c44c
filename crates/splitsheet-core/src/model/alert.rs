use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::ids::AlertId;

/// Severity of a dashboard alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Info,
    Warning,
    Success,
}

/// A notification shown on a contributor dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,

    #[serde(rename = "type")]
    pub kind: AlertKind,

    pub message: String,
    pub date: NaiveDate,

    #[serde(default)]
    pub is_read: bool,

    /// In-app link the alert points at (e.g., `/songs/5`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}

impl Alert {
    #[must_use]
    pub fn new(
        id: impl Into<AlertId>,
        kind: AlertKind,
        message: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            message: message.into(),
            date,
            is_read: false,
            action_url: None,
        }
    }

    #[must_use]
    pub fn with_action_url(mut self, url: impl Into<String>) -> Self {
        self.action_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn read(mut self) -> Self {
        self.is_read = true;
        self
    }
}
