use serde::{Deserialize, Serialize};

use crate::model::ids::ContributorId;

/// Account roles. Admins are not tied to a contributor record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Writer,
    Publisher,
    Admin,
}

/// A signed-in catalog user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,

    /// The contributor whose portfolio this user manages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributor_id: Option<ContributorId>,
}
