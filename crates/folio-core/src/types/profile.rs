//! The singleton portfolio profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The portfolio owner's profile.
///
/// Exactly one exists server-side. A view holds at most one copy and only
/// ever replaces it wholesale, except for the local CV-download increment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Biography
    #[serde(default)]
    pub bio: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
    /// Professional network link
    #[serde(default)]
    pub linkedin: String,
    /// Portfolio gallery link
    #[serde(default)]
    pub behance: String,
    /// Number of CV downloads
    #[serde(default)]
    pub cv_download_count: u64,
    /// Number of completed projects
    #[serde(default)]
    pub total_projects: u64,
    /// Number of happy clients
    #[serde(default)]
    pub happy_clients: u64,
    /// Number of awards
    #[serde(default)]
    pub awards: u64,
    /// Last server-side modification
    #[serde(
        default,
        with = "super::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Apply one successful CV download to the local copy.
    pub fn record_cv_download(&mut self) {
        self.cv_download_count = self.cv_download_count.saturating_add(1);
    }

    /// Initials shown in place of a portrait ("Ashin Krishna" → "AK").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Partial payload for `PATCH /profile`. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New biography
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// New contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New professional network link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// New portfolio gallery link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behance: Option<String>,
    /// Overwrite the download counter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_download_count: Option<u64>,
    /// Overwrite the project total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_projects: Option<u64>,
    /// Overwrite the client total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub happy_clients: Option<u64>,
    /// Overwrite the award total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awards: Option<u64>,
}

impl ProfileUpdate {
    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
