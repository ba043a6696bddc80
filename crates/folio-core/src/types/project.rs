//! Portfolio projects and their fixed categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::types::ProjectId;

/// The fixed set of project categories.
///
/// A project's category never changes and decides which bucket of the
/// projects view holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// CV and résumé designs (`cv`).
    Cv,
    /// Brand identity work (`branding`).
    Branding,
    /// Social media templates (`social`).
    Social,
}

impl Category {
    /// All categories in display order. The first one is the default tab.
    pub const ALL: [Category; 3] = [Category::Cv, Category::Branding, Category::Social];

    /// Path segment used by `GET /projects/{category}`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cv => "cv",
            Category::Branding => "branding",
            Category::Social => "social",
        }
    }

    /// Tab title.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Cv => "CV Designs",
            Category::Branding => "Brand Identity",
            Category::Social => "Social Media",
        }
    }

    /// Noun phrase used in the empty state ("No CV design projects found").
    pub fn noun(&self) -> &'static str {
        match self {
            Category::Cv => "CV design",
            Category::Branding => "branding",
            Category::Social => "social media",
        }
    }

    /// Position within [`Category::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Category::Cv => 0,
            Category::Branding => 1,
            Category::Social => 2,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::ALL[0]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cv" | "cv-design" => Ok(Category::Cv),
            "branding" => Ok(Category::Branding),
            "social" | "social-media" => Ok(Category::Social),
            other => Err(Error::parse(format!("unknown category '{other}'"))),
        }
    }
}

/// A portfolio project as served by the content API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: ProjectId,
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
    /// Image URL
    pub image: String,
    /// Owning category
    pub category: Category,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the project is highlighted
    #[serde(default)]
    pub is_featured: bool,
    /// Creation time
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
    /// Image URL
    pub image: String,
    /// Owning category
    pub category: Category,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the project is highlighted
    #[serde(default)]
    pub is_featured: bool,
}
