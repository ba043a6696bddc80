//! Client testimonials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::TestimonialId;

fn default_active() -> bool {
    true
}

/// A testimonial as served by the content API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Unique identifier
    pub id: TestimonialId,
    /// Author name
    pub name: String,
    /// Author role
    pub role: String,
    /// Author company
    pub company: String,
    /// Quote
    pub message: String,
    /// Avatar image URL
    pub avatar: String,
    /// Creation time
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    /// Whether the testimonial is shown
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Payload for `POST /testimonials`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTestimonial {
    /// Author name
    pub name: String,
    /// Author role
    pub role: String,
    /// Author company
    pub company: String,
    /// Quote
    pub message: String,
    /// Avatar image URL
    pub avatar: String,
    /// Whether the testimonial is shown
    #[serde(default = "default_active")]
    pub is_active: bool,
}
