//! Portfolio content types.

mod contact;
mod ids;
mod profile;
mod project;
mod proptests;
mod testimonial;
pub(crate) mod timestamp;

pub use contact::{Contact, NewContact};
pub use ids::{ContactId, ProjectId, TestimonialId};
pub use profile::{Profile, ProfileUpdate};
pub use project::{Category, NewProject, Project};
pub use testimonial::{NewTestimonial, Testimonial};

use serde::{Deserialize, Serialize};

/// Acknowledgement body returned by endpoints that do not echo a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    /// Server-provided confirmation text
    #[serde(default)]
    pub message: String,
}

/// Liveness payload returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Human-readable banner
    #[serde(default)]
    pub message: String,
    /// Status keyword, `healthy` when the API is up
    #[serde(default)]
    pub status: String,
}

impl HealthStatus {
    /// Returns `true` if the API reports itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}
