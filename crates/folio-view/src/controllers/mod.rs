//! Section view-model controllers.
//!
//! Each controller owns one section's fetched state for as long as the
//! section is mounted. It is the only layer that catches transport errors:
//! it logs them, turns them into notifications and keeps the section
//! renderable.

mod profile;
mod projects;

pub use profile::{ProfileController, ProfileView};
pub use projects::{CategoryStatus, ProjectBuckets, ProjectsController, ProjectsView};
