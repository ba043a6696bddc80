//! Folio Core: shared types, configuration and errors.
//!
//! This crate provides the portfolio data model used across all Folio crates.
//! It has no internal Folio dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: Environment/TOML configuration
//! - [`types`]: Profile, project, contact and testimonial records

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod types;

// Re-export key types at crate root for convenience
pub use config::{Config, DataSource};
pub use error::{Error, Result};
pub use types::{
    Ack, Category, Contact, ContactId, HealthStatus, NewContact, NewProject, NewTestimonial,
    Profile, ProfileUpdate, Project, ProjectId, Testimonial, TestimonialId,
};
