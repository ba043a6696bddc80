//! # folio-view
//!
//! Section state for the portfolio page.
//!
//! - [`controllers`]: profile and projects view-models (`idle → loading →
//!   ready | failed`) with optimistic mutation helpers
//! - [`contact`]: the single-shot contact submission flow
//! - [`visibility`]: one-shot "revealed" triggers driven by a viewport
//! - [`source`]: swappable data sources (remote API or built-in catalogue)
//! - [`notify`]: transient, dismissable notifications
//! - [`present`]: stateless text rendering of every section
//!
//! Each controller owns its state exclusively and is bound to a
//! [`Scope`](lifecycle::Scope): once unmounted, late results are discarded
//! instead of written into dead state.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod contact;
pub mod controllers;
pub mod error;
pub mod lifecycle;
pub mod notify;
pub mod present;
pub mod source;
pub mod state;
pub mod visibility;

pub use contact::{ContactForm, ContactFormView, Field};
pub use controllers::{
    CategoryStatus, ProfileController, ProfileView, ProjectBuckets, ProjectsController,
    ProjectsView,
};
pub use error::{Error, Result};
pub use lifecycle::Scope;
pub use notify::{Level, Notification, NotificationCenter, Notifier};
pub use source::{
    ContactSender, ProfileSource, ProjectCatalog, ProjectSource, SourceResult, Sources,
    TestimonialSource,
};
pub use state::{Phase, ViewState};
pub use visibility::{IntersectionEntry, Viewport, VisibilityTrigger};
