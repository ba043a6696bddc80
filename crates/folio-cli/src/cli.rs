//! Command-line definitions.

use clap::{Args as ClapArgs, Parser, Subcommand};
use folio_core::Category;
use std::path::PathBuf;

/// Folio - portfolio content viewer and maintenance tool
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL (overrides FOLIO_BACKEND_URL)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Use the built-in catalogue instead of the API
    #[arg(long = "static", global = true)]
    pub use_static: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render every page section
    Show(ShowArgs),
    /// Check that the backend is up
    Health,
    /// Profile operations
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Project operations
    #[command(subcommand)]
    Projects(ProjectsCommand),
    /// Contact submissions
    #[command(subcommand)]
    Contacts(ContactsCommand),
    /// Testimonial operations
    #[command(subcommand)]
    Testimonials(TestimonialsCommand),
}

#[derive(ClapArgs, Debug, Default)]
pub struct ShowArgs {
    /// Projects tab to display (cv, branding, social)
    #[arg(long, default_value = "cv", value_parser = parse_category)]
    pub category: Category,

    /// Open the detail overlay for a project
    #[arg(long)]
    pub open: Option<String>,

    /// Record a CV download before rendering
    #[arg(long)]
    pub download_cv: bool,

    /// Submit a contact message before rendering: NAME EMAIL MESSAGE
    #[arg(long, num_args = 3, value_names = ["NAME", "EMAIL", "MESSAGE"])]
    pub contact: Option<Vec<String>>,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Print the profile
    Get,
    /// Update profile fields
    Update(ProfileUpdateArgs),
    /// Record one CV download
    DownloadCv,
}

#[derive(ClapArgs, Debug)]
pub struct ProfileUpdateArgs {
    /// Biography
    #[arg(long)]
    pub bio: Option<String>,
    /// Contact email
    #[arg(long)]
    pub email: Option<String>,
    /// Professional network link
    #[arg(long)]
    pub linkedin: Option<String>,
    /// Portfolio gallery link
    #[arg(long)]
    pub behance: Option<String>,
    /// Total projects
    #[arg(long)]
    pub total_projects: Option<u64>,
    /// Happy clients
    #[arg(long)]
    pub happy_clients: Option<u64>,
    /// Awards
    #[arg(long)]
    pub awards: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum ProjectsCommand {
    /// List every project
    List,
    /// List one category
    Category {
        /// cv, branding or social
        #[arg(value_parser = parse_category)]
        category: Category,
    },
    /// List featured projects
    Featured,
    /// Show one project
    Get {
        /// Project id
        id: String,
    },
    /// Create a project
    Create(NewProjectArgs),
    /// Delete a project
    Delete {
        /// Project id
        id: String,
    },
}

#[derive(ClapArgs, Debug)]
pub struct NewProjectArgs {
    /// Title
    #[arg(long)]
    pub title: String,
    /// Description
    #[arg(long)]
    pub description: String,
    /// Image URL
    #[arg(long)]
    pub image: String,
    /// cv, branding or social
    #[arg(long, value_parser = parse_category)]
    pub category: Category,
    /// Tags (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// Mark as featured
    #[arg(long)]
    pub featured: bool,
}

#[derive(Subcommand, Debug)]
pub enum ContactsCommand {
    /// Send a contact message
    Send {
        /// Sender name
        name: String,
        /// Sender email
        email: String,
        /// Message body
        message: String,
    },
    /// List received messages
    List,
    /// Mark a message as read
    MarkRead {
        /// Contact id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TestimonialsCommand {
    /// List testimonials
    List,
    /// Create a testimonial
    Create(NewTestimonialArgs),
    /// Delete a testimonial
    Delete {
        /// Testimonial id
        id: String,
    },
}

#[derive(ClapArgs, Debug)]
pub struct NewTestimonialArgs {
    /// Author name
    #[arg(long)]
    pub name: String,
    /// Author role
    #[arg(long)]
    pub role: String,
    /// Author company
    #[arg(long)]
    pub company: String,
    /// Quote
    #[arg(long)]
    pub message: String,
    /// Avatar image URL
    #[arg(long, default_value = "")]
    pub avatar: String,
    /// Hide the testimonial
    #[arg(long)]
    pub inactive: bool,
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|e: folio_core::Error| e.to_string())
}
