//! Maintenance subcommands: one per resource-client operation.
//!
//! With the remote data source every command maps to one API call. With the
//! static catalogue, reads are served from memory and writes are refused.

use anyhow::{Result, bail};
use folio_client::{ApiClient, ContactsClient, ProfileClient, ProjectsClient, TestimonialsClient};
use folio_core::{
    Ack, Config, ContactId, DataSource, NewContact, NewProject, NewTestimonial, ProfileUpdate,
    ProjectId, TestimonialId,
};
use folio_view::catalog::StaticCatalog;
use folio_view::{ProfileSource, ProjectCatalog, TestimonialSource};
use std::sync::Arc;

use super::print_json;
use crate::cli::{ContactsCommand, ProfileCommand, ProjectsCommand, TestimonialsCommand};

/// Where maintenance commands read and write.
enum Backend {
    Remote(ApiClient),
    Static(Arc<StaticCatalog>),
}

impl Backend {
    fn from_config(config: &Config) -> Result<Self> {
        Ok(match config.data_source {
            DataSource::Remote => Backend::Remote(ApiClient::from_config(config)?),
            DataSource::Static => Backend::Static(Arc::new(StaticCatalog::new())),
        })
    }

    fn remote(&self, command: &str) -> Result<&ApiClient> {
        match self {
            Backend::Remote(api) => Ok(api),
            Backend::Static(_) => bail!("`{command}` needs the remote data source"),
        }
    }

    fn projects(&self) -> Arc<dyn ProjectCatalog> {
        match self {
            Backend::Remote(api) => Arc::new(ProjectsClient::new(api.clone())),
            Backend::Static(catalog) => catalog.clone(),
        }
    }

    fn profile(&self) -> Arc<dyn ProfileSource> {
        match self {
            Backend::Remote(api) => Arc::new(ProfileClient::new(api.clone())),
            Backend::Static(catalog) => catalog.clone(),
        }
    }

    fn testimonials(&self) -> Arc<dyn TestimonialSource> {
        match self {
            Backend::Remote(api) => Arc::new(TestimonialsClient::new(api.clone())),
            Backend::Static(catalog) => catalog.clone(),
        }
    }
}

fn print_ack(ack: &Ack) {
    println!("{}", ack.message);
}

/// `folio health`
pub async fn health(config: &Config) -> Result<()> {
    let backend = Backend::from_config(config)?;
    let status = backend.remote("health")?.health().await?;
    println!("{} ({})", status.message, status.status);
    if !status.is_healthy() {
        bail!("backend reports status '{}'", status.status);
    }
    Ok(())
}

/// `folio profile ...`
pub async fn profile(config: &Config, command: ProfileCommand) -> Result<()> {
    let backend = Backend::from_config(config)?;
    match command {
        ProfileCommand::Get => print_json(&backend.profile().get().await?),
        ProfileCommand::Update(args) => {
            let update = ProfileUpdate {
                bio: args.bio,
                email: args.email,
                linkedin: args.linkedin,
                behance: args.behance,
                cv_download_count: None,
                total_projects: args.total_projects,
                happy_clients: args.happy_clients,
                awards: args.awards,
            };
            if update.is_empty() {
                bail!("nothing to update");
            }
            let client = ProfileClient::new(backend.remote("profile update")?.clone());
            print_json(&client.update(&update).await?)
        }
        ProfileCommand::DownloadCv => {
            let client = ProfileClient::new(backend.remote("profile download-cv")?.clone());
            print_ack(&client.increment_cv_download().await?);
            Ok(())
        }
    }
}

/// `folio projects ...`
pub async fn projects(config: &Config, command: ProjectsCommand) -> Result<()> {
    let backend = Backend::from_config(config)?;
    let reads = backend.projects();
    match command {
        ProjectsCommand::List => print_json(&reads.list_all().await?),
        ProjectsCommand::Category { category } => {
            print_json(&reads.list_by_category(category).await?)
        }
        ProjectsCommand::Featured => print_json(&reads.list_featured().await?),
        ProjectsCommand::Get { id } => print_json(&reads.get_by_id(&ProjectId::new(id)).await?),
        ProjectsCommand::Create(args) => {
            let client = ProjectsClient::new(backend.remote("projects create")?.clone());
            let project = NewProject {
                title: args.title,
                description: args.description,
                image: args.image,
                category: args.category,
                tags: args.tags,
                is_featured: args.featured,
            };
            print_json(&client.create(&project).await?)
        }
        ProjectsCommand::Delete { id } => {
            let client = ProjectsClient::new(backend.remote("projects delete")?.clone());
            print_ack(&client.delete(&ProjectId::new(id)).await?);
            Ok(())
        }
    }
}

/// `folio contacts ...`
pub async fn contacts(config: &Config, command: ContactsCommand) -> Result<()> {
    let backend = Backend::from_config(config)?;
    let client = ContactsClient::new(backend.remote("contacts")?.clone());
    match command {
        ContactsCommand::Send {
            name,
            email,
            message,
        } => {
            let contact = NewContact::new(name, email, message);
            if !contact.is_complete() {
                bail!("name, email and message are required");
            }
            print_json(&client.create(&contact).await?)
        }
        ContactsCommand::List => print_json(&client.list_all().await?),
        ContactsCommand::MarkRead { id } => {
            print_ack(&client.mark_read(&ContactId::new(id)).await?);
            Ok(())
        }
    }
}

/// `folio testimonials ...`
pub async fn testimonials(config: &Config, command: TestimonialsCommand) -> Result<()> {
    let backend = Backend::from_config(config)?;
    match command {
        TestimonialsCommand::List => print_json(&backend.testimonials().list_testimonials().await?),
        TestimonialsCommand::Create(args) => {
            let client = TestimonialsClient::new(backend.remote("testimonials create")?.clone());
            let testimonial = NewTestimonial {
                name: args.name,
                role: args.role,
                company: args.company,
                message: args.message,
                avatar: args.avatar,
                is_active: !args.inactive,
            };
            print_json(&client.create(&testimonial).await?)
        }
        TestimonialsCommand::Delete { id } => {
            let client = TestimonialsClient::new(backend.remote("testimonials delete")?.clone());
            print_ack(&client.delete(&TestimonialId::new(id)).await?);
            Ok(())
        }
    }
}
