//! Built-in portfolio content.
//!
//! Serves the sample projects, testimonials and profile without a backend.
//! Selected with `data_source = "static"`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Mutex, PoisonError};

use folio_client::TransportError;
use folio_core::{Category, Profile, Project, ProjectId, Testimonial, TestimonialId};

use crate::source::{ProfileSource, ProjectCatalog, ProjectSource, SourceResult, TestimonialSource};

const CATALOG_EPOCH: i64 = 1_735_689_600; // 2025-01-01T00:00:00Z

struct SampleProject {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    category: Category,
    tags: &'static [&'static str],
}

const PROJECTS: &[SampleProject] = &[
    SampleProject {
        title: "Modern Professional CV",
        description: "Clean, minimalist design perfect for corporate professionals",
        image: "https://images.unsplash.com/photo-1586281380349-632531db7ed4?w=400&h=600&fit=crop",
        category: Category::Cv,
        tags: &["Professional", "Modern", "Clean"],
    },
    SampleProject {
        title: "Creative Designer CV",
        description: "Bold, colorful design for creative professionals",
        image: "https://images.unsplash.com/photo-1551836022-deb4988cc6c0?w=400&h=600&fit=crop",
        category: Category::Cv,
        tags: &["Creative", "Bold", "Colorful"],
    },
    SampleProject {
        title: "Executive CV Template",
        description: "Premium design for senior executives and leadership roles",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=600&fit=crop",
        category: Category::Cv,
        tags: &["Executive", "Premium", "Leadership"],
    },
    SampleProject {
        title: "Tech Startup Brand",
        description: "Complete brand identity for innovative tech company",
        image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=400&h=400&fit=crop",
        category: Category::Branding,
        tags: &["Tech", "Startup", "Innovation"],
    },
    SampleProject {
        title: "Coffee Shop Branding",
        description: "Warm, inviting brand identity for local coffee shop",
        image: "https://images.unsplash.com/photo-1559056199-641a0ac8b55e?w=400&h=400&fit=crop",
        category: Category::Branding,
        tags: &["Coffee", "Local", "Warm"],
    },
    SampleProject {
        title: "Fashion Brand Identity",
        description: "Elegant and sophisticated branding for fashion label",
        image: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=400&h=400&fit=crop",
        category: Category::Branding,
        tags: &["Fashion", "Elegant", "Sophisticated"],
    },
    SampleProject {
        title: "Instagram Post Templates",
        description: "Cohesive social media templates for Instagram",
        image: "https://images.unsplash.com/photo-1611262588024-d12430b98920?w=400&h=400&fit=crop",
        category: Category::Social,
        tags: &["Instagram", "Social", "Templates"],
    },
    SampleProject {
        title: "LinkedIn Post Designs",
        description: "Professional post templates for LinkedIn engagement",
        image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=400&h=400&fit=crop",
        category: Category::Social,
        tags: &["LinkedIn", "Professional", "Engagement"],
    },
    SampleProject {
        title: "Social Media Kit",
        description: "Complete social media design kit for businesses",
        image: "https://images.unsplash.com/photo-1432888622747-4eb9a8efeb07?w=400&h=400&fit=crop",
        category: Category::Social,
        tags: &["Social Media", "Business", "Kit"],
    },
];

struct SampleTestimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    message: &'static str,
    avatar: &'static str,
}

const TESTIMONIALS: &[SampleTestimonial] = &[
    SampleTestimonial {
        name: "Sarah Johnson",
        role: "Marketing Director",
        company: "TechCorp",
        message: "Ashin's design work is exceptional. The CV template helped me land my dream job!",
        avatar: "https://images.unsplash.com/photo-1494790108755-2616b9de11e2?w=100&h=100&fit=crop&crop=face",
    },
    SampleTestimonial {
        name: "Michael Chen",
        role: "Startup Founder",
        company: "InnovateLab",
        message: "The branding identity Ashin created perfectly captures our company's vision and values.",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face",
    },
    SampleTestimonial {
        name: "Emma Rodriguez",
        role: "Social Media Manager",
        company: "Creative Agency",
        message: "The social media templates have transformed our online presence. Highly recommended!",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&crop=face",
    },
];

/// In-memory portfolio content.
///
/// The profile's download counter is kept here, so repeated downloads behave
/// like they would against the API.
#[derive(Debug)]
pub struct StaticCatalog {
    projects: Vec<Project>,
    testimonials: Vec<Testimonial>,
    profile: Mutex<Profile>,
}

impl StaticCatalog {
    /// The built-in sample content.
    pub fn new() -> Self {
        Self::with_content(sample_projects(), sample_testimonials(), default_profile())
    }

    /// A catalogue over arbitrary content.
    pub fn with_content(
        projects: Vec<Project>,
        testimonials: Vec<Testimonial>,
        profile: Profile,
    ) -> Self {
        Self {
            projects,
            testimonials,
            profile: Mutex::new(profile),
        }
    }

    /// Every project in catalogue order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Every testimonial.
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// Current profile.
    pub fn profile(&self) -> Profile {
        self.profile
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectSource for StaticCatalog {
    async fn list_by_category(&self, category: Category) -> SourceResult<Vec<Project>> {
        Ok(self
            .projects
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProjectCatalog for StaticCatalog {
    async fn list_all(&self) -> SourceResult<Vec<Project>> {
        Ok(self.projects.clone())
    }

    async fn list_featured(&self) -> SourceResult<Vec<Project>> {
        Ok(self
            .projects
            .iter()
            .filter(|p| p.is_featured)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: &ProjectId) -> SourceResult<Project> {
        self.projects
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| TransportError::Status {
                method: "GET".to_string(),
                path: format!("/projects/single/{id}"),
                status: 404,
                message: "Project not found".to_string(),
            })
    }
}

#[async_trait]
impl TestimonialSource for StaticCatalog {
    async fn list_testimonials(&self) -> SourceResult<Vec<Testimonial>> {
        Ok(self.testimonials.clone())
    }
}

#[async_trait]
impl ProfileSource for StaticCatalog {
    async fn get(&self) -> SourceResult<Profile> {
        Ok(self.profile())
    }

    async fn increment_cv_download(&self) -> SourceResult<()> {
        self.profile
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record_cv_download();
        Ok(())
    }
}

fn catalog_time(offset_days: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(CATALOG_EPOCH + offset_days * 86_400, 0).unwrap_or_default()
}

fn sample_projects() -> Vec<Project> {
    PROJECTS
        .iter()
        .enumerate()
        .map(|(i, p)| Project {
            id: ProjectId::new((i + 1).to_string()),
            title: p.title.to_string(),
            description: p.description.to_string(),
            image: p.image.to_string(),
            category: p.category,
            tags: p.tags.iter().map(|t| t.to_string()).collect(),
            is_featured: i % 3 == 0,
            created_at: catalog_time(i as i64),
        })
        .collect()
}

fn sample_testimonials() -> Vec<Testimonial> {
    TESTIMONIALS
        .iter()
        .enumerate()
        .map(|(i, t)| Testimonial {
            id: TestimonialId::new((i + 1).to_string()),
            name: t.name.to_string(),
            role: t.role.to_string(),
            company: t.company.to_string(),
            message: t.message.to_string(),
            avatar: t.avatar.to_string(),
            created_at: catalog_time(i as i64),
            is_active: true,
        })
        .collect()
}

/// The profile served when the backend has none yet.
pub fn default_profile() -> Profile {
    Profile {
        name: "Ashin Krishna".to_string(),
        bio: "Passionate visual designer specializing in creating modern, professional designs \
              that make an impact. With expertise in CV design, brand identity, and social media \
              templates."
            .to_string(),
        email: "ashin.krishna@example.com".to_string(),
        linkedin: "https://linkedin.com/in/ashin-krishna".to_string(),
        behance: "https://behance.net/ashin-krishna".to_string(),
        cv_download_count: 0,
        total_projects: 150,
        happy_clients: 50,
        awards: 5,
        updated_at: Some(catalog_time(0)),
    }
}
