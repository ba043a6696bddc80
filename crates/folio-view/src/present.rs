//! Stateless text rendering of the page sections.
//!
//! Every function here is a pure mapping from a view snapshot to lines of
//! text. Sections that have not been revealed yet render only their heading.

use folio_core::{Category, Profile, Project};

use crate::contact::ContactFormView;
use crate::controllers::{CategoryStatus, ProfileView, ProjectsView};
use crate::notify::Notification;
use crate::state::Phase;

/// Loading surface of the projects section.
pub const LOADING_PROJECTS: &str = "Loading projects...";

const RULE: &str = "────────────────────────────────────────";

const SERVICES: [&str; 5] = [
    "CV Design",
    "Brand Identity",
    "Social Media Templates",
    "Logo Design",
    "Print Design",
];

/// The sections of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Landing banner
    Hero,
    /// Profile and counters
    About,
    /// Categorised project grid
    Projects,
    /// Contact form
    Contact,
    /// Footer
    Footer,
}

impl Section {
    /// Every section, top to bottom.
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Contact,
        Section::Footer,
    ];

    /// Anchor id used as the visibility target.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
            Section::Footer => "footer",
        }
    }

    /// Heading text.
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Hero => "Portfolio",
            Section::About => "About Me",
            Section::Projects => "Featured Projects",
            Section::Contact => "Let's Work Together",
            Section::Footer => "Navigation",
        }
    }
}

fn heading(section: Section) -> Vec<String> {
    vec![
        RULE.to_string(),
        format!("## {}", section.heading()),
        String::new(),
    ]
}

/// Hero banner. Falls back to a generic title until a profile is loaded.
pub fn render_hero(profile: Option<&Profile>, year: i32) -> String {
    let mut lines = heading(Section::Hero);
    if let Some(profile) = profile {
        lines.push(profile.name.clone());
    }
    lines.push(year.to_string());
    lines.push("Visual Identity • CVs • Social Posts".to_string());
    lines.push("[View Portfolio]".to_string());
    lines.join("\n")
}

/// About section.
pub fn render_profile(view: &ProfileView, revealed: bool) -> String {
    let mut lines = heading(Section::About);
    if !revealed {
        return lines.join("\n");
    }

    match (&view.phase, &view.profile) {
        (_, Some(profile)) => {
            lines.push(format!("[{}] {}", profile.initials(), profile.name));
            if !profile.bio.is_empty() {
                lines.push(profile.bio.clone());
            }
            lines.push(String::new());
            lines.push(format!(
                "{}+ Projects   {}+ Happy Clients   {} Awards",
                profile.total_projects, profile.happy_clients, profile.awards
            ));
            lines.push(format!("[Download CV]  ({} downloads)", profile.cv_download_count));
            if view.phase.is_failed() {
                lines.push("(showing last loaded profile)".to_string());
            }
        }
        (Phase::Failed(_), None) => lines.push("Failed to load profile.".to_string()),
        (_, None) => lines.push("Loading profile...".to_string()),
    }
    lines.join("\n")
}

/// Tab label with its project count.
pub fn tab_label(view: &ProjectsView, category: Category) -> String {
    match view.category_status(category) {
        CategoryStatus::Loading | CategoryStatus::Failed(_) => category.title().to_string(),
        _ => format!("{} ({})", category.title(), view.buckets.count(category)),
    }
}

/// Empty-state text for a category.
pub fn empty_message(category: Category) -> String {
    format!("No {} projects found", category.noun())
}

fn project_card(project: &Project) -> String {
    let badge = if project.is_featured {
        " ★ Featured"
    } else {
        ""
    };
    format!("• {}{badge}\n  {}", project.title, project.description)
}

/// Projects section: tab strip, active panel and the detail overlay if open.
pub fn render_projects(view: &ProjectsView, revealed: bool) -> String {
    let mut lines = heading(Section::Projects);
    if !revealed {
        return lines.join("\n");
    }

    let tabs: Vec<String> = Category::ALL
        .iter()
        .map(|&category| {
            let label = tab_label(view, category);
            if category == view.active {
                format!("[{label}]")
            } else {
                format!(" {label} ")
            }
        })
        .collect();
    lines.push(tabs.join(" "));
    lines.push(String::new());

    match view.category_status(view.active) {
        CategoryStatus::Loading => lines.push(LOADING_PROJECTS.to_string()),
        CategoryStatus::Failed(_) => {
            lines.push("Failed to load projects. Please try again.".to_string())
        }
        CategoryStatus::Empty => {
            lines.push(empty_message(view.active));
            lines.push("Check back later for new projects in this category.".to_string());
        }
        CategoryStatus::Populated(projects) => {
            lines.extend(projects.iter().map(project_card));
        }
    }

    if let Some(project) = &view.selected {
        lines.push(String::new());
        lines.push(render_project_detail(project));
    }
    lines.join("\n")
}

/// Detail overlay for one project.
pub fn render_project_detail(project: &Project) -> String {
    let mut lines = vec![format!("┌ {}", project.title)];
    if project.is_featured {
        lines.push("│ Featured".to_string());
    }
    lines.push(format!("│ {}", project.description));
    if !project.tags.is_empty() {
        lines.push(format!("│ Tags: {}", project.tags.join(", ")));
    }
    lines.push(format!("│ Image: {}", project.image));
    lines.push(format!("└ Created: {}", project.created_at.format("%Y-%m-%d")));
    lines.join("\n")
}

/// Contact section: form fields and the owner's handles.
pub fn render_contact(
    form: &ContactFormView,
    profile: Option<&Profile>,
    revealed: bool,
) -> String {
    let mut lines = heading(Section::Contact);
    if !revealed {
        return lines.join("\n");
    }

    lines.push("Send a Message".to_string());
    lines.push(format!("  Name:    {}", form.draft.name));
    lines.push(format!("  Email:   {}", form.draft.email));
    lines.push(format!("  Message: {}", form.draft.message));
    lines.push(if form.submitting {
        "  [Sending...]".to_string()
    } else {
        "  [Send Message]".to_string()
    });

    if let Some(profile) = profile {
        lines.push(String::new());
        lines.push(format!("Email     {}", profile.email));
        lines.push(format!("LinkedIn  {}", profile.linkedin));
        lines.push(format!("Behance   {}", profile.behance));
    }
    lines.join("\n")
}

/// Footer with navigation, services and copyright.
pub fn render_footer(profile: Option<&Profile>, year: i32) -> String {
    let mut lines = heading(Section::Footer);
    let nav: Vec<&str> = Section::ALL
        .iter()
        .filter(|s| **s != Section::Footer)
        .map(Section::id)
        .collect();
    lines.push(nav.join(" · "));
    lines.push(String::new());
    lines.push("Services".to_string());
    lines.extend(SERVICES.iter().map(|s| format!("  {s}")));
    lines.push(String::new());
    let owner = profile.map_or("Portfolio", |p| p.name.as_str());
    lines.push(format!("© {year} {owner}. All rights reserved."));
    lines.join("\n")
}

/// Notification toasts, one per line.
pub fn render_notifications(notifications: &[Notification]) -> String {
    notifications
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
