//! `folio show`: assemble the page, load it and render every section.

use anyhow::Result;
use chrono::Datelike;
use folio_core::{Category, Config, NewContact, ProjectId};
use folio_view::present::{self, Section};
use folio_view::{
    ContactForm, IntersectionEntry, NotificationCenter, ProfileController, ProjectsController,
    Scope, Sources, Viewport, VisibilityTrigger,
};
use std::sync::Arc;

use crate::cli::ShowArgs;

/// Every section of the page, bound to one page scope.
pub struct Page {
    scope: Scope,
    viewport: Viewport,
    triggers: Vec<(Section, VisibilityTrigger)>,
    notifications: Arc<NotificationCenter>,
    profile: ProfileController,
    projects: ProjectsController,
    contact: ContactForm,
}

impl Page {
    /// Mount all sections over `sources`.
    pub fn mount(sources: Sources) -> Self {
        let scope = Scope::new();
        let viewport = Viewport::new();
        let notifications = Arc::new(NotificationCenter::new());
        let triggers = Section::ALL
            .iter()
            .map(|&section| (section, viewport.observe(section.id())))
            .collect();

        Self {
            profile: ProfileController::new(sources.profile, notifications.clone())
                .in_scope(scope.child()),
            projects: ProjectsController::new(sources.projects, notifications.clone())
                .in_scope(scope.child()),
            contact: ContactForm::new(sources.contact, notifications.clone())
                .in_scope(scope.child()),
            scope,
            viewport,
            triggers,
            notifications,
        }
    }

    /// Activate the data-backed sections concurrently.
    pub async fn load(&self) {
        tokio::join!(self.profile.activate(), self.projects.activate());
    }

    /// Scroll through the page: every section enters the viewport once.
    pub fn scroll_through(&self) {
        for section in Section::ALL {
            let entry = IntersectionEntry::visible();
            self.viewport.report(section.id(), entry);
        }
    }

    fn revealed(&self, section: Section) -> bool {
        self.triggers
            .iter()
            .any(|(s, trigger)| *s == section && trigger.is_revealed())
    }

    /// Render the whole page, draining pending notifications at the end.
    pub fn render(&self, year: i32) -> String {
        let profile = self.profile.view();
        let owner = profile.profile.as_ref();
        let sections = [
            present::render_hero(owner, year),
            present::render_profile(&profile, self.revealed(Section::About)),
            present::render_projects(&self.projects.view(), self.revealed(Section::Projects)),
            present::render_contact(&self.contact.view(), owner, self.revealed(Section::Contact)),
            present::render_footer(owner, year),
        ];

        let mut out = sections.join("\n\n");
        let notes = self.notifications.drain();
        if !notes.is_empty() {
            out.push_str("\n\n");
            out.push_str(&present::render_notifications(&notes));
        }
        out
    }

    /// Switch the projects tab and optionally open one project by id.
    ///
    /// Returns `false` when `open` names a project that is not loaded.
    pub fn focus(&self, category: Category, open: Option<&str>) -> bool {
        self.projects.select_category(category);
        if let Some(id) = open
            && !self.projects.open_project_by_id(&ProjectId::new(id))
        {
            tracing::warn!(id = %id, "No loaded project with that id");
            return false;
        }
        true
    }

    /// Tear the page down.
    pub fn unmount(&self) {
        self.scope.cancel();
    }
}

/// Run `folio show`.
pub async fn run(config: &Config, args: ShowArgs) -> Result<()> {
    let page = Page::mount(Sources::from_config(config)?);
    page.load().await;

    page.focus(args.category, args.open.as_deref());

    if args.download_cv {
        match page.profile.download_cv().await {
            Ok(count) => tracing::info!(cv_download_count = count, "CV download recorded"),
            Err(err) => tracing::warn!(error = %err, "CV download not recorded"),
        }
    }

    if let Some([name, email, message]) = args.contact.as_deref() {
        let draft = NewContact::new(name.as_str(), email.as_str(), message.as_str());
        page.contact.fill(draft);
        if let Err(err) = page.contact.submit().await {
            tracing::warn!(error = %err, "Contact message not sent");
        }
    }

    page.scroll_through();
    println!("{}", page.render(chrono::Utc::now().year()));
    page.unmount();
    Ok(())
}
