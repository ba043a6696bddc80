//! Projects-section controller: three category buckets, tab selection and
//! the detail overlay.

use std::sync::Arc;

use folio_core::{Category, Project, ProjectId};

use crate::lifecycle::Scope;
use crate::notify::{Notification, Notifier};
use crate::source::ProjectSource;
use crate::state::{HasPhase, Phase, PhaseMut, ViewState};

const SECTION: &str = "projects";

/// Notification text when any category fails to load.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load projects. Please try again.";

/// Projects grouped by category, each in the order the source returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectBuckets {
    buckets: [Vec<Project>; 3],
}

impl ProjectBuckets {
    /// Build from one list per category.
    pub fn new(cv: Vec<Project>, branding: Vec<Project>, social: Vec<Project>) -> Self {
        Self {
            buckets: [cv, branding, social],
        }
    }

    /// Projects of `category`.
    pub fn get(&self, category: Category) -> &[Project] {
        &self.buckets[category.index()]
    }

    /// Number of projects in `category`.
    pub fn count(&self, category: Category) -> usize {
        self.get(category).len()
    }

    /// Look a project up by id across all categories.
    pub fn find(&self, id: &ProjectId) -> Option<&Project> {
        self.buckets.iter().flatten().find(|p| &p.id == id)
    }

    /// Total number of projects.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// What a category tab should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CategoryStatus<'a> {
    /// Nothing loaded yet, or a load is in flight.
    Loading,
    /// The load failed and there is nothing stale to show.
    Failed(&'a str),
    /// Loaded, but this category has no projects.
    Empty,
    /// Projects to display.
    Populated(&'a [Project]),
}

/// State of the projects section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectsView {
    /// Load phase
    pub phase: Phase,
    /// Loaded projects
    pub buckets: ProjectBuckets,
    /// Currently displayed tab
    pub active: Category,
    /// Project shown in the detail overlay
    pub selected: Option<Project>,
}

impl ProjectsView {
    /// Display status of one category.
    pub fn category_status(&self, category: Category) -> CategoryStatus<'_> {
        let projects = self.buckets.get(category);
        match &self.phase {
            Phase::Idle | Phase::Loading => CategoryStatus::Loading,
            Phase::Failed(_) if !projects.is_empty() => CategoryStatus::Populated(projects),
            Phase::Failed(reason) => CategoryStatus::Failed(reason),
            Phase::Ready if projects.is_empty() => CategoryStatus::Empty,
            Phase::Ready => CategoryStatus::Populated(projects),
        }
    }

    /// Returns `true` if the section loaded and `category` has no projects.
    pub fn is_empty(&self, category: Category) -> bool {
        matches!(self.category_status(category), CategoryStatus::Empty)
    }
}

impl HasPhase for ProjectsView {
    fn phase(&self) -> &Phase {
        &self.phase
    }
}

impl PhaseMut for ProjectsView {
    fn phase_mut(&mut self) -> &mut Phase {
        &mut self.phase
    }
}

/// Controller for the projects section.
pub struct ProjectsController {
    source: Arc<dyn ProjectSource>,
    notifier: Arc<dyn Notifier>,
    state: ViewState<ProjectsView>,
    scope: Scope,
}

impl ProjectsController {
    /// Create an idle controller showing the first category.
    pub fn new(source: Arc<dyn ProjectSource>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            source,
            notifier,
            state: ViewState::new(SECTION, ProjectsView::default()),
            scope: Scope::new(),
        }
    }

    /// Bind the controller to an existing scope.
    pub fn in_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Observable state.
    pub fn state(&self) -> &ViewState<ProjectsView> {
        &self.state
    }

    /// Snapshot of the current state.
    pub fn view(&self) -> ProjectsView {
        self.state.snapshot()
    }

    /// Load all three categories concurrently.
    ///
    /// The first failure settles the whole section as `failed`; partial
    /// results are never shown. Buckets and phase are written together, once.
    pub async fn activate(&self) {
        if !self.scope.is_active() {
            return;
        }
        self.state.set_phase(Phase::Loading);

        let source = &self.source;
        let fetch = async {
            tokio::try_join!(
                source.list_by_category(Category::Cv),
                source.list_by_category(Category::Branding),
                source.list_by_category(Category::Social),
            )
        };

        let Some(result) = self.scope.run(fetch).await else {
            tracing::debug!(section = SECTION, "Projects load discarded after unmount");
            return;
        };

        match result {
            Ok((cv, branding, social)) => {
                tracing::debug!(
                    section = SECTION,
                    cv = cv.len(),
                    branding = branding.len(),
                    social = social.len(),
                    "→ ready"
                );
                let buckets = ProjectBuckets::new(cv, branding, social);
                self.state.modify(|view| {
                    view.buckets = buckets;
                    view.phase = Phase::Ready;
                });
            }
            Err(err) => {
                tracing::error!(section = SECTION, error = %err, "Error loading projects");
                self.state.set_phase(Phase::Failed(err.message()));
                self.notifier
                    .notify(Notification::error(LOAD_FAILED_MESSAGE));
            }
        }
    }

    /// Switch the visible tab. Never refetches.
    pub fn select_category(&self, category: Category) {
        self.state.modify(|view| view.active = category);
    }

    /// Open the detail overlay for `project`.
    pub fn open_project(&self, project: Project) {
        self.state.modify(|view| view.selected = Some(project));
    }

    /// Open the detail overlay for a loaded project. Returns `false` if no
    /// loaded project has that id.
    pub fn open_project_by_id(&self, id: &ProjectId) -> bool {
        self.state.modify_if(|view| {
            let Some(project) = view.buckets.find(id).cloned() else {
                return false;
            };
            view.selected = Some(project);
            true
        })
    }

    /// Close the detail overlay.
    pub fn close_project(&self) {
        self.state.modify(|view| view.selected = None);
    }

    /// Tear the section down. Pending work resolves to a no-op.
    pub fn unmount(&self) {
        self.scope.cancel();
    }
}

impl Drop for ProjectsController {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}
