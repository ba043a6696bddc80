//! Projects controller: concurrent category loads and local selection.

use folio_core::{Category, ProjectId};
use folio_view::{CategoryStatus, NotificationCenter, Phase, ProjectsController};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

use crate::common::{ScriptedProjects, Step, projects};

fn controller(source: Arc<ScriptedProjects>) -> (ProjectsController, Arc<NotificationCenter>) {
    let center = Arc::new(NotificationCenter::new());
    (ProjectsController::new(source, center.clone()), center)
}

fn three_zero_two() -> ScriptedProjects {
    let social = projects("so", Category::Social, 2);
    ScriptedProjects::new()
        .with(Category::Cv, Step::Ok(projects("cv", Category::Cv, 3)))
        .with(Category::Branding, Step::Ok(Vec::new()))
        .with(Category::Social, Step::Ok(social))
}

#[tokio::test]
async fn test_activate_buckets_by_category() {
    let source = Arc::new(three_zero_two());
    let (ctl, center) = controller(source.clone());

    ctl.activate().await;

    let view = ctl.view();
    assert_eq!(view.phase, Phase::Ready);
    assert_eq!(view.buckets.count(Category::Cv), 3);
    assert_eq!(view.buckets.count(Category::Branding), 0);
    assert_eq!(view.buckets.count(Category::Social), 2);
    let branding = view.category_status(Category::Branding);
    assert_eq!(branding, CategoryStatus::Empty);
    assert!(view.is_empty(Category::Branding));
    assert!(!view.is_empty(Category::Cv));
    assert_eq!(source.calls(), 3);
    assert!(center.is_empty());

    let ids: Vec<&str> = view
        .buckets
        .get(Category::Cv)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, ["cv-0", "cv-1", "cv-2"]);
}

#[tokio::test]
async fn test_any_failure_fails_the_section() {
    let source = Arc::new(three_zero_two().with(Category::Social, Step::Fail(500, "boom")));
    let (ctl, center) = controller(source);

    ctl.activate().await;

    let view = ctl.view();
    assert!(view.phase.is_failed());
    assert_eq!(view.buckets.total(), 0, "partial results are not surfaced");
    assert!(matches!(
        view.category_status(Category::Cv),
        CategoryStatus::Failed(_)
    ));
    let notes = center.drain();
    assert_eq!(notes.len(), 1);
    let message = &notes[0].message;
    assert_eq!(message, "Failed to load projects. Please try again.");
}

#[tokio::test]
async fn test_first_failure_short_circuits() {
    let never = Arc::new(Notify::new());
    let source = Arc::new(
        three_zero_two()
            .with(Category::Cv, Step::Gated(never, Vec::new()))
            .with(Category::Branding, Step::Fail(404, "Not Found")),
    );
    let (ctl, _center) = controller(source);

    tokio::time::timeout(Duration::from_secs(1), ctl.activate())
        .await
        .expect("activation should not wait for the stalled category");

    assert_eq!(ctl.view().phase, Phase::Failed("Not Found".to_string()));
}

#[tokio::test]
async fn test_loading_is_visible_while_in_flight() {
    let gate = Arc::new(Notify::new());
    let step = Step::Gated(gate.clone(), projects("cv", Category::Cv, 1));
    let source = Arc::new(three_zero_two().with(Category::Cv, step));
    let (ctl, _center) = controller(source);

    tokio::join!(ctl.activate(), async {
        tokio::task::yield_now().await;
        let view = ctl.view();
        assert!(view.phase.is_loading());
        let social = view.category_status(Category::Social);
        assert_eq!(social, CategoryStatus::Loading);
        gate.notify_one();
    });

    assert_eq!(ctl.view().buckets.count(Category::Cv), 1);
}

#[tokio::test]
async fn test_switching_tabs_never_refetches() {
    let source = Arc::new(three_zero_two());
    let (ctl, _center) = controller(source.clone());
    assert_eq!(ctl.view().active, Category::Cv);
    ctl.activate().await;

    ctl.select_category(Category::Social);
    ctl.select_category(Category::Branding);
    ctl.select_category(Category::Cv);

    assert_eq!(ctl.view().active, Category::Cv);
    assert_eq!(source.calls(), 3);
}

#[tokio::test]
async fn test_detail_overlay_is_local() {
    let source = Arc::new(three_zero_two());
    let (ctl, _center) = controller(source.clone());
    ctl.activate().await;

    assert!(ctl.open_project_by_id(&ProjectId::new("so-1")));
    assert_eq!(ctl.view().selected.unwrap().id.as_str(), "so-1");
    assert!(!ctl.open_project_by_id(&ProjectId::new("missing")));
    assert_eq!(ctl.view().selected.unwrap().id.as_str(), "so-1");

    ctl.close_project();
    assert!(ctl.view().selected.is_none());
    assert_eq!(source.calls(), 3);
}

#[tokio::test]
async fn test_failed_reload_shows_stale_projects() {
    let source = Arc::new(three_zero_two());
    let (ctl, _center) = controller(source.clone());
    ctl.activate().await;

    source.set(Category::Branding, Step::Fail(500, "down"));
    ctl.activate().await;

    let view = ctl.view();
    assert!(view.phase.is_failed());
    assert!(matches!(
        view.category_status(Category::Cv),
        CategoryStatus::Populated(p) if p.len() == 3
    ));
}
