//! Bucketing never leaks projects across categories.

use folio_core::{Category, Project};
use folio_view::catalog::{StaticCatalog, default_profile};
use folio_view::{NotificationCenter, ProjectsController};
use proptest::prelude::*;
use std::sync::Arc;

use crate::common::project;

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Cv),
        Just(Category::Branding),
        Just(Category::Social),
    ]
}

proptest! {
    #[test]
    fn prop_buckets_match_source_per_category(
        categories in proptest::collection::vec(arb_category(), 0..30)
    ) {
        let all: Vec<Project> = categories
            .iter()
            .enumerate()
            .map(|(i, &c)| project(&i.to_string(), c))
            .collect();
        let catalog = StaticCatalog::with_content(all.clone(), Vec::new(), default_profile());
        let ctl = ProjectsController::new(Arc::new(catalog), Arc::new(NotificationCenter::new()));

        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        rt.block_on(ctl.activate());

        let view = ctl.view();
        prop_assert!(view.phase.is_ready());
        for category in Category::ALL {
            let expected: Vec<&Project> = all.iter().filter(|p| p.category == category).collect();
            let actual: Vec<&Project> = view.buckets.get(category).iter().collect();
            prop_assert_eq!(actual, expected);
            prop_assert_eq!(view.is_empty(category), view.buckets.count(category) == 0);
        }
        prop_assert_eq!(view.buckets.total(), all.len());
    }
}
