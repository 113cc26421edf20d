use crumbtrail_cli::config::{BreadcrumbConfig, BrokenParentPolicy};
use crumbtrail_cli::core::PageId;
use crumbtrail_cli::host::{DependencyRecorder, MemoryPageStore};
use crumbtrail_cli::markup::PlainLinkRenderer;
use crumbtrail_cli::resolver::{ChainResolver, Dependency, DependencySet};

fn titles(dependencies: &[Dependency]) -> Vec<String> {
    let mut set = DependencySet::new();
    for dependency in dependencies {
        match dependency {
            Dependency::Link {
                page,
            } => set.record_link(page),
            Dependency::Content {
                page,
                revision,
            } => set.record_content(page, revision),
        }
    }
    set.pages().into_iter().map(PageId::prefixed_text).collect()
}

#[test]
fn test_every_ancestor_on_the_trail_is_reported() {
    let mut store = MemoryPageStore::new();
    store.insert("Root", "top").unwrap();
    store.insert("Middle", "<crumb:trail>Root</crumb:trail>").unwrap();
    let page = store.insert("Leaf", "<crumb:trail>Middle</crumb:trail>").unwrap();

    let config = BreadcrumbConfig::default();
    let result = ChainResolver::new(&store, &PlainLinkRenderer, &config).render_directive(&page, "Middle", None);

    assert_eq!(titles(&result.dependencies), vec!["Middle", "Root"]);
    let content_reads = result
        .dependencies
        .iter()
        .filter(|dependency| matches!(dependency, Dependency::Content { .. }))
        .count();
    assert_eq!(content_reads, 2);
}

#[test]
fn test_early_stop_still_reports_what_was_touched() {
    let mut store = MemoryPageStore::new();
    store.insert("Middle", "<crumb:trail>Gone</crumb:trail>").unwrap();
    let page = store.insert("Leaf", "x").unwrap();

    for policy in [BrokenParentPolicy::Strict, BrokenParentPolicy::Permissive] {
        let config = BreadcrumbConfig {
            broken_parent_policy: policy,
            ..BreadcrumbConfig::default()
        };
        let result = ChainResolver::new(&store, &PlainLinkRenderer, &config).render_directive(&page, "Middle", None);
        assert_eq!(titles(&result.dependencies), vec!["Middle", "Gone"], "policy {policy}");
    }
}

#[test]
fn test_current_page_is_not_a_dependency() {
    let mut store = MemoryPageStore::new();
    let page = store.insert("Alone", "x").unwrap();

    let config = BreadcrumbConfig {
        self_link: true,
        ..BreadcrumbConfig::default()
    };
    let result = ChainResolver::new(&store, &PlainLinkRenderer, &config).render_directive(&page, "", None);
    assert!(result.dependencies.is_empty());
}

#[test]
fn test_truncated_walk_reports_only_rendered_ancestors() {
    let mut store = MemoryPageStore::new();
    store.insert("A", "top").unwrap();
    store.insert("B", "<crumb:trail>A</crumb:trail>").unwrap();
    store.insert("C", "<crumb:trail>B</crumb:trail>").unwrap();
    let page = store.insert("D", "<crumb:trail>C</crumb:trail>").unwrap();

    let config = BreadcrumbConfig {
        max_depth: 3,
        ..BreadcrumbConfig::default()
    };
    let result = ChainResolver::new(&store, &PlainLinkRenderer, &config).render_directive(&page, "C", None);

    assert_eq!(titles(&result.dependencies), vec!["C"]);
}

#[test]
fn test_revision_changes_show_up_in_dependencies() {
    let mut store = MemoryPageStore::new();
    store.insert("Root", "v1").unwrap();
    let page = store.insert("Leaf", "x").unwrap();
    let config = BreadcrumbConfig::default();

    let before = ChainResolver::new(&store, &PlainLinkRenderer, &config).render_directive(&page, "Root", None);
    store.insert("Root", "v2").unwrap();
    let after = ChainResolver::new(&store, &PlainLinkRenderer, &config).render_directive(&page, "Root", None);

    assert_eq!(before.trail, after.trail);
    assert_ne!(before.dependencies, after.dependencies);
}
