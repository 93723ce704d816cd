use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn pick_snippet_only_returns_component_pool_literals() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let picked = pick_snippet(SnippetCategory::Component, &mut rng);
        assert!(COMPONENT_SNIPPETS.contains(&picked));
    }
}

#[test]
fn pick_snippet_eventually_covers_whole_pool() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(pick_snippet(SnippetCategory::Util, &mut rng));
    }
    assert_eq!(seen.len(), UTIL_SNIPPETS.len());
}

#[test]
fn style_files_draw_from_config_pool() {
    assert_eq!(SnippetCategory::for_file(FileKind::Style), SnippetCategory::Config);
    assert_eq!(SnippetCategory::for_file(FileKind::Config), SnippetCategory::Config);
    assert_eq!(SnippetCategory::for_file(FileKind::Component), SnippetCategory::Component);
    assert_eq!(SnippetCategory::for_file(FileKind::Util), SnippetCategory::Util);
}

#[test]
fn pools_are_non_empty() {
    for category in [SnippetCategory::Component, SnippetCategory::Config, SnippetCategory::Util] {
        assert!(!category.pool().is_empty());
    }
}
