//! Tests for the built-in seed data and YAML configuration
//!
//! The seed deliberately carries a stale stored path and two folders named
//! "Reports"; both must come out right once the tree is built.

use std::io::Write;

use docdeck::config::Config;
use docdeck::domain::Framework;
use docdeck::seed::SeedData;
use docdeck::{SortDirection, SortKey, ViewMode};

fn iso2_page() -> docdeck::model::PageModel {
    let pages = SeedData::builtin().unwrap().into_pages(&Config::default());
    pages
        .into_iter()
        .find(|p| p.config.framework == Framework::Iso2)
        .unwrap()
}

/// Test: every framework gets a page with its own capabilities
#[test]
fn test_builtin_pages() {
    let pages = SeedData::builtin().unwrap().into_pages(&Config::default());
    let frameworks: Vec<Framework> = pages.iter().map(|p| p.config.framework).collect();
    assert_eq!(frameworks.len(), 4);
    for framework in Framework::ALL {
        assert!(frameworks.contains(&framework));
    }

    let iso2 = pages.iter().find(|p| p.config.framework == Framework::Iso2).unwrap();
    assert!(!iso2.config.bulk_actions);
    let edc = pages.iter().find(|p| p.config.framework == Framework::Edc).unwrap();
    assert!(!edc.config.approval_visible);
}

/// Test: a stale stored path is replaced by the path derived from the tree
#[test]
fn test_stale_section_path_is_rederived() {
    let mut page = iso2_page();
    let node = page.tree.get("q1-2024").unwrap();
    assert_eq!(node.path.as_deref(), Some("Finance/Budget Reports/2024 Q1"));

    page.open_folder("finance");
    page.open_folder("budget");
    page.open_folder("q1-2024");
    let names: Vec<String> = page.breadcrumb().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Finance", "Budget Reports", "2024 Q1"]);
    assert_eq!(page.visible_ids(), vec!["h-6".to_string()]);
}

/// Test: HR/Reports and Finance/Reports stay distinct
#[test]
fn test_reports_collision_in_seed() {
    let mut page = iso2_page();
    page.open_folder("fin-reports");
    let crumbs = page.breadcrumb();
    assert_eq!(crumbs[0].target.as_deref(), Some("finance"));
    assert_eq!(crumbs[1].target.as_deref(), Some("fin-reports"));
    assert_eq!(page.visible_ids(), vec!["h-7".to_string()]);

    page.open_folder("hr-reports");
    assert_eq!(page.visible_ids(), vec!["h-4".to_string()]);
}

/// Test: config overrides reach the pages
#[test]
fn test_config_applies_to_pages() {
    let yaml = r#"
initial_view_mode: grid
vim_mode: true
prune_selection_on_navigate: false
default_sort:
  key: uploadedAt
  direction: desc
current_user:
  name: Dana Lee
pages:
  iso2:
    bulk_actions: true
    title: Document Control
  ce:
    initial_view_mode: tree
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let config = Config::load(file.path()).unwrap();
    assert!(config.vim_mode);
    assert_eq!(config.current_user.name, "Dana Lee");

    let pages = SeedData::builtin().unwrap().into_pages(&config);
    for page in &pages {
        assert_eq!(page.sort.key, SortKey::UploadedAt);
        assert_eq!(page.sort.direction, SortDirection::Desc);
        assert!(!page.prune_selection_on_navigate);
    }

    let iso2 = pages.iter().find(|p| p.config.framework == Framework::Iso2).unwrap();
    assert!(iso2.config.bulk_actions);
    assert_eq!(iso2.config.title, "Document Control");
    assert_eq!(iso2.view_mode, ViewMode::Grid);

    let ce = pages.iter().find(|p| p.config.framework == Framework::Ce).unwrap();
    assert_eq!(ce.view_mode, ViewMode::Tree);
}

/// Test: an explicit --config path that does not exist is an error
#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.yaml");
    let err = Config::load_or_default(missing.to_str()).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}

/// Test: a seed file on disk replaces the built-in data
#[test]
fn test_load_seed_from_file() {
    let json = r#"{"pages":[{"framework":"ce","sections":[{"id":"s","name":"Safety"}],
        "documents":[{"id":"d","title":"Risk","type":"Report","fileType":"pdf","fileSize":"1 MB",
        "department":"Safety","uploadedBy":"Kim","uploadedAt":"2024-01-01","lastModified":"2024-01-01",
        "accessType":"public","approvalStatus":"approved"}]}]}"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let seed = SeedData::load_json(file.path()).unwrap();
    let mut pages = seed.into_pages(&Config::default());
    assert_eq!(pages.len(), 1);
    pages[0].open_folder("s");
    assert_eq!(pages[0].visible_ids(), vec!["d".to_string()]);
}
