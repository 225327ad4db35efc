//! Configuration loading from YAML strings and files.

mod harness;

use std::io::Write as _;

use harness::*;
use roster::prelude::*;

#[test]
fn test_config_from_yaml_str() {
    let config = SearchConfig::from_yaml_str(
        r#"
default_order: "name:desc"
default_page_size: 50
"#,
    )
    .unwrap();

    assert_eq!(config.default_page_size, 50);
    assert_eq!(config.order(), SortOrder::descending(SortKey::Name));
}

#[test]
fn test_config_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_order: \"score:asc\"").unwrap();

    let config = SearchConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.order(), SortOrder::ascending(SortKey::Score));
    assert_eq!(config.default_page_size, 20);
}

#[test]
fn test_config_missing_file_errors() {
    assert!(SearchConfig::from_yaml_file("/nonexistent/search.yaml").is_err());
}

#[test]
fn test_config_rejects_malformed_yaml() {
    assert!(SearchConfig::from_yaml_str("default_page_size: [not a number").is_err());
}

#[tokio::test]
async fn test_repository_picks_up_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_order: \"score:desc\"").unwrap();
    writeln!(file, "default_page_size: 2").unwrap();

    let config = SearchConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
    let roster = seed_roster();
    let repo = MemberRepository::with_config(roster.store, &config);

    let page = repo
        .search_first_page(&SearchCondition::default())
        .await
        .unwrap();

    assert_eq!(scores(&page.content), [40, 30]);
    assert_eq!(page.meta.total, 4);
    assert!(page.meta.has_next);
}
