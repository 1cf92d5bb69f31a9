//! Loading replacement catalogs from JSON.

use std::io::Write;
use std::sync::Arc;

use aiguide::{Error, SeededRandom, catalog::{Catalog, CatalogError}};
use tempfile::NamedTempFile;

use crate::helpers::*;

const SMALL_CATALOG: &str = r#"{
    "categories": [
        {
            "name": "music",
            "keywords": ["Music", "song"],
            "tools": [
                {
                    "name": "Tunes",
                    "url": "https://tunes.example/",
                    "description": "1. Hum. 2. Listen."
                }
            ]
        }
    ]
}"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_builtin_shape() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 7);
    assert_eq!(catalog.tool_count(), 14);
    let names: Vec<&str> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "health",
            "finance",
            "development",
            "writing",
            "design",
            "learning",
            "productivity"
        ]
    );
}

#[test]
fn test_load_from_file_replaces_table() {
    let file = write_temp(SMALL_CATALOG);
    let catalog = Catalog::from_json_file(file.path()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.categories()[0].keywords, vec!["music", "song"]);

    let matcher = matcher_with(catalog, Arc::new(SeededRandom::new(7)));
    let response = matcher.match_query("Make me a SONG");
    assert_eq!(response.ai_tool.unwrap().name, "Tunes");

    // Built-in keywords no longer match.
    assert!(matcher.classify("budget").is_none());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::from_json_file(dir.path().join("nope.json")).unwrap_err();
    assert!(err.is_catalog_error());
    assert!(matches!(err, Error::Catalog(CatalogError::Read { .. })));
}

#[test]
fn test_malformed_json() {
    let file = write_temp("{ not json");
    let err = Catalog::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Catalog(CatalogError::Parse(_))));
}

#[test]
fn test_empty_category_list_rejected() {
    let err = Catalog::from_json_str(r#"{"categories": []}"#).unwrap_err();
    assert!(matches!(err, Error::Catalog(CatalogError::Empty)));
}

#[test]
fn test_builtin_serializes_in_file_format() {
    let json = serde_json::to_string(&Catalog::builtin()).unwrap();
    let reparsed = Catalog::from_json_str(&json).unwrap();
    assert_eq!(reparsed, Catalog::builtin());
}

#[test]
fn test_demo_catalog_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/catalog.json");
    let catalog = Catalog::from_json_file(path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.tool_count(), 3);
}
