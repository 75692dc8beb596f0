use super::{Config, CONFIG_FILE};
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_built_in_outline_is_valid_and_sorted() {
    let outline = Config::built_in().unwrap().into_outline().unwrap();

    assert_eq!(outline.base_dir, PathBuf::from("."));
    assert_eq!(outline.entries.len(), 80);
    assert!(outline
        .entries
        .windows(2)
        .all(|pair| pair[0].path < pair[1].path));

    let first = &outline.entries[0];
    assert_eq!(first.path, "src/deploy-ai-solutions/analyze-backlog-user-feedback.md");
    assert_eq!(first.number, "3.1.2");

    let task_agents = outline
        .entries
        .iter()
        .find(|e| e.path == "src/design-ai-solutions/design-task-agents.md")
        .unwrap();
    assert_eq!(task_agents.heading(), "# 2.1.5 Design Task Agents");
}

#[test]
fn test_parse_custom_outline() {
    let toml = r#"
base_dir = "/srv/book"

[[pages]]
path = "src/b.md"
number = "1.2"
title = "Second"

[[pages]]
path = "src/a.md"
number = "1.1"
title = "First"
"#;
    let outline = Config::parse(toml, "test").unwrap().into_outline().unwrap();

    assert_eq!(outline.base_dir, PathBuf::from("/srv/book"));
    let paths: Vec<&str> = outline.entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, ["src/a.md", "src/b.md"]);
    assert_eq!(
        outline.resolve(&outline.entries[0]),
        Path::new("/srv/book").join("src/a.md")
    );
}

#[test]
fn test_base_dir_defaults_to_current_directory() {
    let toml = "[[pages]]\npath = \"a.md\"\nnumber = \"1\"\ntitle = \"One\"\n";
    let outline = Config::parse(toml, "test").unwrap().into_outline().unwrap();
    assert_eq!(outline.base_dir, PathBuf::from("."));
    assert_eq!(outline.entries.len(), 1);
}

#[test]
fn test_duplicate_paths_are_rejected() {
    let toml = r#"
[[pages]]
path = "a.md"
number = "1"
title = "One"

[[pages]]
path = "a.md"
number = "2"
title = "Two"
"#;
    let err = Config::parse(toml, "test").unwrap().into_outline().unwrap_err();
    assert!(matches!(err, ConfigError::DuplicatePath { ref path } if path == "a.md"));
}

#[test]
fn test_invalid_number_is_rejected() {
    let toml = "[[pages]]\npath = \"a.md\"\nnumber = \"one\"\ntitle = \"One\"\n";
    let err = Config::parse(toml, "test").unwrap().into_outline().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEntry { .. }));
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let err = Config::parse("pages = [[[", "broken.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { ref origin, .. } if origin == "broken.toml"));
}

#[test]
fn test_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(
        &path,
        "base_dir = \"book\"\n\n[[pages]]\npath = \"x.md\"\nnumber = \"4.1\"\ntitle = \"X\"\n",
    )
    .unwrap();

    let outline = Config::load(Some(path.as_path())).unwrap().into_outline().unwrap();
    assert_eq!(outline.base_dir, PathBuf::from("book"));
    assert_eq!(outline.entries[0].number, "4.1");

    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        Config::load(Some(missing.as_path())),
        Err(ConfigError::Read { .. })
    ));
}
