//! Integration tests for shiori-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> resolve -> merge.

// Integration test crates have no enclosing test module
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use shiori_config::{
    Axis, Category, Config, ConfigError, ConfigWarning, Dictionaries, Feeling, Interest,
    SelectionSettings, Style, global_template, local_template,
};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_root_config_only() {
    let env = TestEnv::new();
    env.create_file(".shiori.toml", "root = true\n");

    let config = Config::load(env.path()).unwrap();
    assert_eq!(config.selection, SelectionSettings::default());
    assert_eq!(config.dictionaries, Dictionaries::builtin());
    assert_eq!(config.config_root.as_deref(), Some(env.path()));
}

#[test]
fn test_load_nested_configs_merging() {
    let env = TestEnv::new();
    env.create_file(
        ".shiori.toml",
        r#"
root = true

[settings]
catalog = "library/books.json"

[selection]
strong_threshold = 5
pool_cap = 20
"#,
    );
    env.create_file(
        "shelf/.shiori.toml",
        r#"
[selection]
pool_cap = 10

[style]
"スキマ時間に" = ["短編"]
"#,
    );
    let working_dir = env.create_dir("shelf/reading");

    let config = Config::load(&working_dir).unwrap();
    assert_eq!(config.selection.strong_threshold, 5);
    assert_eq!(config.selection.pool_cap, 10);
    assert_eq!(
        config.settings.catalog,
        Some(env.path().join("library/books.json"))
    );
    assert_eq!(
        config.dictionaries.terms(Axis::Style, "スキマ時間に"),
        ["短編"]
    );
    assert!(
        !config
            .dictionaries
            .terms(Axis::Style, Style::Light.label())
            .is_empty()
    );
    assert_eq!(config.config_root, Some(env.path().join("shelf")));
}

#[test]
fn test_root_config_hides_parent() {
    let env = TestEnv::new();
    env.create_file(".shiori.toml", "[selection]\nmin_candidates = 9\n");
    env.create_file("project/.shiori.toml", "root = true\n");

    let config = Config::load(&env.path().join("project")).unwrap();
    assert_eq!(config.selection.min_candidates, 3);
}

#[test]
fn test_load_error_invalid_toml() {
    let env = TestEnv::new();
    env.create_file(".shiori.toml", "root = true\n[selection\n");

    let result = Config::load(env.path());
    assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
}

#[test]
fn test_load_from_files_missing_file() {
    let env = TestEnv::new();
    let result = Config::load_from_files(&[env.path().join("missing.toml")]);
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn test_load_from_files_empty_list() {
    let config = Config::load_from_files(&[]).unwrap();
    assert_eq!(config.dictionaries, Dictionaries::builtin());
    assert!(config.config_root.is_none());
}

#[test]
fn test_load_from_files_precedence() {
    let env = TestEnv::new();
    let high = env.create_file(
        "a/.shiori.toml",
        r#"
[weights]
bonus_pair = 3

[[bonus]]
interest = "自己理解・内省"
feeling = "前向きになりたい"
"#,
    );
    let low = env.create_file(
        "b/.shiori.toml",
        r#"
[weights]
bonus_pair = 0
style_keywords = 2
"#,
    );

    let config = Config::load_from_files(&[high, low]).unwrap();
    assert_eq!(config.weights.bonus_pair, 3);
    assert_eq!(config.weights.style_keywords, 2);
    assert!(config.dictionaries.is_bonus_pair(
        Interest::SelfUnderstanding.label(),
        Feeling::Positive.label()
    ));
}

#[test]
fn test_custom_dictionaries_only() {
    let env = TestEnv::new();
    let path = env.create_file(
        ".shiori.toml",
        r#"
[settings]
builtin_dictionaries = false

[interest]
"園芸" = ["花", "庭"]

[feeling]
"癒やされたい" = ["癒やし"]

[style]
"写真で" = ["写真集"]

[[bonus]]
interest = "園芸"
feeling = "癒やされたい"

[related]
"園芸" = "季節の楽しみにも。"
"#,
    );

    let config = Config::load_from_files(&[path]).unwrap();
    assert!(config.validate().is_empty());
    let dicts = &config.dictionaries;
    assert_eq!(dicts.interest.len(), 1);
    assert!(dicts.is_bonus_pair("園芸", "癒やされたい"));
    assert_eq!(dicts.related_hint("園芸"), Some("季節の楽しみにも。"));
}

#[test]
fn test_validate_reports_file_problems() {
    let env = TestEnv::new();
    let path = env.create_file(
        ".shiori.toml",
        r#"
[selection]
medium_threshold = 5

[penalty]
"仕事・キャリア" = []

[related]
"料理" = "台所の友に。"
"#,
    );

    let config = Config::load_from_files(&[path]).unwrap();
    let warnings = config.validate();
    assert!(warnings.contains(&ConfigWarning::EmptyTermList {
        table: "penalty",
        label: "仕事・キャリア".into(),
    }));
    assert!(warnings.contains(&ConfigWarning::HintUnknownLabel {
        label: "料理".into(),
    }));
    assert!(warnings.contains(&ConfigWarning::MediumNotBelowStrong {
        medium: 5,
        strong: 4,
    }));
}

#[test]
fn test_effective_settings_reload() {
    let env = TestEnv::new();
    let original = Config::default();
    let path = env.create_file(
        ".shiori.toml",
        &original.settings_to_toml().unwrap().replace(
            "builtin_dictionaries = true",
            "builtin_dictionaries = false",
        ),
    );

    let reloaded = Config::load_from_files(&[path]).unwrap();
    assert_eq!(reloaded.dictionaries, original.dictionaries);
    assert_eq!(reloaded.selection, original.selection);
    assert_eq!(reloaded.weights, original.weights);
}

#[test]
fn test_init_templates_write_loadable_configs() {
    let env = TestEnv::new();
    let local = env.create_file("local/.shiori.toml", &local_template());
    let global = env.create_file("global/.shiori.toml", &global_template());

    let config = Config::load_from_files(&[local, global]).unwrap();
    assert_eq!(config.dictionaries, Dictionaries::builtin());
}
