//! Configuration file parsing.
//!
//! Parses individual `.shiori.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::{ConfigError, TermTable};

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// General settings section.
    pub settings: Option<RawSettings>,
    /// Tier thresholds and pool sizes.
    pub selection: Option<RawSelectionSettings>,
    /// Score weights.
    pub weights: Option<RawWeights>,
    /// Interest label -> terms.
    pub interest: Option<TermTable>,
    /// Feeling label -> terms.
    pub feeling: Option<TermTable>,
    /// Style label -> terms.
    pub style: Option<TermTable>,
    /// Interest label -> penalty terms.
    pub penalty: Option<TermTable>,
    /// Interest label -> note for supplemented picks.
    pub related: Option<BTreeMap<String, String>>,
    /// Bonus pair entries.
    pub bonus: Option<Vec<RawBonus>>,
}

/// Raw general settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    /// Start from the built-in dictionaries.
    pub builtin_dictionaries: Option<bool>,
    /// Catalog path, relative to the config file.
    pub catalog: Option<String>,
}

/// Raw selection settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSelectionSettings {
    /// Minimum score for the strong tier.
    pub strong_threshold: Option<i32>,
    /// Minimum score for the medium tier.
    pub medium_threshold: Option<i32>,
    /// Pool size a tier must reach.
    pub min_candidates: Option<usize>,
    /// Upper bound on merged pools.
    pub pool_cap: Option<usize>,
}

/// Raw score weights.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawWeights {
    /// Interest term in keywords.
    pub interest_keywords: Option<i32>,
    /// Interest term in title.
    pub interest_title: Option<i32>,
    /// Interest term in description.
    pub interest_description: Option<i32>,
    /// Feeling term in keywords.
    pub feeling_keywords: Option<i32>,
    /// Feeling term in description.
    pub feeling_description: Option<i32>,
    /// Style term in keywords.
    pub style_keywords: Option<i32>,
    /// Penalty term in keywords (subtracted).
    pub penalty_keywords: Option<i32>,
    /// Flat bonus for a listed pair.
    pub bonus_pair: Option<i32>,
}

/// Raw bonus entry from TOML.
///
/// One interest paired with one or more feelings.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct RawBonus {
    /// Interest label.
    pub interest: String,
    /// Feeling label(s). Accepts either a single string or an array of strings.
    #[serde_as(as = "OneOrMany<_>")]
    pub feeling: Vec<String>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// This is used during discovery to stop traversal at root configs.
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> RawConfig {
        parse_config_str(toml, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse("");
        assert!(config.root.is_none());
        assert!(config.settings.is_none());
        assert!(config.selection.is_none());
        assert!(config.interest.is_none());
        assert!(config.bonus.is_none());
    }

    #[test]
    fn test_parse_selection_and_weights() {
        let config = parse(
            r#"
[selection]
strong_threshold = 5
pool_cap = 10

[weights]
interest_title = 4
"#,
        );
        let selection = config.selection.unwrap();
        assert_eq!(selection.strong_threshold, Some(5));
        assert_eq!(selection.medium_threshold, None);
        assert_eq!(selection.pool_cap, Some(10));
        assert_eq!(config.weights.unwrap().interest_title, Some(4));
    }

    #[test]
    fn test_parse_dictionary_tables() {
        let config = parse(
            r#"
[interest]
"仕事・キャリア" = ["仕事", "副業"]

[style]
"スキマ時間に" = ["短編"]

[related]
"仕事・キャリア" = "働き方のヒントにも。"
"#,
        );
        let interest = config.interest.unwrap();
        assert_eq!(interest["仕事・キャリア"], vec!["仕事", "副業"]);
        assert_eq!(config.style.unwrap()["スキマ時間に"], vec!["短編"]);
        assert_eq!(
            config.related.unwrap()["仕事・キャリア"],
            "働き方のヒントにも。"
        );
    }

    #[test]
    fn test_parse_bonus_one_or_many() {
        let config = parse(
            r#"
[[bonus]]
interest = "習慣・ライフスタイル"
feeling = ["前向きになりたい", "小さく動き出したい"]

[[bonus]]
interest = "仕事・キャリア"
feeling = "小さく動き出したい"
"#,
        );
        let bonus = config.bonus.unwrap();
        assert_eq!(bonus.len(), 2);
        assert_eq!(bonus[0].feeling.len(), 2);
        assert_eq!(bonus[1].feeling, vec!["小さく動き出したい"]);
    }

    #[test]
    fn test_parse_root_and_settings() {
        let config = parse(
            r#"
root = true

[settings]
builtin_dictionaries = false
catalog = "books.json"
"#,
        );
        assert_eq!(config.root, Some(true));
        let settings = config.settings.unwrap();
        assert_eq!(settings.builtin_dictionaries, Some(false));
        assert_eq!(settings.catalog.as_deref(), Some("books.json"));
    }

    #[test]
    fn test_parse_invalid_toml_reports_path() {
        let err = parse_config_str("[selection\n", Path::new("broken.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_parse_wrong_type_is_error() {
        let result = parse_config_str(
            "[selection]\nstrong_threshold = \"high\"\n",
            Path::new("test.toml"),
        );
        assert!(result.is_err());
    }
}
