//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    BonusPair, Config, ConfigError, Dictionaries, ScoreWeights, SelectionSettings, Settings,
    TermTable,
    parse::{RawConfig, RawSelectionSettings, RawWeights},
    resolve::resolve_catalog_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Catalog path: resolved against the directory of the file that sets it
/// - Dictionary tables: merged by label, the closest definition of a label replaces its terms
/// - Bonus pairs: unioned across all files
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let settings = merge_settings(configs)?;
    let selection = merge_selection(configs);
    let weights = merge_weights(configs);
    let dictionaries = merge_dictionaries(configs, settings.builtin_dictionaries);
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(Path::to_path_buf);

    Ok(Config {
        settings,
        selection,
        weights,
        dictionaries,
        config_root,
    })
}

/// Merges general settings, taking first defined value for each field.
fn merge_settings(configs: &[ParsedConfig]) -> Result<Settings, ConfigError> {
    let mut result = Settings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        let Some(ref raw) = parsed.config.settings else {
            continue;
        };
        if let Some(v) = raw.builtin_dictionaries {
            result.builtin_dictionaries = v;
        }
        if let Some(ref catalog) = raw.catalog {
            let config_dir = parsed.path.parent().unwrap_or_else(|| Path::new("."));
            result.catalog = Some(resolve_catalog_path(catalog, config_dir)?);
        }
    }

    Ok(result)
}

/// Merges selection settings.
fn merge_selection(configs: &[ParsedConfig]) -> SelectionSettings {
    let mut result = SelectionSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref selection) = parsed.config.selection {
            apply_raw_selection(&mut result, selection);
        }
    }

    result
}

/// Applies raw selection settings to result, overwriting any present values.
fn apply_raw_selection(result: &mut SelectionSettings, raw: &RawSelectionSettings) {
    if let Some(v) = raw.strong_threshold {
        result.strong_threshold = v;
    }
    if let Some(v) = raw.medium_threshold {
        result.medium_threshold = v;
    }
    if let Some(v) = raw.min_candidates {
        result.min_candidates = v;
    }
    if let Some(v) = raw.pool_cap {
        result.pool_cap = v;
    }
}

/// Merges score weights.
fn merge_weights(configs: &[ParsedConfig]) -> ScoreWeights {
    let mut result = ScoreWeights::default();

    for parsed in configs.iter().rev() {
        if let Some(ref weights) = parsed.config.weights {
            apply_raw_weights(&mut result, weights);
        }
    }

    result
}

/// Applies raw weights to result.
fn apply_raw_weights(result: &mut ScoreWeights, raw: &RawWeights) {
    if let Some(v) = raw.interest_keywords {
        result.interest_keywords = v;
    }
    if let Some(v) = raw.interest_title {
        result.interest_title = v;
    }
    if let Some(v) = raw.interest_description {
        result.interest_description = v;
    }
    if let Some(v) = raw.feeling_keywords {
        result.feeling_keywords = v;
    }
    if let Some(v) = raw.feeling_description {
        result.feeling_description = v;
    }
    if let Some(v) = raw.style_keywords {
        result.style_keywords = v;
    }
    if let Some(v) = raw.penalty_keywords {
        result.penalty_keywords = v;
    }
    if let Some(v) = raw.bonus_pair {
        result.bonus_pair = v;
    }
}

/// Merges dictionary tables on top of the built-in data, or on top of nothing.
fn merge_dictionaries(configs: &[ParsedConfig], builtin: bool) -> Dictionaries {
    let mut result = if builtin {
        Dictionaries::builtin()
    } else {
        Dictionaries::default()
    };

    // Lowest precedence first, so a closer file replaces a label's terms
    for parsed in configs.iter().rev() {
        let raw = &parsed.config;
        overlay_table(&mut result.interest, raw.interest.as_ref());
        overlay_table(&mut result.feeling, raw.feeling.as_ref());
        overlay_table(&mut result.style, raw.style.as_ref());
        overlay_table(&mut result.penalty, raw.penalty.as_ref());

        if let Some(ref related) = raw.related {
            for (label, hint) in related {
                result.related.insert(label.clone(), hint.clone());
            }
        }

        if let Some(ref bonus) = raw.bonus {
            for entry in bonus {
                for feeling in &entry.feeling {
                    result
                        .bonus_pairs
                        .insert(BonusPair::new(entry.interest.as_str(), feeling.as_str()));
                }
            }
        }
    }

    result
}

/// Replaces the terms of every label defined in `overlay`.
fn overlay_table(table: &mut TermTable, overlay: Option<&TermTable>) {
    let Some(overlay) = overlay else {
        return;
    };
    for (label, terms) in overlay {
        table.insert(label.clone(), terms.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Interest,
        parse::parse_config_str,
        test_support::TestDir,
        vocab::{Axis, Category, Feeling},
    };

    fn parsed(path: PathBuf, toml: &str) -> ParsedConfig {
        ParsedConfig {
            config: parse_config_str(toml, &path).unwrap(),
            path,
        }
    }

    #[test]
    fn test_merge_empty_configs() {
        let result = merge_configs(&[]).unwrap();
        assert_eq!(result.selection, SelectionSettings::default());
        assert_eq!(result.dictionaries, Dictionaries::builtin());
        assert!(result.config_root.is_none());
    }

    #[test]
    fn test_merge_single_config() {
        let test_dir = TestDir::new();
        let config = parsed(
            test_dir.path().join(".shiori.toml"),
            r#"
[settings]
catalog = "books.json"

[selection]
pool_cap = 12
"#,
        );

        let result = merge_configs(&[config]).unwrap();
        assert_eq!(result.selection.pool_cap, 12);
        assert_eq!(result.selection.strong_threshold, 4);
        assert_eq!(
            result.settings.catalog,
            Some(test_dir.path().join("books.json"))
        );
        assert_eq!(result.config_root.as_deref(), Some(test_dir.path()));
    }

    #[test]
    fn test_merge_scalar_override() {
        let test_dir = TestDir::new();

        let high_prec = parsed(
            test_dir.path().join("project/.shiori.toml"),
            r#"
[selection]
strong_threshold = 6

[weights]
interest_title = 5
"#,
        );
        let low_prec = parsed(
            test_dir.path().join(".shiori.toml"),
            r#"
[selection]
strong_threshold = 3
medium_threshold = 1

[weights]
interest_title = 1
bonus_pair = 2
"#,
        );

        let result = merge_configs(&[high_prec, low_prec]).unwrap();
        assert_eq!(result.selection.strong_threshold, 6);
        assert_eq!(result.selection.medium_threshold, 1);
        assert_eq!(result.weights.interest_title, 5);
        assert_eq!(result.weights.bonus_pair, 2);
        assert_eq!(
            result.config_root,
            Some(test_dir.path().join("project"))
        );
    }

    #[test]
    fn test_catalog_resolved_against_defining_file() {
        let test_dir = TestDir::new();
        let high_prec = parsed(test_dir.path().join("project/.shiori.toml"), "");
        let low_prec = parsed(
            test_dir.path().join(".shiori.toml"),
            "[settings]\ncatalog = \"shared/books.json\"\n",
        );

        let result = merge_configs(&[high_prec, low_prec]).unwrap();
        assert_eq!(
            result.settings.catalog,
            Some(test_dir.path().join("shared/books.json"))
        );
    }

    #[test]
    fn test_closest_label_definition_wins() {
        let test_dir = TestDir::new();
        let work = Interest::Work.label();

        let high_prec = parsed(
            test_dir.path().join("project/.shiori.toml"),
            &format!("[interest]\n\"{work}\" = [\"副業\"]\n"),
        );
        let low_prec = parsed(
            test_dir.path().join(".shiori.toml"),
            &format!("[interest]\n\"{work}\" = [\"転職\"]\n\"園芸\" = [\"花\"]\n"),
        );

        let result = merge_configs(&[high_prec, low_prec]).unwrap();
        let dicts = &result.dictionaries;
        assert_eq!(dicts.terms(Axis::Interest, work), ["副業"]);
        assert_eq!(dicts.terms(Axis::Interest, "園芸"), ["花"]);
        // Untouched built-in labels survive.
        assert!(
            !dicts
                .terms(Axis::Interest, Interest::Habits.label())
                .is_empty()
        );
    }

    #[test]
    fn test_builtin_dictionaries_disabled() {
        let test_dir = TestDir::new();
        let config = parsed(
            test_dir.path().join(".shiori.toml"),
            r#"
[settings]
builtin_dictionaries = false

[feeling]
"わくわくしたい" = ["冒険"]
"#,
        );

        let result = merge_configs(&[config]).unwrap();
        let dicts = &result.dictionaries;
        assert!(dicts.interest.is_empty());
        assert!(dicts.bonus_pairs.is_empty());
        assert!(dicts.related.is_empty());
        assert_eq!(dicts.feeling.len(), 1);
    }

    #[test]
    fn test_bonus_pairs_union() {
        let test_dir = TestDir::new();
        let high_prec = parsed(
            test_dir.path().join("project/.shiori.toml"),
            r#"
[[bonus]]
interest = "園芸"
feeling = ["前向きになりたい", "小さく動き出したい"]
"#,
        );
        let low_prec = parsed(
            test_dir.path().join(".shiori.toml"),
            "[[bonus]]\ninterest = \"料理\"\nfeeling = \"前向きになりたい\"\n",
        );

        let result = merge_configs(&[high_prec, low_prec]).unwrap();
        let dicts = &result.dictionaries;
        assert_eq!(dicts.bonus_pairs.len(), 7 + 3);
        assert!(dicts.is_bonus_pair("園芸", Feeling::SmallStep.label()));
        assert!(dicts.is_bonus_pair("料理", Feeling::Positive.label()));
        assert!(dicts.is_bonus_pair(Interest::Work.label(), Feeling::SmallStep.label()));
    }

    #[test]
    fn test_related_hint_override() {
        let test_dir = TestDir::new();
        let work = Interest::Work.label();
        let config = parsed(
            test_dir.path().join(".shiori.toml"),
            &format!("[related]\n\"{work}\" = \"働き方の参考に。\"\n"),
        );

        let result = merge_configs(&[config]).unwrap();
        assert_eq!(
            result.dictionaries.related_hint(work),
            Some("働き方の参考に。")
        );
    }
}
