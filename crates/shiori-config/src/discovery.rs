//! Configuration file discovery.
//!
//! Discovers `.shiori.toml` files by walking up the directory tree from a starting point,
//! then appending the global `~/.shiori.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".shiori.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global (`~/.shiori.toml`)
/// last. The walk stops at a file with `root = true`, and the global file is skipped in
/// that case.
///
/// Returns an empty vector if no configuration files are found.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    let mut found_root = false;

    let mut current = Some(cwd);
    while let Some(dir) = current {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            let is_root = is_root_config(&config_path);
            debug!(path = %config_path.display(), root = is_root, "found config file");
            configs.push(config_path);
            if is_root {
                found_root = true;
                break;
            }
        }
        current = dir.parent();
    }

    if !found_root
        && let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        configs.push(global_path);
    }

    configs
}

/// Returns the path to the global configuration file (`~/.shiori.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TestDir;

    /// Drops the global config from a discovery result.
    fn local_only(configs: &[PathBuf]) -> Vec<&PathBuf> {
        let global = global_config_path();
        configs
            .iter()
            .filter(|p| global.as_ref() != Some(*p))
            .collect()
    }

    #[test]
    fn test_discover_no_configs() {
        let test_dir = TestDir::new();
        let subdir = test_dir.create_dir("a/b/c");

        let configs = discover_config_files(&subdir);
        assert!(local_only(&configs).is_empty());
    }

    #[test]
    fn test_discover_multiple_configs_precedence_order() {
        let test_dir = TestDir::new();
        let root_config = test_dir.create_config_at_root();
        let mid_config = test_dir.create_config("a/b");
        let leaf_config = test_dir.create_config("a/b/c/d");
        let working_dir = test_dir.create_dir("a/b/c/d/e");

        let configs = discover_config_files(&working_dir);
        let local = local_only(&configs);

        assert_eq!(local.len(), 3);
        assert_eq!(local[0], &leaf_config);
        assert_eq!(local[1], &mid_config);
        assert_eq!(local[2], &root_config);
    }

    #[test]
    fn test_discover_skips_non_file_config() {
        let test_dir = TestDir::new();
        fs::create_dir_all(test_dir.path().join(CONFIG_FILENAME)).unwrap();
        let subdir = test_dir.create_dir("subdir");

        let configs = discover_config_files(&subdir);
        assert!(local_only(&configs).is_empty());
    }

    #[test]
    fn test_root_config_stops_discovery() {
        let test_dir = TestDir::new();
        let _parent_config = test_dir.create_config_at_root();
        let root_config = test_dir.create_root_config("project");
        let working_dir = test_dir.create_dir("project/src");

        let configs = discover_config_files(&working_dir);

        // Neither the parent nor the global config is included.
        assert_eq!(configs, vec![root_config]);
    }

    #[test]
    fn test_root_config_keeps_child_configs() {
        let test_dir = TestDir::new();
        let root_config = test_dir.create_root_config("project");
        let child_config = test_dir.create_config("project/shelf");

        let configs = discover_config_files(&test_dir.path().join("project/shelf"));
        assert_eq!(configs, vec![child_config, root_config]);
    }

    #[test]
    fn test_global_config_path_uses_filename() {
        let path = global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().ends_with(CONFIG_FILENAME));
    }
}
