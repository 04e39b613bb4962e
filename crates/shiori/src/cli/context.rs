//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use shiori_catalog::{Catalog, load_catalog};
use shiori_config::Config;
use shiori_engine::Recommender;
use tracing::info;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for commands like `init` that should work even when an existing config file is
    /// invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Builds a recommender from the loaded configuration.
    pub fn recommender(&self) -> Recommender {
        Recommender::new(&self.config)
    }

    /// The catalog file to use: the command-line path, else `settings.catalog`.
    pub fn catalog_file(&self, cli_path: Option<&Path>) -> Option<PathBuf> {
        cli_path
            .map(|path| self.cwd.join(path))
            .or_else(|| self.config.settings.catalog.clone())
    }

    /// Like [`Self::catalog_file`], but exits with a hint when no catalog is configured.
    pub fn catalog_path(&self, cli_path: Option<&Path>) -> Result<PathBuf, ExitCode> {
        self.catalog_file(cli_path).ok_or_else(|| {
            eprintln!("error: no catalog file given");
            eprintln!(
                "Pass --catalog PATH or set catalog under [settings] in .shiori.toml (see 'shiori init')."
            );
            ExitCode::FAILURE
        })
    }

    /// Loads the catalog, exiting with a consistent error on failure.
    pub fn load_catalog(&self, cli_path: Option<&Path>) -> Result<Catalog, ExitCode> {
        let path = self.catalog_path(cli_path)?;
        match load_catalog(&path) {
            Ok(catalog) => {
                info!(path = %path.display(), books = catalog.len(), "loaded catalog");
                Ok(catalog)
            }
            Err(e) => {
                eprintln!("error: failed to load catalog: {e}");
                Err(ExitCode::FAILURE)
            }
        }
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
