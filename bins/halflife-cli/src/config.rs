//! CLI configuration.
//!
//! Layers, lowest priority first: built-in defaults, `halflife.toml` in the
//! data directory, `HALFLIFE_*` environment variables, command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use halflife_core::constants::{CATALOG_FILE_NAME, DEFAULT_STEPS, MAX_STEPS, MIN_STEPS};
use serde::Deserialize;

/// Name of the optional config file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "halflife.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Root directory for the catalog and config file.
    pub data_dir: PathBuf,
    /// Catalog file; defaults to `<data_dir>/isotopes.json`.
    pub catalog_path: Option<PathBuf>,
    /// Fallback directory searched for decay-chain images.
    pub assets_dir: PathBuf,
    /// Log level filter string (e.g. "info", "debug", "halflife_catalog=trace").
    pub log_level: String,
    /// "text" or "json".
    pub log_format: String,
    pub default_steps: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("halflife");

        Self {
            data_dir,
            catalog_path: None,
            assets_dir: PathBuf::from("assets"),
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
            default_steps: DEFAULT_STEPS,
        }
    }
}

impl CliConfig {
    /// Build the layered configuration from the process environment.
    ///
    /// `halflife.toml` is looked up in `data_dir` if given, else in
    /// `HALFLIFE_DATA_DIR`, else in the default data directory.
    pub fn load(data_dir: Option<&Path>) -> Result<Self> {
        Self::load_with_env(data_dir, config::Environment::with_prefix("HALFLIFE"))
    }

    fn load_with_env(data_dir: Option<&Path>, env: config::Environment) -> Result<Self> {
        let env = env.try_parsing(true);
        let dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => config::Config::builder()
                .add_source(env.clone())
                .build()
                .context("failed to read HALFLIFE_* environment")?
                .get::<PathBuf>("data_dir")
                .unwrap_or_else(|_| Self::default().data_dir),
        };
        let file = dir.join(CONFIG_FILE_NAME);

        let settings = config::Config::builder()
            .add_source(config::File::from(file.as_path()).required(false))
            .add_source(env)
            .build()
            .with_context(|| format!("failed to read {}", file.display()))?;

        let mut cfg: CliConfig = settings
            .try_deserialize()
            .context("invalid halflife configuration")?;
        if let Some(dir) = data_dir {
            cfg.data_dir = dir.to_path_buf();
        }
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if !(MIN_STEPS..=MAX_STEPS).contains(&self.default_steps) {
            bail!(
                "default_steps must be within {MIN_STEPS}..={MAX_STEPS}, got {}",
                self.default_steps
            );
        }
        Ok(())
    }

    /// Path of the persisted isotope catalog.
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog_path
            .clone()
            .unwrap_or_else(|| self.data_dir.join(CATALOG_FILE_NAME))
    }
}
