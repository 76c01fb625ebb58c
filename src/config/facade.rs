//! Config facade: single entrypoint that layers every source in merge order.

use super::merge::merge_policy;
use super::sources::{env_vars, global_file, workspace_file};
use super::WeaverConfig;
use config::{Config, ConfigError, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads `WeaverConfig` from defaults, config files, and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): built-in defaults, global config file,
    /// workspace `config/config.toml`, workspace `config/{WEAVER_ENV}.toml`,
    /// `WEAVER__*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<WeaverConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = env_vars::add_to_builder(builder);

        let config: WeaverConfig = builder.build()?.try_deserialize()?;
        debug!(base_url = %config.api.base_url, "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from a single file, bypassing the layered sources.
    pub fn load_from_file(path: &Path) -> Result<WeaverConfig, ConfigError> {
        Config::builder()
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    /// Location of the user-level config file, if a config directory is known.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
