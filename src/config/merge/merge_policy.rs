//! Merge rules: defaults, override order, conflict handling.

use crate::config::{
    default_base_url, default_connect_timeout_secs, default_draft_path,
    default_request_timeout_secs,
};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("api.base_url", default_base_url())?
        .set_default("api.connect_timeout_secs", default_connect_timeout_secs())?
        .set_default("api.request_timeout_secs", default_request_timeout_secs())?
        .set_default(
            "draft.path",
            default_draft_path().to_string_lossy().to_string(),
        )
}
