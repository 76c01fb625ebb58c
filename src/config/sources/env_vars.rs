//! Environment source: WEAVER__SECTION__KEY, e.g. WEAVER__API__BASE_URL.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("WEAVER")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
