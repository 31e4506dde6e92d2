use anyhow::Context;
use gqlbind::GqlbindConfig;
use std::path::Path;

/// Load a [`GqlbindConfig`] from a TOML file, or the defaults when no file
/// was given. Tables and keys left out of the file keep their defaults.
pub(crate) fn load(path: Option<&Path>) -> anyhow::Result<GqlbindConfig> {
    let Some(path) = path else {
        return Ok(GqlbindConfig::default());
    };

    log::debug!("Loading config from {path:#?}.");
    let text =
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path:#?}"))?;
    toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file {path:#?}"))
}
