use std::{fs, path::Path};

use anyhow::{Context, Result};
use broadside_navigation::Settings;
use serde::Deserialize;

/// Launch options read from the optional TOML config file.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct LaunchConfig {
    /// Initial game settings.
    pub(crate) settings: Settings,
    /// Window options for the interactive mode.
    pub(crate) window: WindowConfig,
}

/// Options of the interactive window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct WindowConfig {
    /// Synchronise presentation with the display refresh rate.
    pub(crate) vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { vsync: true }
    }
}

impl LaunchConfig {
    /// Reads the config at `path`, or returns the defaults when no path is given.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        parse(&contents).with_context(|| format!("invalid config file {}", path.display()))
    }
}

fn parse(contents: &str) -> Result<LaunchConfig> {
    toml::from_str(contents).context("failed to parse config toml contents")
}

#[cfg(test)]
mod tests {
    use super::*;
    use broadside_core::{Difficulty, Track};

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse("").expect("empty config is valid");

        assert_eq!(config, LaunchConfig::default());
        assert!(config.window.vsync);
        assert!(config.settings.sound_enabled);
    }

    #[test]
    fn tables_override_individual_fields() {
        let config = parse(
            r#"
            [settings]
            music_enabled = false
            difficulty = "Hard"
            track = "Bgm2"

            [window]
            vsync = false
            "#,
        )
        .expect("valid config");

        assert!(config.settings.sound_enabled);
        assert!(!config.settings.music_enabled);
        assert_eq!(config.settings.difficulty, Difficulty::Hard);
        assert_eq!(config.settings.track, Track::Bgm2);
        assert!(!config.window.vsync);
    }

    #[test]
    fn unknown_tables_are_rejected() {
        assert!(parse("[graphics]\nfullscreen = true").is_err());
    }

    #[test]
    fn missing_path_yields_defaults() {
        assert_eq!(
            LaunchConfig::load(None).expect("defaults"),
            LaunchConfig::default()
        );
    }
}
