use std::{fs, path::Path};

use anyhow::{Context, Result};
use broadside_core::{FrameInput, GridCell, Key};
use glam::Vec2;
use serde::Deserialize;

/// Recorded input frames fed through the simulation without a window.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ReplayScript {
    /// One-cell ships placed on the enemy grid.
    pub(crate) targets: Vec<GridCell>,
    /// Frames in playback order.
    #[serde(rename = "frame")]
    pub(crate) frames: Vec<ReplayFrame>,
}

/// One recorded frame of pointer and keyboard input.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ReplayFrame {
    pointer: Vec2,
    click: bool,
    held_button: bool,
    typed: Vec<Key>,
    held: Vec<Key>,
}

impl ReplayFrame {
    pub(crate) fn to_input(&self) -> FrameInput {
        FrameInput {
            pointer: self.pointer,
            left_clicked: self.click,
            left_held: self.held_button,
            typed: self.typed.clone(),
            held: self.held.clone(),
        }
    }
}

impl ReplayScript {
    /// Reads and parses the script at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read replay script {}", path.display()))?;
        parse(&contents).with_context(|| format!("invalid replay script {}", path.display()))
    }
}

fn parse(contents: &str) -> Result<ReplayScript> {
    toml::from_str(contents).context("failed to parse replay script toml contents")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_parse_in_order_with_defaults() {
        let script = parse(
            r#"
            targets = [{ row = 0, column = 0 }]

            [[frame]]
            pointer = [650.0, 175.0]
            click = true

            [[frame]]
            typed = ["Escape"]
            held = ["LeftShift", "C"]
            "#,
        )
        .expect("valid script");

        assert_eq!(script.targets, vec![GridCell::new(0, 0)]);
        assert_eq!(script.frames.len(), 2);
        assert_eq!(
            script.frames[0].to_input(),
            FrameInput::click(Vec2::new(650.0, 175.0))
        );
        let second = script.frames[1].to_input();
        assert!(second.key_typed(Key::Escape));
        assert!(second.key_held(Key::C));
        assert!(!second.left_clicked);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse("[[frame]]\ntyped = [\"F1\"]").is_err());
    }
}
