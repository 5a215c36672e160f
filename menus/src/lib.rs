#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Menu definitions for Broadside.
//!
//! The structure of every menu (which menus exist, how many items each has and
//! their order) is fixed when the model is built. Only the captions of the two
//! toggle items in the setting menu change afterwards, and they are derived
//! from a typed [`ToggleState`] rather than edited freely.

use broadside_core::MenuId;
use thiserror::Error;

/// Setting menu slot that shows the sound effects toggle.
pub const SOUND_TOGGLE_SLOT: usize = 0;
/// Setting menu slot that shows the music toggle.
pub const MUSIC_TOGGLE_SLOT: usize = 1;

const MAIN_CAPTIONS: &[&str] = &[
    "PLAY",
    "SETUP",
    "SETTINGS",
    "SCORES",
    "HOW TO PLAY",
    "CHANGE MUSIC",
    "QUIT",
];
const GAME_CAPTIONS: &[&str] = &["RETURN", "SURRENDER", "QUIT"];
const SETUP_CAPTIONS: &[&str] = &["EASY", "MEDIUM", "HARD"];
const SETTING_CAPTIONS: &[&str] = &["SOUND ON", "MUSIC ON"];
const BGM_CAPTIONS: &[&str] = &["BGM 1", "BGM 2", "BGM 3"];

/// Typed value of the audio toggles whose captions appear in the setting menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToggleState {
    /// Whether sound effects are enabled.
    pub sound_enabled: bool,
    /// Whether background music is enabled.
    pub music_enabled: bool,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            music_enabled: true,
        }
    }
}

/// Caption shown for the sound toggle in the given state.
#[must_use]
pub const fn sound_caption(enabled: bool) -> &'static str {
    if enabled {
        "SOUND ON"
    } else {
        "SOUND OFF"
    }
}

/// Caption shown for the music toggle in the given state.
#[must_use]
pub const fn music_caption(enabled: bool) -> &'static str {
    if enabled {
        "MUSIC ON"
    } else {
        "MUSIC OFF"
    }
}

/// Errors raised when addressing menu items.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuModelError {
    /// The item index lies beyond the menu's fixed item count.
    #[error("{menu:?} menu has {count} items, index {index} is out of range")]
    ItemOutOfRange {
        /// Menu that was addressed.
        menu: MenuId,
        /// Requested item index.
        index: usize,
        /// Number of items the menu defines.
        count: usize,
    },
}

/// Ordered captions of every menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuModel {
    captions: Vec<Vec<String>>,
}

impl MenuModel {
    /// Builds the game's menus with the audio toggles shown as enabled.
    #[must_use]
    pub fn standard() -> Self {
        let captions = MenuId::ALL
            .iter()
            .map(|menu| {
                definition(*menu)
                    .iter()
                    .map(|caption| (*caption).to_owned())
                    .collect()
            })
            .collect();
        Self { captions }
    }

    /// Captions of a menu in item order.
    #[must_use]
    pub fn captions(&self, menu: MenuId) -> &[String] {
        self.captions
            .get(menu.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of items the menu defines.
    #[must_use]
    pub fn item_count(&self, menu: MenuId) -> usize {
        self.captions(menu).len()
    }

    /// Rewrites the caption of an existing item.
    ///
    /// This is the only mutation the model supports; item counts never change.
    pub fn set_caption(
        &mut self,
        menu: MenuId,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), MenuModelError> {
        let count = self.item_count(menu);
        let slot = self
            .captions
            .get_mut(menu.index())
            .and_then(|captions| captions.get_mut(index))
            .ok_or(MenuModelError::ItemOutOfRange { menu, index, count })?;
        *slot = text.into();
        Ok(())
    }

    /// Rewrites the toggle captions of the setting menu to reflect `toggles`.
    pub fn sync_toggles(&mut self, toggles: ToggleState) -> Result<(), MenuModelError> {
        self.set_caption(
            MenuId::Setting,
            SOUND_TOGGLE_SLOT,
            sound_caption(toggles.sound_enabled),
        )?;
        self.set_caption(
            MenuId::Setting,
            MUSIC_TOGGLE_SLOT,
            music_caption(toggles.music_enabled),
        )
    }
}

impl Default for MenuModel {
    fn default() -> Self {
        Self::standard()
    }
}

fn definition(menu: MenuId) -> &'static [&'static str] {
    match menu {
        MenuId::Main => MAIN_CAPTIONS,
        MenuId::Game => GAME_CAPTIONS,
        MenuId::Setup => SETUP_CAPTIONS,
        MenuId::Setting => SETTING_CAPTIONS,
        MenuId::Bgm => BGM_CAPTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_model_preserves_definition_order() {
        let model = MenuModel::standard();

        assert_eq!(
            model.captions(MenuId::Main),
            ["PLAY", "SETUP", "SETTINGS", "SCORES", "HOW TO PLAY", "CHANGE MUSIC", "QUIT"]
        );
        assert_eq!(model.captions(MenuId::Game), ["RETURN", "SURRENDER", "QUIT"]);
        assert_eq!(model.captions(MenuId::Bgm), ["BGM 1", "BGM 2", "BGM 3"]);
    }

    #[test]
    fn item_counts_match_captions() {
        let model = MenuModel::standard();

        assert_eq!(model.item_count(MenuId::Main), 7);
        assert_eq!(model.item_count(MenuId::Game), 3);
        assert_eq!(model.item_count(MenuId::Setup), 3);
        assert_eq!(model.item_count(MenuId::Setting), 2);
        assert_eq!(model.item_count(MenuId::Bgm), 3);
    }

    #[test]
    fn set_caption_rewrites_existing_item_only() {
        let mut model = MenuModel::standard();

        model
            .set_caption(MenuId::Game, 1, "GIVE UP")
            .expect("index 1 exists");

        assert_eq!(model.captions(MenuId::Game)[1], "GIVE UP");
        assert_eq!(model.item_count(MenuId::Game), 3);
    }

    #[test]
    fn set_caption_rejects_out_of_range_index() {
        let mut model = MenuModel::standard();

        let error = model
            .set_caption(MenuId::Setting, 2, "EXTRA")
            .expect_err("setting menu has two items");

        assert_eq!(
            error,
            MenuModelError::ItemOutOfRange {
                menu: MenuId::Setting,
                index: 2,
                count: 2,
            }
        );
        assert_eq!(model, MenuModel::standard());
    }

    #[test]
    fn sync_toggles_derives_captions_from_flags() {
        let mut model = MenuModel::standard();

        model
            .sync_toggles(ToggleState {
                sound_enabled: false,
                music_enabled: true,
            })
            .expect("toggle slots exist");
        assert_eq!(model.captions(MenuId::Setting), ["SOUND OFF", "MUSIC ON"]);

        model
            .sync_toggles(ToggleState {
                sound_enabled: true,
                music_enabled: false,
            })
            .expect("toggle slots exist");
        assert_eq!(model.captions(MenuId::Setting), ["SOUND ON", "MUSIC OFF"]);
    }
}
