#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure dispatch system that turns resolved menu buttons and grid cells into commands.
//!
//! Every `(menu, index)` pair maps to one [`MenuAction`] through an
//! [`ActionTable`]. The table is checked against the menu model when the
//! dispatcher is built, so a button without an action is a start-up failure
//! rather than a silently ignored click.

use broadside_core::{Command, Difficulty, GameState, GridCell, MenuId, Track};
use broadside_menus::MenuModel;
use log::{debug, info};
use thiserror::Error;

/// Domain action bound to a menu button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Starts a new battle.
    StartGame,
    /// Opens another screen over the current one.
    Open {
        /// State pushed onto the stack.
        state: GameState,
    },
    /// Ends the game loop.
    Quit,
    /// Stores the opponent difficulty and closes the sub-menu.
    ChooseDifficulty {
        /// Difficulty to store.
        difficulty: Difficulty,
    },
    /// Flips sound effects and closes the sub-menu.
    ToggleSound,
    /// Flips background music and closes the sub-menu.
    ToggleMusic,
    /// Switches the background track and closes the sub-menu.
    PlayTrack {
        /// Track to play.
        track: Track,
    },
    /// Closes the game menu and resumes the battle.
    Resume,
    /// Closes the game menu and abandons the battle.
    Surrender,
}

/// Appends the commands that carry out `action`.
pub fn commands_for(action: MenuAction, out: &mut Vec<Command>) {
    match action {
        MenuAction::StartGame => out.push(Command::StartGame),
        MenuAction::Open { state } => out.push(Command::PushState { state }),
        MenuAction::Quit => out.push(Command::PushState {
            state: GameState::Quitting,
        }),
        MenuAction::ChooseDifficulty { difficulty } => {
            out.push(Command::SetDifficulty { difficulty });
            out.push(Command::PopState);
        }
        MenuAction::ToggleSound => {
            out.push(Command::ToggleSound);
            out.push(Command::PopState);
        }
        MenuAction::ToggleMusic => {
            out.push(Command::ToggleMusic);
            out.push(Command::PopState);
        }
        MenuAction::PlayTrack { track } => {
            out.push(Command::SelectTrack { track });
            out.push(Command::PopState);
        }
        MenuAction::Resume => out.push(Command::PopState),
        MenuAction::Surrender => {
            // Game menu first, then the battle beneath it.
            out.push(Command::PopState);
            out.push(Command::PopState);
        }
    }
}

/// Mismatch between a menu's items and the actions bound to them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionTableError {
    /// A menu item has no action bound to it.
    #[error("{menu:?} menu item {index} has no action")]
    MissingAction {
        /// Menu containing the item.
        menu: MenuId,
        /// Index of the item lacking an action.
        index: usize,
    },
    /// An action is bound to an index the menu does not display.
    #[error("{menu:?} menu has no item {index} for its bound action")]
    UnreachableAction {
        /// Menu the action was bound to.
        menu: MenuId,
        /// Index without a matching item.
        index: usize,
    },
}

/// Lookup table from `(menu, index)` to the bound action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionTable {
    entries: Vec<Vec<MenuAction>>,
}

impl ActionTable {
    /// Bindings used by the game's menus.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_entries([
            (
                MenuId::Main,
                vec![
                    MenuAction::StartGame,
                    MenuAction::Open {
                        state: GameState::AlteringSetup,
                    },
                    MenuAction::Open {
                        state: GameState::AlteringSetting,
                    },
                    MenuAction::Open {
                        state: GameState::ViewingHighScores,
                    },
                    MenuAction::Open {
                        state: GameState::HowToPlay,
                    },
                    MenuAction::Open {
                        state: GameState::BgmSettings,
                    },
                    MenuAction::Quit,
                ],
            ),
            (
                MenuId::Game,
                vec![MenuAction::Resume, MenuAction::Surrender, MenuAction::Quit],
            ),
            (
                MenuId::Setup,
                vec![
                    MenuAction::ChooseDifficulty {
                        difficulty: Difficulty::Easy,
                    },
                    MenuAction::ChooseDifficulty {
                        difficulty: Difficulty::Medium,
                    },
                    MenuAction::ChooseDifficulty {
                        difficulty: Difficulty::Hard,
                    },
                ],
            ),
            (
                MenuId::Setting,
                vec![MenuAction::ToggleSound, MenuAction::ToggleMusic],
            ),
            (
                MenuId::Bgm,
                vec![
                    MenuAction::PlayTrack {
                        track: Track::Background,
                    },
                    MenuAction::PlayTrack { track: Track::Bgm1 },
                    MenuAction::PlayTrack { track: Track::Bgm2 },
                ],
            ),
        ])
    }

    /// Builds a table from per-menu action lists in item order.
    ///
    /// Menus that are not listed have no bound actions.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (MenuId, Vec<MenuAction>)>) -> Self {
        let mut table = vec![Vec::new(); MenuId::ALL.len()];
        for (menu, actions) in entries {
            if let Some(slot) = table.get_mut(menu.index()) {
                *slot = actions;
            }
        }
        Self { entries: table }
    }

    /// Actions bound to a menu in item order.
    #[must_use]
    pub fn actions(&self, menu: MenuId) -> &[MenuAction] {
        self.entries
            .get(menu.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Action bound to the item at `index`, if any.
    #[must_use]
    pub fn action(&self, menu: MenuId, index: usize) -> Option<MenuAction> {
        self.actions(menu).get(index).copied()
    }

    /// Checks that every menu item has exactly one action and no action lacks an item.
    pub fn validate(&self, model: &MenuModel) -> Result<(), ActionTableError> {
        for menu in MenuId::ALL {
            let items = model.item_count(menu);
            let bound = self.actions(menu).len();
            if bound < items {
                return Err(ActionTableError::MissingAction { menu, index: bound });
            }
            if bound > items {
                return Err(ActionTableError::UnreachableAction { menu, index: items });
            }
        }
        Ok(())
    }
}

/// Dispatch system that emits commands for resolved buttons and cells.
#[derive(Clone, Debug)]
pub struct ActionDispatcher {
    table: ActionTable,
}

impl ActionDispatcher {
    /// Creates a dispatcher after checking `table` against `model`.
    pub fn new(table: ActionTable, model: &MenuModel) -> Result<Self, ActionTableError> {
        table.validate(model)?;
        info!("action table validated for {} menus", MenuId::ALL.len());
        Ok(Self { table })
    }

    /// Emits the commands bound to the button at `index` of `menu`.
    ///
    /// Returns `false` when no action is bound, which a validated table rules
    /// out for every index below the menu's item count.
    pub fn dispatch(&self, menu: MenuId, index: usize, out: &mut Vec<Command>) -> bool {
        let Some(action) = self.table.action(menu, index) else {
            return false;
        };
        debug!("{menu:?} button {index} -> {action:?}");
        commands_for(action, out);
        true
    }

    /// Emits the attack command for a cell already validated against the enemy grid.
    pub fn dispatch_attack(&self, cell: GridCell, out: &mut Vec<Command>) {
        debug!("attack row {} column {}", cell.row(), cell.column());
        out.push(Command::Attack { cell });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands(action: MenuAction) -> Vec<Command> {
        let mut out = Vec::new();
        commands_for(action, &mut out);
        out
    }

    #[test]
    fn standard_table_matches_standard_menus() {
        assert_eq!(ActionTable::standard().validate(&MenuModel::standard()), Ok(()));
    }

    #[test]
    fn missing_binding_is_reported_with_first_unbound_index() {
        let table = ActionTable::from_entries([(MenuId::Game, vec![MenuAction::Resume])]);

        let error = ActionDispatcher::new(table, &MenuModel::standard())
            .expect_err("main menu has no bindings");

        assert_eq!(
            error,
            ActionTableError::MissingAction {
                menu: MenuId::Main,
                index: 0,
            }
        );
    }

    #[test]
    fn surplus_binding_is_reported_as_unreachable() {
        let mut table = ActionTable::standard();
        table.entries[MenuId::Setup.index()].push(MenuAction::Resume);

        assert_eq!(
            table.validate(&MenuModel::standard()),
            Err(ActionTableError::UnreachableAction {
                menu: MenuId::Setup,
                index: 3,
            })
        );
    }

    #[test]
    fn sub_menu_actions_always_close_the_sub_menu() {
        for action in [
            MenuAction::ChooseDifficulty {
                difficulty: Difficulty::Easy,
            },
            MenuAction::ToggleSound,
            MenuAction::ToggleMusic,
            MenuAction::PlayTrack { track: Track::Bgm2 },
        ] {
            assert_eq!(commands(action).last(), Some(&Command::PopState), "{action:?}");
        }
    }

    #[test]
    fn surrender_pops_menu_and_battle() {
        assert_eq!(
            commands(MenuAction::Surrender),
            vec![Command::PopState, Command::PopState]
        );
    }

    #[test]
    fn quit_pushes_terminal_state() {
        assert_eq!(
            commands(MenuAction::Quit),
            vec![Command::PushState {
                state: GameState::Quitting
            }]
        );
    }

    #[test]
    fn dispatch_reports_unbound_index() {
        let dispatcher = ActionDispatcher::new(ActionTable::standard(), &MenuModel::standard())
            .expect("standard table is valid");
        let mut out = Vec::new();

        assert!(!dispatcher.dispatch(MenuId::Setting, 2, &mut out));
        assert!(out.is_empty());
    }
}
