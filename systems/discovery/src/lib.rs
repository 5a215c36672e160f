#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure attack-phase input system.
//!
//! While the player is discovering the enemy fleet, Escape opens the game
//! menu and a left click fires at the enemy cell under the pointer. Clicks
//! that land outside the enemy grid are ignored.

use broadside_core::{Command, FrameInput, GameState, GridSize, Key};
use broadside_layout::{point_to_grid_cell, FieldLayout};
use broadside_system_dispatch::ActionDispatcher;
use log::debug;

/// Handles one frame of input in the attack phase.
///
/// Escape and a click are independent: both are processed when they arrive on
/// the same frame, Escape first. Returns `true` when either produced a command.
pub fn handle(
    input: &FrameInput,
    field: FieldLayout,
    enemy_grid: GridSize,
    dispatcher: &ActionDispatcher,
    out: &mut Vec<Command>,
) -> bool {
    let mut handled = false;

    if input.key_typed(Key::Escape) {
        out.push(Command::PushState {
            state: GameState::ViewingGameMenu,
        });
        handled = true;
    }

    if input.left_clicked {
        let raw = point_to_grid_cell(input.pointer, field);
        match raw.within(enemy_grid) {
            Some(cell) => {
                dispatcher.dispatch_attack(cell, out);
                handled = true;
            }
            None => debug!(
                "click at row {} column {} is off the enemy grid",
                raw.row(),
                raw.column()
            ),
        }
    }

    handled
}

/// Reports whether the fleet-reveal chord (either shift plus `C`) is held.
#[must_use]
pub fn reveal_requested(input: &FrameInput) -> bool {
    (input.key_held(Key::LeftShift) || input.key_held(Key::RightShift)) && input.key_held(Key::C)
}
