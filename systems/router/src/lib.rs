#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Input router that selects the handler for the active game state.
//!
//! Every [`GameState`] maps to exactly one [`Handler`]. The router reads the
//! state once per frame, hands the frame to that handler and collects the
//! commands it emits; applying them is left to the caller so a transition
//! only becomes visible on the following frame.

use broadside_core::{Command, FrameInput, GameState, GridSize, Key};
use broadside_layout::{menu_layers, FieldLayout};
use broadside_menus::MenuModel;
use broadside_system_dispatch::ActionDispatcher;
use broadside_system_menu_input::{MenuChain, MenuContext};
use log::debug;

/// Input handler bound to a game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handler {
    /// One or more placed menus tried in order.
    Menu(MenuChain<'static>),
    /// Attack handler of the discovery phase.
    Discovery,
    /// Informational screen closed by Escape, Return or a click.
    Dismiss,
    /// Consumes nothing.
    Idle,
}

/// Handler that receives input while `state` is active.
#[must_use]
pub fn handler_for(state: GameState) -> Handler {
    match state {
        GameState::ViewingMainMenu
        | GameState::ViewingGameMenu
        | GameState::AlteringSetup
        | GameState::AlteringSetting
        | GameState::BgmSettings => Handler::Menu(MenuChain::new(menu_layers(state))),
        GameState::Discovering => Handler::Discovery,
        GameState::ViewingHighScores | GameState::HowToPlay | GameState::EndingGame => {
            Handler::Dismiss
        }
        GameState::Quitting => Handler::Idle,
    }
}

/// Closes an informational screen on Escape, Return or a left click.
pub fn dismiss(input: &FrameInput, out: &mut Vec<Command>) -> bool {
    if input.key_typed(Key::Escape) || input.key_typed(Key::Return) || input.left_clicked {
        out.push(Command::PopState);
        return true;
    }
    false
}

/// Routes frames to the handler of the active state.
#[derive(Clone, Debug)]
pub struct InputRouter {
    dispatcher: ActionDispatcher,
    field: FieldLayout,
}

impl InputRouter {
    /// Creates a router around a validated dispatcher and the enemy field layout.
    #[must_use]
    pub fn new(dispatcher: ActionDispatcher, field: FieldLayout) -> Self {
        Self { dispatcher, field }
    }

    /// Layout of the enemy field clicks are mapped onto.
    #[must_use]
    pub fn field(&self) -> FieldLayout {
        self.field
    }

    /// Routes one frame of input for `state`, appending the emitted commands.
    ///
    /// Returns whether the selected handler consumed the frame.
    pub fn route(
        &self,
        state: GameState,
        input: &FrameInput,
        model: &MenuModel,
        enemy_grid: GridSize,
        out: &mut Vec<Command>,
    ) -> bool {
        let handled = match handler_for(state) {
            Handler::Menu(chain) => chain.handle(
                input,
                MenuContext {
                    model,
                    dispatcher: &self.dispatcher,
                },
                out,
            ),
            Handler::Discovery => broadside_system_discovery::handle(
                input,
                self.field,
                enemy_grid,
                &self.dispatcher,
                out,
            ),
            Handler::Dismiss => dismiss(input, out),
            Handler::Idle => false,
        };
        if handled {
            debug!("{state:?} handled input, {} commands queued", out.len());
        }
        handled
    }
}
