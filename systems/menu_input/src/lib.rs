#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure menu input system.
//!
//! A menu handler reacts to one placed menu: Escape closes it, a click on a
//! button dispatches that button's action, and a click that misses every
//! button of a sub-menu closes the sub-menu. A [`MenuChain`] tries several
//! placed menus in a fixed order until one of them reports the frame as
//! handled, which keeps the main menu clickable while a sub-menu is open.

use broadside_core::{Command, FrameInput, Key};
use broadside_layout::{is_point_in_button, MenuPlacement};
use broadside_menus::MenuModel;
use broadside_system_dispatch::ActionDispatcher;
use log::debug;

/// Read-only collaborators a menu handler resolves clicks with.
#[derive(Clone, Copy, Debug)]
pub struct MenuContext<'a> {
    /// Menus and their item counts.
    pub model: &'a MenuModel,
    /// Dispatcher that turns resolved buttons into commands.
    pub dispatcher: &'a ActionDispatcher,
}

/// Returns the first button of the placed menu that contains the pointer.
///
/// Buttons are scanned in item order, so the lowest index wins.
#[must_use]
pub fn hit_button(
    input: &FrameInput,
    placement: MenuPlacement,
    item_count: usize,
) -> Option<usize> {
    (0..item_count).find(|index| is_point_in_button(input.pointer, placement, *index))
}

/// Handles one frame of input for a single placed menu.
///
/// Returns `true` when the frame was consumed: Escape was typed or a button was
/// clicked. A click that misses a sub-menu pops it but still returns `false`,
/// so a fallback menu may react to the same click.
pub fn handle_menu(
    placement: MenuPlacement,
    input: &FrameInput,
    context: MenuContext<'_>,
    out: &mut Vec<Command>,
) -> bool {
    if input.key_typed(Key::Escape) {
        debug!("escape closes {:?}", placement.menu());
        out.push(Command::PopState);
        return true;
    }

    if !input.left_clicked {
        return false;
    }

    let menu = placement.menu();
    let item_count = context.model.item_count(menu);
    if let Some(index) = hit_button(input, placement, item_count) {
        return context.dispatcher.dispatch(menu, index, out);
    }

    if placement.is_submenu() {
        debug!("click outside {menu:?} closes it");
        out.push(Command::PopState);
    }

    false
}

/// Ordered list of placed menus tried until one handles the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuChain<'a> {
    layers: &'a [MenuPlacement],
}

impl<'a> MenuChain<'a> {
    /// Creates a chain that tries `layers` in the given order.
    #[must_use]
    pub const fn new(layers: &'a [MenuPlacement]) -> Self {
        Self { layers }
    }

    /// Placed menus in the order they are tried, topmost first.
    #[must_use]
    pub const fn layers(&self) -> &'a [MenuPlacement] {
        self.layers
    }

    /// Handles one frame, stopping at the first menu that reports it handled.
    pub fn handle(
        &self,
        input: &FrameInput,
        context: MenuContext<'_>,
        out: &mut Vec<Command>,
    ) -> bool {
        self.layers
            .iter()
            .any(|placement| handle_menu(*placement, input, context, out))
    }
}
