#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Broadside adapters.
//!
//! A [`Scene`] is a plain description of one frame: the menus visible for the
//! active state, the enemy field during battle and an optional screen title.
//! Backends draw it verbatim and never consult navigation state themselves.

use anyhow::Result as AnyResult;
use broadside_core::{FrameInput, GameState, GridCell, GridSize};
use broadside_layout::{
    button_rect, menu_layers, point_to_grid_cell, ButtonRect, FieldLayout, TEXT_OFFSET,
};
use broadside_menus::MenuModel;
use glam::Vec2;

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

/// Palette shared by every backend.
pub mod palette {
    use super::Color;

    /// Window background.
    pub const BACKGROUND: Color = Color::from_rgb_u8(8, 24, 48);
    /// Fill behind menu captions.
    pub const BUTTON_FILL: Color = Color::from_rgb_u8(0, 0, 0);
    /// Outline of a button the pointer is not over.
    pub const BUTTON_OUTLINE: Color = Color::from_rgb_u8(255, 255, 255);
    /// Outline of the hovered button.
    pub const BUTTON_HOVER: Color = Color::from_rgb_u8(1, 57, 86);
    /// Outline of the button under a held left mouse button.
    pub const BUTTON_PRESSED: Color = Color::from_rgb_u8(255, 0, 0);
    /// Caption text.
    pub const CAPTION: Color = Color::from_rgb_u8(2, 167, 252);
    /// Untouched water cell.
    pub const WATER: Color = Color::from_rgb_u8(6, 60, 120);
    /// Cell under the pointer during battle.
    pub const TARGET: Color = Color::from_rgb_u8(40, 120, 200);
    /// Cell already fired upon without a hit.
    pub const MISS: Color = Color::from_rgb_u8(200, 200, 200);
    /// Cell where a shot struck a ship.
    pub const HIT: Color = Color::from_rgb_u8(220, 40, 40);
    /// Tint laid over the field while the fleet is revealed.
    pub const REVEAL: Color = Color::new(1.0, 1.0, 0.0, 0.25);
}

/// Visual state of a menu button for the current pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonHighlight {
    /// Pointer is elsewhere.
    Idle,
    /// Pointer is over the button.
    Hovered,
    /// Pointer is over the button with the left button held.
    Pressed,
}

impl ButtonHighlight {
    /// Outline color drawn for this highlight.
    #[must_use]
    pub const fn outline(self) -> Color {
        match self {
            Self::Idle => palette::BUTTON_OUTLINE,
            Self::Hovered => palette::BUTTON_HOVER,
            Self::Pressed => palette::BUTTON_PRESSED,
        }
    }
}

/// Highlight of a button given the pointer position and left button state.
#[must_use]
pub fn button_highlight(rect: ButtonRect, pointer: Vec2, left_held: bool) -> ButtonHighlight {
    match (rect.contains(pointer), left_held) {
        (false, _) => ButtonHighlight::Idle,
        (true, false) => ButtonHighlight::Hovered,
        (true, true) => ButtonHighlight::Pressed,
    }
}

/// Point a caption's right edge and vertical centre are anchored to.
#[must_use]
pub fn caption_anchor(rect: ButtonRect) -> Vec2 {
    Vec2::new(
        (rect.right() + TEXT_OFFSET) as f32,
        (rect.top() + rect.height() / 2 + TEXT_OFFSET / 2) as f32,
    )
}

/// One drawable menu button.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonView {
    /// Screen rectangle of the button.
    pub rect: ButtonRect,
    /// Caption drawn right-aligned inside the button.
    pub caption: String,
    /// Pointer feedback.
    pub highlight: ButtonHighlight,
}

/// Every button of one placed menu in item order.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuView {
    /// Buttons in item order.
    pub buttons: Vec<ButtonView>,
}

/// Mark left on a field cell by a resolved shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellMark {
    /// The shot landed in open water.
    Miss,
    /// The shot struck a ship.
    Hit,
}

impl CellMark {
    /// Fill color of a marked cell.
    #[must_use]
    pub const fn fill(self) -> Color {
        match self {
            Self::Miss => palette::MISS,
            Self::Hit => palette::HIT,
        }
    }
}

/// One drawable cell of the enemy field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellView {
    /// Cell the view describes.
    pub cell: GridCell,
    /// Screen rectangle of the cell.
    pub rect: ButtonRect,
    /// Fill color.
    pub fill: Color,
}

/// Enemy field shown during battle.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldView {
    /// Cells in row-major order.
    pub cells: Vec<CellView>,
    /// Rectangle enclosing the whole grid.
    pub bounds: ButtonRect,
    /// Whether the fleet-reveal chord is held.
    pub reveal: bool,
}

impl FieldView {
    /// Builds the field with the hovered cell highlighted and earlier shots marked.
    #[must_use]
    pub fn new(
        field: FieldLayout,
        grid: GridSize,
        input: &FrameInput,
        marks: &[(GridCell, CellMark)],
        reveal: bool,
    ) -> Self {
        let hovered = point_to_grid_cell(input.pointer, field).within(grid);
        let cells = (0..grid.rows())
            .flat_map(|row| (0..grid.columns()).map(move |column| GridCell::new(row, column)))
            .map(|cell| {
                let fill = marks
                    .iter()
                    .find(|(marked, _)| *marked == cell)
                    .map(|(_, mark)| mark.fill())
                    .unwrap_or(if hovered == Some(cell) {
                        palette::TARGET
                    } else {
                        palette::WATER
                    });
                CellView {
                    cell,
                    rect: field.cell_rect(cell),
                    fill,
                }
            })
            .collect();

        Self {
            cells,
            bounds: field.bounds(grid),
            reveal,
        }
    }
}

/// Title shown on informational screens.
#[must_use]
pub fn screen_title(state: GameState) -> Option<&'static str> {
    match state {
        GameState::ViewingHighScores => Some("HIGH SCORES"),
        GameState::HowToPlay => Some("HOW TO PLAY"),
        GameState::EndingGame => Some("GAME OVER"),
        GameState::ViewingMainMenu
        | GameState::ViewingGameMenu
        | GameState::AlteringSetup
        | GameState::AlteringSetting
        | GameState::BgmSettings
        | GameState::Discovering
        | GameState::Quitting => None,
    }
}

/// Everything a backend draws for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Menus in draw order, root menu first so sub-menus paint over it.
    pub menus: Vec<MenuView>,
    /// Enemy field, present only during battle.
    pub field: Option<FieldView>,
    /// Title of an informational screen.
    pub title: Option<&'static str>,
}

impl Scene {
    /// Composes the scene for `state` from the menu model and this frame's pointer.
    ///
    /// `reveal` reports whether the fleet-reveal chord is held; it only affects
    /// the battle field.
    #[must_use]
    pub fn compose(
        state: GameState,
        input: &FrameInput,
        model: &MenuModel,
        field: FieldLayout,
        enemy_grid: GridSize,
        marks: &[(GridCell, CellMark)],
        reveal: bool,
    ) -> Self {
        let menus = menu_layers(state)
            .iter()
            .rev()
            .map(|placement| MenuView {
                buttons: model
                    .captions(placement.menu())
                    .iter()
                    .enumerate()
                    .map(|(index, caption)| {
                        let rect = button_rect(*placement, index);
                        ButtonView {
                            rect,
                            caption: caption.clone(),
                            highlight: button_highlight(rect, input.pointer, input.left_held),
                        }
                    })
                    .collect(),
            })
            .collect();

        let field = (state == GameState::Discovering)
            .then(|| FieldView::new(field, enemy_grid, input, marks, reveal));

        Self {
            menus,
            field,
            title: screen_title(state),
        }
    }
}

/// Window configuration consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Color) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
        }
    }
}

/// Rendering backend capable of presenting Broadside scenes.
pub trait RenderingBackend {
    /// Runs the backend until `update` stops returning scenes.
    ///
    /// `update` receives the input sampled on each frame and returns the scene
    /// to draw, or `None` once the game loop should end.
    fn run<F>(self, presentation: Presentation, update: F) -> AnyResult<()>
    where
        F: FnMut(FrameInput) -> Option<Scene> + 'static;
}
