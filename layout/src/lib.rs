#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Screen geometry for Broadside menus and the battle field.
//!
//! Everything in this crate is a pure function of fixed layout constants and
//! the pointer position. The same rectangles are used for drawing and for hit
//! testing so the two can never disagree.
//!
//! # Coordinate system
//!
//! Screen space in pixels with the origin at the top-left corner and `y`
//! increasing downward. Rectangles are closed on their left/top edges and open
//! on their right/bottom edges.

use broadside_core::{GameState, GridCell, GridSize, MenuId};
use glam::Vec2;

/// Top edge of the first button of every menu.
pub const MENU_TOP: i32 = 150;
/// Left edge of root-level menus.
pub const MENU_LEFT: i32 = 575;
/// Spacing between neighbouring buttons.
pub const MENU_GAP: i32 = 0;
/// Width of a menu button.
pub const BUTTON_WIDTH: i32 = 150;
/// Height of a menu button.
pub const BUTTON_HEIGHT: i32 = 50;
/// Horizontal distance between two menu levels.
pub const BUTTON_SEP: i32 = BUTTON_WIDTH + MENU_GAP;
/// Inset applied to captions inside their button.
pub const TEXT_OFFSET: i32 = -10;

/// Axis-aligned rectangle in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ButtonRect {
    left: i32,
    top: i32,
    width: i32,
    height: i32,
}

impl ButtonRect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Left edge, inclusive.
    #[must_use]
    pub const fn left(&self) -> i32 {
        self.left
    }

    /// Top edge, inclusive.
    #[must_use]
    pub const fn top(&self) -> i32 {
        self.top
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Right edge, exclusive.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.left + self.width
    }

    /// Bottom edge, exclusive.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// Centre of the rectangle in screen space.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left as f32 + self.width as f32 * 0.5,
            self.top as f32 + self.height as f32 * 0.5,
        )
    }

    /// Reports whether the point lies inside `[left, right) × [top, bottom)`.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left as f32
            && point.x < self.right() as f32
            && point.y >= self.top as f32
            && point.y < self.bottom() as f32
    }
}

/// Where a menu is laid out on screen.
///
/// `level` shifts the menu one button-width to the left per level so parent
/// menus stay visible, and `x_offset` pushes its rows down so they start below
/// the parent's items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MenuPlacement {
    menu: MenuId,
    level: u32,
    x_offset: u32,
}

impl MenuPlacement {
    /// Places a menu at the root level with no row offset.
    #[must_use]
    pub const fn root(menu: MenuId) -> Self {
        Self::nested(menu, 0, 0)
    }

    /// Places a menu at an arbitrary level and row offset.
    #[must_use]
    pub const fn nested(menu: MenuId, level: u32, x_offset: u32) -> Self {
        Self {
            menu,
            level,
            x_offset,
        }
    }

    /// Menu laid out by this placement.
    #[must_use]
    pub const fn menu(&self) -> MenuId {
        self.menu
    }

    /// Nesting depth relative to the main menu.
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Number of rows the menu is pushed down by.
    #[must_use]
    pub const fn x_offset(&self) -> u32 {
        self.x_offset
    }

    /// Reports whether the placement describes a sub-menu rather than a root menu.
    #[must_use]
    pub const fn is_submenu(&self) -> bool {
        self.level > 0
    }

    /// Rectangle of the button at `index` within this placement.
    #[must_use]
    pub fn button_rect(&self, index: usize) -> ButtonRect {
        button_rect(*self, index)
    }
}

const MAIN_LAYERS: &[MenuPlacement] = &[MenuPlacement::root(MenuId::Main)];
const GAME_LAYERS: &[MenuPlacement] = &[MenuPlacement::root(MenuId::Game)];
const SETUP_LAYERS: &[MenuPlacement] = &[
    MenuPlacement::nested(MenuId::Setup, 1, 1),
    MenuPlacement::root(MenuId::Main),
];
const SETTING_LAYERS: &[MenuPlacement] = &[
    MenuPlacement::nested(MenuId::Setting, 1, 2),
    MenuPlacement::root(MenuId::Main),
];
const BGM_LAYERS: &[MenuPlacement] = &[
    MenuPlacement::nested(MenuId::Bgm, 1, 3),
    MenuPlacement::root(MenuId::Main),
];

/// Placed menus shown while `state` is active, topmost first.
///
/// Sub-menus always come before the main menu they open beside. States that
/// show no menu yield an empty slice.
#[must_use]
pub fn menu_layers(state: GameState) -> &'static [MenuPlacement] {
    match state {
        GameState::ViewingMainMenu => MAIN_LAYERS,
        GameState::ViewingGameMenu => GAME_LAYERS,
        GameState::AlteringSetup => SETUP_LAYERS,
        GameState::AlteringSetting => SETTING_LAYERS,
        GameState::BgmSettings => BGM_LAYERS,
        GameState::Discovering
        | GameState::ViewingHighScores
        | GameState::HowToPlay
        | GameState::EndingGame
        | GameState::Quitting => &[],
    }
}

/// Computes the rectangle of a menu button.
///
/// `top = MENU_TOP + (BUTTON_HEIGHT + MENU_GAP) × (index + x_offset)` and
/// `left = MENU_LEFT − BUTTON_SEP × level`.
#[must_use]
pub fn button_rect(placement: MenuPlacement, index: usize) -> ButtonRect {
    let row = saturating_i32(index).saturating_add(saturating_i32(placement.x_offset));
    let level = saturating_i32(placement.level);

    let top = MENU_TOP.saturating_add((BUTTON_HEIGHT + MENU_GAP).saturating_mul(row));
    let left = MENU_LEFT.saturating_sub(BUTTON_SEP.saturating_mul(level));

    ButtonRect::new(left, top, BUTTON_WIDTH, BUTTON_HEIGHT)
}

/// Reports whether the point lies inside the button at `index` of the placed menu.
#[must_use]
pub fn is_point_in_button(point: Vec2, placement: MenuPlacement, index: usize) -> bool {
    button_rect(placement, index).contains(point)
}

fn saturating_i32<T>(value: T) -> i32
where
    i32: TryFrom<T>,
{
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Unvalidated grid coordinates produced by pointer mapping.
///
/// Either component may be negative or beyond the grid; use [`RawCell::within`]
/// to obtain a [`GridCell`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawCell {
    row: i32,
    column: i32,
}

impl RawCell {
    /// Creates a raw cell.
    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Row index, possibly out of range.
    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Column index, possibly out of range.
    #[must_use]
    pub const fn column(&self) -> i32 {
        self.column
    }

    /// Returns the validated cell when it lies in `[0, rows) × [0, columns)`.
    #[must_use]
    pub fn within(&self, grid: GridSize) -> Option<GridCell> {
        let row = u32::try_from(self.row).ok()?;
        let column = u32::try_from(self.column).ok()?;
        let cell = GridCell::new(row, column);
        grid.contains(cell).then_some(cell)
    }
}

/// Placement and cell dimensions of a playing field on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldLayout {
    top: i32,
    left: i32,
    cell_width: i32,
    cell_height: i32,
    cell_gap: i32,
}

impl FieldLayout {
    /// Layout of the enemy field during the discovery phase.
    pub const STANDARD: Self = Self::new(122, 349, 40, 40, 2);

    /// Creates a field layout.
    #[must_use]
    pub const fn new(
        top: i32,
        left: i32,
        cell_width: i32,
        cell_height: i32,
        cell_gap: i32,
    ) -> Self {
        Self {
            top,
            left,
            cell_width,
            cell_height,
            cell_gap,
        }
    }

    /// Top edge of the first row.
    #[must_use]
    pub const fn top(&self) -> i32 {
        self.top
    }

    /// Left edge of the first column.
    #[must_use]
    pub const fn left(&self) -> i32 {
        self.left
    }

    /// Vertical distance between the tops of two neighbouring rows.
    #[must_use]
    pub const fn row_pitch(&self) -> i32 {
        self.cell_height + self.cell_gap
    }

    /// Horizontal distance between the left edges of two neighbouring columns.
    #[must_use]
    pub const fn column_pitch(&self) -> i32 {
        self.cell_width + self.cell_gap
    }

    /// Screen rectangle of a cell, excluding the gap that follows it.
    #[must_use]
    pub fn cell_rect(&self, cell: GridCell) -> ButtonRect {
        let row = saturating_i32(cell.row());
        let column = saturating_i32(cell.column());
        ButtonRect::new(
            self.left.saturating_add(self.column_pitch().saturating_mul(column)),
            self.top.saturating_add(self.row_pitch().saturating_mul(row)),
            self.cell_width,
            self.cell_height,
        )
    }

    /// Screen rectangle covering a whole grid of the given size.
    #[must_use]
    pub fn bounds(&self, grid: GridSize) -> ButtonRect {
        ButtonRect::new(
            self.left,
            self.top,
            self.column_pitch().saturating_mul(saturating_i32(grid.columns())),
            self.row_pitch().saturating_mul(saturating_i32(grid.rows())),
        )
    }
}

/// Maps a pointer position to the grid cell beneath it.
///
/// Both axes floor toward negative infinity, so points above or left of the
/// field produce negative indices. A pointer over the gap after a cell maps to
/// that cell. A non-finite coordinate maps to `-1` on its axis.
#[must_use]
pub fn point_to_grid_cell(point: Vec2, field: FieldLayout) -> RawCell {
    RawCell::new(
        floor_div(point.y - field.top as f32, field.row_pitch()),
        floor_div(point.x - field.left as f32, field.column_pitch()),
    )
}

fn floor_div(offset: f32, pitch: i32) -> i32 {
    // Non-finite pointers are never over the field.
    if !offset.is_finite() {
        return -1;
    }
    if pitch <= 0 {
        return if offset < 0.0 { -1 } else { 0 };
    }
    (offset / pitch as f32).floor() as i32
}
