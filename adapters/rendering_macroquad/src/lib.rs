#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for Broadside.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in the containerised CI environment, so the
//! dependency is declared without default features. Audio is played through the
//! `AudioSink` collaborator instead.
//!
//! Each frame the backend polls the mouse and keyboard into a
//! [`FrameInput`], hands it to the game loop and draws the returned [`Scene`].

use anyhow::Result;
use broadside_core::{FrameInput, Key};
use broadside_layout::ButtonRect;
use broadside_rendering::{
    caption_anchor, palette, ButtonView, Color, FieldView, Presentation, RenderingBackend, Scene,
};
use glam::Vec2;
use log::info;
use macroquad::input::{
    is_key_down, is_key_pressed, is_mouse_button_down, is_mouse_button_pressed, mouse_position,
    KeyCode, MouseButton,
};

const WINDOW_WIDTH: i32 = 800;
const WINDOW_HEIGHT: i32 = 600;
const CAPTION_FONT_SIZE: u16 = 20;
const TITLE_FONT_SIZE: u16 = 40;
const OUTLINE_THICKNESS: f32 = 1.0;

/// Physical keys polled each frame and the game keys they stand for.
const KEY_BINDINGS: [(KeyCode, Key); 5] = [
    (KeyCode::Escape, Key::Escape),
    (KeyCode::Enter, Key::Return),
    (KeyCode::LeftShift, Key::LeftShift),
    (KeyCode::RightShift, Key::RightShift),
    (KeyCode::C, Key::C),
];

/// Rendering backend implemented on top of macroquad.
#[derive(Debug, Default)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
}

impl MacroquadBackend {
    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval from the platform.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update: F) -> Result<()>
    where
        F: FnMut(FrameInput) -> Option<Scene> + 'static,
    {
        let Presentation {
            window_title,
            clear_color,
        } = presentation;

        let mut config = macroquad::window::Conf {
            window_title,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = self.swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        macroquad::Window::from_config(config, async move {
            let background = to_macroquad_color(clear_color);
            loop {
                let Some(scene) = update(gather_frame_input()) else {
                    info!("game loop finished, closing window");
                    break;
                };

                macroquad::window::clear_background(background);
                draw_scene(&scene);
                macroquad::window::next_frame().await;
            }
        });

        Ok(())
    }
}

fn gather_frame_input() -> FrameInput {
    let (cursor_x, cursor_y) = mouse_position();
    frame_input_from_observations(
        Vec2::new(cursor_x, cursor_y),
        is_mouse_button_pressed(MouseButton::Left),
        is_mouse_button_down(MouseButton::Left),
        is_key_pressed,
        is_key_down,
    )
}

fn frame_input_from_observations(
    pointer: Vec2,
    left_clicked: bool,
    left_held: bool,
    pressed: impl Fn(KeyCode) -> bool,
    down: impl Fn(KeyCode) -> bool,
) -> FrameInput {
    FrameInput {
        pointer,
        left_clicked,
        left_held,
        typed: bound_keys(pressed),
        held: bound_keys(down),
    }
}

fn bound_keys(observed: impl Fn(KeyCode) -> bool) -> Vec<Key> {
    KEY_BINDINGS
        .iter()
        .filter(|(code, _)| observed(*code))
        .map(|(_, key)| *key)
        .collect()
}

fn draw_scene(scene: &Scene) {
    if let Some(field) = &scene.field {
        draw_field(field);
    }

    for menu in &scene.menus {
        for button in &menu.buttons {
            draw_button(button);
        }
    }

    if let Some(title) = scene.title {
        let _ = macroquad::text::draw_text(
            title,
            50.0,
            100.0,
            f32::from(TITLE_FONT_SIZE),
            to_macroquad_color(palette::CAPTION),
        );
    }
}

fn draw_button(button: &ButtonView) {
    let (x, y, width, height) = rect_parameters(button.rect);
    let fill = to_macroquad_color(palette::BUTTON_FILL);
    macroquad::shapes::draw_rectangle(x, y, width, height, fill);
    macroquad::shapes::draw_rectangle_lines(
        x,
        y,
        width,
        height,
        OUTLINE_THICKNESS,
        to_macroquad_color(button.highlight.outline()),
    );

    let anchor = caption_anchor(button.rect);
    let dimensions =
        macroquad::text::measure_text(&button.caption, None, CAPTION_FONT_SIZE, 1.0);
    let _ = macroquad::text::draw_text(
        &button.caption,
        anchor.x - dimensions.width,
        anchor.y + dimensions.height / 2.0,
        f32::from(CAPTION_FONT_SIZE),
        to_macroquad_color(palette::CAPTION),
    );
}

fn draw_field(field: &FieldView) {
    for cell in &field.cells {
        let (x, y, width, height) = rect_parameters(cell.rect);
        macroquad::shapes::draw_rectangle(x, y, width, height, to_macroquad_color(cell.fill));
    }

    let (x, y, width, height) = rect_parameters(field.bounds);
    macroquad::shapes::draw_rectangle_lines(
        x,
        y,
        width,
        height,
        OUTLINE_THICKNESS,
        to_macroquad_color(palette::BUTTON_OUTLINE),
    );
    if field.reveal {
        let tint = to_macroquad_color(palette::REVEAL);
        macroquad::shapes::draw_rectangle(x, y, width, height, tint);
    }
}

fn rect_parameters(rect: ButtonRect) -> (f32, f32, f32, f32) {
    (
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_keys_map_to_game_keys() {
        let input = frame_input_from_observations(
            Vec2::new(12.0, 34.0),
            true,
            true,
            |code| code == KeyCode::Escape,
            |code| matches!(code, KeyCode::RightShift | KeyCode::C),
        );

        assert_eq!(input.pointer, Vec2::new(12.0, 34.0));
        assert!(input.left_clicked);
        assert!(input.left_held);
        assert_eq!(input.typed, vec![Key::Escape]);
        assert_eq!(input.held, vec![Key::RightShift, Key::C]);
    }

    #[test]
    fn enter_is_reported_as_return() {
        let input = frame_input_from_observations(
            Vec2::ZERO,
            false,
            false,
            |code| code == KeyCode::Enter,
            |_| false,
        );

        assert_eq!(input.typed, vec![Key::Return]);
        assert!(input.held.is_empty());
    }

    #[test]
    fn rect_parameters_preserve_pixel_geometry() {
        assert_eq!(
            rect_parameters(ButtonRect::new(575, 150, 150, 50)),
            (575.0, 150.0, 150.0, 50.0)
        );
    }
}
