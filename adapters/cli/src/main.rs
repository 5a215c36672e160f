#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots Broadside.
//!
//! `play` opens a macroquad window, `replay` feeds a recorded TOML script
//! through the same simulation headlessly and `layout` prints the on-screen
//! geometry of every menu and the enemy field.

mod collaborators;
mod config;
mod replay;
mod simulation;

use std::path::{Path, PathBuf};

use anyhow::Result;
use broadside_core::{GameState, GridSize, WINDOW_TITLE};
use broadside_layout::{button_rect, menu_layers, FieldLayout};
use broadside_menus::MenuModel;
use broadside_rendering::{palette, Presentation, RenderingBackend};
use broadside_rendering_macroquad::MacroquadBackend;
use clap::{Parser, Subcommand};
use log::{error, info};

use crate::{
    collaborators::{LoggingAudio, ShotBoard},
    config::LaunchConfig,
    replay::ReplayScript,
    simulation::Simulation,
};

#[derive(Parser, Debug)]
#[command(name = "broadside", author, version, about = "Grid battle game navigation shell")]
struct Cli {
    /// TOML file with `[settings]` and `[window]` tables.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Open the game window (default).
    Play,
    /// Run a recorded input script without a window and print the resulting states.
    Replay {
        /// TOML script of `[[frame]]` entries.
        script: PathBuf,
    },
    /// Print menu button and field rectangles.
    Layout,
}

/// Entry point for the Broadside command-line interface.
fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = LaunchConfig::load(cli.config.as_deref())?;
    info!("launching with {:?}", config.settings);

    match cli.mode.unwrap_or(Mode::Play) {
        Mode::Play => play(config),
        Mode::Replay { script } => replay(config, &script),
        Mode::Layout => {
            print_layout();
            Ok(())
        }
    }
}

fn play(config: LaunchConfig) -> Result<()> {
    let board = ShotBoard::new(GridSize::STANDARD, []);
    let mut simulation = Simulation::new(config.settings, board, LoggingAudio)?;

    MacroquadBackend::new()
        .with_vsync(config.window.vsync)
        .run(
            Presentation::new(WINDOW_TITLE, palette::BACKGROUND),
            move |input| {
                if let Err(failure) = simulation.step(&input) {
                    error!("{failure:#}");
                    return None;
                }
                if simulation.is_quitting() {
                    return None;
                }
                Some(simulation.scene(&input))
            },
        )
}

fn replay(config: LaunchConfig, path: &Path) -> Result<()> {
    let script = ReplayScript::load(path)?;
    let board = ShotBoard::new(GridSize::STANDARD, script.targets.iter().copied());
    let mut simulation = Simulation::new(config.settings, board, LoggingAudio)?;

    for (index, frame) in script.frames.iter().enumerate() {
        let events = simulation.step(&frame.to_input())?;
        println!("frame {index}: {:?} {events:?}", simulation.current_state());
        if simulation.is_quitting() {
            break;
        }
    }

    println!("final stack: {:?}", simulation.states());
    Ok(())
}

fn print_layout() {
    let model = MenuModel::standard();
    for state in [
        GameState::ViewingMainMenu,
        GameState::ViewingGameMenu,
        GameState::AlteringSetup,
        GameState::AlteringSetting,
        GameState::BgmSettings,
    ] {
        println!("{state:?}");
        for &placement in menu_layers(state) {
            for (index, caption) in model.captions(placement.menu()).iter().enumerate() {
                let rect = button_rect(placement, index);
                println!(
                    "  {:?}[{index}] {caption:<12} left={} top={} width={} height={}",
                    placement.menu(),
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height()
                );
            }
        }
    }

    let field = FieldLayout::STANDARD.bounds(GridSize::STANDARD);
    println!(
        "Discovering\n  field left={} top={} width={} height={}",
        field.left(),
        field.top(),
        field.width(),
        field.height()
    );
}
