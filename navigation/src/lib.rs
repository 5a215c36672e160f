#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative navigation state for Broadside.
//!
//! [`Navigation`] owns the stack of active game states together with the game
//! settings the menus edit. It is an explicit context object: adapters create
//! one at start-up, systems never touch it directly, and every mutation goes
//! through [`apply`].

use broadside_core::{Command, Difficulty, Event, GameState, Track};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Game configuration edited through the setup, setting and music menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether sound effects play.
    pub sound_enabled: bool,
    /// Whether background music plays.
    pub music_enabled: bool,
    /// Difficulty of the opponent in the next battle.
    pub difficulty: Difficulty,
    /// Background track currently selected.
    pub track: Track,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            music_enabled: true,
            difficulty: Difficulty::default(),
            track: Track::default(),
        }
    }
}

/// Errors raised while constructing a navigation context.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// A navigation stack must hold at least one state.
    #[error("navigation stack must hold at least one state")]
    EmptyStack,
}

/// Stack of active game states plus the settings the menus edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    stack: Vec<GameState>,
    settings: Settings,
}

impl Navigation {
    /// Creates a context showing the main menu with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Creates a context showing the main menu with the provided settings.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            stack: vec![GameState::INITIAL],
            settings,
        }
    }

    /// Creates a context with an explicit stack, bottom first.
    pub fn from_states(
        states: impl IntoIterator<Item = GameState>,
        settings: Settings,
    ) -> Result<Self, NavigationError> {
        let stack: Vec<GameState> = states.into_iter().collect();
        if stack.is_empty() {
            return Err(NavigationError::EmptyStack);
        }
        Ok(Self { stack, settings })
    }

    fn top(&self) -> GameState {
        self.stack.last().copied().unwrap_or(GameState::INITIAL)
    }

    fn push(&mut self, state: GameState, out_events: &mut Vec<Event>) {
        self.stack.push(state);
        debug!("pushed {state:?}, depth {}", self.stack.len());
        out_events.push(Event::StatePushed { state });
    }

    /// Pops the top state; leaving the root main menu ends the game instead.
    fn pop_or_quit(&mut self, out_events: &mut Vec<Event>) {
        if self.stack != [GameState::ViewingMainMenu] {
            self.pop(out_events);
            return;
        }

        info!("leaving the root main menu, quitting");
        self.stack.clear();
        out_events.push(Event::StatePopped {
            state: GameState::ViewingMainMenu,
        });
        self.push(GameState::Quitting, out_events);
    }

    fn pop(&mut self, out_events: &mut Vec<Event>) {
        let top = self.top();
        if top == GameState::Quitting || self.stack.len() <= 1 {
            warn!("refusing to pop {top:?} at depth {}", self.stack.len());
            out_events.push(Event::PopRefused { state: top });
            return;
        }

        if let Some(state) = self.stack.pop() {
            debug!("popped {state:?}, {:?} now active", self.top());
            out_events.push(Event::StatePopped { state });
        }
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the navigation context.
///
/// Commands are applied strictly in the order they are received; the state a
/// command leaves on top is the one the next frame's input routing observes.
pub fn apply(navigation: &mut Navigation, command: Command, out_events: &mut Vec<Event>) {
    debug!("applying {command:?}");
    match command {
        Command::PushState { state } => navigation.push(state, out_events),
        Command::PopState => navigation.pop_or_quit(out_events),
        Command::SwitchState { state } => {
            navigation.pop(out_events);
            navigation.push(state, out_events);
        }
        Command::StartGame => {
            let difficulty = navigation.settings.difficulty;
            out_events.push(Event::GameStarted { difficulty });
            navigation.push(GameState::Discovering, out_events);
        }
        Command::SetDifficulty { difficulty } => {
            navigation.settings.difficulty = difficulty;
            out_events.push(Event::DifficultyChanged { difficulty });
        }
        Command::ToggleSound => {
            let enabled = !navigation.settings.sound_enabled;
            navigation.settings.sound_enabled = enabled;
            out_events.push(Event::SoundToggled { enabled });
        }
        Command::ToggleMusic => {
            let enabled = !navigation.settings.music_enabled;
            navigation.settings.music_enabled = enabled;
            out_events.push(Event::MusicToggled { enabled });
        }
        Command::SelectTrack { track } => {
            navigation.settings.track = track;
            out_events.push(Event::TrackSelected { track });
        }
        Command::Attack { cell } => out_events.push(Event::AttackRequested { cell }),
    }
}

/// Query functions that provide read-only access to navigation state.
pub mod query {
    use broadside_core::GameState;
    use broadside_menus::ToggleState;

    use super::{Navigation, Settings};

    /// State at the top of the stack, the one receiving input.
    #[must_use]
    pub fn current_state(navigation: &Navigation) -> GameState {
        navigation.top()
    }

    /// Every state on the stack, bottom first.
    #[must_use]
    pub fn states(navigation: &Navigation) -> &[GameState] {
        &navigation.stack
    }

    /// Current game settings.
    #[must_use]
    pub fn settings(navigation: &Navigation) -> &Settings {
        &navigation.settings
    }

    /// Typed value of the audio toggles shown in the setting menu.
    #[must_use]
    pub fn toggle_state(navigation: &Navigation) -> ToggleState {
        ToggleState {
            sound_enabled: navigation.settings.sound_enabled,
            music_enabled: navigation.settings.music_enabled,
        }
    }

    /// Reports whether the terminal quitting state is active.
    #[must_use]
    pub fn is_quitting(navigation: &Navigation) -> bool {
        navigation.top() == GameState::Quitting
    }
}
