#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Broadside navigation layer.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative navigation context, and pure input systems. Adapters sample a
//! [`FrameInput`] once per frame, systems translate it into [`Command`] values,
//! the navigation context executes those commands via its `apply` entry point
//! and broadcasts [`Event`] values that adapters forward to the external
//! [`BattleResolver`] and [`AudioSink`] collaborators.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Title shown by windowed adapters.
pub const WINDOW_TITLE: &str = "Broadside";

/// Logical phase of the game. The top of the navigation stack is the active one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// The root main menu is showing.
    ViewingMainMenu,
    /// The in-battle game menu is showing over the discovery phase.
    ViewingGameMenu,
    /// The difficulty sub-menu is open beside the main menu.
    AlteringSetup,
    /// The sound/music toggle sub-menu is open beside the main menu.
    AlteringSetting,
    /// The background music sub-menu is open beside the main menu.
    BgmSettings,
    /// The player is attacking cells on the enemy grid.
    Discovering,
    /// The high score table is showing.
    ViewingHighScores,
    /// The instructions screen is showing.
    HowToPlay,
    /// The battle finished and the result screen is showing.
    EndingGame,
    /// Terminal state that ends the game loop.
    Quitting,
}

impl GameState {
    /// State the navigation stack is seeded with at process start.
    pub const INITIAL: Self = Self::ViewingMainMenu;
}

/// Identifies one of the statically defined menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MenuId {
    /// Root menu listing play, setup, settings, scores, help, music and quit.
    Main,
    /// In-battle menu offering return, surrender and quit.
    Game,
    /// Difficulty selection sub-menu.
    Setup,
    /// Sound and music toggle sub-menu.
    Setting,
    /// Background track selection sub-menu.
    Bgm,
}

impl MenuId {
    /// Every menu in definition order.
    pub const ALL: [MenuId; 5] = [Self::Main, Self::Game, Self::Setup, Self::Setting, Self::Bgm];

    /// Dense zero-based index of the menu, matching its position in [`MenuId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Main => 0,
            Self::Game => 1,
            Self::Setup => 2,
            Self::Setting => 3,
            Self::Bgm => 4,
        }
    }
}

/// Skill level of the computer opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Opponent fires mostly at random.
    Easy,
    /// Opponent hunts around previous hits.
    #[default]
    Medium,
    /// Opponent plays its strongest strategy.
    Hard,
}

/// Background music tracks selectable from the music menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    /// Track played when the game boots.
    #[default]
    Background,
    /// First alternative track.
    Bgm1,
    /// Second alternative track.
    Bgm2,
}

impl Track {
    /// Asset key under which the audio collaborator registered the track.
    #[must_use]
    pub const fn asset_key(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::Bgm1 => "BGM1",
            Self::Bgm2 => "BGM2",
        }
    }
}

/// Keyboard keys the navigation layer reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Backs out of the current menu or opens the game menu during battle.
    Escape,
    /// Dismisses informational screens.
    Return,
    /// Left shift modifier.
    LeftShift,
    /// Right shift modifier.
    RightShift,
    /// Letter `C`, combined with shift to reveal the enemy fleet.
    C,
}

/// Input snapshot sampled by adapters once per frame.
///
/// The snapshot is transient: it is consumed by exactly one routing pass and
/// never stored across frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer position in screen space with the origin at the top-left corner.
    pub pointer: Vec2,
    /// Whether the left mouse button was clicked on this frame.
    pub left_clicked: bool,
    /// Whether the left mouse button is currently held down.
    pub left_held: bool,
    /// Keys typed on this frame.
    pub typed: Vec<Key>,
    /// Keys currently held down.
    pub held: Vec<Key>,
}

impl FrameInput {
    /// Creates a snapshot with the pointer at the provided position and nothing pressed.
    #[must_use]
    pub fn at(pointer: Vec2) -> Self {
        Self {
            pointer,
            ..Self::default()
        }
    }

    /// Creates a snapshot describing a left click at the provided position.
    #[must_use]
    pub fn click(pointer: Vec2) -> Self {
        Self {
            pointer,
            left_clicked: true,
            ..Self::default()
        }
    }

    /// Creates a snapshot describing a single key typed with the pointer at the origin.
    #[must_use]
    pub fn key(key: Key) -> Self {
        Self {
            typed: vec![key],
            ..Self::default()
        }
    }

    /// Reports whether the key was typed on this frame.
    #[must_use]
    pub fn key_typed(&self, key: Key) -> bool {
        self.typed.contains(&key)
    }

    /// Reports whether the key is currently held down.
    #[must_use]
    pub fn key_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

/// Validated cell on a playing grid expressed as row and column indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    row: u32,
    column: u32,
}

impl GridCell {
    /// Creates a new grid cell.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

/// Dimensions of a playing grid measured in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    columns: u32,
    rows: u32,
}

impl GridSize {
    /// Size of the standard battle grid.
    pub const STANDARD: Self = Self::new(10, 10);

    /// Creates a new grid size.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of columns, the grid's width.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows, the grid's height.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Reports whether the cell lies inside the grid.
    #[must_use]
    pub const fn contains(&self, cell: GridCell) -> bool {
        cell.row < self.rows && cell.column < self.columns
    }
}

/// Commands that express all permissible navigation mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Pushes a state over the current one.
    PushState {
        /// State that becomes active.
        state: GameState,
    },
    /// Ends the current state, returning to the one beneath it.
    PopState,
    /// Ends the current state and pushes another in its place.
    SwitchState {
        /// State that replaces the current one.
        state: GameState,
    },
    /// Starts a new battle with the configured difficulty.
    StartGame,
    /// Stores the opponent difficulty used for the next battle.
    SetDifficulty {
        /// Difficulty to store.
        difficulty: Difficulty,
    },
    /// Flips the sound effects flag.
    ToggleSound,
    /// Flips the music flag.
    ToggleMusic,
    /// Replaces the playing background track.
    SelectTrack {
        /// Track that should start playing.
        track: Track,
    },
    /// Fires at a validated cell on the enemy grid.
    Attack {
        /// Target cell.
        cell: GridCell,
    },
}

/// Events broadcast by the navigation context after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A state was pushed and is now active.
    StatePushed {
        /// State that became active.
        state: GameState,
    },
    /// A state was removed from the top of the stack.
    StatePopped {
        /// State that was removed.
        state: GameState,
    },
    /// A pop was requested but the state must stay on the stack.
    PopRefused {
        /// State that remained active.
        state: GameState,
    },
    /// A new battle was started.
    GameStarted {
        /// Difficulty the opponent plays at.
        difficulty: Difficulty,
    },
    /// The stored difficulty changed.
    DifficultyChanged {
        /// Newly stored difficulty.
        difficulty: Difficulty,
    },
    /// The sound effects flag changed.
    SoundToggled {
        /// Flag value after the toggle.
        enabled: bool,
    },
    /// The music flag changed.
    MusicToggled {
        /// Flag value after the toggle.
        enabled: bool,
    },
    /// A different background track was selected.
    TrackSelected {
        /// Track that should now play.
        track: Track,
    },
    /// The player fired at a cell of the enemy grid.
    AttackRequested {
        /// Target cell.
        cell: GridCell,
    },
}

/// Result reported by the battle collaborator after a shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The shot landed in open water.
    Miss,
    /// The shot struck a ship.
    Hit,
    /// The shot sank a ship.
    Destroyed,
    /// The cell had already been fired upon.
    ShotAlreadyMade,
    /// The shot ended the battle.
    GameOver,
}

/// External collaborator that owns the battle rules, fleets and opponent AI.
pub trait BattleResolver {
    /// Dimensions of the grid the player fires at.
    fn enemy_grid(&self) -> GridSize;

    /// Resets both fleets and starts a battle against an opponent of the given difficulty.
    fn start_game(&mut self, difficulty: Difficulty);

    /// Resolves a shot at a cell already validated against [`BattleResolver::enemy_grid`].
    fn attack(&mut self, cell: GridCell) -> AttackOutcome;
}

/// External collaborator that plays sound effects and music.
pub trait AudioSink {
    /// Enables or silences sound effects.
    fn set_sound_enabled(&mut self, enabled: bool);

    /// Enables or silences background music.
    fn set_music_enabled(&mut self, enabled: bool);

    /// Stops the currently playing background track.
    fn stop_music(&mut self);

    /// Starts playing the provided background track.
    fn play_track(&mut self, track: Track);
}
