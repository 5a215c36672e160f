use std::collections::HashSet;

use broadside_core::{
    AttackOutcome, AudioSink, BattleResolver, Difficulty, GridCell, GridSize, Track,
};
use log::info;

/// Battle stand-in that tracks fired cells against a fixed set of one-cell targets.
///
/// Fleet placement and the opponent are not modelled; with no targets every
/// fresh shot misses.
#[derive(Clone, Debug)]
pub(crate) struct ShotBoard {
    grid: GridSize,
    targets: HashSet<GridCell>,
    fired: HashSet<GridCell>,
}

impl ShotBoard {
    pub(crate) fn new(grid: GridSize, targets: impl IntoIterator<Item = GridCell>) -> Self {
        Self {
            grid,
            targets: targets.into_iter().filter(|cell| grid.contains(*cell)).collect(),
            fired: HashSet::new(),
        }
    }

    fn all_targets_hit(&self) -> bool {
        self.targets.is_subset(&self.fired)
    }
}

impl BattleResolver for ShotBoard {
    fn enemy_grid(&self) -> GridSize {
        self.grid
    }

    fn start_game(&mut self, difficulty: Difficulty) {
        info!("battle started against {difficulty:?} opponent");
        self.fired.clear();
    }

    fn attack(&mut self, cell: GridCell) -> AttackOutcome {
        if !self.fired.insert(cell) {
            return AttackOutcome::ShotAlreadyMade;
        }
        if !self.targets.contains(&cell) {
            return AttackOutcome::Miss;
        }
        if self.all_targets_hit() {
            AttackOutcome::GameOver
        } else {
            AttackOutcome::Hit
        }
    }
}

/// Audio stand-in that logs every request.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LoggingAudio;

impl AudioSink for LoggingAudio {
    fn set_sound_enabled(&mut self, enabled: bool) {
        info!("sound effects {}", if enabled { "on" } else { "off" });
    }

    fn set_music_enabled(&mut self, enabled: bool) {
        info!("music {}", if enabled { "on" } else { "off" });
    }

    fn stop_music(&mut self) {
        info!("music stopped");
    }

    fn play_track(&mut self, track: Track) {
        info!("playing track {}", track.asset_key());
    }
}
