use std::collections::VecDeque;

use anyhow::{Context, Result};
use broadside_core::{
    AttackOutcome, AudioSink, BattleResolver, Command, Event, FrameInput, GameState, GridCell,
};
use broadside_layout::FieldLayout;
use broadside_menus::MenuModel;
use broadside_navigation::{apply, query, Navigation, Settings};
use broadside_rendering::{CellMark, Scene};
use broadside_system_discovery::reveal_requested;
use broadside_system_dispatch::{ActionDispatcher, ActionTable};
use broadside_system_router::InputRouter;
use log::{debug, info};

/// Frame-driven game loop tying input routing, navigation and the collaborators together.
#[derive(Debug)]
pub(crate) struct Simulation<B, A> {
    navigation: Navigation,
    model: MenuModel,
    router: InputRouter,
    battle: B,
    audio: A,
    marks: Vec<(GridCell, CellMark)>,
}

impl<B, A> Simulation<B, A>
where
    B: BattleResolver,
    A: AudioSink,
{
    /// Validates the menu bindings and boots the audio collaborator from `settings`.
    pub(crate) fn new(settings: Settings, battle: B, mut audio: A) -> Result<Self> {
        let navigation = Navigation::with_settings(settings);
        let mut model = MenuModel::standard();
        model
            .sync_toggles(query::toggle_state(&navigation))
            .context("failed to derive toggle captions")?;
        let dispatcher = ActionDispatcher::new(ActionTable::standard(), &model)
            .context("menu action table does not match the menus")?;

        audio.set_sound_enabled(settings.sound_enabled);
        audio.set_music_enabled(settings.music_enabled);
        audio.play_track(settings.track);

        Ok(Self {
            navigation,
            model,
            router: InputRouter::new(dispatcher, FieldLayout::STANDARD),
            battle,
            audio,
            marks: Vec::new(),
        })
    }

    /// Reports whether the terminal quitting state is active.
    pub(crate) fn is_quitting(&self) -> bool {
        query::is_quitting(&self.navigation)
    }

    /// State receiving input on the next frame.
    pub(crate) fn current_state(&self) -> GameState {
        query::current_state(&self.navigation)
    }

    /// States on the navigation stack, bottom first.
    pub(crate) fn states(&self) -> &[GameState] {
        query::states(&self.navigation)
    }

    /// Processes one frame of input and returns the events it produced.
    ///
    /// The active state is read once before routing, so a transition caused by
    /// this frame only affects the next one.
    pub(crate) fn step(&mut self, input: &FrameInput) -> Result<Vec<Event>> {
        if self.is_quitting() {
            return Ok(Vec::new());
        }

        let state = self.current_state();
        let mut commands = Vec::new();
        let _ = self.router.route(
            state,
            input,
            &self.model,
            self.battle.enemy_grid(),
            &mut commands,
        );

        let mut pending: VecDeque<Command> = commands.into();
        let mut events = Vec::new();
        while let Some(command) = pending.pop_front() {
            let first_new = events.len();
            apply(&mut self.navigation, command, &mut events);
            for index in first_new..events.len() {
                self.react(events[index], &mut pending)?;
            }
        }
        Ok(events)
    }

    /// Scene for the state that will receive the next frame.
    pub(crate) fn scene(&self, input: &FrameInput) -> Scene {
        Scene::compose(
            self.current_state(),
            input,
            &self.model,
            self.router.field(),
            self.battle.enemy_grid(),
            &self.marks,
            reveal_requested(input),
        )
    }

    fn react(&mut self, event: Event, pending: &mut VecDeque<Command>) -> Result<()> {
        match event {
            Event::GameStarted { difficulty } => {
                self.marks.clear();
                self.battle.start_game(difficulty);
            }
            Event::SoundToggled { enabled } => {
                self.audio.set_sound_enabled(enabled);
                self.sync_captions()?;
            }
            Event::MusicToggled { enabled } => {
                self.audio.set_music_enabled(enabled);
                self.sync_captions()?;
            }
            Event::TrackSelected { track } => {
                self.audio.stop_music();
                self.audio.play_track(track);
            }
            Event::AttackRequested { cell } => {
                let outcome = self.battle.attack(cell);
                info!("shot at row {} column {}: {outcome:?}", cell.row(), cell.column());
                if let Some(mark) = mark_for(outcome) {
                    self.marks.push((cell, mark));
                }
                if outcome == AttackOutcome::GameOver {
                    pending.push_back(Command::SwitchState {
                        state: GameState::EndingGame,
                    });
                }
            }
            Event::StatePushed { .. }
            | Event::StatePopped { .. }
            | Event::PopRefused { .. }
            | Event::DifficultyChanged { .. } => debug!("{event:?}"),
        }
        Ok(())
    }

    fn sync_captions(&mut self) -> Result<()> {
        self.model
            .sync_toggles(query::toggle_state(&self.navigation))
            .context("failed to derive toggle captions")
    }
}

fn mark_for(outcome: AttackOutcome) -> Option<CellMark> {
    match outcome {
        AttackOutcome::Miss => Some(CellMark::Miss),
        AttackOutcome::Hit | AttackOutcome::Destroyed | AttackOutcome::GameOver => {
            Some(CellMark::Hit)
        }
        AttackOutcome::ShotAlreadyMade => None,
    }
}
