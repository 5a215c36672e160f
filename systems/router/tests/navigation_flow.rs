use broadside_core::{Command, Event, FrameInput, GameState, GridSize, Key, MenuId};
use broadside_layout::{button_rect, menu_layers, FieldLayout, MenuPlacement};
use broadside_menus::MenuModel;
use broadside_navigation::{apply, query, Navigation};
use broadside_system_dispatch::{ActionDispatcher, ActionTable};
use broadside_system_router::InputRouter;
use glam::Vec2;

struct Harness {
    navigation: Navigation,
    model: MenuModel,
    router: InputRouter,
}

impl Harness {
    fn new() -> Self {
        let model = MenuModel::standard();
        let dispatcher = ActionDispatcher::new(ActionTable::standard(), &model)
            .expect("standard bindings are valid");
        Self {
            navigation: Navigation::new(),
            model,
            router: InputRouter::new(dispatcher, FieldLayout::STANDARD),
        }
    }

    fn frame(&mut self, input: FrameInput) -> Vec<Event> {
        let state = query::current_state(&self.navigation);
        let mut commands: Vec<Command> = Vec::new();
        let _ = self
            .router
            .route(state, &input, &self.model, GridSize::STANDARD, &mut commands);

        let mut events = Vec::new();
        for command in commands {
            apply(&mut self.navigation, command, &mut events);
        }
        for event in &events {
            if matches!(event, Event::SoundToggled { .. } | Event::MusicToggled { .. }) {
                self.model
                    .sync_toggles(query::toggle_state(&self.navigation))
                    .expect("toggle slots exist");
            }
        }
        events
    }

    fn click_item(&mut self, menu: MenuId, index: usize) -> Vec<Event> {
        let state = query::current_state(&self.navigation);
        let placement = menu_layers(state)
            .iter()
            .copied()
            .find(|placement| placement.menu() == menu)
            .unwrap_or_else(|| panic!("{menu:?} is not showing in {state:?}"));
        self.frame(FrameInput::click(button_rect(placement, index).center()))
    }

    fn states(&self) -> Vec<GameState> {
        query::states(&self.navigation).to_vec()
    }
}

fn pops(events: &[Event]) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, Event::StatePopped { .. }))
        .count()
}

#[test]
fn play_pause_and_surrender_return_to_main_menu() {
    let mut harness = Harness::new();
    assert_eq!(harness.states(), [GameState::ViewingMainMenu]);

    let _ = harness.click_item(MenuId::Main, 0);
    assert_eq!(
        harness.states(),
        [GameState::ViewingMainMenu, GameState::Discovering],
        "PLAY should start a battle"
    );

    let _ = harness.frame(FrameInput::key(Key::Escape));
    assert_eq!(
        harness.states(),
        [
            GameState::ViewingMainMenu,
            GameState::Discovering,
            GameState::ViewingGameMenu
        ],
        "Escape during battle should open the game menu"
    );

    let events = harness.click_item(MenuId::Game, 1);
    assert_eq!(pops(&events), 2, "surrender pops menu and battle");
    assert_eq!(harness.states(), [GameState::ViewingMainMenu]);
}

#[test]
fn return_resumes_the_battle() {
    let mut harness = Harness::new();
    let _ = harness.click_item(MenuId::Main, 0);
    let _ = harness.frame(FrameInput::key(Key::Escape));

    let _ = harness.click_item(MenuId::Game, 0);

    assert_eq!(
        harness.states(),
        [GameState::ViewingMainMenu, GameState::Discovering]
    );
}

#[test]
fn sound_toggle_rewrites_caption_and_closes_sub_menu() {
    let mut harness = Harness::new();
    let _ = harness.click_item(MenuId::Main, 2);
    assert_eq!(
        harness.states(),
        [GameState::ViewingMainMenu, GameState::AlteringSetting]
    );
    assert_eq!(harness.model.captions(MenuId::Setting)[0], "SOUND ON");

    let events = harness.click_item(MenuId::Setting, 0);

    assert_eq!(harness.model.captions(MenuId::Setting)[0], "SOUND OFF");
    assert_eq!(harness.model.captions(MenuId::Setting)[1], "MUSIC ON");
    assert_eq!(pops(&events), 1, "toggle should pop exactly once: {events:?}");
    assert_eq!(harness.states(), [GameState::ViewingMainMenu]);
}

#[test]
fn escape_on_each_sub_menu_pops_once() {
    for (index, sub_state) in [
        (1, GameState::AlteringSetup),
        (2, GameState::AlteringSetting),
        (5, GameState::BgmSettings),
    ] {
        let mut harness = Harness::new();
        let _ = harness.click_item(MenuId::Main, index);
        assert_eq!(harness.states(), [GameState::ViewingMainMenu, sub_state]);

        let events = harness.frame(FrameInput::key(Key::Escape));

        assert_eq!(pops(&events), 1, "{sub_state:?}");
        assert_eq!(harness.states(), [GameState::ViewingMainMenu]);
    }
}

#[test]
fn escape_on_root_menu_quits_the_game() {
    let mut harness = Harness::new();

    let events = harness.frame(FrameInput::key(Key::Escape));

    assert_eq!(
        events,
        vec![
            Event::StatePopped {
                state: GameState::ViewingMainMenu
            },
            Event::StatePushed {
                state: GameState::Quitting
            },
        ]
    );
    assert_eq!(harness.states(), [GameState::Quitting]);
    assert!(harness.frame(FrameInput::key(Key::Escape)).is_empty());
}

#[test]
fn clicking_outside_a_sub_menu_closes_it() {
    let mut harness = Harness::new();
    let _ = harness.click_item(MenuId::Main, 5);

    let events = harness.frame(FrameInput::click(Vec2::new(10.0, 10.0)));

    assert_eq!(pops(&events), 1);
    assert_eq!(harness.states(), [GameState::ViewingMainMenu]);
}

#[test]
fn main_menu_stays_clickable_beside_a_sub_menu() {
    let mut harness = Harness::new();
    let _ = harness.click_item(MenuId::Main, 1);

    let settings = button_rect(MenuPlacement::root(MenuId::Main), 2).center();
    let _ = harness.frame(FrameInput::click(settings));

    assert_eq!(
        harness.states(),
        [GameState::ViewingMainMenu, GameState::AlteringSetting],
        "setup should close before settings opens"
    );
}

#[test]
fn difficulty_choice_is_stored_for_the_next_battle() {
    let mut harness = Harness::new();
    let _ = harness.click_item(MenuId::Main, 1);
    let _ = harness.click_item(MenuId::Setup, 0);

    let events = harness.click_item(MenuId::Main, 0);

    assert_eq!(
        events.first(),
        Some(&Event::GameStarted {
            difficulty: broadside_core::Difficulty::Easy
        })
    );
}

#[test]
fn scores_screen_is_dismissed_by_return() {
    let mut harness = Harness::new();
    let _ = harness.click_item(MenuId::Main, 3);
    assert_eq!(
        harness.states(),
        [GameState::ViewingMainMenu, GameState::ViewingHighScores]
    );

    let _ = harness.frame(FrameInput::key(Key::Return));

    assert_eq!(harness.states(), [GameState::ViewingMainMenu]);
}

#[test]
fn quitting_ignores_all_input() {
    let mut harness = Harness::new();
    let _ = harness.click_item(MenuId::Main, 6);
    assert!(query::is_quitting(&harness.navigation));

    let events = harness.frame(FrameInput::key(Key::Escape));

    assert!(events.is_empty());
    assert!(query::is_quitting(&harness.navigation));
}
