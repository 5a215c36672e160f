use broadside_core::{Command, Difficulty, GameState, GridCell, MenuId, Track};
use broadside_menus::MenuModel;
use broadside_system_dispatch::{ActionDispatcher, ActionTable};

fn dispatcher() -> ActionDispatcher {
    ActionDispatcher::new(ActionTable::standard(), &MenuModel::standard())
        .expect("standard bindings cover every menu item")
}

fn dispatch(menu: MenuId, index: usize) -> Vec<Command> {
    let mut commands = Vec::new();
    assert!(
        dispatcher().dispatch(menu, index, &mut commands),
        "{menu:?} item {index} should be bound",
    );
    commands
}

#[test]
fn main_menu_buttons_open_their_screens() {
    let expected = [
        Command::StartGame,
        Command::PushState {
            state: GameState::AlteringSetup,
        },
        Command::PushState {
            state: GameState::AlteringSetting,
        },
        Command::PushState {
            state: GameState::ViewingHighScores,
        },
        Command::PushState {
            state: GameState::HowToPlay,
        },
        Command::PushState {
            state: GameState::BgmSettings,
        },
        Command::PushState {
            state: GameState::Quitting,
        },
    ];

    for (index, command) in expected.iter().enumerate() {
        assert_eq!(dispatch(MenuId::Main, index), vec![*command], "main item {index}");
    }
}

#[test]
fn setup_buttons_store_difficulty_then_pop() {
    let difficulties = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    for (index, difficulty) in difficulties.into_iter().enumerate() {
        assert_eq!(
            dispatch(MenuId::Setup, index),
            vec![Command::SetDifficulty { difficulty }, Command::PopState],
        );
    }
}

#[test]
fn setting_buttons_toggle_then_pop() {
    assert_eq!(
        dispatch(MenuId::Setting, 0),
        vec![Command::ToggleSound, Command::PopState]
    );
    assert_eq!(
        dispatch(MenuId::Setting, 1),
        vec![Command::ToggleMusic, Command::PopState]
    );
}

#[test]
fn bgm_buttons_select_tracks_in_order() {
    let tracks = [Track::Background, Track::Bgm1, Track::Bgm2];

    for (index, track) in tracks.into_iter().enumerate() {
        assert_eq!(
            dispatch(MenuId::Bgm, index),
            vec![Command::SelectTrack { track }, Command::PopState],
        );
    }
}

#[test]
fn game_menu_return_surrender_quit() {
    assert_eq!(dispatch(MenuId::Game, 0), vec![Command::PopState]);
    assert_eq!(
        dispatch(MenuId::Game, 1),
        vec![Command::PopState, Command::PopState]
    );
    assert_eq!(
        dispatch(MenuId::Game, 2),
        vec![Command::PushState {
            state: GameState::Quitting
        }]
    );
}

#[test]
fn attack_dispatch_forwards_the_cell() {
    let mut commands = Vec::new();
    let cell = GridCell::new(2, 5);

    dispatcher().dispatch_attack(cell, &mut commands);

    assert_eq!(commands, vec![Command::Attack { cell }]);
}
