use std::collections::VecDeque;

use rand::RngCore;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::events::{DisplayCommand, Event};
use crate::game_entities::{Game, GameState};
use crate::input::Input;
use crate::space_converters::build_grid;
use crate::system::{
    NewGameSystem, ResultsSystem, RoundSetupSystem, SelectionValidationSystem, System,
};

/// Builds a fresh session from the config.
///
/// The grid has to fit the whole catalog: late rounds show every remembered
/// shape plus the last decoys, at most one tile per shape.
pub fn new_game(config: &GameConfig) -> Result<Game, GameError> {
    config.validate()?;
    let grid = build_grid(&config.screen, &config.layout);
    let needed = config.shapes.as_ref().map_or(0, |shapes| shapes.len());
    if grid.len() < needed {
        return Err(GameError::GridTooSmall {
            slots: grid.len(),
            needed,
        });
    }
    Ok(Game::new(config.shapes.clone(), grid))
}

/// Moves the game one step forward for the given input and returns the next
/// game together with what the display should do.
pub fn advance(
    mut game: Game,
    input: &Input,
    config: &GameConfig,
    rng: &mut dyn RngCore,
) -> (Game, Vec<DisplayCommand>) {
    let mut commands = VecDeque::new();
    let was_over = game.is_over();

    if input.restart_pressed {
        NewGameSystem.update_state(input, &mut game, &mut commands, config, rng);
    }

    if game.game_state == GameState::AwaitingSelection && input.tapped.is_some() {
        SelectionValidationSystem.update_state(input, &mut game, &mut commands, config, rng);
    }

    if game.game_state == GameState::Setup {
        RoundSetupSystem.update_state(input, &mut game, &mut commands, config, rng);
    }

    if game.is_over() && (!was_over || input.restart_pressed) {
        ResultsSystem.update_state(input, &mut game, &mut commands, config, rng);
    }

    (game, commands.into())
}

pub fn handle_event(
    game: Game,
    event: &Event,
    config: &GameConfig,
    rng: &mut dyn RngCore,
) -> (Game, Vec<DisplayCommand>) {
    advance(game, &Input::from_event(event), config, rng)
}

// deals the first round
pub fn start(game: Game, config: &GameConfig, rng: &mut dyn RngCore) -> (Game, Vec<DisplayCommand>) {
    advance(game, &Input::new(), config, rng)
}
