use std::collections::VecDeque;

use log::{debug, info, warn};
use rand::RngCore;

use crate::allocator::place_item;
use crate::config::GameConfig;
use crate::events::{DisplayCommand, ItemView};
use crate::game_entities::{
    Game, GameColor, GameOverReason, GameState, Item, ItemRole, SelectedAnswer,
};
use crate::input::Input;
use crate::space_converters::{restart_button_position, results_position};

pub trait System {
    fn update_state(
        &self,
        input: &Input,
        game: &mut Game,
        commands: &mut VecDeque<DisplayCommand>,
        config: &GameConfig,
        rng: &mut dyn RngCore,
    );
}

// restart: wipes history and refills the shape pool
pub struct NewGameSystem;

impl System for NewGameSystem {
    fn update_state(
        &self,
        _input: &Input,
        game: &mut Game,
        commands: &mut VecDeque<DisplayCommand>,
        _config: &GameConfig,
        _rng: &mut dyn RngCore,
    ) {
        info!("new game, final score was {}", game.score());
        game.reset();
        commands.push_back(DisplayCommand::Clear);
        commands.push_back(DisplayCommand::Score(0));
    }
}

/// Deals a round: fresh decoys from the shape pool plus every remembered
/// shape, each on its own slot of the grid.
pub struct RoundSetupSystem;

impl System for RoundSetupSystem {
    fn update_state(
        &self,
        _input: &Input,
        game: &mut Game,
        commands: &mut VecDeque<DisplayCommand>,
        config: &GameConfig,
        rng: &mut dyn RngCore,
    ) {
        if game.catalog.is_none() {
            warn!("no shapes configured, round setup aborted");
            commands.push_back(DisplayCommand::notice("Error", "Missing info to play game."));
            return;
        }
        if game.shape_pool.is_empty() {
            info!("shape pool exhausted with score {}", game.score());
            game.game_state = GameState::GameOver {
                reason: GameOverReason::Exhausted,
                duplicate: None,
            };
            return;
        }

        game.board.clear();
        commands.push_back(DisplayCommand::Clear);

        let mut positions = game.grid.clone();
        // decoys are unique within a round, every round starts from the full pool
        game.drawer.reset();
        let decoys = config.decoys_per_round.min(game.shape_pool.len());
        for _ in 0..decoys {
            let pool_index = game.drawer.draw(game.shape_pool.len(), rng);
            let position = place_item(&mut positions, rng);
            game.board.push(Item {
                glyph: game.shape_pool[pool_index].clone(),
                color: GameColor::random(rng),
                position,
                role: ItemRole::Candidate { pool_index },
            });
        }
        for answer in &game.history {
            let position = place_item(&mut positions, rng);
            game.board.push(Item {
                glyph: answer.glyph.clone(),
                color: answer.color,
                position,
                role: ItemRole::Remembered,
            });
        }
        debug!(
            "round dealt: {} decoys ({} undrawn), {} remembered, {} slots left",
            decoys,
            game.drawer.remaining(),
            game.history.len(),
            positions.len()
        );

        for item in &game.board {
            commands.push_back(DisplayCommand::Show(ItemView {
                glyph: item.glyph.clone(),
                color: item.color,
                at: item.position,
                interactive: true,
                highlighted: false,
            }));
        }
        game.game_state = GameState::AwaitingSelection;
    }
}

// decides whether the tapped shape is new (correct) or a repeat (game over)
pub struct SelectionValidationSystem;

impl System for SelectionValidationSystem {
    fn update_state(
        &self,
        input: &Input,
        game: &mut Game,
        commands: &mut VecDeque<DisplayCommand>,
        _config: &GameConfig,
        _rng: &mut dyn RngCore,
    ) {
        let Some(glyph) = &input.tapped else {
            return;
        };
        let Some(item) = game.item_by_glyph(glyph).cloned() else {
            warn!("tap on {} which is not on the board, ignored", glyph);
            return;
        };

        match item.role {
            ItemRole::Candidate { pool_index } => {
                let retired = game.shape_pool.remove(pool_index);
                debug_assert_eq!(retired, item.glyph);
                game.history.push(SelectedAnswer {
                    glyph: item.glyph,
                    color: item.color,
                    hint_giver: false,
                });
                info!(
                    "correct pick, score {} with {} shapes left",
                    game.score(),
                    game.shape_pool.len()
                );
                commands.push_back(DisplayCommand::Score(game.score()));
                game.game_state = GameState::Setup;
            }
            ItemRole::Remembered => {
                debug_assert!(game.in_history(&item.glyph));
                info!("duplicate pick of {}, game over", item.glyph);
                game.game_state = GameState::GameOver {
                    reason: GameOverReason::Duplicate,
                    duplicate: Some(item),
                };
            }
        }
    }
}

/// Lays the history out on the results screen and offers a restart.
pub struct ResultsSystem;

impl System for ResultsSystem {
    fn update_state(
        &self,
        _input: &Input,
        game: &mut Game,
        commands: &mut VecDeque<DisplayCommand>,
        config: &GameConfig,
        _rng: &mut dyn RngCore,
    ) {
        let GameState::GameOver { reason, duplicate } = &game.game_state else {
            return;
        };

        game.board.clear();
        commands.push_back(DisplayCommand::Clear);
        if *reason == GameOverReason::Exhausted {
            commands.push_back(DisplayCommand::notice(
                "Game Over",
                "Thank you for playing. There are no more shapes to choose from.",
            ));
        }

        let duplicate_glyph = duplicate.as_ref().map(|item| item.glyph.as_str());
        for (i, answer) in game.history.iter().enumerate() {
            commands.push_back(DisplayCommand::Show(ItemView {
                glyph: answer.glyph.clone(),
                color: answer.color,
                at: results_position(i, &config.screen, &config.layout),
                interactive: false,
                highlighted: duplicate_glyph == Some(answer.glyph.as_str()),
            }));
        }

        // the tapped duplicate goes right after the history
        let last_tile = results_position(game.history.len(), &config.screen, &config.layout);
        if let Some(item) = duplicate {
            commands.push_back(DisplayCommand::Show(ItemView {
                glyph: item.glyph.clone(),
                color: item.color,
                at: last_tile,
                interactive: false,
                highlighted: false,
            }));
        }
        commands.push_back(DisplayCommand::RestartButton {
            at: restart_button_position(&last_tile, &config.screen, &config.layout),
        });
    }
}
