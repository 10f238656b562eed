use rand::seq::IteratorRandom;
use rand::RngCore;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::allocator::UniqueIndexDrawer;
use crate::space_converters::XY;

// font awesome glyphs the game plays with
pub const DEFAULT_SHAPES: [&str; 23] = [
    "\u{f0f9}", "\u{f2a3}", "\u{f13d}", "\u{f17b}", "\u{f179}", "\u{f206}", "\u{f140}", "\u{f0f4}",
    "\u{f21c}", "\u{f094}", "\u{f084}", "\u{f135}", "\u{f807}", "\u{f1ba}", "\u{f023}", "\u{f001}",
    "\u{f025}", "\u{f07a}", "\u{f0c4}", "\u{f0d1}", "\u{f11a}", "\u{f130}", "\u{f188}",
];

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, EnumIter)]
pub enum GameColor {
    Red,
    Blue,
    Green,
    Orange,
    Purple,
    Pink,
}

impl GameColor {
    pub fn random(rng: &mut dyn RngCore) -> GameColor {
        GameColor::iter().choose(rng).unwrap_or(GameColor::Red)
    }
}

pub type Glyph = String;

/// A shape the player picked correctly. The history of these is the score.
#[derive(Clone, PartialEq, Debug)]
pub struct SelectedAnswer {
    pub glyph: Glyph,
    pub color: GameColor,
    pub hint_giver: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ItemRole {
    // drawn from the shape pool this round, index into the pool
    Candidate { pool_index: usize },
    // already in the history, tapping it ends the game
    Remembered,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Item {
    pub glyph: Glyph,
    pub color: GameColor,
    pub position: XY,
    pub role: ItemRole,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameOverReason {
    Exhausted,
    Duplicate,
}

#[derive(Clone, PartialEq, Debug)]
pub enum GameState {
    Setup,
    AwaitingSelection,
    GameOver {
        reason: GameOverReason,
        duplicate: Option<Item>,
    },
}

/// The whole session. Owned by the caller and threaded through `logic::advance`.
#[derive(Clone, Debug)]
pub struct Game {
    // every shape of a fresh game, None when the config carried no shapes
    pub catalog: Option<Vec<Glyph>>,
    pub shape_pool: Vec<Glyph>,
    pub history: Vec<SelectedAnswer>,
    // full placement grid, built once from the screen area
    pub grid: Vec<XY>,
    pub board: Vec<Item>,
    // hands out pool indices for the decoys of the current round
    pub drawer: UniqueIndexDrawer,
    pub game_state: GameState,
}

impl Game {
    pub fn new(catalog: Option<Vec<Glyph>>, grid: Vec<XY>) -> Self {
        let shape_pool = catalog.clone().unwrap_or_default();
        Self {
            catalog,
            shape_pool,
            history: vec![],
            grid,
            board: vec![],
            drawer: UniqueIndexDrawer::new(),
            game_state: GameState::Setup,
        }
    }

    pub fn score(&self) -> usize {
        self.history.len()
    }

    pub fn item_by_glyph(&self, glyph: &str) -> Option<&Item> {
        self.board.iter().find(|item| item.glyph == glyph)
    }

    pub fn in_history(&self, glyph: &str) -> bool {
        self.history.iter().any(|answer| answer.glyph == glyph)
    }

    pub fn is_over(&self) -> bool {
        matches!(self.game_state, GameState::GameOver { .. })
    }

    /// Back to a fresh session: empty history, full shape pool.
    pub fn reset(&mut self) {
        self.history.clear();
        self.board.clear();
        self.drawer.reset();
        self.shape_pool = self.catalog.clone().unwrap_or_default();
        self.game_state = GameState::Setup;
    }
}
