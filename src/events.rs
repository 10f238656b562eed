use crate::game_entities::{GameColor, Glyph};
use crate::space_converters::XY;

// what the display surface reports back
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ShapeTapped(Glyph),
    RestartPressed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub glyph: Glyph,
    pub color: GameColor,
    pub at: XY,
    pub interactive: bool,
    pub highlighted: bool,
}

// what the game asks the display surface to do
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCommand {
    // removes every item and button, score label stays
    Clear,
    Show(ItemView),
    Score(usize),
    Notice { title: String, message: String },
    RestartButton { at: XY },
}

impl DisplayCommand {
    pub fn notice(title: &str, message: &str) -> Self {
        DisplayCommand::Notice {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}
