use crate::events::Event;
use crate::game_entities::{Glyph, Item};
use crate::space_converters::{item_at, XY};

// just data structure to pass relevant input to the logic: which shape was
// tapped and whether restart was pressed.
#[derive(Debug, Default, Clone)]
pub struct Input {
    pub tapped: Option<Glyph>,
    pub restart_pressed: bool,
}

impl Input {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_event(event: &Event) -> Self {
        let mut input = Self::new();
        input.update(event);
        input
    }

    pub fn update(&mut self, event: &Event) {
        match event {
            Event::ShapeTapped(glyph) => self.tapped = Some(glyph.clone()),
            Event::RestartPressed => self.restart_pressed = true,
        }
    }

    /// Resolves a pixel tap against the board. Returns true if it hit an item.
    pub fn update_tap_position(&mut self, position: XY, board: &[Item], tile_size: f32) -> bool {
        match item_at(board, &position, tile_size) {
            Some(item) => {
                log::debug!("tap at {:?} hit {}", position, item.glyph);
                self.tapped = Some(item.glyph.clone());
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.tapped = None;
        self.restart_pressed = false;
    }
}
