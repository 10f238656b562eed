use std::io::{self, Write};

use crate::events::{DisplayCommand, ItemView};
use crate::game_entities::Glyph;

/// The surface the game draws on. Anything that can show items and report
/// taps back by glyph can drive the game.
pub trait Display {
    fn apply(&mut self, command: &DisplayCommand) -> io::Result<()>;

    fn render(&mut self, commands: &[DisplayCommand]) -> io::Result<()> {
        for command in commands {
            self.apply(command)?;
        }
        Ok(())
    }
}

// line based stand-in for a real screen. keeps the interactive items in the
// order they were shown so the player can tap one by number.
pub struct TerminalDisplay<W: Write> {
    out: W,
    tappable: Vec<Glyph>,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out, tappable: vec![] }
    }

    /// Glyph of the n-th tappable item, counting from 1.
    pub fn glyph_for(&self, number: usize) -> Option<&Glyph> {
        number.checked_sub(1).and_then(|i| self.tappable.get(i))
    }

    fn show(&mut self, view: &ItemView) -> io::Result<()> {
        let marker = if view.highlighted { "*" } else { " " };
        if view.interactive {
            self.tappable.push(view.glyph.clone());
            writeln!(
                self.out,
                "{:>3}){} {} {:<6} at ({}, {})",
                self.tappable.len(),
                marker,
                view.glyph,
                view.color,
                view.at.0,
                view.at.1
            )
        } else {
            writeln!(
                self.out,
                "    {} {} {:<6} at ({}, {})",
                marker, view.glyph, view.color, view.at.0, view.at.1
            )
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn apply(&mut self, command: &DisplayCommand) -> io::Result<()> {
        match command {
            DisplayCommand::Clear => {
                self.tappable.clear();
                writeln!(self.out, "----------------------------------------")
            }
            DisplayCommand::Show(view) => self.show(view),
            DisplayCommand::Score(score) => writeln!(self.out, "Correct : {}", score),
            DisplayCommand::Notice { title, message } => {
                writeln!(self.out, "[{}] {}", title, message)
            }
            DisplayCommand::RestartButton { at } => {
                writeln!(self.out, "[Play Again] at ({}, {}), type r", at.0, at.1)
            }
        }?;
        self.out.flush()
    }
}
