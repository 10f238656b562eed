use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use crate::config::GameConfig;
use crate::display::{Display, TerminalDisplay};
use crate::events::{DisplayCommand, Event};
use crate::input::Input;
use crate::space_converters::XY;

mod allocator;
mod config;
mod display;
mod error;
mod events;
mod game_entities;
mod input;
mod logic;
mod space_converters;
mod system;

/// Memory matching game played from the terminal
#[derive(Parser, Debug)]
#[command(name = "memory_match")]
#[command(about = "Tap a shape you have not picked before, every round", long_about = None)]
struct Args {
    /// TOML file with screen, layout and shape settings
    #[arg(long, short)]
    config: Option<PathBuf>,
}

enum Command {
    Quit,
    Restart,
    TapNumber(usize),
    TapAt(XY),
    Unknown,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line {
        "q" | "quit" => Command::Quit,
        "r" | "restart" => Command::Restart,
        _ => {
            if let Ok(n) = line.parse::<usize>() {
                return Command::TapNumber(n);
            }
            match line.split_once(',') {
                Some((x, y)) => match (x.trim().parse::<f32>(), y.trim().parse::<f32>()) {
                    (Ok(x), Ok(y)) => Command::TapAt(XY(x, y)),
                    _ => Command::Unknown,
                },
                None => Command::Unknown,
            }
        }
    }
}

fn run(args: Args) -> Result<()> {
    env_logger::init();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let mut rng = rand::thread_rng();
    let mut display = TerminalDisplay::new(io::stdout());

    let game = match logic::new_game(&config) {
        Ok(game) => game,
        Err(err) => {
            display.apply(&DisplayCommand::notice("Error", err.user_message()))?;
            return Err(err).context("could not set up the game");
        }
    };
    info!(
        "starting with {} shapes on a {} slot grid",
        game.shape_pool.len(),
        game.grid.len()
    );

    let (mut game, commands) = logic::start(game, &config, &mut rng);
    display.apply(&DisplayCommand::Score(0))?;
    display.render(&commands)?;

    let mut input = Input::new();
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        let (next, commands) = match parse_command(&line) {
            Command::Quit => break,
            Command::Restart => logic::handle_event(game, &Event::RestartPressed, &config, &mut rng),
            Command::TapNumber(n) => match display.glyph_for(n) {
                Some(glyph) => {
                    let event = Event::ShapeTapped(glyph.clone());
                    logic::handle_event(game, &event, &config, &mut rng)
                }
                None => {
                    debug!("no item numbered {}", n);
                    continue;
                }
            },
            Command::TapAt(xy) => {
                input.reset();
                if !input.update_tap_position(xy, &game.board, config.layout.tile_size as f32) {
                    debug!("tap at {:?} hit nothing", xy);
                    continue;
                }
                logic::advance(game, &input, &config, &mut rng)
            }
            Command::Unknown => {
                println!("type a number to tap an item, x,y to tap a point, r to restart, q to quit");
                continue;
            }
        };
        game = next;
        display.render(&commands)?;
    }

    info!("quit with score {}", game.score());
    Ok(())
}

fn main() -> Result<()> {
    run(Args::parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_config_is_optional() {
        let args = Args::try_parse_from(["memory_match"]).unwrap();
        assert!(args.config.is_none());

        let args = Args::try_parse_from(["memory_match", "--config", "game.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("game.toml")));
    }

    #[test]
    fn test_args_reject_positional() {
        assert!(Args::try_parse_from(["memory_match", "game.toml"]).is_err());
    }

    #[test]
    fn test_parse_command() {
        assert!(matches!(parse_command(" q "), Command::Quit));
        assert!(matches!(parse_command("r"), Command::Restart));
        assert!(matches!(parse_command("2"), Command::TapNumber(2)));
        assert!(matches!(parse_command("50, 150"), Command::TapAt(XY(x, y)) if x == 50.0 && y == 150.0));
        assert!(matches!(parse_command("hello"), Command::Unknown));
    }
}
