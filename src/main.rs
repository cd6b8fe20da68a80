use std::io::{self, BufRead};

use chess_core::Position;
use chess_engine::{ClickOutcome, GameConfig, GameMode, GameState};
use log::{error, info};

enum Command {
    Click(i32, i32),
    Move(Position, Position),
    New(Option<GameMode>),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["quit"] | ["exit"] => Some(Command::Quit),
        ["new"] => Some(Command::New(None)),
        ["new", mode] => mode.parse().ok().map(|mode| Command::New(Some(mode))),
        [row, col] => Some(Command::Click(row.parse().ok()?, col.parse().ok()?)),
        [square] if square.len() == 2 => {
            let pos = Position::from_algebraic(square)?;
            Some(Command::Click(pos.row() as i32, pos.col() as i32))
        }
        [text] if text.len() == 4 && text.is_ascii() => {
            let from = Position::from_algebraic(&text[..2])?;
            let to = Position::from_algebraic(&text[2..])?;
            Some(Command::Move(from, to))
        }
        _ => None,
    }
}

fn print_board(game: &GameState) {
    if game.config().ascii {
        println!("\n{:#}", game.board());
    } else {
        println!("\n{}", game.board());
    }
    if let Some(reply) = game.last_opponent_move() {
        println!("Computer played {reply}");
    }
    println!("{:?} to move", game.side_to_move());
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let config = match GameConfig::load(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            eprintln!("usage: chess-game [--mode single|two] [--two-player] [--seed N] [--ascii]");
            std::process::exit(2);
        }
    };
    info!("starting {:?} game", config.mode);

    let mut game = GameState::new(config);
    println!("Commands: `r c` or `e2` to click a square, `e2e4` to move, `new [single|two]`, `quit`");
    print_board(&game);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("failed to read input: {err}");
                break;
            }
        };

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::New(mode)) => {
                game.restart(mode.unwrap_or(game.mode()));
                print_board(&game);
            }
            Some(Command::Click(row, col)) => match game.handle_click(row, col) {
                Ok(ClickOutcome::Selected(pos)) => println!("Selected {pos}"),
                Ok(ClickOutcome::MoveApplied) => print_board(&game),
                Ok(outcome) => println!("{outcome:?}"),
                Err(err) => println!("{err}"),
            },
            Some(Command::Move(from, to)) => match game.try_move(from, to) {
                Ok(()) => print_board(&game),
                Err(err) => println!("{err}"),
            },
            None => println!("Unrecognised command: {}", line.trim()),
        }
    }
}
