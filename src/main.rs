mod config;
mod food;
mod game;
mod render;
mod snake;
mod term;

use std::{env, fs::File, process::exit};

use anyhow::Result;
use log::{error, info, LevelFilter};
use simplelog::{Config, WriteLogger};

use crate::game::{Collision, Command, GameState, StepOutcome};
use crate::render::Frame;
use crate::term::TermManager;

pub type GridInt = i16;

/// How a session ended, decided once the terminal is ours again.
enum Exit {
    Quit,
    Over(GameState, StepOutcome),
}

fn main() {
    init_logging();

    let mut term = TermManager::new();
    term.setup();
    let result = run(&mut term);
    term.restore();

    let code = match result {
        Ok(Exit::Quit) => 0,
        Ok(Exit::Over(state, outcome)) => {
            info!("Game over ({:?}) with score {}", outcome, state.score());
            let (msg, code) = match outcome {
                StepOutcome::Filled => ("You filled the board!", 0),
                StepOutcome::Crashed(Collision::Wall) => ("Game over! You hit the wall.", 1),
                StepOutcome::Crashed(Collision::Body) => ("Game over! You ran into yourself.", 1),
                StepOutcome::Running => ("", 0),
            };
            println!("{} Score: {}", msg, state.score());
            code
        }
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    };

    exit(code);
}

fn run(term: &mut TermManager) -> Result<Exit> {
    let mut rng = rand::thread_rng();
    let mut state = GameState::new();
    info!("Starting on a {}x{} board", state.grid().width, state.grid().height);

    loop {
        // Every read ends in a tick, timed out or not
        let key = term.read_key(config::READ_TIMEOUT)?;

        match key.as_ref().map(Command::from_key).unwrap_or(Command::Idle) {
            Command::Quit => return Ok(Exit::Quit),
            Command::Reset => state.reset(),
            Command::Turn(dir) => state.turn(dir),
            Command::Idle => {},
        }

        match state.step(&mut rng) {
            StepOutcome::Running => term.draw(&Frame::from_state(&state))?,
            outcome => return Ok(Exit::Over(state, outcome)),
        }
    }
}

fn init_logging() {
    let path = match env::var_os(config::LOG_FILE_ENV) {
        Some(path) => path,
        None => return,
    };

    // The terminal belongs to the game, so logs only ever go to a file
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Info, Config::default(), file) {
                eprintln!("Error setting up logging: {}", e);
            }
        }
        Err(e) => eprintln!("Error creating log file {:?}: {}", path, e),
    }
}
