use std::time::Duration;

use crate::GridInt;

pub const GRID_WIDTH: GridInt = 30;
pub const GRID_HEIGHT: GridInt = 15;

/// How long a single key read waits before the game ticks anyway.
pub const READ_TIMEOUT: Duration = Duration::from_millis(500);

pub const FOOD_CHAR: char = 'X';

/// Above this occupied fraction, food placement stops guessing and picks from the free cells.
pub const REJECTION_SAMPLING_LIMIT: f64 = 0.5;

/// Environment variable naming the log file. Logging is off when unset.
pub const LOG_FILE_ENV: &str = "PIPE_SNAKE_LOG";
