use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::info;
use rand::Rng;

use crate::GridInt;
use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use crate::food::place_food;
use crate::snake::{Direction::{self, *}, Pos, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: GridInt,
    pub height: GridInt,
}

impl Grid {
    pub fn new(width: GridInt, height: GridInt) -> Self {
        Grid { width, height }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Pos::new(x, y)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

/// What a single key asks the game to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Reset,
    Quit,
    Idle,
}

impl Command {
    pub fn from_key(ev: &KeyEvent) -> Command {
        if is_ctrl_c(ev) {
            return Command::Quit;
        }

        match ev.code {
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'w' => Command::Turn(Up),
                'a' => Command::Turn(Left),
                's' => Command::Turn(Down),
                'd' => Command::Turn(Right),
                'r' => Command::Reset,
                'q' => Command::Quit,
                _ => Command::Idle,
            },
            KeyCode::Up => Command::Turn(Up),
            KeyCode::Left => Command::Turn(Left),
            KeyCode::Down => Command::Turn(Down),
            KeyCode::Right => Command::Turn(Right),
            _ => Command::Idle,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Running,
    Crashed(Collision),
    /// The snake covers every cell, so there is nowhere left for food.
    Filled,
}

#[derive(Clone, Debug)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    facing: Direction,
    food: Option<Pos>,
    score: u64,
}

impl GameState {
    pub fn new() -> Self {
        let grid = Grid::default();
        let start = Pos::new(grid.width / 2, grid.height / 2);
        GameState { grid, snake: Snake::new(start, Up), facing: Up, food: None, score: 0 }
    }

    #[cfg(test)]
    pub fn with_snake(grid: Grid, snake: Snake, food: Option<Pos>) -> Self {
        let facing = snake.direction();
        GameState { grid, snake, facing, food, score: 0 }
    }

    pub fn reset(&mut self) {
        info!("Reset after scoring {}", self.score);
        *self = GameState::new();
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[cfg(test)]
    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn food(&self) -> Option<Pos> {
        self.food
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Points the snake somewhere new, unless that would send it straight
    /// back into its own neck.
    pub fn turn(&mut self, dir: Direction) {
        if dir != self.snake.direction().opposite() {
            self.facing = dir;
        }
    }

    /// Moves the snake one cell towards `facing`.
    ///
    /// A crash leaves the body untouched. The very first step only places
    /// the initial food and does not count as eating.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> StepOutcome {
        let new_head = self.snake.head().pos.step(self.facing);

        if !self.grid.contains(new_head) {
            return StepOutcome::Crashed(Collision::Wall);
        }
        if self.snake.contains(new_head) {
            return StepOutcome::Crashed(Collision::Body);
        }

        self.snake.retag_head(self.facing);
        self.snake.push_head(new_head, self.facing);

        let ate = self.food == Some(new_head);
        if ate {
            self.score += 1;
        } else {
            self.snake.drop_tail();
        }

        if ate || self.food.is_none() {
            self.food = place_food(self.grid, &self.snake, rng);
            match self.food {
                Some(food) => info!("Food placed at {}, {}", food.x, food.y),
                None => return StepOutcome::Filled,
            }
        }

        StepOutcome::Running
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
