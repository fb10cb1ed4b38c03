use std::collections::VecDeque;

use crate::GridInt;
use Direction::*;
use Orientation::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    #[cfg(test)]
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Offset in game space, where y grows upward.
    pub fn delta(self) -> (GridInt, GridInt) {
        match self {
            Up => (0, 1),
            Down => (0, -1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    /// Tag of a fresh head cell that was reached by moving this way.
    pub fn endpoint(self) -> Orientation {
        match self {
            Up => HeadUp,
            Down => HeadDown,
            Left => HeadLeft,
            Right => HeadRight,
        }
    }
}

/// Which glyph a body cell is drawn with.
///
/// The four `Head*` tags are endpoints and remember the direction the cell
/// was entered in. Once the snake moves on, the old head is retagged into a
/// straight segment or a corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    HeadLeft,
    HeadRight,
    HeadUp,
    HeadDown,

    Vertical,
    Horizontal,

    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Orientation {
    /// Transition table from (previous tag, next movement) to the new tag.
    /// Only endpoints change; straight and corner tags are final.
    pub fn retag(self, to: Direction) -> Orientation {
        match (self, to) {
            (HeadLeft, Up) => BottomLeft,
            (HeadLeft, Down) => TopLeft,
            (HeadLeft, Left) | (HeadLeft, Right) => Horizontal,

            (HeadRight, Up) => BottomRight,
            (HeadRight, Down) => TopRight,
            (HeadRight, Left) | (HeadRight, Right) => Horizontal,

            (HeadUp, Left) => TopRight,
            (HeadUp, Right) => TopLeft,
            (HeadUp, Up) | (HeadUp, Down) => Vertical,

            (HeadDown, Left) => BottomRight,
            (HeadDown, Right) => BottomLeft,
            (HeadDown, Up) | (HeadDown, Down) => Vertical,

            (tag, _) => tag,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            HeadLeft => '╺',
            HeadRight => '╸',
            HeadUp => '╻',
            HeadDown => '╹',
            Vertical => '┃',
            Horizontal => '━',
            TopLeft => '┏',
            TopRight => '┓',
            BottomLeft => '┗',
            BottomRight => '┛',
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: GridInt,
    pub y: GridInt,
}

impl Pos {
    pub fn new(x: GridInt, y: GridInt) -> Self {
        Pos { x, y }
    }

    pub fn step(self, dir: Direction) -> Pos {
        let (dx, dy) = dir.delta();
        Pos { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub pos: Pos,
    pub orientation: Orientation,
}

/// Body ordered from tail (front) to head (back). Never empty.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
}

impl Snake {
    pub fn new(pos: Pos, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_back(Cell { pos, orientation: direction.endpoint() });
        Snake { body, direction }
    }

    /// Builds a snake from tail-to-head positions, tagged the way moving
    /// through them one step at a time would tag them.
    #[cfg(test)]
    pub fn from_path(path: &[Pos]) -> Self {
        assert!(!path.is_empty(), "a snake needs at least one cell");

        let first = dir_between(path[0], *path.get(1).unwrap_or(&path[0])).unwrap_or(Up);
        let mut snake = Snake::new(path[0], first);
        for pos in &path[1..] {
            let dir = dir_between(snake.head().pos, *pos).expect("path cells must be adjacent");
            snake.retag_head(dir);
            snake.push_head(*pos, dir);
        }
        snake
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Cell {
        // The body always holds at least one cell
        self.body[self.body.len() - 1]
    }

    /// The direction the head last moved in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.body.iter().any(|cell| cell.pos == pos)
    }

    pub fn retag_head(&mut self, to: Direction) {
        if let Some(head) = self.body.back_mut() {
            head.orientation = head.orientation.retag(to);
        }
    }

    pub fn push_head(&mut self, pos: Pos, dir: Direction) {
        self.body.push_back(Cell { pos, orientation: dir.endpoint() });
        self.direction = dir;
    }

    pub fn drop_tail(&mut self) -> Option<Cell> {
        if self.body.len() > 1 {
            self.body.pop_front()
        } else {
            None
        }
    }
}

#[cfg(test)]
fn dir_between(from: Pos, to: Pos) -> Option<Direction> {
    Direction::ALL.iter().copied().find(|dir| from.step(*dir) == to)
}
