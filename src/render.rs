use crate::config::FOOD_CHAR;
use crate::game::{GameState, Grid};
use crate::snake::Pos;

const KEYBINDS: &str = "Keybinds: [R]eset, [Q]uit";

/// One full screen worth of characters, row by row from the top.
///
/// The board sits in the top-left corner with a one character border,
/// followed by the status block.
pub struct Frame {
    rows: Vec<Vec<char>>,
}

impl Frame {
    pub fn from_state(state: &GameState) -> Self {
        let grid = state.grid();
        let inner = grid.width as usize;

        let mut rows = Vec::with_capacity(grid.height as usize + 5);
        rows.push(border_row('┌', '┐', inner));
        for _ in 0..grid.height {
            let mut row = vec!['│'];
            row.extend(std::iter::repeat(' ').take(inner));
            row.push('│');
            rows.push(row);
        }
        rows.push(border_row('└', '┘', inner));

        let mut frame = Frame { rows };

        let head = state.snake().head().pos;
        frame.push_text(&format!("Score: {}", state.score()));
        frame.push_text(KEYBINDS);
        frame.push_text(&debug_line(state.food(), head));

        for cell in state.snake().body() {
            frame.put(grid, cell.pos, cell.orientation.glyph());
        }
        if let Some(food) = state.food() {
            frame.put(grid, food, FOOD_CHAR);
        }

        frame
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| row.iter().collect())
    }

    #[cfg(test)]
    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    fn push_text(&mut self, line: &str) {
        self.rows.push(line.chars().collect());
    }

    fn put(&mut self, grid: Grid, pos: Pos, ch: char) {
        let (row, col) = screen_pos(grid, pos);
        if let Some(slot) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = ch;
        }
    }
}

/// Maps game space (origin bottom-left, y up) to a 0-based screen
/// `(row, column)` inside the border.
pub fn screen_pos(grid: Grid, pos: Pos) -> (usize, usize) {
    ((grid.height - pos.y) as usize, (pos.x + 1) as usize)
}

fn border_row(left: char, right: char, inner: usize) -> Vec<char> {
    let mut row = vec![left];
    row.extend(std::iter::repeat('─').take(inner));
    row.push(right);
    row
}

fn debug_line(food: Option<Pos>, head: Pos) -> String {
    match food {
        Some(food) => format!("Debug: Food: {}, {} Head: {}, {}", food.x, food.y, head.x, head.y),
        None => format!("Debug: Food: none Head: {}, {}", head.x, head.y),
    }
}
