use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::Result;
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};
use log::warn;

use crate::render::Frame;

/// Owns the terminal while the game runs.
///
/// Raw mode turns off line buffering, echo, signal keys and newline
/// translation. Whatever happens, the previous mode and a visible cursor
/// are put back on `restore` or when this is dropped.
pub struct TermManager {
    stdout: Stdout,
    active: bool,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout(), active: false }
    }

    pub fn setup(&mut self) {
        self.active = true;

        if let Err(e) = execute!(self.stdout, EnterAlternateScreen) {
            warn!("Error entering alt screen: {}", e);
        }
        if let Err(e) = terminal::enable_raw_mode() {
            warn!("Error enabling raw mode: {}", e);
        }
        if let Err(e) = execute!(self.stdout, cursor::Hide) {
            warn!("Error hiding cursor: {}", e);
        }
    }

    pub fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        if let Err(e) = terminal::disable_raw_mode() {
            warn!("Error disabling raw mode: {}", e);
        }
        if let Err(e) = execute!(self.stdout, cursor::Show, LeaveAlternateScreen) {
            warn!("Error restoring screen: {}", e);
        }
    }

    /// Waits up to `timeout` for a key. `None` means the wait ran out or
    /// something other than a key arrived.
    pub fn read_key(&self, timeout: Duration) -> Result<Option<KeyEvent>> {
        if !poll(timeout)? {
            return Ok(None);
        }

        match read()? {
            Event::Key(ev) => Ok(Some(ev)),
            _ => Ok(None),
        }
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        for (y, row) in frame.rows().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16), style::Print(row))?;
        }

        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        self.restore();
    }
}
