//! Terminal writer and raw mode lifecycle

use std::io::{self, Write};

use anyhow::Context;
use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use tracing::{debug, warn};

/// Keeps the terminal in raw mode for as long as it lives
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Switch the terminal to raw mode so single key presses reach us unbuffered
    pub fn enable() -> anyhow::Result<Self> {
        enable_raw_mode().context("failed to put terminal into raw mode")?;
        debug!("Terminal raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to restore terminal mode: {}", e);
        } else {
            debug!("Terminal raw mode disabled");
        }
    }
}

/// Single writer for everything that goes to the terminal.
///
/// Raw mode does not translate `\n`, so every line break is written as `\r\n`.
#[derive(Debug)]
pub struct Terminal<W: Write> {
    out: W,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    /// Replace the current line with `text` drawn in `color`
    pub fn overwrite(&mut self, text: &str, color: Color) -> io::Result<()> {
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            SetForegroundColor(color),
            Print(text),
            ResetColor
        )?;
        self.out.flush()
    }

    /// Replace the current line with `text` and move below it
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(text),
            Print("\r\n")
        )?;
        self.out.flush()
    }

    /// Leave the current line as is and print `text` on its own line below
    pub fn banner(&mut self, text: &str, color: Color) -> io::Result<()> {
        queue!(
            self.out,
            Print("\r\n"),
            SetForegroundColor(color),
            Print(text),
            ResetColor,
            Print("\r\n")
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(terminal: Terminal<Vec<u8>>) -> String {
        String::from_utf8(terminal.into_inner()).unwrap()
    }

    #[test]
    fn overwrite_returns_to_line_start_without_newline() {
        let mut terminal = Terminal::new(Vec::new());
        terminal.overwrite("Work 24:59", Color::Magenta).unwrap();
        let out = written(terminal);

        assert!(out.starts_with("\x1b[1G\x1b[2K"));
        assert!(out.contains("Work 24:59"));
        assert!(!out.contains('\n'));
    }

    #[test]
    fn line_ends_with_carriage_return_newline() {
        let mut terminal = Terminal::new(Vec::new());
        terminal.line("Timer cancelled").unwrap();
        assert!(written(terminal).ends_with("Timer cancelled\r\n"));
    }

    #[test]
    fn banner_starts_on_a_fresh_line() {
        let mut terminal = Terminal::new(Vec::new());
        terminal.banner("Break finished!", Color::Green).unwrap();
        let out = written(terminal);
        assert!(out.starts_with("\r\n"));
        assert!(out.contains("Break finished!"));
        assert!(out.ends_with("\r\n"));
    }
}
