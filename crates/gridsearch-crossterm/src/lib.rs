//! Crossterm terminal renderer for gridsearch.
//!
//! Provides a [`TermRenderer`] that draws one [`Frame`] per call, each cell
//! as a two-column coloured block, followed by a status line.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor},
    terminal::{self, ClearType},
};

use gridsearch_core::Point;
use gridsearch_paths::{CellKind, Frame};

/// Maps a [`CellKind`] to the colour it is drawn with.
pub fn cell_color(kind: CellKind) -> CtColor {
    let (r, g, b) = match kind {
        CellKind::Empty => (0, 0, 0),
        CellKind::Obstacle => (226, 226, 226),
        CellKind::Frontier => (0, 255, 255),
        CellKind::Visited => (0, 0, 255),
        CellKind::Start => (0, 255, 0),
        CellKind::Goal => (255, 0, 0),
        CellKind::Path => (255, 255, 0),
    };
    CtColor::Rgb { r, g, b }
}

/// A terminal renderer writing to any [`Write`].
///
/// In plain mode frames are written as text (see [`Frame`]'s `Display`)
/// one after the other, with no escape sequences.
pub struct TermRenderer<W: Write> {
    out: W,
    plain: bool,
    active: bool,
}

impl TermRenderer<Stdout> {
    /// Create a renderer on standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TermRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            plain: false,
            active: false,
        }
    }

    /// Configure whether frames are written as uncoloured text.
    pub fn with_plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    /// Hide the cursor and clear the screen.
    pub fn init(&mut self) -> io::Result<()> {
        if self.plain {
            return Ok(());
        }
        queue!(self.out, cursor::Hide, terminal::Clear(ClearType::All))?;
        self.out.flush()?;
        self.active = true;
        Ok(())
    }

    /// Draw `frame` from the top-left corner, then `status` below it.
    pub fn draw(&mut self, frame: &Frame<'_>, status: &str) -> io::Result<()> {
        if self.plain {
            writeln!(self.out, "{frame}{status}")?;
            return self.out.flush();
        }

        let bounds = frame.problem().bounds();
        queue!(self.out, cursor::MoveTo(0, 0))?;
        for y in bounds.min.y..bounds.max.y {
            for x in bounds.min.x..bounds.max.x {
                let kind = frame.cell(Point::new(x, y));
                queue!(self.out, SetBackgroundColor(cell_color(kind)), Print("  "))?;
            }
            queue!(self.out, ResetColor, Print("\r\n"))?;
        }
        queue!(
            self.out,
            terminal::Clear(ClearType::CurrentLine),
            Print(status),
            Print("\r\n")
        )?;
        self.out.flush()
    }

    /// Restore the cursor. Safe to call more than once.
    pub fn close(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        queue!(self.out, ResetColor, cursor::Show)?;
        self.out.flush()
    }

    /// The underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Drop for TermRenderer<W> {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
