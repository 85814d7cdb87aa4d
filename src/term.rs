use crate::{Cell, GridInt};
use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};

/// Screen columns per grid cell; two characters approximate a square.
const CELL_WIDTH: u16 = 2;
const CELL_BLOCK: &str = "██";

/// Screen row of the first board row; row 0 holds the score line, row 1 the
/// top border.
const BOARD_TOP: u16 = 2;
/// Screen column of the first board column, right of the left border.
const BOARD_LEFT: u16 = 1;

/// The drawing surface and keyboard source: a raw-mode alternate screen,
/// exposed to the game as "clear" and "paint cell at (x, y) with color".
pub struct TermManager {
    stdout: Stdout,
    grid_size: u16,
}

impl TermManager {
    pub fn new(grid_size: GridInt) -> Result<Self> {
        let (cols, rows) = terminal::size().context("reading terminal size")?;
        let needed_cols = grid_size as u16 * CELL_WIDTH + 2;
        let needed_rows = grid_size as u16 + 3;
        ensure!(
            cols >= needed_cols && rows >= needed_rows,
            "terminal is {}x{} but a {}-cell grid needs {}x{}",
            cols,
            rows,
            grid_size,
            needed_cols,
            needed_rows,
        );

        Ok(TermManager {
            stdout: stdout(),
            grid_size: grid_size as u16,
        })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("entering alternate screen")?;
        terminal::enable_raw_mode().context("enabling raw mode")?;
        execute!(self.stdout, cursor::Hide).context("hiding cursor")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        execute!(self.stdout, cursor::Show).context("showing cursor")?;
        terminal::disable_raw_mode().context("disabling raw mode")?;
        execute!(self.stdout, LeaveAlternateScreen).context("leaving alternate screen")?;
        Ok(())
    }

    /// Drains all pending key events. The caller keeps the last relevant
    /// one, so multiple turns never queue up within a single tick.
    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).context("polling events")? {
            if let Event::Key(ev) = read().context("reading event")? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn draw_border(&mut self) -> Result<()> {
        let width = self.grid_size * CELL_WIDTH + 2;
        let bottom = BOARD_TOP + self.grid_size;

        for x in 0..width {
            let ch = if x == 0 || x == width - 1 { '+' } else { '-' };
            self.print_at((x, BOARD_TOP - 1), ch)?;
            self.print_at((x, bottom), ch)?;
        }

        for y in BOARD_TOP..bottom {
            self.print_at((0, y), '|')?;
            self.print_at((width - 1, y), '|')?;
        }

        self.flush()
    }

    /// Blanks the board interior; borders and score line stay.
    pub fn clear_board(&mut self) -> Result<()> {
        let blank = " ".repeat(self.grid_size as usize * CELL_WIDTH as usize);
        for y in 0..self.grid_size {
            queue!(
                self.stdout,
                cursor::MoveTo(BOARD_LEFT, BOARD_TOP + y),
                Print(&blank)
            )
            .context("clearing board")?;
        }
        Ok(())
    }

    /// Paints one grid cell as a colored block. Cells outside the grid are
    /// clipped, the way a canvas would clip them.
    pub fn paint_cell(&mut self, cell: Cell, color: Color) -> Result<()> {
        let (x, y) = cell;
        if x < 0 || y < 0 || x as u16 >= self.grid_size || y as u16 >= self.grid_size {
            return Ok(());
        }

        queue!(
            self.stdout,
            cursor::MoveTo(BOARD_LEFT + x as u16 * CELL_WIDTH, BOARD_TOP + y as u16),
            SetForegroundColor(color),
            Print(CELL_BLOCK),
            ResetColor
        )
        .context("painting cell")?;
        Ok(())
    }

    pub fn print_score(&mut self, score: u64) -> Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(BOARD_LEFT, 0),
            Print(format!("Score: {}", score))
        )
        .context("printing score")?;
        Ok(())
    }

    /// Prints a block of lines centered on the board. The next full redraw
    /// wipes it.
    pub fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16 + 2;
        let center_x = BOARD_LEFT + self.grid_size * CELL_WIDTH / 2;
        let left = center_x.saturating_sub(width / 2);
        let top = BOARD_TOP + self.grid_size / 2 - lines.len() as u16 / 2;

        for (i, line) in lines.iter().enumerate() {
            let padded = format!("{line: ^width$}", width = width as usize);
            queue!(
                self.stdout,
                cursor::MoveTo(left, top + i as u16),
                Print(padded)
            )
            .context("printing message")?;
        }

        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("flushing terminal output")
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at(&mut self, pos: (u16, u16), ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), Print(ch)).context("printing char")?;
        Ok(())
    }
}
