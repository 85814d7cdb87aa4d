use std::thread::sleep;
use std::time::Duration;

use anyhow::Result;

use crate::config::GameConfig;
use crate::game::{GameState, TickOutcome};
use crate::input::{map_key, Command};
use crate::snake::Direction;
use crate::term::TermManager;

/// Input is polled at this granularity between game steps.
const POLL_INTERVAL_MS: u64 = 5;

/// Owns the grid state and the drawing surface and drives them with a
/// synchronous loop: drain input, step the simulation, redraw. One tick
/// fully completes before the next is scheduled.
pub struct SnakeApp {
    state: GameState,
    term: TermManager,
    polls_per_tick: u64,
}

impl SnakeApp {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let term = TermManager::new(config.grid_size)?;
        let polls_per_tick =
            (config.tick_interval().as_millis() as u64 / POLL_INTERVAL_MS).max(1);
        let state = GameState::new(config);

        Ok(SnakeApp {
            state,
            term,
            polls_per_tick,
        })
    }

    /// Sets up the terminal, runs the event loop, and restores the terminal
    /// on both the success and error paths.
    pub fn run(&mut self) -> Result<()> {
        self.term.setup()?;
        let res = self.event_loop();
        let restored = self.term.restore();
        res.and(restored)
    }

    fn event_loop(&mut self) -> Result<()> {
        self.term.draw_border()?;
        self.state.draw(&mut self.term)?;
        self.term.show_message(&[
            "Arrow keys or WASD to move",
            "Enter to start, Esc to stop",
            "Q or CTRL+C to quit",
        ])?;

        let mut dir_change: Option<Direction> = None;
        let mut polls_until_step = self.polls_per_tick;

        loop {
            sleep(Duration::from_millis(POLL_INTERVAL_MS));

            for key_ev in self.term.read_key_events_queue()? {
                match map_key(&key_ev) {
                    Command::Quit => return Ok(()),
                    Command::Start => {
                        if self.state.start() {
                            self.state.draw(&mut self.term)?;
                        }
                    }
                    Command::Stop => {
                        if self.state.stop() {
                            dir_change = None;
                            self.term.show_message(&["Stopped", "Enter to resume"])?;
                        }
                    }
                    // Direction keys count only while running; the last one
                    // before the next step wins.
                    Command::Turn(dir) if self.state.running => dir_change = Some(dir),
                    _ => {}
                }
            }

            if !self.state.running {
                continue;
            }

            polls_until_step -= 1;
            if polls_until_step > 0 {
                continue;
            }
            polls_until_step = self.polls_per_tick;

            match self.state.tick(dir_change.take()) {
                TickOutcome::Moved | TickOutcome::Ate => self.state.draw(&mut self.term)?,
                TickOutcome::Crashed => {
                    self.state.draw(&mut self.term)?;
                    self.term.show_message(&[
                        "Game over!",
                        &format!("Score: {}", self.state.score),
                        "",
                        "Q or CTRL+C to quit",
                    ])?;
                }
                TickOutcome::Won => {
                    self.state.draw(&mut self.term)?;
                    self.term.show_message(&[
                        "You won!",
                        &format!("Score: {}", self.state.score),
                        "",
                        "Q or CTRL+C to quit",
                    ])?;
                }
            }
        }
    }
}
