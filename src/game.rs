use crate::config::GameConfig;
use crate::snake::{Direction, Snake};
use crate::term::TermManager;
use crate::{Cell, GridInt};

use anyhow::Result;
use crossterm::style::Color;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const HEAD_COLOR: Color = Color::Red;
const BODY_COLOR: Color = Color::White;
const FOOD_COLOR: Color = Color::Rgb { r: 255, g: 165, b: 0 };

/// What one simulation step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    /// Hit a wall or the snake's own body; the game has stopped.
    Crashed,
    /// No free cell left to spawn food on; the game has stopped.
    Won,
}

/// The whole grid state, owned by the controller and mutated in place once
/// per tick.
pub struct GameState {
    pub config: GameConfig,
    pub snake: Snake,
    pub food: Cell,
    pub score: u64,
    pub running: bool,
    pub crashed: bool,
    pub won: bool,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic food placement, for tests.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let length = config.initial_snake_length;
        let head = (length as GridInt - 1, 0);
        let snake = Snake::new(head, length, Direction::Right);

        let mut state = GameState {
            config,
            snake,
            food: (0, 0),
            score: 0,
            running: false,
            crashed: false,
            won: false,
            rng,
        };
        state.food = state
            .spawn_food()
            .expect("grid too small for the initial snake");
        state
    }

    /// Stopped -> Running. Refused once the session has ended, whether in
    /// a crash or a win.
    pub fn start(&mut self) -> bool {
        if self.running || self.crashed || self.won {
            return false;
        }
        self.running = true;
        info!("game start");
        true
    }

    /// Running -> Stopped.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        info!("game stop, score {}", self.score);
        true
    }

    /// One simulation step: apply the pending direction change, translate
    /// the snake, resolve food, then detect collisions. Collisions are
    /// checked after the move, so stepping into the cell the tail just
    /// vacated is legal.
    pub fn tick(&mut self, dir_change: Option<Direction>) -> TickOutcome {
        if let Some(dir) = dir_change {
            if self.snake.set_direction(dir) {
                debug!("direction changed to {:?}", dir);
            }
        }

        let new_head = self.snake.advance();
        let mut outcome = TickOutcome::Moved;

        if new_head == self.food {
            self.snake.grow();
            self.score += self.config.food_score;
            debug!("food eaten at {:?}, score {}", new_head, self.score);

            match self.spawn_food() {
                Some(cell) => {
                    self.food = cell;
                    outcome = TickOutcome::Ate;
                }
                None => {
                    self.won = true;
                    info!("board full, final score {}", self.score);
                    self.stop();
                    return TickOutcome::Won;
                }
            }
        }

        if self.hits_wall(new_head) || self.snake.hits_self() {
            self.crashed = true;
            info!("game over at {:?}, score {}", new_head, self.score);
            self.stop();
            return TickOutcome::Crashed;
        }

        outcome
    }

    /// Full redraw: clear the board, then paint food and every snake cell.
    /// The head gets a distinct color. Off-board cells are clipped by the
    /// terminal layer.
    pub fn draw(&self, term: &mut TermManager) -> Result<()> {
        term.clear_board()?;
        term.paint_cell(self.food, FOOD_COLOR)?;

        for (i, &cell) in self.snake.body().iter().enumerate() {
            let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
            term.paint_cell(cell, color)?;
        }

        term.print_score(self.score)?;
        term.flush()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn hits_wall(&self, head: Cell) -> bool {
        let max = self.config.grid_size;
        head.0 < 0 || head.1 < 0 || head.0 >= max || head.1 >= max
    }

    fn spawn_food(&mut self) -> Option<Cell> {
        let size = self.config.grid_size;
        let snake = &self.snake;
        let free: Vec<Cell> = (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .filter(|&cell| !snake.occupies(cell))
            .collect();
        free.choose(&mut self.rng).copied()
    }
}
