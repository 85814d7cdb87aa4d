use crate::GridInt;
use std::time::Duration;

use anyhow::{ensure, Result};

/// Game parameters, fixed for the lifetime of a session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// The board is a `grid_size` x `grid_size` square of cells.
    pub grid_size: GridInt,
    /// Game steps per second.
    pub fps: u64,
    pub initial_snake_length: usize,
    /// Score awarded per consumed food.
    pub food_score: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: 40,
            fps: 15,
            initial_snake_length: 4,
            food_score: 100,
        }
    }
}

impl GameConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / self.fps.max(1))
    }

    /// A small board for tests.
    pub fn small() -> Self {
        GameConfig {
            grid_size: 8,
            ..Default::default()
        }
    }

    /// Checks the parameter combination before a session is built. The
    /// grid-size check runs before any casts, so negative values cannot
    /// sign-extend their way past it.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.initial_snake_length >= 1,
            "the snake needs at least one cell"
        );
        ensure!(
            self.grid_size > 0 && self.grid_size as usize > self.initial_snake_length,
            "a {}-cell grid cannot hold a snake of length {}",
            self.grid_size,
            self.initial_snake_length,
        );
        Ok(())
    }
}
