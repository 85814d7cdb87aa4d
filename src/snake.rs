use crate::{Cell, GridInt};
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Grid offset of one step in this direction. Y grows downwards.
    pub fn delta(self) -> (GridInt, GridInt) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn is_reverse_of(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Up, Down) | (Down, Up) | (Left, Right) | (Right, Left)
        )
    }
}

/// The snake body, ordered head-first. Never empty.
pub struct Snake {
    body: Vec<Cell>,
    direction: Direction,
}

impl Snake {
    /// Builds a snake of `length` cells with the head at `head`, laid out
    /// backwards along `direction`.
    pub fn new(head: Cell, length: usize, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length as GridInt)
            .map(|i| (head.0 - dx * i, head.1 - dy * i))
            .collect();
        Snake { body, direction }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Applies a direction change unless it would reverse the current
    /// heading. Returns whether the change was accepted.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction.is_reverse_of(self.direction) {
            return false;
        }
        self.direction = new_direction;
        true
    }

    /// One step of plain translation: prepend the new head, drop the tail.
    /// Returns the new head, which may lie off the grid.
    pub fn advance(&mut self) -> Cell {
        let (dx, dy) = self.direction.delta();
        let head = self.body[0];
        let new_head = (head.0 + dx, head.1 + dy);
        self.body.insert(0, new_head);
        self.body.pop();
        new_head
    }

    /// Duplicates the tail cell so the body is one longer this tick. The
    /// extra cell only becomes visible once the snake moves off it.
    pub fn grow(&mut self) {
        if let Some(&tail) = self.body.last() {
            self.body.push(tail);
        }
    }

    /// True if the head sits on any other body cell.
    pub fn hits_self(&self) -> bool {
        self.body[1..].contains(&self.body[0])
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lays_body_behind_head() {
        let snake = Snake::new((3, 0), 4, Right);
        assert_eq!(snake.body(), &[(3, 0), (2, 0), (1, 0), (0, 0)]);
        assert_eq!(snake.head(), (3, 0));
    }

    #[test]
    fn advance_translates_without_growing() {
        let mut snake = Snake::new((3, 0), 4, Right);
        let new_head = snake.advance();
        assert_eq!(new_head, (4, 0));
        assert_eq!(snake.body(), &[(4, 0), (3, 0), (2, 0), (1, 0)]);
    }

    #[test]
    fn grow_duplicates_tail() {
        let mut snake = Snake::new((3, 0), 4, Right);
        snake.advance();
        snake.grow();
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.body(), &[(4, 0), (3, 0), (2, 0), (1, 0), (1, 0)]);
    }

    #[test]
    fn reversal_is_rejected() {
        let mut snake = Snake::new((3, 0), 4, Right);
        assert!(!snake.set_direction(Left));
        assert_eq!(snake.direction(), Right);
    }

    #[test]
    fn perpendicular_turns_are_accepted() {
        let mut snake = Snake::new((3, 0), 4, Right);
        assert!(snake.set_direction(Down));
        assert_eq!(snake.direction(), Down);
        assert!(snake.set_direction(Left));
        assert_eq!(snake.direction(), Left);
    }

    #[test]
    fn hits_self_detects_head_on_body() {
        // Head turned back onto the body in a tight loop.
        let mut snake = Snake::new((2, 2), 5, Right);
        snake.set_direction(Down);
        snake.advance();
        snake.set_direction(Left);
        snake.advance();
        snake.set_direction(Up);
        snake.advance();
        assert!(snake.hits_self());
    }

    #[test]
    fn moving_into_vacated_tail_cell_is_legal() {
        // 2x2 loop: the head steps onto the cell the tail just left.
        let mut snake = Snake::new((1, 0), 4, Right);
        snake.set_direction(Down);
        snake.advance(); // (1, 1)
        assert!(!snake.hits_self());
        snake.set_direction(Left);
        snake.advance(); // (0, 1)
        assert!(!snake.hits_self());
        snake.set_direction(Up);
        snake.advance(); // (0, 0), vacated this tick
        assert!(!snake.hits_self());
    }
}
