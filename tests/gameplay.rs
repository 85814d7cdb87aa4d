use snake_tui::config::GameConfig;
use snake_tui::game::{GameState, TickOutcome};
use snake_tui::snake::Direction;

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let config = GameConfig {
        grid_size: 6,
        ..GameConfig::default()
    };
    let mut state = GameState::new_with_seed(config, 42);
    assert!(state.start());
    assert_eq!(state.snake.body(), &[(3, 0), (2, 0), (1, 0), (0, 0)]);

    // Food one cell ahead: the snake eats, grows, and the food relocates.
    state.food = (4, 0);
    assert_eq!(state.tick(None), TickOutcome::Ate);
    assert_eq!(state.score, 100);
    assert_eq!(state.snake.len(), 5);
    assert_eq!(state.snake.head(), (4, 0));
    assert_ne!(state.food, (4, 0));
    assert!(!state.snake.occupies(state.food));

    // Park the food out of the way and steer for the right wall.
    state.food = (0, 5);
    assert_eq!(state.tick(Some(Direction::Down)), TickOutcome::Moved);
    assert_eq!(state.snake.head(), (4, 1));

    // A reversal attempt is ignored; the snake keeps heading down.
    assert_eq!(state.tick(Some(Direction::Up)), TickOutcome::Moved);
    assert_eq!(state.snake.head(), (4, 2));

    assert_eq!(state.tick(Some(Direction::Right)), TickOutcome::Moved);
    assert_eq!(state.snake.head(), (5, 2));

    // One more step to the right leaves the grid.
    assert_eq!(state.tick(None), TickOutcome::Crashed);
    assert!(state.crashed);
    assert!(!state.running);
    assert_eq!(state.score, 100);

    // The session is over; the game refuses to start again.
    assert!(!state.start());
}
