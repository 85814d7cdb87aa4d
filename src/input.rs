use crate::snake::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key event asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Start,
    Stop,
    Quit,
    Ignore,
}

/// Maps the fixed key set to commands. Reversal filtering is not done here;
/// the snake itself rejects 180° turns when the change is applied.
pub fn map_key(ev: &KeyEvent) -> Command {
    if ev.modifiers.contains(KeyModifiers::CONTROL) && ev.code == KeyCode::Char('c') {
        return Command::Quit;
    }

    match ev.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Turn(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::Turn(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Turn(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Command::Turn(Direction::Right),
        KeyCode::Enter => Command::Start,
        KeyCode::Esc => Command::Stop,
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        _ => Command::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn arrows_map_to_turns() {
        assert_eq!(map_key(&key(KeyCode::Up)), Command::Turn(Direction::Up));
        assert_eq!(map_key(&key(KeyCode::Down)), Command::Turn(Direction::Down));
        assert_eq!(map_key(&key(KeyCode::Left)), Command::Turn(Direction::Left));
        assert_eq!(map_key(&key(KeyCode::Right)), Command::Turn(Direction::Right));
    }

    #[test]
    fn wasd_maps_to_turns() {
        assert_eq!(map_key(&key(KeyCode::Char('w'))), Command::Turn(Direction::Up));
        assert_eq!(map_key(&key(KeyCode::Char('a'))), Command::Turn(Direction::Left));
        assert_eq!(map_key(&key(KeyCode::Char('s'))), Command::Turn(Direction::Down));
        assert_eq!(map_key(&key(KeyCode::Char('d'))), Command::Turn(Direction::Right));
        assert_eq!(map_key(&key(KeyCode::Char('W'))), Command::Turn(Direction::Up));
    }

    #[test]
    fn start_stop_and_quit_keys() {
        assert_eq!(map_key(&key(KeyCode::Enter)), Command::Start);
        assert_eq!(map_key(&key(KeyCode::Esc)), Command::Stop);
        assert_eq!(map_key(&key(KeyCode::Char('q'))), Command::Quit);

        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert_eq!(map_key(&ctrl_c), Command::Quit);
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(map_key(&key(KeyCode::Char('x'))), Command::Ignore);
        assert_eq!(map_key(&key(KeyCode::Tab)), Command::Ignore);
    }
}
