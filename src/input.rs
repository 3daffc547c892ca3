use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::Difficulty;
use crate::game::GameMode;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Logical control events consumed by the state machine.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    PauseToggle,
    Confirm,
    Skip,
    Select(Difficulty),
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Translates a terminal key press into a logical input for the current mode.
///
/// Key releases and repeats are ignored so that terminals reporting all key
/// event kinds do not double-fire confirms.
#[must_use]
pub fn map_key_event(key: KeyEvent, mode: GameMode) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match (mode, key.code) {
        (_, KeyCode::Char('q' | 'Q')) => Some(GameInput::Quit),

        (GameMode::Overlay, KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Esc) => {
            Some(GameInput::Skip)
        }
        (GameMode::Overlay, _) => None,

        (GameMode::DifficultySelect, KeyCode::Char('1' | 'e' | 'E')) => {
            Some(GameInput::Select(Difficulty::Easy))
        }
        (GameMode::DifficultySelect, KeyCode::Char('2' | 'm' | 'M')) => {
            Some(GameInput::Select(Difficulty::Medium))
        }
        (GameMode::DifficultySelect, KeyCode::Char('3' | 'h' | 'H')) => {
            Some(GameInput::Select(Difficulty::Hard))
        }

        (_, KeyCode::Char(' ') | KeyCode::Enter) => Some(GameInput::Confirm),
        (_, KeyCode::Char('p' | 'P')) => Some(GameInput::PauseToggle),

        (_, KeyCode::Up | KeyCode::Char('w' | 'W')) => Some(GameInput::Direction(Direction::Up)),
        (_, KeyCode::Down | KeyCode::Char('s' | 'S')) => {
            Some(GameInput::Direction(Direction::Down))
        }
        (_, KeyCode::Left | KeyCode::Char('a' | 'A')) => {
            Some(GameInput::Direction(Direction::Left))
        }
        (_, KeyCode::Right | KeyCode::Char('d' | 'D')) => {
            Some(GameInput::Direction(Direction::Right))
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use crate::config::Difficulty;
    use crate::game::GameMode;

    use super::{Direction, GameInput, direction_change_is_valid, map_key_event};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn reversal_is_never_a_valid_change() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Left, Direction::Right));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn space_confirms_on_menus_and_skips_the_overlay() {
        let space = press(KeyCode::Char(' '));

        assert_eq!(map_key_event(space, GameMode::Intro), Some(GameInput::Confirm));
        assert_eq!(map_key_event(space, GameMode::GameOver), Some(GameInput::Confirm));
        assert_eq!(map_key_event(space, GameMode::Overlay), Some(GameInput::Skip));
        assert_eq!(
            map_key_event(press(KeyCode::Esc), GameMode::Overlay),
            Some(GameInput::Skip)
        );
    }

    #[test]
    fn number_keys_select_difficulty_only_on_the_selection_screen() {
        assert_eq!(
            map_key_event(press(KeyCode::Char('3')), GameMode::DifficultySelect),
            Some(GameInput::Select(Difficulty::Hard))
        );
        assert_eq!(
            map_key_event(press(KeyCode::Char('e')), GameMode::DifficultySelect),
            Some(GameInput::Select(Difficulty::Easy))
        );
        assert_eq!(map_key_event(press(KeyCode::Char('3')), GameMode::Playing), None);
    }

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        assert_eq!(
            map_key_event(press(KeyCode::Left), GameMode::Playing),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(
            map_key_event(press(KeyCode::Char('w')), GameMode::Playing),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(map_key_event(press(KeyCode::Up), GameMode::Overlay), None);
    }

    #[test]
    fn quit_and_release_handling() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key_event(ctrl_c, GameMode::Overlay), Some(GameInput::Quit));
        assert_eq!(
            map_key_event(press(KeyCode::Char('q')), GameMode::Playing),
            Some(GameInput::Quit)
        );

        let mut release = press(KeyCode::Char(' '));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key_event(release, GameMode::Intro), None);
    }
}
