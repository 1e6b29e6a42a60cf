//! Keyboard mapping for the evil circle

use crate::sim::Direction;

/// Map a `KeyboardEvent.key` value to a displacement. Other keys are ignored.
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "a" => Some(Direction::Left),
        "d" => Some(Direction::Right),
        "w" => Some(Direction::Up),
        "s" => Some(Direction::Down),
        _ => None,
    }
}
