use crate::world::types::{Action, Direction};

/// Picks the turn that brings `current` closer to `desired_ordinal`.
///
/// North and Northwest are special-cased around the 0/7 seam; every other
/// facing compares raw ordinals, which does not always pick the shorter arc
/// (an East-facing ant asked for Northwest turns right all the way round).
/// Callers only ask when the two differ.
#[must_use]
pub const fn turn_toward(current: Direction, desired_ordinal: u8) -> Action {
    match current {
        Direction::North => {
            if desired_ordinal > 4 {
                Action::TurnLeft
            } else {
                Action::TurnRight
            }
        }
        Direction::NorthWest => {
            if desired_ordinal < 4 {
                Action::TurnRight
            } else {
                Action::TurnLeft
            }
        }
        _ => {
            if desired_ordinal > current.ordinal() {
                Action::TurnRight
            } else {
                Action::TurnLeft
            }
        }
    }
}

/// Move forward when already facing `desired`, otherwise turn toward it.
#[must_use]
pub const fn steer(current: Direction, desired: Direction) -> Action {
    if current.ordinal() == desired.ordinal() {
        Action::MoveForward
    } else {
        turn_toward(current, desired.ordinal())
    }
}
