use crate::{strategies::config::ExplorationConfig, world::types::Action};

/// A window of only the origin, or of exactly four cells, means the sensor
/// is clipped by the edge of the world.
#[must_use]
pub const fn is_clipped(visible: usize) -> bool {
    visible == 1 || visible == 4
}

#[must_use]
pub fn boundary_turn(draw: f64, config: &ExplorationConfig) -> Action {
    if draw > config.boundary_turn_split {
        Action::TurnRight
    } else {
        Action::TurnLeft
    }
}

/// Forward-biased random walk. Only ever returns a move or a turn.
#[must_use]
pub fn random_walk(draw: f64, config: &ExplorationConfig) -> Action {
    if draw < config.forward_below {
        Action::MoveForward
    } else if draw < config.turn_left_below {
        Action::TurnLeft
    } else {
        Action::TurnRight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_turn_splits_at_half() {
        let config = ExplorationConfig::default();
        assert_eq!(boundary_turn(0.2, &config), Action::TurnLeft);
        assert_eq!(boundary_turn(0.5, &config), Action::TurnLeft);
        assert_eq!(boundary_turn(0.7, &config), Action::TurnRight);
    }

    #[test]
    fn random_walk_thresholds() {
        let biased = ExplorationConfig::forward_biased();
        assert_eq!(random_walk(0.79, &biased), Action::MoveForward);
        assert_eq!(random_walk(0.85, &biased), Action::TurnLeft);
        assert_eq!(random_walk(0.95, &biased), Action::TurnRight);

        let wandering = ExplorationConfig::wandering();
        assert_eq!(random_walk(0.65, &wandering), Action::TurnLeft);
        assert_eq!(random_walk(0.85, &wandering), Action::TurnRight);
    }
}
