use std::collections::VecDeque;

use rand::rngs::StdRng;

use crate::world::types::{Direction, Offset, ORIGIN};

/// What a smart ant believes about the world, in its own dead-reckoned
/// frame where the spawn cell is the origin.
#[derive(Debug, Clone)]
pub struct SmartMemory {
    /// Positions visited on the way to food, oldest first.
    pub breadcrumbs: VecDeque<Offset>,
    pub position:    Offset,
    pub food:        Option<Offset>,
    pub colony:      Offset,
    pub path_found:  bool,
    pub returning:   bool,
    /// Set while steering around something blocking the way.
    pub bypassing:   bool,
    pub(super) rng:  StdRng,
}

impl SmartMemory {
    #[must_use]
    pub fn new(rng: StdRng) -> Self {
        Self {
            breadcrumbs: VecDeque::from([ORIGIN]),
            position: ORIGIN,
            food: None,
            colony: ORIGIN,
            path_found: false,
            returning: false,
            bypassing: false,
            rng,
        }
    }

    /// Where the ant is currently heading, if it knows.
    #[must_use]
    pub fn target(&self) -> Option<Offset> {
        if self.returning {
            Some(self.colony)
        } else {
            self.food
        }
    }

    /// Dead-reckons a forward move. New positions are only recorded while
    /// the ant is still looking for its first route.
    pub fn step(&mut self, direction: Direction) {
        let next = self.position.neighbour(direction);
        if !self.path_found {
            self.breadcrumbs.push_back(next);
        }
        self.position = next;
        self.bypassing = false;
    }

    /// Shifts the trail one place as the ant walks along it, leaving the
    /// current position at the end it is walking away from.
    pub fn shift_trail(&mut self) {
        if self.returning {
            self.breadcrumbs.pop_back();
            self.breadcrumbs.push_front(self.position);
        } else {
            self.breadcrumbs.pop_front();
            self.breadcrumbs.push_back(self.position);
        }
    }

    /// The food source is gone: keep the trail as a starting point for the
    /// next search, oldest crumb moved to the back.
    pub fn abandon_food(&mut self) {
        self.breadcrumbs.rotate_left(1.min(self.breadcrumbs.len()));
        self.path_found = false;
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn memory() -> SmartMemory {
        SmartMemory::new(StdRng::seed_from_u64(0))
    }

    #[test]
    fn steps_are_dead_reckoned_and_recorded() {
        let mut memory = memory();
        memory.step(Direction::North);
        memory.step(Direction::East);

        assert_eq!(memory.position, Offset::new(1, -1));
        assert_eq!(
            memory.breadcrumbs,
            VecDeque::from([ORIGIN, Offset::new(0, -1), Offset::new(1, -1)])
        );
    }

    #[test]
    fn known_routes_stop_growing_the_trail() {
        let mut memory = memory();
        memory.path_found = true;
        memory.step(Direction::South);

        assert_eq!(memory.position, Offset::new(0, 1));
        assert_eq!(memory.breadcrumbs.len(), 1);
    }

    #[test]
    fn target_depends_on_direction_of_travel() {
        let mut memory = memory();
        assert_eq!(memory.target(), None);

        memory.food = Some(Offset::new(3, 3));
        assert_eq!(memory.target(), Some(Offset::new(3, 3)));

        memory.returning = true;
        assert_eq!(memory.target(), Some(ORIGIN));
    }

    #[test]
    fn abandoning_food_rotates_the_trail() {
        let mut memory = memory();
        memory.step(Direction::West);
        memory.step(Direction::West);
        memory.path_found = true;

        memory.abandon_food();

        assert!(!memory.path_found);
        assert_eq!(
            memory.breadcrumbs,
            VecDeque::from([Offset::new(-1, 0), Offset::new(-2, 0), ORIGIN])
        );
    }
}
