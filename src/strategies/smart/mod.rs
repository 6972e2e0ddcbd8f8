pub mod memory;

use log::{debug, trace};
use rand::Rng;

pub use self::memory::SmartMemory;
use super::{
    config::ExplorationConfig,
    explore::{boundary_turn, random_walk},
    store::{ant_rng, MemoryStore},
    Strategy,
};
use crate::world::{
    perception::Perception,
    types::{Action, AntId, Terrain},
    utils::turn_toward,
};

/// Dead-reckons its position, remembers where food and colony are and
/// steers straight for them, turning aside at random when a wall is in the
/// way.
#[derive(Debug)]
pub struct Smart {
    config:   ExplorationConfig,
    memories: MemoryStore<SmartMemory>,
}

impl Smart {
    #[must_use]
    pub fn new(config: ExplorationConfig) -> Self {
        Self {
            config,
            memories: MemoryStore::new(),
        }
    }

    #[must_use]
    pub fn memory(&self, ant_id: AntId) -> Option<SmartMemory> {
        self.memories.snapshot(ant_id)
    }

    fn decide(
        &self,
        perception: &Perception,
        memory: &mut SmartMemory,
    ) -> Action {
        let ant_id = perception.ant_id;

        if !perception.has_food && perception.is_on(Terrain::Food) {
            memory.path_found = true;
            memory.food = Some(memory.position);
            memory.returning = true;
            debug!("ant {ant_id} found food at {}", memory.position);
            return Action::PickUpFood;
        }

        if perception.has_food && perception.is_on(Terrain::Colony) {
            if memory.colony != memory.position {
                debug!(
                    "ant {ant_id} thought the colony was at {}, it is at {}",
                    memory.colony, memory.position
                );
                memory.colony = memory.position;
            }
            memory.returning = false;
            return Action::DropFood;
        }

        let follow = if perception.has_food {
            !memory.breadcrumbs.is_empty()
        } else if memory.path_found {
            if memory.food == Some(memory.position) {
                debug!(
                    "ant {ant_id} found nothing left at {}, searching again",
                    memory.position
                );
                memory.abandon_food();
                false
            } else {
                true
            }
        } else {
            false
        };

        if memory.bypassing {
            self.advance(perception, memory)
        } else if follow {
            self.follow(perception, memory)
        } else {
            self.explore(perception, memory)
        }
    }

    /// Steers for the current target, exploring when there isn't one to
    /// steer for.
    fn follow(
        &self,
        perception: &Perception,
        memory: &mut SmartMemory,
    ) -> Action {
        let delta = match memory.target() {
            Some(target) if target != memory.position => {
                memory.position.towards(target)
            }
            _ => return self.explore(perception, memory),
        };
        let desired = Perception::direction_from_delta(delta.x, delta.y);

        if desired == perception.direction {
            // shifts even if the advance below ends up blocked
            memory.shift_trail();
            self.advance(perception, memory)
        } else {
            turn_toward(perception.direction, desired.ordinal())
        }
    }

    /// Moves forward unless something is in the way, in which case the ant
    /// starts bypassing and turns at random without moving.
    fn advance(
        &self,
        perception: &Perception,
        memory: &mut SmartMemory,
    ) -> Action {
        if perception.is_blocked_ahead() {
            memory.bypassing = true;
            let draw = memory.rng.random::<f64>();
            let turn = boundary_turn(draw, &self.config);
            trace!(
                "ant {} blocked at {} facing {}, {turn}",
                perception.ant_id,
                memory.position,
                perception.direction
            );
            return turn;
        }

        memory.step(perception.direction);
        Action::MoveForward
    }

    fn explore(
        &self,
        perception: &Perception,
        memory: &mut SmartMemory,
    ) -> Action {
        let draw = memory.rng.random::<f64>();
        let visible = perception.visible_count();

        if visible == 1 || (visible <= 4 && perception.direction.is_diagonal()) {
            return boundary_turn(draw, &self.config);
        }

        let target = if perception.has_food {
            Terrain::Colony
        } else {
            Terrain::Food
        };

        if let Some(direction) = perception.direction_to(target) {
            return if direction == perception.direction {
                self.advance(perception, memory)
            } else {
                turn_toward(perception.direction, direction.ordinal())
            };
        }

        match random_walk(draw, &self.config) {
            Action::MoveForward => self.advance(perception, memory),
            turn => turn,
        }
    }
}

impl Strategy for Smart {
    fn decide_action(&self, perception: &Perception) -> Action {
        self.memories.with(
            perception.ant_id,
            || SmartMemory::new(ant_rng(self.config.seed, perception.ant_id)),
            |memory| self.decide(perception, memory),
        )
    }

    fn forget(&self, ant_id: AntId) -> bool {
        self.memories.forget(ant_id)
    }

    fn tracked_ants(&self) -> usize {
        self.memories.len()
    }
}
