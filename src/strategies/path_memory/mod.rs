pub mod route;

use log::{debug, trace, warn};
use rand::{rngs::StdRng, Rng};

pub use self::route::{Route, Step, TURNAROUND};
use super::{
    config::ExplorationConfig,
    explore::{boundary_turn, is_clipped, random_walk},
    store::{ant_rng, MemoryStore},
    Strategy,
};
use crate::world::{
    perception::Perception,
    types::{Action, AntId, Terrain},
    utils::steer,
};

#[derive(Debug, Clone)]
pub struct PathMemoryState {
    pub route:      Route,
    /// A route is known and being replayed.
    pub path_found: bool,
    pub returning:  bool,
    /// Completed colony arrivals since the route was last discarded. Once
    /// non-zero the route starts with a turnaround.
    pub trips:      u32,
    rng:            StdRng,
}

impl PathMemoryState {
    fn new(rng: StdRng) -> Self {
        Self {
            route: Route::new(),
            path_found: false,
            returning: false,
            trips: 0,
            rng,
        }
    }

    fn reach_food(&mut self, ant_id: AntId) {
        self.route.turn_homeward(self.path_found, self.trips > 0);
        self.path_found = true;
        self.returning = true;
        debug!(
            "ant {ant_id} found food, heading home along {} steps ({} \
             forward)",
            self.route.len(),
            self.route.forward_moves()
        );
    }

    fn reach_colony(&mut self, ant_id: AntId) {
        if self.path_found {
            self.route.turn_outward();
            self.trips += 1;
            debug!(
                "ant {ant_id} is home after trip {}, route back out is {}",
                self.trips, self.route
            );
        } else {
            // whatever was recorded didn't start here
            self.route.clear();
            self.trips = 0;
            debug!("ant {ant_id} is home without a route, starting afresh");
        }
        self.returning = false;
    }

    /// Stops replaying. Outbound, every recorded step was really walked
    /// from the colony, so the route stays and recording carries on.
    /// Homeward, the ant no longer knows where it is relative to anything.
    fn lose_route(&mut self) {
        if self.returning {
            self.route.clear();
            self.trips = 0;
        } else {
            self.route.rewind();
        }
        self.path_found = false;
    }
}

/// Remembers every move made on the way out and walks the same moves back,
/// turns mirrored, once food is found. Ignores pheromones entirely.
#[derive(Debug)]
pub struct PathMemory {
    config:   ExplorationConfig,
    memories: MemoryStore<PathMemoryState>,
}

impl PathMemory {
    #[must_use]
    pub fn new(config: ExplorationConfig) -> Self {
        Self {
            config,
            memories: MemoryStore::new(),
        }
    }

    #[must_use]
    pub fn memory(&self, ant_id: AntId) -> Option<PathMemoryState> {
        self.memories.snapshot(ant_id)
    }

    fn decide(
        &self,
        perception: &Perception,
        memory: &mut PathMemoryState,
    ) -> Action {
        let ant_id = perception.ant_id;

        if !perception.has_food && perception.is_on(Terrain::Food) {
            // a repeat means the world didn't take the last pickup
            if !memory.returning {
                memory.reach_food(ant_id);
            }
            return Action::PickUpFood;
        }

        if perception.has_food && perception.is_on(Terrain::Colony) {
            if memory.returning {
                memory.reach_colony(ant_id);
            }
            return Action::DropFood;
        }

        if memory.path_found {
            if memory.route.is_exhausted() {
                debug!(
                    "ant {ant_id} ran out of route ({}), exploring",
                    memory.route
                );
                memory.lose_route();
            } else {
                match memory.route.next_step() {
                    Ok(step) => {
                        trace!("ant {ant_id} replays {step}");
                        return step.into();
                    }
                    Err(e) => {
                        warn!("ant {ant_id} dropped its route: {e}");
                        memory.lose_route();
                    }
                }
            }
        }

        let draw = memory.rng.random::<f64>();
        let action = explore(perception, draw, &self.config);
        if let Ok(step) = Step::try_from(action) {
            memory.route.record(step);
        }
        trace!("ant {ant_id} explores: {action}");
        action
    }
}

impl Strategy for PathMemory {
    fn decide_action(&self, perception: &Perception) -> Action {
        self.memories.with(
            perception.ant_id,
            || {
                PathMemoryState::new(ant_rng(
                    self.config.seed,
                    perception.ant_id,
                ))
            },
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

/// Movement-only exploration: head for whatever the ant is after if it is
/// in sight, otherwise wander. Never walks into a blocked cell, so every
/// recorded forward move is one the ant really made.
pub fn explore(
    perception: &Perception,
    draw: f64,
    config: &ExplorationConfig,
) -> Action {
    if is_clipped(perception.visible_count()) {
        return boundary_turn(draw, config);
    }

    let target = if perception.has_food {
        Terrain::Colony
    } else {
        Terrain::Food
    };

    let action = perception.direction_to(target).map_or_else(
        || random_walk(draw, config),
        |direction| steer(perception.direction, direction),
    );

    if action == Action::MoveForward && perception.is_blocked_ahead() {
        boundary_turn(draw, config)
    } else {
        action
    }
}
