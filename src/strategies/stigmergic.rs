use std::collections::HashMap;

use itertools::Itertools;
use log::trace;
use rand::{rngs::StdRng, Rng};

use super::{
    config::ExplorationConfig,
    explore::{boundary_turn, is_clipped, random_walk},
    store::{ant_rng, MemoryStore},
    Strategy,
};
use crate::world::{
    perception::Perception,
    types::{Action, AntId, Offset, Terrain},
    utils::steer,
};

#[derive(Debug, Clone)]
pub struct StigmergicMemory {
    pub last_action: Option<Action>,
    rng:             StdRng,
}

/// Follows pheromone trails laid by the rest of the colony and lays its
/// own on alternate ticks. Remembers nothing but its previous action.
#[derive(Debug)]
pub struct Stigmergic {
    config:   ExplorationConfig,
    memories: MemoryStore<StigmergicMemory>,
}

impl Stigmergic {
    #[must_use]
    pub fn new(config: ExplorationConfig) -> Self {
        Self {
            config,
            memories: MemoryStore::new(),
        }
    }

    #[must_use]
    pub fn last_action(&self, ant_id: AntId) -> Option<Action> {
        self.memories
            .snapshot(ant_id)
            .and_then(|memory| memory.last_action)
    }

    fn decide(
        &self,
        perception: &Perception,
        memory: &mut StigmergicMemory,
    ) -> Action {
        let on_food = perception.is_on(Terrain::Food);
        let on_colony = perception.is_on(Terrain::Colony);

        let action = if !perception.has_food && on_food {
            Action::PickUpFood
        } else if perception.has_food && on_colony {
            Action::DropFood
        } else {
            match memory.last_action {
                // mark where the food was
                Some(Action::PickUpFood) => Action::DepositFoodPheromone,
                Some(Action::DropFood) | None => Action::DepositHomePheromone,
                Some(last) => {
                    let draw = memory.rng.random::<f64>();
                    explore(perception, last, draw, &self.config)
                }
            }
        };

        trace!(
            "ant {} ({:?} -> {action}) facing {}",
            perception.ant_id,
            memory.last_action,
            perception.direction
        );

        memory.last_action = Some(action);
        action
    }
}

impl Strategy for Stigmergic {
    fn decide_action(&self, perception: &Perception) -> Action {
        self.memories.with(
            perception.ant_id,
            || StigmergicMemory {
                last_action: None,
                rng:         ant_rng(self.config.seed, perception.ant_id),
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

/// Pheromone-aware exploration. `last` is the ant's previous action.
pub fn explore(
    perception: &Perception,
    last: Action,
    draw: f64,
    config: &ExplorationConfig,
) -> Action {
    if is_clipped(perception.visible_count()) {
        return boundary_turn(draw, config);
    }

    if perception.can_see(Terrain::Food) {
        if last != Action::DepositFoodPheromone {
            return Action::DepositFoodPheromone;
        }
        if !perception.has_food {
            if let Some(direction) = perception.direction_to(Terrain::Food) {
                return steer(perception.direction, direction);
            }
        }
    }

    if perception.can_see(Terrain::Colony) {
        if last != Action::DepositHomePheromone {
            return Action::DepositHomePheromone;
        }
        if perception.has_food {
            if let Some(direction) = perception.direction_to(Terrain::Colony)
            {
                return steer(perception.direction, direction);
            }
        }
    }

    let (field, deposit) = if perception.has_food {
        (&perception.home_pheromone, Action::DepositHomePheromone)
    } else {
        (&perception.food_pheromone, Action::DepositFoodPheromone)
    };

    if let Some((offset, _)) = rank_pheromone(field)
        .into_iter()
        .next()
        .filter(|(_, value)| *value > 0.0)
    {
        if last != deposit {
            return deposit;
        }
        let direction = Perception::direction_from_delta(offset.x, offset.y);
        return steer(perception.direction, direction);
    }

    random_walk(draw, config)
}

/// Orders a pheromone field with positive intensities first, weakest to
/// strongest, and everything else after. Ties fall back to coordinates.
#[must_use]
pub fn rank_pheromone(field: &HashMap<Offset, f64>) -> Vec<(Offset, f64)> {
    field
        .iter()
        .map(|(offset, value)| (*offset, *value))
        .sorted_by(|(a_offset, a), (b_offset, b)| {
            let positive = |value: f64| value > 0.0;
            positive(*b)
                .cmp(&positive(*a))
                .then_with(|| a.total_cmp(b))
                .then_with(|| {
                    (a_offset.y, a_offset.x).cmp(&(b_offset.y, b_offset.x))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::types::Direction;

    fn strategy() -> Stigmergic {
        Stigmergic::new(ExplorationConfig::default().seeded(7))
    }

    #[test]
    fn first_decision_marks_home() {
        let brain = strategy();
        let perception = Perception::new(1, Direction::North).with_window(1);
        assert_eq!(
            brain.decide_action(&perception),
            Action::DepositHomePheromone
        );
    }

    #[test]
    fn pickup_is_followed_by_food_pheromone() {
        let brain = strategy();
        let on_food = Perception::new(1, Direction::North)
            .with_window(1)
            .with_cell(0, 0, Terrain::Food);

        assert_eq!(brain.decide_action(&on_food), Action::PickUpFood);

        let carrying = on_food.carrying(true);
        assert_eq!(
            brain.decide_action(&carrying),
            Action::DepositFoodPheromone
        );
    }

    #[test]
    fn drop_is_followed_by_home_pheromone() {
        let brain = strategy();
        let on_colony = Perception::new(2, Direction::East)
            .with_window(1)
            .with_cell(0, 0, Terrain::Colony)
            .carrying(true);

        assert_eq!(brain.decide_action(&on_colony), Action::DropFood);

        let empty_handed = on_colony.carrying(false);
        assert_eq!(
            brain.decide_action(&empty_handed),
            Action::DepositHomePheromone
        );
    }

    #[test]
    fn drops_food_on_colony_whatever_else_is_visible() {
        let brain = strategy();
        let perception = Perception::new(3, Direction::South)
            .with_window(1)
            .with_cell(0, 0, Terrain::Colony)
            .with_cell(1, 0, Terrain::Food)
            .with_cell(0, 1, Terrain::Wall)
            .with_home_pheromone(1, 1, 9.0)
            .carrying(true);

        // the first call would otherwise be a home pheromone deposit
        assert_eq!(brain.decide_action(&perception), Action::DropFood);
        assert_eq!(brain.decide_action(&perception), Action::DropFood);
    }

    #[test]
    fn clipped_window_only_turns() {
        let config = ExplorationConfig::default();
        let perception = Perception::new(1, Direction::North);
        for draw in [0.0, 0.25, 0.5, 0.75, 0.99] {
            let action = explore(&perception, Action::MoveForward, draw, &config);
            assert!(action.is_turn(), "{draw} gave {action}");
        }
        assert_eq!(
            explore(&perception, Action::MoveForward, 0.3, &config),
            Action::TurnLeft
        );
        assert_eq!(
            explore(&perception, Action::MoveForward, 0.7, &config),
            Action::TurnRight
        );
    }

    #[test]
    fn visible_food_alternates_marking_and_approaching() {
        let config = ExplorationConfig::default();
        let perception = Perception::new(1, Direction::North)
            .with_window(2)
            .with_cell(2, 0, Terrain::Food);

        assert_eq!(
            explore(&perception, Action::MoveForward, 0.1, &config),
            Action::DepositFoodPheromone
        );
        // food is due east, north turns right
        assert_eq!(
            explore(&perception, Action::DepositFoodPheromone, 0.1, &config),
            Action::TurnRight
        );

        let facing_food = Perception {
            direction: Direction::East,
            ..perception
        };
        assert_eq!(
            explore(&facing_food, Action::DepositFoodPheromone, 0.1, &config),
            Action::MoveForward
        );
    }

    #[test]
    fn carrying_ant_heads_for_visible_colony() {
        let config = ExplorationConfig::default();
        let perception = Perception::new(1, Direction::South)
            .with_window(2)
            .with_cell(0, 2, Terrain::Colony)
            .carrying(true);

        assert_eq!(
            explore(&perception, Action::TurnLeft, 0.95, &config),
            Action::DepositHomePheromone
        );
        assert_eq!(
            explore(&perception, Action::DepositHomePheromone, 0.95, &config),
            Action::MoveForward
        );
    }

    #[test]
    fn carrying_ant_seeing_food_and_colony_only_marks() {
        let brain = strategy();
        let perception = Perception::new(4, Direction::North)
            .with_window(1)
            .with_cell(1, 0, Terrain::Food)
            .with_cell(-1, 0, Terrain::Colony)
            .carrying(true);

        let actions: Vec<Action> =
            (0..10).map(|_| brain.decide_action(&perception)).collect();

        for (i, action) in actions.iter().enumerate() {
            let expected = if i % 2 == 0 {
                Action::DepositHomePheromone
            } else {
                Action::DepositFoodPheromone
            };
            assert_eq!(*action, expected, "call {i}");
        }
    }

    #[test]
    fn pheromone_ranking_puts_weak_positive_trails_first() {
        let field = HashMap::from([
            (Offset::new(1, 0), 0.0),
            (Offset::new(0, 1), 3.0),
            (Offset::new(-1, 0), -2.0),
            (Offset::new(0, -1), 0.5),
        ]);

        let ranked: Vec<f64> =
            rank_pheromone(&field).into_iter().map(|(_, v)| v).collect();

        assert_eq!(ranked, vec![0.5, 3.0, -2.0, 0.0]);
    }

    #[test]
    fn follows_food_trail_after_marking_it() {
        let config = ExplorationConfig::default();
        let perception = Perception::new(1, Direction::North)
            .with_window(1)
            .with_food_pheromone(-1, 0, 4.0)
            .with_food_pheromone(1, 0, 0.0);

        assert_eq!(
            explore(&perception, Action::MoveForward, 0.1, &config),
            Action::DepositFoodPheromone
        );
        // trail is due west (6), north turns left past south
        assert_eq!(
            explore(&perception, Action::DepositFoodPheromone, 0.1, &config),
            Action::TurnLeft
        );
    }

    #[test]
    fn no_signal_means_random_walk() {
        let config = ExplorationConfig::default();
        let perception = Perception::new(1, Direction::North)
            .with_window(1)
            .with_food_pheromone(0, -1, 0.0);

        assert_eq!(
            explore(&perception, Action::MoveForward, 0.5, &config),
            Action::MoveForward
        );
        assert_eq!(
            explore(&perception, Action::MoveForward, 0.85, &config),
            Action::TurnLeft
        );
        assert_eq!(
            explore(&perception, Action::MoveForward, 0.95, &config),
            Action::TurnRight
        );
    }

    #[test]
    fn forgetting_restarts_the_ant() {
        let brain = strategy();
        let perception = Perception::new(9, Direction::North).with_window(1);

        brain.decide_action(&perception);
        assert_eq!(
            brain.last_action(9),
            Some(Action::DepositHomePheromone)
        );
        assert_eq!(brain.tracked_ants(), 1);

        assert!(brain.forget(9));
        assert_eq!(brain.tracked_ants(), 0);
        assert_eq!(
            brain.decide_action(&perception),
            Action::DepositHomePheromone
        );
    }
}
