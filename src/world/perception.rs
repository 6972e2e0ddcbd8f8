use std::collections::HashMap;

use itertools::Itertools;

use crate::world::types::{AntId, Direction, Offset, Terrain, ORIGIN};

/// Everything an ant knows about the world for one tick.
///
/// Built by the simulation, read by a strategy, then thrown away. Offsets
/// are relative to the ant and use world orientation, so the cell in front
/// of the ant is always `direction.delta()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Perception {
    pub ant_id:         AntId,
    pub direction:      Direction,
    pub has_food:       bool,
    pub visible_cells:  HashMap<Offset, Terrain>,
    pub home_pheromone: HashMap<Offset, f64>,
    pub food_pheromone: HashMap<Offset, f64>,
}

impl Perception {
    /// A perception that sees nothing but the cell the ant stands on.
    #[must_use]
    pub fn new(ant_id: AntId, direction: Direction) -> Self {
        Self {
            ant_id,
            direction,
            has_food: false,
            visible_cells: HashMap::from([(ORIGIN, Terrain::Empty)]),
            home_pheromone: HashMap::new(),
            food_pheromone: HashMap::new(),
        }
    }

    /// Fills a square window of empty cells around the ant.
    #[must_use]
    pub fn with_window(mut self, radius: i64) -> Self {
        for (x, y) in (-radius..=radius).cartesian_product(-radius..=radius) {
            self.visible_cells.insert(Offset::new(x, y), Terrain::Empty);
        }
        self
    }

    #[must_use]
    pub fn with_cell(mut self, x: i64, y: i64, terrain: Terrain) -> Self {
        self.visible_cells.insert(Offset::new(x, y), terrain);
        self
    }

    #[must_use]
    pub fn with_home_pheromone(mut self, x: i64, y: i64, value: f64) -> Self {
        self.home_pheromone.insert(Offset::new(x, y), value);
        self
    }

    #[must_use]
    pub fn with_food_pheromone(mut self, x: i64, y: i64, value: f64) -> Self {
        self.food_pheromone.insert(Offset::new(x, y), value);
        self
    }

    #[must_use]
    pub const fn carrying(mut self, has_food: bool) -> Self {
        self.has_food = has_food;
        self
    }

    /// Nearest of the 8 compass directions for a relative offset. The zero
    /// offset has no bearing and reads as North.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn direction_from_delta(dx: i64, dy: i64) -> Direction {
        if dx == 0 && dy == 0 {
            return Direction::North;
        }
        // clockwise from north, with y pointing south
        let bearing = (dx as f64).atan2(-(dy as f64)).to_degrees();
        let sector = (bearing / 45.0).round() as i64;
        Direction::from_ordinal(sector.rem_euclid(8) as u8)
    }

    /// `None` when the offset lies outside the sensor window.
    #[must_use]
    pub fn terrain_at(&self, offset: Offset) -> Option<Terrain> {
        self.visible_cells.get(&offset).copied()
    }

    #[must_use]
    pub fn is_on(&self, terrain: Terrain) -> bool {
        self.terrain_at(ORIGIN) == Some(terrain)
    }

    #[must_use]
    pub fn can_see(&self, terrain: Terrain) -> bool {
        self.visible_cells.values().any(|t| *t == terrain)
    }

    /// Closest visible cell of the given kind. Ties are broken by
    /// coordinates so the answer doesn't depend on hash order.
    #[must_use]
    pub fn nearest(&self, terrain: Terrain) -> Option<Offset> {
        self.visible_cells
            .iter()
            .filter(|(_, t)| **t == terrain)
            .map(|(offset, _)| *offset)
            .min_by_key(|offset| (offset.distance_squared(), offset.y, offset.x))
    }

    #[must_use]
    pub fn direction_to(&self, terrain: Terrain) -> Option<Direction> {
        self.nearest(terrain)
            .map(|offset| Self::direction_from_delta(offset.x, offset.y))
    }

    /// The cell the ant would step onto with a forward move.
    #[must_use]
    pub const fn ahead(&self) -> Offset {
        self.direction.delta()
    }

    /// Walls and cells outside the window both block a forward move.
    #[must_use]
    pub fn is_blocked_ahead(&self) -> bool {
        !self
            .terrain_at(self.ahead())
            .is_some_and(Terrain::is_passable)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_delta_matches_unit_deltas() {
        for &direction in Direction::iter() {
            let delta = direction.delta();
            assert_eq!(
                Perception::direction_from_delta(delta.x, delta.y),
                direction
            );
            assert_eq!(
                Perception::direction_from_delta(delta.x * 3, delta.y * 3),
                direction
            );
        }
    }

    #[test]
    fn direction_from_delta_rounds_to_nearest_sector() {
        assert_eq!(
            Perception::direction_from_delta(1, -3),
            Direction::North
        );
        assert_eq!(
            Perception::direction_from_delta(2, -3),
            Direction::NorthEast
        );
        assert_eq!(Perception::direction_from_delta(-4, 1), Direction::West);
        assert_eq!(Perception::direction_from_delta(0, 0), Direction::North);
    }

    #[test]
    fn nearest_prefers_the_closest_cell() {
        let perception = Perception::new(1, Direction::North)
            .with_window(2)
            .with_cell(2, 2, Terrain::Food)
            .with_cell(-1, 0, Terrain::Food);

        assert_eq!(perception.nearest(Terrain::Food), Some(Offset::new(-1, 0)));
        assert_eq!(perception.direction_to(Terrain::Food), Some(Direction::West));
        assert_eq!(perception.nearest(Terrain::Colony), None);
    }

    #[test]
    fn missing_cells_block_movement() {
        let clipped = Perception::new(1, Direction::East);
        assert!(clipped.is_blocked_ahead());

        let open = Perception::new(1, Direction::East).with_window(1);
        assert!(!open.is_blocked_ahead());

        let walled = open.with_cell(1, 0, Terrain::Wall);
        assert!(walled.is_blocked_ahead());
    }
}
