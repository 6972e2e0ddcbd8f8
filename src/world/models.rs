use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::world::{
    perception::Perception,
    types::{Action, AntId, Direction, Offset, Terrain},
};

#[derive(Serialize, Deserialize, Debug)]
pub enum APIVersion {
    #[serde(rename = "1")]
    One,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Status {
    pub apiversion: APIVersion,
    pub author:     String,
    pub strategy:   String,
    pub version:    String,
}

/// One cell of the sensor window as the simulation sends it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SensedCell {
    pub x:              i64,
    pub y:              i64,
    pub terrain:        Terrain,
    #[serde(default)]
    pub home_pheromone: f64,
    #[serde(default)]
    pub food_pheromone: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PerceptionRequest {
    pub ant_id:    AntId,
    pub direction: Direction,
    #[serde(default)]
    pub has_food:  bool,
    pub cells:     Vec<SensedCell>,
}

impl From<PerceptionRequest> for Perception {
    fn from(request: PerceptionRequest) -> Self {
        let mut visible_cells = HashMap::with_capacity(request.cells.len());
        let mut home_pheromone = HashMap::with_capacity(request.cells.len());
        let mut food_pheromone = HashMap::with_capacity(request.cells.len());

        for cell in request.cells {
            let offset = Offset::new(cell.x, cell.y);
            visible_cells.insert(offset, cell.terrain);
            home_pheromone.insert(offset, cell.home_pheromone);
            food_pheromone.insert(offset, cell.food_pheromone);
        }

        Self {
            ant_id: request.ant_id,
            direction: request.direction,
            has_food: request.has_food,
            visible_cells,
            home_pheromone,
            food_pheromone,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub action: Action,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct ForgetRequest {
    pub ant_id: AntId,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forgotten {
    pub forgotten: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_becomes_perception() {
        let request = PerceptionRequest {
            ant_id:    7,
            direction: Direction::SouthEast,
            has_food:  true,
            cells:     vec![
                SensedCell {
                    x:              0,
                    y:              0,
                    terrain:        Terrain::Colony,
                    home_pheromone: 2.5,
                    food_pheromone: 0.0,
                },
                SensedCell {
                    x:              1,
                    y:              1,
                    terrain:        Terrain::Wall,
                    home_pheromone: 0.0,
                    food_pheromone: 1.0,
                },
            ],
        };

        let perception = Perception::from(request);

        assert_eq!(perception.ant_id, 7);
        assert!(perception.has_food);
        assert!(perception.is_on(Terrain::Colony));
        assert!(perception.is_blocked_ahead());
        assert_eq!(perception.home_pheromone[&Offset::new(0, 0)], 2.5);
        assert_eq!(perception.food_pheromone[&Offset::new(1, 1)], 1.0);
    }
}
