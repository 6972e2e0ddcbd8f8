use std::{fmt, ops::Add, slice::Iter};

use serde::{Deserialize, Serialize};

pub type AntId = u64;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRECTIONS: [Direction; 8] = [
            Direction::North,
            Direction::NorthEast,
            Direction::East,
            Direction::SouthEast,
            Direction::South,
            Direction::SouthWest,
            Direction::West,
            Direction::NorthWest,
        ];
        DIRECTIONS.iter()
    }

    /// Clockwise position on the compass, North being 0.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::NorthEast => 1,
            Direction::East => 2,
            Direction::SouthEast => 3,
            Direction::South => 4,
            Direction::SouthWest => 5,
            Direction::West => 6,
            Direction::NorthWest => 7,
        }
    }

    /// Wraps around, so 8 is North again.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Direction {
        match ordinal % 8 {
            0 => Direction::North,
            1 => Direction::NorthEast,
            2 => Direction::East,
            3 => Direction::SouthEast,
            4 => Direction::South,
            5 => Direction::SouthWest,
            6 => Direction::West,
            _ => Direction::NorthWest,
        }
    }

    /// Unit step in screen coordinates (y grows southward).
    #[must_use]
    pub const fn delta(self) -> Offset {
        let (x, y) = match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        };
        Offset { x, y }
    }

    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        self.ordinal() % 2 == 1
    }

    #[must_use]
    pub const fn opposite(self) -> Direction {
        Direction::from_ordinal(self.ordinal() + 4)
    }

    /// The facing that results from applying a turn action. Anything
    /// other than a turn leaves the facing unchanged.
    #[must_use]
    pub const fn after(self, action: Action) -> Direction {
        match action {
            Action::TurnLeft => Direction::from_ordinal(self.ordinal() + 7),
            Action::TurnRight => Direction::from_ordinal(self.ordinal() + 1),
            _ => self,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::North => "N",
                Direction::NorthEast => "NE",
                Direction::East => "E",
                Direction::SouthEast => "SE",
                Direction::South => "S",
                Direction::SouthWest => "SW",
                Direction::West => "W",
                Direction::NorthWest => "NW",
            }
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    MoveForward,
    TurnLeft,
    TurnRight,
    PickUpFood,
    DropFood,
    DepositHomePheromone,
    DepositFoodPheromone,
}

impl Action {
    pub fn iter() -> Iter<'static, Action> {
        static ACTIONS: [Action; 7] = [
            Action::MoveForward,
            Action::TurnLeft,
            Action::TurnRight,
            Action::PickUpFood,
            Action::DropFood,
            Action::DepositHomePheromone,
            Action::DepositFoodPheromone,
        ];
        ACTIONS.iter()
    }

    #[must_use]
    pub const fn is_turn(self) -> bool {
        matches!(self, Action::TurnLeft | Action::TurnRight)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Action::MoveForward => "MOVE_FORWARD",
                Action::TurnLeft => "TURN_LEFT",
                Action::TurnRight => "TURN_RIGHT",
                Action::PickUpFood => "PICK_UP_FOOD",
                Action::DropFood => "DROP_FOOD",
                Action::DepositHomePheromone => "DEPOSIT_HOME_PHEROMONE",
                Action::DepositFoodPheromone => "DEPOSIT_FOOD_PHEROMONE",
            }
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Terrain {
    Empty,
    Wall,
    Food,
    Colony,
}

impl Terrain {
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Terrain::Wall)
    }
}

/// A relative offset inside the sensor window, or an absolute position in
/// an ant's dead-reckoned frame. Both use the same screen coordinates.
#[derive(
    Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash, Clone, Copy,
)]
pub struct Offset {
    pub x: i64,
    pub y: i64,
}

pub const ORIGIN: Offset = Offset { x: 0, y: 0 };

impl Offset {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn neighbour(self, direction: Direction) -> Offset {
        let delta = direction.delta();
        Offset {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }

    /// Vector pointing from `self` to `target`.
    #[must_use]
    pub const fn towards(self, target: Offset) -> Offset {
        Offset {
            x: target.x - self.x,
            y: target.y - self.y,
        }
    }

    #[must_use]
    pub const fn distance_squared(self) -> i64 {
        self.x * self.x + self.y * self.y
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
