use serde::{Deserialize, Serialize};

/// Thresholds for the random draws that drive exploration.
///
/// A draw `r` is uniform in `[0, 1)`. When the sensor window is clipped the
/// ant turns right if `r > boundary_turn_split`, left otherwise. On a random
/// walk it moves forward if `r < forward_below`, turns left if
/// `r < turn_left_below`, and turns right otherwise.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ExplorationConfig {
    pub boundary_turn_split: f64,
    pub forward_below:       f64,
    pub turn_left_below:     f64,
    /// Fixes every ant's random stream. Unseeded ants draw from the OS.
    pub seed:                Option<u64>,
}

impl ExplorationConfig {
    pub const BOUNDARY_TURN_SPLIT: f64 = 0.5;

    /// 80% forward, 10% left, 10% right.
    #[must_use]
    pub const fn forward_biased() -> Self {
        Self {
            boundary_turn_split: Self::BOUNDARY_TURN_SPLIT,
            forward_below:       0.8,
            turn_left_below:     0.9,
            seed:                None,
        }
    }

    /// 60% forward, 20% left, 20% right. Used by the path-memory ants,
    /// which replay turns exactly and can afford to wander more.
    #[must_use]
    pub const fn wandering() -> Self {
        Self {
            boundary_turn_split: Self::BOUNDARY_TURN_SPLIT,
            forward_below:       0.6,
            turn_left_below:     0.8,
            seed:                None,
        }
    }

    #[must_use]
    pub const fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self::forward_biased()
    }
}
