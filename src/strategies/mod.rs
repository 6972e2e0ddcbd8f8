pub mod config;
pub mod explore;
pub mod path_memory;
pub mod smart;
pub mod stigmergic;
pub mod store;

use std::{fmt, str::FromStr};

use color_eyre::{eyre::eyre, Report};
pub use config::ExplorationConfig;
pub use path_memory::PathMemory;
pub use smart::Smart;
pub use stigmergic::Stigmergic;

use crate::world::{
    perception::Perception,
    types::{Action, AntId},
};

/// An ant brain. Called once per ant per tick with a fresh perception.
///
/// Implementations keep their per-ant memory behind `&self` so one
/// instance can serve every ant, from several threads if the simulation
/// wants to.
pub trait Strategy: Send + Sync {
    /// Always returns an action. Broken memory or odd perceptions make the
    /// ant explore rather than fail.
    fn decide_action(&self, perception: &Perception) -> Action;

    /// Called when an ant dies. Returns whether the ant had any memory.
    fn forget(&self, ant_id: AntId) -> bool;

    /// Number of ants currently holding memory.
    fn tracked_ants(&self) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Stigmergic,
    PathMemory,
    Smart,
}

impl StrategyKind {
    /// The thresholds a strategy explores with unless told otherwise.
    #[must_use]
    pub const fn default_config(self) -> ExplorationConfig {
        match self {
            StrategyKind::PathMemory => ExplorationConfig::wandering(),
            StrategyKind::Stigmergic | StrategyKind::Smart => {
                ExplorationConfig::forward_biased()
            }
        }
    }

    /// Builds the strategy. `config` overrides the strategy's default
    /// thresholds when given.
    #[must_use]
    pub fn build(self, config: Option<ExplorationConfig>) -> Box<dyn Strategy> {
        let config = config.unwrap_or_else(|| self.default_config());
        match self {
            StrategyKind::Stigmergic => Box::new(Stigmergic::new(config)),
            StrategyKind::PathMemory => Box::new(PathMemory::new(config)),
            StrategyKind::Smart => Box::new(Smart::new(config)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StrategyKind::Stigmergic => "stigmergic",
                StrategyKind::PathMemory => "path-memory",
                StrategyKind::Smart => "smart",
            }
        )
    }
}

impl FromStr for StrategyKind {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "stigmergic" | "collaborative" => Ok(StrategyKind::Stigmergic),
            "path-memory" | "non-cooperative" => Ok(StrategyKind::PathMemory),
            "smart" | "hybrid" => Ok(StrategyKind::Smart),
            other => Err(eyre!("unknown strategy {other:?}")),
        }
    }
}
