pub mod content;
pub mod growth_file;
pub mod mapgen;
pub mod rng;
pub mod run;
pub mod scaling;
pub mod types;

pub use mapgen::{EnemyPlacement, GeneratedLevel, LevelGenerator, PlacedRoom, generate_level};
pub use rng::GenRng;
pub use run::{GrowthStat, GrowthState, PlayerStats, RunPhase, RunSummary, RunTracker};
pub use types::*;
