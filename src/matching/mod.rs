pub mod contract;
pub mod experience;
pub mod levels;
pub mod location;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use levels::{compare_levels, LevelRelation};
pub use scoring::{MatchLevel, MatchingEngine, MatchingResult};
