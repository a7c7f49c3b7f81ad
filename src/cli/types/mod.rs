//! Strongly-typed CLI and API values.

pub mod ids;
pub mod time;

pub use ids::{LeagueId, PlayerId, TeamId};
pub use time::Season;
