//! Type-safe wrappers and enums for NFL analytics arguments.

pub mod ids;
pub mod position;

pub use ids::{Season, TeamId};
pub use position::Position;
