//! Command implementations for the NFL analytics CLI
//!
//! Thin presentation over the query layer: each handler calls into
//! `analytics`, `storage` or `espn` and prints text or JSON.

pub mod common;
pub mod datasets;
pub mod live;
pub mod players;
pub mod teams;
