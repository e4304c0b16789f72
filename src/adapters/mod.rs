//! Adapters implementing the port traits.
//!
//! - `live`: the real project table and filesystem walk.
//! - `recording`: wraps a live adapter and captures its results to a cassette.
//! - `replaying`: serves previously captured results from a cassette.

pub mod live;
pub mod recording;
pub mod replaying;
