//! Synthetic member roster generator.
//!
//! This crate produces randomized rosters in the tab-delimited format read
//! by `roster-payload`, for exercising the payload builder with realistic
//! volumes. Output is sorted by join date and can be made reproducible with
//! a fixed seed.

pub mod error;
pub mod generator;
pub mod stats;
pub mod writer;

pub use error::GenError;
pub use generator::{GeneratedMember, generate_members, render_roster};
pub use stats::RosterStats;
pub use writer::{DEFAULT_COUNT, DEFAULT_OUTPUT, write_roster};
