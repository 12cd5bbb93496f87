//! Database integration for seeding sample data.
//!
//! The [`Seeder`] clears and repopulates the five collections in dependency
//! order, with per-stage progress reporting.

mod seeder;

pub use seeder::{SeedSummary, Seeder};
