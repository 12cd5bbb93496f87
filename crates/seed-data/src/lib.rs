//! Sample data seeding for octofit-tracker.
//!
//! This crate resets and repopulates the application's five collections
//! (teams, users, activities, leaderboard, workouts) with a fixed,
//! interrelated dataset, and provides smoke checks for the API's list
//! endpoints.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let pool = Seeder::connect(&config.database_url, config.max_connections).await?;
//! let data = SampleData::build()?;
//! let summary = Seeder::new(pool).run(&data).await?;
//! assert_eq!(summary.users, 4);
//! ```

pub mod api;
pub mod config;
pub mod dataset;
pub mod db;
pub mod error;
pub mod models;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::api::{ApiProbe, EndpointReport, COLLECTIONS};
    pub use crate::config::SeedConfig;
    pub use crate::dataset::SampleData;
    pub use crate::db::{SeedSummary, Seeder};
    pub use crate::error::SeedError;
    pub use crate::models::{Activity, ActivityKind, LeaderboardEntry, Team, User, Workout};
}
