//! Seed script - resets and repopulates the octofit sample dataset.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```

use seed_data::config::SeedConfig;
use seed_data::dataset::SampleData;
use seed_data::db::Seeder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();

    let pool = Seeder::connect(&config.database_url, config.max_connections).await?;
    tracing::info!("Connected to database");

    let data = SampleData::build()?;
    let summary = Seeder::new(pool).run(&data).await?;

    tracing::info!("Seed completed!");
    tracing::info!("  Teams: {}", summary.teams);
    tracing::info!("  Users: {}", summary.users);
    tracing::info!("  Activities: {}", summary.activities);
    tracing::info!("  Leaderboard entries: {}", summary.leaderboard_entries);
    tracing::info!("  Workouts: {}", summary.workouts);

    println!("octofit_db populated with test data");

    Ok(())
}
