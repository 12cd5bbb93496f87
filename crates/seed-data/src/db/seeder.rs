//! Database seeding utilities.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dataset::SampleData;
use crate::error::SeedError;
use crate::models::{Activity, LeaderboardEntry, Team, User, Workout};

/// Row counts per collection after a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub teams: i64,
    pub users: i64,
    pub activities: i64,
    pub leaderboard_entries: i64,
    pub workouts: i64,
}

/// Database seeder for the octofit sample dataset.
///
/// The pool is injected at construction; the seeder never holds global
/// state, so callers control the connection's lifetime.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Acquires a pool for the given URL.
    ///
    /// Connection failures surface as [`SeedError::StoreUnavailable`].
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, SeedError> {
        PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(SeedError::StoreUnavailable)
    }

    /// Runs a full seeding pass: reset the five collections, then
    /// repopulate them in dependency order.
    ///
    /// A failed run leaves the store partially seeded; re-running repairs
    /// it, since every run starts from a full clear. Two concurrent runs
    /// against the same store are not supported.
    pub async fn run(&self, data: &SampleData) -> Result<SeedSummary, SeedError> {
        self.ensure_tables().await?;
        self.clear_all().await?;
        // Index creation after the clear, so leftover duplicate emails in
        // stale data can never block it.
        self.ensure_email_index().await?;

        let team_ids = self.insert_teams(&data.teams).await?;
        let user_ids = self.insert_users(&data.users).await?;
        self.insert_activities(&data.activities).await?;
        self.insert_leaderboard(&data.leaderboard).await?;
        self.insert_workouts(&data.workouts).await?;

        info!(
            "Seeded {} teams and {} users with derived records",
            team_ids.len(),
            user_ids.len()
        );

        self.counts().await
    }

    /// Creates the five tables if absent. Idempotent.
    ///
    /// References between tables are by convention of insertion order, not
    /// foreign keys, matching the document-store shape of the data model.
    pub async fn ensure_tables(&self) -> Result<(), SeedError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS teams (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                team_id UUID NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS activities (
                id UUID PRIMARY KEY,
                user_id UUID NOT NULL,
                kind TEXT NOT NULL,
                distance DOUBLE PRECISION NOT NULL,
                duration_minutes INTEGER NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS leaderboard (
                id UUID PRIMARY KEY,
                user_id UUID NOT NULL,
                points INTEGER NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS workouts (
                id UUID PRIMARY KEY,
                user_id UUID NOT NULL,
                workout TEXT NOT NULL,
                suggestion TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Ensures the unique index on user email. Idempotent.
    pub async fn ensure_email_index(&self) -> Result<(), SeedError> {
        sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS users_email_key ON users (email)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Clears all five collections.
    ///
    /// **WARNING**: This deletes every row, with no backup of prior
    /// contents. Derived collections go first, then users, then teams.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        info!("Clearing all collections...");

        sqlx::query("DELETE FROM workouts")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM leaderboard")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM activities")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM users").execute(&self.pool).await?;
        sqlx::query("DELETE FROM teams").execute(&self.pool).await?;

        info!("All collections cleared");
        Ok(())
    }

    /// Inserts teams, returning their ids in input order.
    pub async fn insert_teams(&self, teams: &[Team]) -> Result<Vec<Uuid>, SeedError> {
        info!("Seeding {} teams...", teams.len());

        for team in teams {
            sqlx::query(
                r#"
                INSERT INTO teams (id, name, description, created_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(team.id)
            .bind(&team.name)
            .bind(&team.description)
            .bind(team.created_at)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeded {} teams", teams.len());
        Ok(teams.iter().map(|t| t.id).collect())
    }

    /// Inserts users, returning their ids in input order.
    ///
    /// A duplicate email in the input surfaces as
    /// [`SeedError::ConstraintViolation`]; the fixed dataset never
    /// triggers it, but a changed dataset must not have it swallowed.
    pub async fn insert_users(&self, users: &[User]) -> Result<Vec<Uuid>, SeedError> {
        info!("Seeding {} users...", users.len());

        for user in users {
            sqlx::query(
                r#"
                INSERT INTO users (id, name, email, team_id, created_at)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.team_id)
            .bind(user.created_at)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeded {} users", users.len());
        Ok(users.iter().map(|u| u.id).collect())
    }

    /// Inserts activities.
    pub async fn insert_activities(&self, activities: &[Activity]) -> Result<(), SeedError> {
        info!("Seeding {} activities...", activities.len());

        for activity in activities {
            sqlx::query(
                r#"
                INSERT INTO activities (id, user_id, kind, distance, duration_minutes, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(activity.id)
            .bind(activity.user_id)
            .bind(activity.kind.as_str())
            .bind(activity.distance)
            .bind(activity.duration_minutes)
            .bind(activity.created_at)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeded {} activities", activities.len());
        Ok(())
    }

    /// Inserts leaderboard entries.
    pub async fn insert_leaderboard(
        &self,
        entries: &[LeaderboardEntry],
    ) -> Result<(), SeedError> {
        info!("Seeding {} leaderboard entries...", entries.len());

        for entry in entries {
            sqlx::query(
                r#"
                INSERT INTO leaderboard (id, user_id, points, created_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(entry.id)
            .bind(entry.user_id)
            .bind(entry.points)
            .bind(entry.created_at)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeded {} leaderboard entries", entries.len());
        Ok(())
    }

    /// Inserts workouts.
    pub async fn insert_workouts(&self, workouts: &[Workout]) -> Result<(), SeedError> {
        info!("Seeding {} workouts...", workouts.len());

        for workout in workouts {
            sqlx::query(
                r#"
                INSERT INTO workouts (id, user_id, workout, suggestion, created_at)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(workout.id)
            .bind(workout.user_id)
            .bind(&workout.workout)
            .bind(&workout.suggestion)
            .bind(workout.created_at)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeded {} workouts", workouts.len());
        Ok(())
    }

    /// Returns row counts for the five collections.
    pub async fn counts(&self) -> Result<SeedSummary, SeedError> {
        let teams = self.count_rows("teams").await?;
        let users = self.count_rows("users").await?;
        let activities = self.count_rows("activities").await?;
        let leaderboard_entries = self.count_rows("leaderboard").await?;
        let workouts = self.count_rows("workouts").await?;

        Ok(SeedSummary {
            teams,
            users,
            activities,
            leaderboard_entries,
            workouts,
        })
    }

    async fn count_rows(&self, table: &str) -> Result<i64, SeedError> {
        // Table names come from a fixed internal set, never caller input.
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
