//! Typed records for the five seeded collections.
//!
//! The store itself is schema-light (no foreign keys, references are by
//! convention of insertion order), so each record type validates its own
//! shape at construction instead of relying on the database to reject bad
//! data.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::SeedError;

/// Activity type for a logged session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Run,
    Cycle,
    Swim,
}

impl ActivityKind {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Run => "run",
            ActivityKind::Cycle => "cycle",
            ActivityKind::Swim => "swim",
        }
    }
}

/// A team users can belong to.
#[derive(Debug, Clone)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: OffsetDateTime,
}

impl Team {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self, SeedError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SeedError::MalformedRecord("team name is empty".to_string()));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description: description.into(),
            created_at: OffsetDateTime::now_utc(),
        })
    }
}

/// A registered user, referencing the team they belong to.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub team_id: Uuid,
    pub created_at: OffsetDateTime,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        team_id: Uuid,
    ) -> Result<Self, SeedError> {
        let name = name.into();
        let email = email.into();

        if name.is_empty() {
            return Err(SeedError::MalformedRecord("user name is empty".to_string()));
        }
        if !is_well_formed_email(&email) {
            return Err(SeedError::MalformedRecord(format!(
                "not a well-formed email address: {email:?}"
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            team_id,
            created_at: OffsetDateTime::now_utc(),
        })
    }
}

/// A logged activity session for one user.
#[derive(Debug, Clone)]
pub struct Activity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: ActivityKind,
    pub distance: f64,
    pub duration_minutes: i32,
    pub created_at: OffsetDateTime,
}

impl Activity {
    pub fn new(
        user_id: Uuid,
        kind: ActivityKind,
        distance: f64,
        duration_minutes: i32,
    ) -> Result<Self, SeedError> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(SeedError::MalformedRecord(format!(
                "activity distance must be non-negative, got {distance}"
            )));
        }
        if duration_minutes < 0 {
            return Err(SeedError::MalformedRecord(format!(
                "activity duration must be non-negative, got {duration_minutes}"
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            kind,
            distance,
            duration_minutes,
            created_at: OffsetDateTime::now_utc(),
        })
    }
}

/// A user's leaderboard standing.
#[derive(Debug, Clone)]
pub struct LeaderboardEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub points: i32,
    pub created_at: OffsetDateTime,
}

impl LeaderboardEntry {
    pub fn new(user_id: Uuid, points: i32) -> Result<Self, SeedError> {
        if points < 0 {
            return Err(SeedError::MalformedRecord(format!(
                "leaderboard points must be non-negative, got {points}"
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            points,
            created_at: OffsetDateTime::now_utc(),
        })
    }
}

/// A suggested workout for one user.
#[derive(Debug, Clone)]
pub struct Workout {
    pub id: Uuid,
    pub user_id: Uuid,
    pub workout: String,
    pub suggestion: String,
    pub created_at: OffsetDateTime,
}

impl Workout {
    pub fn new(
        user_id: Uuid,
        workout: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Result<Self, SeedError> {
        let workout = workout.into();
        let suggestion = suggestion.into();

        if workout.is_empty() || suggestion.is_empty() {
            return Err(SeedError::MalformedRecord(
                "workout and suggestion must be non-empty".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            workout,
            suggestion,
            created_at: OffsetDateTime::now_utc(),
        })
    }
}

/// Minimal shape check: exactly one `@` with non-empty local part and domain.
fn is_well_formed_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}
