//! The fixed sample dataset.
//!
//! Construction is an ordered pipeline: teams first, then users referencing
//! team ids, then one activity, leaderboard entry, and workout per user.
//! Each stage consumes the identifiers produced by the stage before it, so a
//! fully built [`SampleData`] is internally consistent by construction.

use crate::error::SeedError;
use crate::models::{Activity, ActivityKind, LeaderboardEntry, Team, User, Workout};

/// The complete dataset for one seeding run.
#[derive(Debug, Clone)]
pub struct SampleData {
    pub teams: Vec<Team>,
    pub users: Vec<User>,
    pub activities: Vec<Activity>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub workouts: Vec<Workout>,
}

impl SampleData {
    /// Builds the full dataset, wiring references stage by stage.
    pub fn build() -> Result<Self, SeedError> {
        let teams = sample_teams()?;
        let users = sample_users(&teams)?;
        let activities = sample_activities(&users)?;
        let leaderboard = sample_leaderboard(&users)?;
        let workouts = sample_workouts(&users)?;

        Ok(Self {
            teams,
            users,
            activities,
            leaderboard,
            workouts,
        })
    }
}

/// The two teams: Marvel and DC.
pub fn sample_teams() -> Result<Vec<Team>, SeedError> {
    Ok(vec![
        Team::new("Marvel", "Team Marvel")?,
        Team::new("DC", "Team DC")?,
    ])
}

/// Four users, two per team.
pub fn sample_users(teams: &[Team]) -> Result<Vec<User>, SeedError> {
    let marvel = &teams[0];
    let dc = &teams[1];

    Ok(vec![
        User::new("Tony Stark", "tony@marvel.com", marvel.id)?,
        User::new("Steve Rogers", "steve@marvel.com", marvel.id)?,
        User::new("Bruce Wayne", "bruce@dc.com", dc.id)?,
        User::new("Clark Kent", "clark@dc.com", dc.id)?,
    ])
}

/// One activity per user, in user order.
pub fn sample_activities(users: &[User]) -> Result<Vec<Activity>, SeedError> {
    Ok(vec![
        Activity::new(users[0].id, ActivityKind::Run, 5.0, 30)?,
        Activity::new(users[1].id, ActivityKind::Cycle, 20.0, 60)?,
        Activity::new(users[2].id, ActivityKind::Swim, 2.0, 40)?,
        Activity::new(users[3].id, ActivityKind::Run, 10.0, 50)?,
    ])
}

/// One leaderboard entry per user, in user order.
pub fn sample_leaderboard(users: &[User]) -> Result<Vec<LeaderboardEntry>, SeedError> {
    Ok(vec![
        LeaderboardEntry::new(users[0].id, 100)?,
        LeaderboardEntry::new(users[1].id, 90)?,
        LeaderboardEntry::new(users[2].id, 110)?,
        LeaderboardEntry::new(users[3].id, 95)?,
    ])
}

/// One workout suggestion per user, in user order.
pub fn sample_workouts(users: &[User]) -> Result<Vec<Workout>, SeedError> {
    Ok(vec![
        Workout::new(users[0].id, "Chest Day", "Bench Press")?,
        Workout::new(users[1].id, "Leg Day", "Squats")?,
        Workout::new(users[2].id, "Back Day", "Deadlift")?,
        Workout::new(users[3].id, "Cardio", "Running")?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use uuid::Uuid;

    #[test]
    fn test_documented_counts() {
        let data = SampleData::build().unwrap();

        assert_eq!(data.teams.len(), 2);
        assert_eq!(data.users.len(), 4);
        assert_eq!(data.activities.len(), 4);
        assert_eq!(data.leaderboard.len(), 4);
        assert_eq!(data.workouts.len(), 4);
    }

    #[test]
    fn test_team_names() {
        let teams = sample_teams().unwrap();
        let names: HashSet<&str> = teams.iter().map(|t| t.name.as_str()).collect();

        assert_eq!(names, HashSet::from(["Marvel", "DC"]));
    }

    #[test]
    fn test_emails_pairwise_distinct() {
        let data = SampleData::build().unwrap();
        let emails: HashSet<&str> = data.users.iter().map(|u| u.email.as_str()).collect();

        assert_eq!(emails.len(), data.users.len());
        assert_eq!(
            emails,
            HashSet::from([
                "tony@marvel.com",
                "steve@marvel.com",
                "bruce@dc.com",
                "clark@dc.com",
            ])
        );
    }

    #[test]
    fn test_users_reference_existing_teams() {
        let data = SampleData::build().unwrap();
        let team_ids: HashSet<Uuid> = data.teams.iter().map(|t| t.id).collect();

        for user in &data.users {
            assert!(team_ids.contains(&user.team_id));
        }
    }

    #[test]
    fn test_derived_records_reference_existing_users() {
        let data = SampleData::build().unwrap();
        let user_ids: HashSet<Uuid> = data.users.iter().map(|u| u.id).collect();

        for activity in &data.activities {
            assert!(user_ids.contains(&activity.user_id));
        }
        for entry in &data.leaderboard {
            assert!(user_ids.contains(&entry.user_id));
        }
        for workout in &data.workouts {
            assert!(user_ids.contains(&workout.user_id));
        }
    }

    #[test]
    fn test_one_derived_record_per_user() {
        let data = SampleData::build().unwrap();

        let activity_users: HashSet<Uuid> = data.activities.iter().map(|a| a.user_id).collect();
        let entry_users: HashSet<Uuid> = data.leaderboard.iter().map(|e| e.user_id).collect();
        let workout_users: HashSet<Uuid> = data.workouts.iter().map(|w| w.user_id).collect();

        assert_eq!(activity_users.len(), 4);
        assert_eq!(entry_users.len(), 4);
        assert_eq!(workout_users.len(), 4);
    }

    #[test]
    fn test_two_builds_share_structure_not_ids() {
        let first = SampleData::build().unwrap();
        let second = SampleData::build().unwrap();

        assert_eq!(first.teams.len(), second.teams.len());
        assert_eq!(first.users.len(), second.users.len());
        assert_ne!(first.teams[0].id, second.teams[0].id);
        assert_ne!(first.users[0].id, second.users[0].id);
    }
}
