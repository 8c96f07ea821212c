use std::collections::BTreeMap;

use dashmap::DashMap;

use crate::errors::{DirectoryError, DirectoryResult};
use crate::models::Activity;
use crate::seed;

/// Snapshot of every activity, ordered by name.
pub type ActivityListing = BTreeMap<String, Activity>;

/// In-memory registry of activities and their rosters.
///
/// Each activity sits behind its own shard lock, so the check and the mutation
/// of a signup or unregister happen under one write guard. Activities are only
/// added at construction.
pub struct ActivityDirectory {
    activities: DashMap<String, Activity>,
}

impl ActivityDirectory {
    pub fn with_activities<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        Self {
            activities: activities.into_iter().collect(),
        }
    }

    /// Directory populated with the school's standard roster.
    pub fn seeded() -> Self {
        let directory = Self::with_activities(seed::default_activities());
        tracing::debug!(count = directory.len(), "Seeded activity directory");
        directory
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn list_activities(&self) -> ActivityListing {
        self.activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn get_activity(&self, activity_name: &str) -> DirectoryResult<Activity> {
        self.activities
            .get(activity_name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DirectoryError::ActivityNotFound(activity_name.to_string()))
    }

    /// Adds `email` to the roster and returns the confirmation message.
    pub fn signup(&self, activity_name: &str, email: &str) -> DirectoryResult<String> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| DirectoryError::ActivityNotFound(activity_name.to_string()))?;

        if email.trim().is_empty() {
            return Err(DirectoryError::InvalidEmail {
                activity: activity_name.to_string(),
            });
        }

        if activity.has_participant(email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        tracing::debug!(
            activity = activity_name,
            email,
            participants = activity.participants.len(),
            max_participants = activity.max_participants,
            "Participant added"
        );

        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Removes `email` from the roster and returns the confirmation message.
    pub fn unregister(&self, activity_name: &str, email: &str) -> DirectoryResult<String> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| DirectoryError::ActivityNotFound(activity_name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| DirectoryError::NotSignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        tracing::debug!(
            activity = activity_name,
            email,
            participants = activity.participants.len(),
            "Participant removed"
        );

        Ok(format!("Unregistered {} from {}", email, activity_name))
    }
}

impl Default for ActivityDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}
