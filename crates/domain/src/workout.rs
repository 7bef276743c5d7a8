use derive_more::{AsRef, Deref, Display};
use serde::{Deserialize, Serialize};

use crate::{CreateError, DeleteError, ReadError};

#[allow(async_fn_in_trait)]
pub trait CompletionService {
    async fn get_completions(&self) -> Result<Vec<WorkoutID>, ReadError>;
    async fn record_completion(&self, id: WorkoutID) -> Result<WorkoutID, CreateError>;
    async fn remove_completion(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait CompletionRepository {
    async fn read_completions(&self) -> Result<Vec<WorkoutID>, ReadError>;
    async fn create_completion(&self, id: WorkoutID) -> Result<WorkoutID, CreateError>;
    async fn delete_completion(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

#[derive(
    AsRef,
    Deref,
    Display,
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct WorkoutID(String);

impl WorkoutID {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkoutID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WorkoutID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Workout entry of a generated plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: String,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_workout_id_serialization() {
        let id = WorkoutID::from("push-day");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"push-day\"");
        assert_eq!(
            serde_json::from_str::<WorkoutID>("\"push-day\"").unwrap(),
            id
        );
    }

    #[test]
    fn test_workout_id_display() {
        assert_eq!(WorkoutID::from("a").to_string(), "a");
        assert_eq!(WorkoutID::from(String::from("b")).as_str(), "b");
    }
}
