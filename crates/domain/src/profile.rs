use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Workout, WorkoutID};

/// Record produced by the external plan generator.
///
/// Its shape is owned by the generator. Only the top-level `workouts` array and scalar attributes
/// are interpreted for display, everything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(Value);

impl UserProfile {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Entries of the `workouts` array that carry an ID and a name. IDs may be strings or
    /// numbers.
    #[must_use]
    pub fn workouts(&self) -> Vec<Workout> {
        let Some(workouts) = self.0.get("workouts").and_then(Value::as_array) else {
            return vec![];
        };
        workouts
            .iter()
            .filter_map(|w| {
                let id = match w.get("id")? {
                    Value::String(id) => id.clone(),
                    Value::Number(id) => id.to_string(),
                    _ => return None,
                };
                let name = w.get("name")?.as_str()?.to_string();
                Some(Workout {
                    id: WorkoutID::from(id),
                    name,
                    description: w
                        .get("description")
                        .and_then(Value::as_str)
                        .map(ToString::to_string),
                })
            })
            .collect()
    }

    /// Top-level scalar attributes as display strings, sorted by key.
    #[must_use]
    pub fn attributes(&self) -> Vec<(String, String)> {
        let Some(object) = self.0.as_object() else {
            return vec![];
        };
        let mut attributes = object
            .iter()
            .filter_map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => if *b { "yes" } else { "no" }.to_string(),
                    Value::Null | Value::Array(_) | Value::Object(_) => return None,
                };
                Some((key.clone(), value))
            })
            .collect::<Vec<_>>();
        attributes.sort();
        attributes
    }
}

impl From<Value> for UserProfile {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_workouts() {
        let profile = UserProfile::new(json!({
            "workouts": [
                { "id": "w1", "name": "Upper Body", "description": "Push and pull" },
                { "id": 2, "name": "Lower Body" },
                { "id": "w3" },
                { "name": "No ID" },
                "invalid",
            ]
        }));
        assert_eq!(
            profile.workouts(),
            vec![
                Workout {
                    id: WorkoutID::from("w1"),
                    name: "Upper Body".to_string(),
                    description: Some("Push and pull".to_string()),
                },
                Workout {
                    id: WorkoutID::from("2"),
                    name: "Lower Body".to_string(),
                    description: None,
                },
            ]
        );
    }

    #[test]
    fn test_workouts_missing() {
        assert_eq!(UserProfile::new(json!({})).workouts(), vec![]);
        assert_eq!(UserProfile::new(json!([1, 2])).workouts(), vec![]);
        assert_eq!(
            UserProfile::new(json!({ "workouts": "none" })).workouts(),
            vec![]
        );
    }

    #[test]
    fn test_attributes() {
        let profile = UserProfile::new(json!({
            "goal": "strength",
            "daysPerWeek": 4,
            "warmup": true,
            "notes": null,
            "workouts": [],
            "meta": {},
        }));
        assert_eq!(
            profile.attributes(),
            vec![
                ("daysPerWeek".to_string(), "4".to_string()),
                ("goal".to_string(), "strength".to_string()),
                ("warmup".to_string(), "yes".to_string()),
            ]
        );
    }

    #[test]
    fn test_serialization_is_transparent() {
        let value = json!({ "goal": "strength" });
        let profile = UserProfile::new(value.clone());
        assert_eq!(serde_json::to_value(&profile).unwrap(), value);
    }
}
