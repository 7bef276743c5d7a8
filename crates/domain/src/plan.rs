use std::{fmt, slice::Iter};

use serde::{Deserialize, Serialize};

use crate::{FormData, GenerateError, Property, UserProfile};

#[allow(async_fn_in_trait)]
pub trait PlanService {
    async fn generate_plan(&self, request: PlanRequest) -> Result<UserProfile, GenerateError>;
}

#[allow(async_fn_in_trait)]
pub trait PlanRepository {
    async fn generate_plan(&self, request: PlanRequest) -> Result<UserProfile, GenerateError>;
}

/// Input of the external plan generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub muscle_groups: Vec<String>,
    pub equipment: Vec<String>,
    pub goal: String,
    pub difficulty: String,
}

impl From<&FormData> for PlanRequest {
    fn from(value: &FormData) -> Self {
        Self {
            muscle_groups: value
                .muscle_groups
                .iter()
                .map(|m| m.id().to_string())
                .collect(),
            equipment: value.equipment.iter().map(|e| e.id().to_string()).collect(),
            goal: value.goal.id().to_string(),
            difficulty: value.difficulty.id().to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Goal {
    #[default]
    Strength,
    Hypertrophy,
    Endurance,
    WeightLoss,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 4] = [
            Goal::Strength,
            Goal::Hypertrophy,
            Goal::Endurance,
            Goal::WeightLoss,
        ];
        GOALS.iter()
    }

    fn id(self) -> &'static str {
        match self {
            Goal::Strength => "strength",
            Goal::Hypertrophy => "hypertrophy",
            Goal::Endurance => "endurance",
            Goal::WeightLoss => "weight-loss",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Strength => "Build Strength",
            Goal::Hypertrophy => "Build Muscle",
            Goal::Endurance => "Improve Endurance",
            Goal::WeightLoss => "Lose Weight",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTIES: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTIES.iter()
    }

    fn id(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
