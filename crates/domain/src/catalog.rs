use std::slice::Iter;

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn id(self) -> &'static str;
    fn name(self) -> &'static str;
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Glutes,
    Core,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 7] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
            MuscleGroup::Legs,
            MuscleGroup::Glutes,
            MuscleGroup::Core,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn id(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Arms => "arms",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Core => "core",
        }
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Core => "Core",
        }
    }
}

impl MuscleGroup {
    /// Font Awesome icon name.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "shirt",
            MuscleGroup::Back => "arrows-up-down",
            MuscleGroup::Shoulders => "up-down-left-right",
            MuscleGroup::Arms => "hand-fist",
            MuscleGroup::Legs => "person-running",
            MuscleGroup::Glutes => "person-walking",
            MuscleGroup::Core => "bullseye",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Equipment {
    Bodyweight,
    Dumbbells,
    Barbell,
    Kettlebells,
    ResistanceBands,
    PullUpBar,
    Bench,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 7] = [
            Equipment::Bodyweight,
            Equipment::Dumbbells,
            Equipment::Barbell,
            Equipment::Kettlebells,
            Equipment::ResistanceBands,
            Equipment::PullUpBar,
            Equipment::Bench,
        ];
        EQUIPMENT.iter()
    }

    fn id(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "bodyweight",
            Equipment::Dumbbells => "dumbbells",
            Equipment::Barbell => "barbell",
            Equipment::Kettlebells => "kettlebells",
            Equipment::ResistanceBands => "resistance-bands",
            Equipment::PullUpBar => "pull-up-bar",
            Equipment::Bench => "bench",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::Barbell => "Barbell",
            Equipment::Kettlebells => "Kettlebells",
            Equipment::ResistanceBands => "Resistance Bands",
            Equipment::PullUpBar => "Pull-up Bar",
            Equipment::Bench => "Bench",
        }
    }
}

impl Equipment {
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "No equipment needed",
            Equipment::Dumbbells => "Fixed or adjustable dumbbells",
            Equipment::Barbell => "Barbell with weight plates",
            Equipment::Kettlebells => "One or more kettlebells",
            Equipment::ResistanceBands => "Loop or tube bands",
            Equipment::PullUpBar => "Doorway or wall-mounted bar",
            Equipment::Bench => "Flat or adjustable bench",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_muscle_group_ids_unique() {
        let ids = MuscleGroup::iter().map(|m| m.id()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn test_equipment_ids_unique() {
        let ids = Equipment::iter().map(|e| e.id()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), 7);
    }
}
