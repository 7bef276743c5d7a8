//! Two-step intake flow collecting the training focus and the available equipment.

use std::{collections::BTreeMap, collections::BTreeSet, fmt};

use crate::{Difficulty, Equipment, Goal, MuscleGroup};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    MuscleGroups = 0,
    Equipment = 1,
}

impl Step {
    pub const COUNT: usize = 2;

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self.index() + 1 == Self::COUNT
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Step::MuscleGroups => "Which muscle groups do you want to train?",
            Step::Equipment => "What equipment do you have?",
        }
    }

    #[must_use]
    pub fn field(self) -> Field {
        match self {
            Step::MuscleGroups => Field::MuscleGroups,
            Step::Equipment => Field::Equipment,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    MuscleGroups,
    Equipment,
}

impl Field {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Field::MuscleGroups => "muscleGroups",
            Field::Equipment => "equipment",
        }
    }

    #[must_use]
    pub fn required_message(self) -> &'static str {
        match self {
            Field::MuscleGroups => "Please select at least one muscle group",
            Field::Equipment => "Please select at least one piece of equipment",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pub muscle_groups: BTreeSet<MuscleGroup>,
    pub equipment: BTreeSet<Equipment>,
    pub goal: Goal,
    pub difficulty: Difficulty,
}

impl FormData {
    fn is_empty(&self, field: Field) -> bool {
        match field {
            Field::MuscleGroups => self.muscle_groups.is_empty(),
            Field::Equipment => self.equipment.is_empty(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Next {
    Advanced(Step),
    Rejected(Field),
    Completed(FormData),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntakeFlow {
    step: Step,
    data: FormData,
    errors: BTreeMap<Field, String>,
}

impl IntakeFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn data(&self) -> &FormData {
        &self.data
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Percentage of completed steps.
    #[must_use]
    pub fn progress(&self) -> u8 {
        #[allow(clippy::cast_possible_truncation)]
        let progress = ((self.step.index() + 1) * 100 / Step::COUNT) as u8;
        progress
    }

    /// Replaces the muscle-group selection and clears a pending error of that field only.
    pub fn set_muscle_groups(&mut self, muscle_groups: BTreeSet<MuscleGroup>) {
        self.data.muscle_groups = muscle_groups;
        self.errors.remove(&Field::MuscleGroups);
    }

    /// Replaces the equipment selection and clears a pending error of that field only.
    pub fn set_equipment(&mut self, equipment: BTreeSet<Equipment>) {
        self.data.equipment = equipment;
        self.errors.remove(&Field::Equipment);
    }

    /// Validates the current step. On the last step the accumulated form data is handed out and
    /// the step stays unchanged.
    pub fn next(&mut self) -> Next {
        let field = self.step.field();

        if self.data.is_empty(field) {
            self.errors
                .insert(field, field.required_message().to_string());
            return Next::Rejected(field);
        }

        if self.step.is_last() {
            return Next::Completed(self.data.clone());
        }

        self.step = Step::Equipment;
        Next::Advanced(self.step)
    }

    /// Errors are kept when going back.
    pub fn prev(&mut self) {
        if self.step == Step::Equipment {
            self.step = Step::MuscleGroups;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{MuscleGroupDropdown, MuscleGroupOption};

    #[test]
    fn test_next_while_muscle_group_dropdown_open() {
        let mut flow = IntakeFlow::new();
        let mut dropdown = MuscleGroupDropdown::default();
        dropdown.toggle_open();
        let selection = dropdown.choose(
            &flow.data().muscle_groups,
            MuscleGroupOption::Group(MuscleGroup::Back),
        );
        flow.set_muscle_groups(selection);
        assert!(dropdown.is_open());

        dropdown.close();
        assert_eq!(flow.next(), Next::Advanced(Step::Equipment));
        assert!(!dropdown.is_open());
        assert_eq!(
            flow.data().muscle_groups,
            BTreeSet::from([MuscleGroup::Back])
        );
    }

    #[test]
    fn test_initial_state() {
        let flow = IntakeFlow::new();
        assert_eq!(flow.step(), Step::MuscleGroups);
        assert!(flow.data().muscle_groups.is_empty());
        assert!(flow.data().equipment.is_empty());
        assert_eq!(flow.data().goal, Goal::Strength);
        assert_eq!(flow.data().difficulty, Difficulty::Intermediate);
        assert_eq!(flow.error(Field::MuscleGroups), None);
        assert_eq!(flow.error(Field::Equipment), None);
        assert_eq!(flow.progress(), 50);
    }

    #[test]
    fn test_next_without_muscle_groups() {
        let mut flow = IntakeFlow::new();

        assert_eq!(flow.next(), Next::Rejected(Field::MuscleGroups));
        assert_eq!(flow.step(), Step::MuscleGroups);
        assert_eq!(
            flow.error(Field::MuscleGroups),
            Some("Please select at least one muscle group")
        );
        assert_eq!(flow.error(Field::Equipment), None);
    }

    #[test]
    fn test_selection_clears_error() {
        let mut flow = IntakeFlow::new();
        flow.next();

        flow.set_muscle_groups(BTreeSet::from([MuscleGroup::Arms]));

        assert_eq!(flow.error(Field::MuscleGroups), None);
        assert_eq!(flow.step(), Step::MuscleGroups);
    }

    #[test]
    fn test_clearing_selection_does_not_revalidate() {
        let mut flow = IntakeFlow::new();

        flow.set_muscle_groups(BTreeSet::new());

        assert_eq!(flow.error(Field::MuscleGroups), None);
    }

    #[test]
    fn test_next_advances_to_equipment() {
        let mut flow = IntakeFlow::new();
        flow.set_muscle_groups(BTreeSet::from([MuscleGroup::Chest]));

        assert_eq!(flow.next(), Next::Advanced(Step::Equipment));
        assert_eq!(flow.step(), Step::Equipment);
        assert_eq!(flow.progress(), 100);
    }

    #[test]
    fn test_next_without_equipment() {
        let mut flow = IntakeFlow::new();
        flow.set_muscle_groups(BTreeSet::from([MuscleGroup::Chest]));
        flow.next();

        assert_eq!(flow.next(), Next::Rejected(Field::Equipment));
        assert_eq!(flow.step(), Step::Equipment);
        assert_eq!(
            flow.error(Field::Equipment),
            Some("Please select at least one piece of equipment")
        );
    }

    #[test]
    fn test_next_completes_with_defaults() {
        let mut flow = IntakeFlow::new();
        flow.set_muscle_groups(BTreeSet::from([MuscleGroup::Legs, MuscleGroup::Glutes]));
        flow.next();
        flow.set_equipment(BTreeSet::from([Equipment::Barbell]));

        assert_eq!(
            flow.next(),
            Next::Completed(FormData {
                muscle_groups: BTreeSet::from([MuscleGroup::Legs, MuscleGroup::Glutes]),
                equipment: BTreeSet::from([Equipment::Barbell]),
                goal: Goal::Strength,
                difficulty: Difficulty::Intermediate,
            })
        );
        assert_eq!(flow.step(), Step::Equipment);
    }

    #[test]
    fn test_prev_keeps_errors() {
        let mut flow = IntakeFlow::new();
        flow.set_muscle_groups(BTreeSet::from([MuscleGroup::Back]));
        flow.next();
        flow.next();

        flow.prev();

        assert_eq!(flow.step(), Step::MuscleGroups);
        assert!(flow.error(Field::Equipment).is_some());
        assert_eq!(
            flow.data().muscle_groups,
            BTreeSet::from([MuscleGroup::Back])
        );
    }

    #[test]
    fn test_prev_on_first_step() {
        let mut flow = IntakeFlow::new();
        flow.prev();
        assert_eq!(flow.step(), Step::MuscleGroups);
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::MuscleGroups.to_string(), "muscleGroups");
        assert_eq!(Field::Equipment.to_string(), "equipment");
    }
}
