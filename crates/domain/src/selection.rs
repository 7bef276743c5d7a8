//! Selection rules of the muscle-group dropdown and the equipment grid.
//!
//! Both widgets are controlled: the selection is owned by the caller and every choice returns the
//! new selection instead of mutating shared state.

use std::collections::BTreeSet;

use crate::{Equipment, MuscleGroup, Property};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MuscleGroupOption {
    All,
    Group(MuscleGroup),
}

impl MuscleGroupOption {
    pub const ALL_ID: &'static str = "all";

    pub fn iter() -> impl Iterator<Item = MuscleGroupOption> {
        std::iter::once(MuscleGroupOption::All)
            .chain(MuscleGroup::iter().copied().map(MuscleGroupOption::Group))
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            MuscleGroupOption::All => Self::ALL_ID,
            MuscleGroupOption::Group(m) => m.id(),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MuscleGroupOption::All => "Full Body",
            MuscleGroupOption::Group(m) => m.name(),
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            MuscleGroupOption::All => "person",
            MuscleGroupOption::Group(m) => m.icon(),
        }
    }

    #[must_use]
    pub fn is_selected(self, selection: &BTreeSet<MuscleGroup>) -> bool {
        match self {
            MuscleGroupOption::All => selection.len() == MuscleGroup::iter().len(),
            MuscleGroupOption::Group(m) => selection.contains(&m),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MuscleGroupDropdown {
    open: bool,
}

impl MuscleGroupDropdown {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// "All" selects every concrete group and closes the dropdown, a concrete group toggles its
    /// membership and leaves the dropdown open.
    pub fn choose(
        &mut self,
        selection: &BTreeSet<MuscleGroup>,
        option: MuscleGroupOption,
    ) -> BTreeSet<MuscleGroup> {
        match option {
            MuscleGroupOption::All => {
                self.close();
                MuscleGroup::iter().copied().collect()
            }
            MuscleGroupOption::Group(m) => toggle(selection, m),
        }
    }
}

#[must_use]
pub fn muscle_group_label(selection: &BTreeSet<MuscleGroup>) -> String {
    if selection.is_empty() {
        "Select muscle groups".to_string()
    } else if selection.len() == MuscleGroup::iter().len() {
        MuscleGroupOption::All.name().to_string()
    } else {
        selection
            .iter()
            .map(|m| m.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EquipmentOption {
    SelectAll,
    Item(Equipment),
}

impl EquipmentOption {
    pub const SELECT_ALL_ID: &'static str = "all";

    pub fn iter() -> impl Iterator<Item = EquipmentOption> {
        Equipment::iter()
            .copied()
            .map(EquipmentOption::Item)
            .chain(std::iter::once(EquipmentOption::SelectAll))
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            EquipmentOption::SelectAll => Self::SELECT_ALL_ID,
            EquipmentOption::Item(e) => e.id(),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            EquipmentOption::SelectAll => "Select All",
            EquipmentOption::Item(e) => e.name(),
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            EquipmentOption::SelectAll => "I have access to everything",
            EquipmentOption::Item(e) => e.description(),
        }
    }

    #[must_use]
    pub fn is_selected(self, selection: &BTreeSet<Equipment>) -> bool {
        match self {
            EquipmentOption::SelectAll => is_all_equipment(selection),
            EquipmentOption::Item(e) => selection.contains(&e),
        }
    }
}

/// "Select All" flips between the full and the empty set depending on whether everything is
/// already selected. A concrete item toggles its membership.
#[must_use]
pub fn choose_equipment(
    selection: &BTreeSet<Equipment>,
    option: EquipmentOption,
) -> BTreeSet<Equipment> {
    match option {
        EquipmentOption::SelectAll => {
            if is_all_equipment(selection) {
                BTreeSet::new()
            } else {
                Equipment::iter().copied().collect()
            }
        }
        EquipmentOption::Item(e) => toggle(selection, e),
    }
}

fn is_all_equipment(selection: &BTreeSet<Equipment>) -> bool {
    selection.len() == Equipment::iter().len()
}

#[must_use]
pub fn toggle<T: Ord + Copy>(selection: &BTreeSet<T>, item: T) -> BTreeSet<T> {
    let mut result = selection.clone();
    if !result.remove(&item) {
        result.insert(item);
    }
    result
}
