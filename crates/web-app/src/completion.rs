use std::collections::BTreeSet;

use log::{debug, error};
use planfit_domain::WorkoutID;

use crate::Error;

#[allow(clippy::missing_errors_doc)]
pub trait CompletionRepository {
    fn read_completed_workouts(&self) -> Result<BTreeSet<WorkoutID>, Error>;
    fn write_completed_workouts(&self, completed: &BTreeSet<WorkoutID>) -> Result<(), Error>;
}

/// Completed workouts and whether a remote backend is available.
///
/// The offline flag is fixed for the lifetime of the store.
pub struct WorkoutCompletion<R> {
    repository: R,
    offline_mode: bool,
    completed: BTreeSet<WorkoutID>,
}

impl<R: CompletionRepository> WorkoutCompletion<R> {
    pub fn load(repository: R, offline_mode: bool) -> Self {
        let completed = repository.read_completed_workouts().unwrap_or_else(|err| {
            debug!("failed to read completed workouts: {err}");
            BTreeSet::new()
        });
        Self {
            repository,
            offline_mode,
            completed,
        }
    }

    #[must_use]
    pub fn is_offline_mode(&self) -> bool {
        self.offline_mode
    }

    #[must_use]
    pub fn is_completed(&self, id: &WorkoutID) -> bool {
        self.completed.contains(id)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.completed.len()
    }

    /// Returns whether the workout was not completed before.
    pub fn mark_completed(&mut self, id: WorkoutID) -> Result<bool, Error> {
        let inserted = self.completed.insert(id);
        if inserted {
            self.persist()?;
        }
        Ok(inserted)
    }

    /// Returns whether the workout was completed before.
    pub fn unmark_completed(&mut self, id: &WorkoutID) -> Result<bool, Error> {
        let removed = self.completed.remove(id);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Adds completions recorded elsewhere, e.g. on the remote backend.
    pub fn merge(&mut self, ids: impl IntoIterator<Item = WorkoutID>) -> Result<(), Error> {
        let count = self.completed.len();
        self.completed.extend(ids);
        if self.completed.len() != count {
            self.persist()?;
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), Error> {
        self.repository
            .write_completed_workouts(&self.completed)
            .inspect_err(|err| error!("failed to write completed workouts: {err}"))
    }
}
