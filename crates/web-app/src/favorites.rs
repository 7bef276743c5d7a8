//! Favorite workouts kept in durable storage.
//!
//! The sequence is written back as a whole after every change. Adding does not check for
//! duplicates and removing drops every occurrence.

use log::{debug, error};
use planfit_domain::WorkoutID;

use crate::Error;

#[allow(clippy::missing_errors_doc)]
pub trait FavoritesRepository {
    fn read_favorites(&self) -> Result<Vec<WorkoutID>, Error>;
    fn write_favorites(&self, favorites: &[WorkoutID]) -> Result<(), Error>;
}

pub struct Favorites<R> {
    repository: R,
    favorites: Vec<WorkoutID>,
}

impl<R: FavoritesRepository> Favorites<R> {
    /// Unreadable or missing data results in an empty sequence.
    pub fn load(repository: R) -> Self {
        let favorites = repository.read_favorites().unwrap_or_else(|err| {
            debug!("failed to read favorites: {err}");
            vec![]
        });
        Self {
            repository,
            favorites,
        }
    }

    #[must_use]
    pub fn favorites(&self) -> &[WorkoutID] {
        &self.favorites
    }

    #[must_use]
    pub fn is_favorite(&self, id: &WorkoutID) -> bool {
        self.favorites.contains(id)
    }

    pub fn add(&mut self, id: WorkoutID) -> Result<(), Error> {
        self.favorites.push(id);
        self.persist()
    }

    pub fn remove(&mut self, id: &WorkoutID) -> Result<(), Error> {
        self.favorites.retain(|f| f != id);
        self.persist()
    }

    pub fn toggle(&mut self, id: WorkoutID) -> Result<(), Error> {
        if self.is_favorite(&id) {
            self.remove(&id)
        } else {
            self.add(id)
        }
    }

    fn persist(&self) -> Result<(), Error> {
        self.repository
            .write_favorites(&self.favorites)
            .inspect_err(|err| error!("failed to write favorites: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[derive(Default)]
    struct MemoryRepository {
        value: RefCell<Option<String>>,
    }

    impl MemoryRepository {
        fn with(value: &str) -> Self {
            Self {
                value: RefCell::new(Some(value.to_string())),
            }
        }
    }

    impl FavoritesRepository for &MemoryRepository {
        fn read_favorites(&self) -> Result<Vec<WorkoutID>, Error> {
            match &*self.value.borrow() {
                Some(value) => {
                    serde_json::from_str(value).map_err(|err| Error::Parse(err.to_string()))
                }
                None => Ok(vec![]),
            }
        }

        fn write_favorites(&self, favorites: &[WorkoutID]) -> Result<(), Error> {
            *self.value.borrow_mut() = Some(
                serde_json::to_string(favorites).map_err(|err| Error::Parse(err.to_string()))?,
            );
            Ok(())
        }
    }

    fn ids(ids: &[&str]) -> Vec<WorkoutID> {
        ids.iter().copied().map(WorkoutID::from).collect()
    }

    #[rstest]
    #[case(None, vec![])]
    #[case(Some(r#"["a","b","a"]"#), ids(&["a", "b", "a"]))]
    #[case(Some("not json"), vec![])]
    #[case(Some(r#"{"a":1}"#), vec![])]
    fn test_load(#[case] stored: Option<&str>, #[case] expected: Vec<WorkoutID>) {
        let repository = stored.map_or_else(MemoryRepository::default, MemoryRepository::with);
        assert_eq!(
            Favorites::load(&repository).favorites(),
            expected.as_slice()
        );
    }

    #[test]
    fn test_storage_follows_every_change() {
        let repository = MemoryRepository::default();
        let mut favorites = Favorites::load(&repository);

        let steps: &[(bool, &str)] = &[
            (true, "a"),
            (true, "b"),
            (true, "a"),
            (false, "a"),
            (false, "c"),
            (true, "c"),
            (false, "b"),
        ];
        for (add, id) in steps {
            if *add {
                favorites.add(WorkoutID::from(*id)).unwrap();
            } else {
                favorites.remove(&WorkoutID::from(*id)).unwrap();
            }
            assert_eq!(
                repository.value.borrow().clone(),
                Some(serde_json::to_string(favorites.favorites()).unwrap())
            );
        }
        assert_eq!(favorites.favorites(), ids(&["c"]).as_slice());
    }

    #[test]
    fn test_add_allows_duplicates() {
        let repository = MemoryRepository::default();
        let mut favorites = Favorites::load(&repository);

        favorites.add(WorkoutID::from("a")).unwrap();
        favorites.add(WorkoutID::from("a")).unwrap();

        assert_eq!(favorites.favorites(), ids(&["a", "a"]).as_slice());
        assert_eq!(repository.value.borrow().as_deref(), Some(r#"["a","a"]"#));
    }

    #[test]
    fn test_remove_drops_all_occurrences() {
        let repository = MemoryRepository::with(r#"["a","b","a"]"#);
        let mut favorites = Favorites::load(&repository);

        favorites.remove(&WorkoutID::from("a")).unwrap();

        assert_eq!(favorites.favorites(), ids(&["b"]).as_slice());
        assert!(!favorites.is_favorite(&WorkoutID::from("a")));
    }

    #[rstest]
    #[case(&[], "a", false)]
    #[case(&["a"], "a", true)]
    #[case(&["b", "a", "a"], "a", true)]
    #[case(&["b"], "a", false)]
    fn test_is_favorite(#[case] stored: &[&str], #[case] id: &str, #[case] expected: bool) {
        let repository = MemoryRepository::with(&serde_json::to_string(stored).unwrap());
        assert_eq!(
            Favorites::load(&repository).is_favorite(&WorkoutID::from(id)),
            expected
        );
    }

    #[test]
    fn test_toggle() {
        let repository = MemoryRepository::default();
        let mut favorites = Favorites::load(&repository);

        favorites.toggle(WorkoutID::from("a")).unwrap();
        assert!(favorites.is_favorite(&WorkoutID::from("a")));

        favorites.toggle(WorkoutID::from("a")).unwrap();
        assert!(!favorites.is_favorite(&WorkoutID::from("a")));
        assert_eq!(repository.value.borrow().as_deref(), Some("[]"));
    }
}
