use std::collections::{BTreeSet, VecDeque};

use gloo_storage::{Storage as GlooStorage, errors::StorageError};
use planfit_domain::{UserProfile, WorkoutID};
use planfit_web_app::{CompletionRepository, Error, FavoritesRepository, ProfileRepository, log};
use serde::{Serialize, de::DeserializeOwned};

const KEY_USER_PROFILE: &str = "userProfile";
const KEY_FAVORITES: &str = "favoriteWorkouts";
const KEY_COMPLETED_WORKOUTS: &str = "completedWorkouts";
const KEY_LOG: &str = "log";

/// Browser local storage holding everything the app keeps between visits.
pub struct UI;

impl FavoritesRepository for UI {
    fn read_favorites(&self) -> Result<Vec<WorkoutID>, Error> {
        Ok(read(KEY_FAVORITES)?.unwrap_or_default())
    }

    fn write_favorites(&self, favorites: &[WorkoutID]) -> Result<(), Error> {
        write(KEY_FAVORITES, favorites)
    }
}

impl CompletionRepository for UI {
    fn read_completed_workouts(&self) -> Result<BTreeSet<WorkoutID>, Error> {
        Ok(read(KEY_COMPLETED_WORKOUTS)?.unwrap_or_default())
    }

    fn write_completed_workouts(&self, completed: &BTreeSet<WorkoutID>) -> Result<(), Error> {
        write(KEY_COMPLETED_WORKOUTS, completed)
    }
}

impl ProfileRepository for UI {
    fn read_profile(&self) -> Result<Option<UserProfile>, Error> {
        read(KEY_USER_PROFILE)
    }

    fn write_profile(&self, profile: &UserProfile) -> Result<(), Error> {
        write(KEY_USER_PROFILE, profile)
    }

    fn delete_profile(&self) -> Result<(), Error> {
        gloo_storage::LocalStorage::delete(KEY_USER_PROFILE);
        Ok(())
    }
}

fn read<T: DeserializeOwned>(key: &str) -> Result<Option<T>, Error> {
    match gloo_storage::LocalStorage::get(key) {
        Ok(value) => Ok(Some(value)),
        Err(err) => match err {
            StorageError::KeyNotFound(_) => Ok(None),
            StorageError::SerdeError(err) => Err(Error::Parse(err.to_string())),
            err @ StorageError::JsError(_) => Err(Error::Storage(err.to_string())),
        },
    }
}

fn write<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<(), Error> {
    gloo_storage::LocalStorage::set(key, value).map_err(|err| Error::Storage(err.to_string()))
}

pub struct Log;

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(log::Error::Unknown(err.to_string())),
            },
        }
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::append(&mut entries, entry);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use pretty_assertions::assert_eq;
        use serde_json::json;
        use wasm_bindgen_test::wasm_bindgen_test;

        use super::super::*;

        wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

        fn clear() {
            gloo_storage::LocalStorage::clear();
        }

        #[wasm_bindgen_test]
        fn test_favorites() {
            clear();
            assert_eq!(UI.read_favorites(), Ok(vec![]));

            let favorites = vec![WorkoutID::from("w2"), WorkoutID::from("w1")];
            UI.write_favorites(&favorites).unwrap();
            assert_eq!(UI.read_favorites(), Ok(favorites));
            assert_eq!(
                gloo_storage::LocalStorage::raw()
                    .get_item(KEY_FAVORITES)
                    .unwrap(),
                Some(r#"["w2","w1"]"#.to_string())
            );
        }

        #[wasm_bindgen_test]
        fn test_favorites_unparsable() {
            clear();
            gloo_storage::LocalStorage::raw()
                .set_item(KEY_FAVORITES, "{")
                .unwrap();
            assert!(matches!(UI.read_favorites(), Err(Error::Parse(_))));
        }

        #[wasm_bindgen_test]
        fn test_completed_workouts() {
            clear();
            assert_eq!(UI.read_completed_workouts(), Ok(BTreeSet::new()));

            let completed = BTreeSet::from([WorkoutID::from("a"), WorkoutID::from("b")]);
            UI.write_completed_workouts(&completed).unwrap();
            assert_eq!(UI.read_completed_workouts(), Ok(completed));
        }

        #[wasm_bindgen_test]
        fn test_profile() {
            clear();
            assert_eq!(UI.read_profile(), Ok(None));

            let profile = UserProfile::new(json!({ "goal": "strength" }));
            UI.write_profile(&profile).unwrap();
            assert_eq!(UI.read_profile(), Ok(Some(profile)));

            UI.delete_profile().unwrap();
            assert_eq!(UI.read_profile(), Ok(None));
        }

        #[wasm_bindgen_test]
        fn test_log() {
            clear();
            assert_eq!(log::Repository::read_entries(&Log), Ok(VecDeque::new()));

            for i in 0..=log::MAX_ENTRIES {
                log::Repository::write_entry(
                    &Log,
                    log::Entry {
                        time: String::new(),
                        level: ::log::Level::Info,
                        message: i.to_string(),
                    },
                )
                .unwrap();
            }

            let entries = log::Repository::read_entries(&Log).unwrap();
            assert_eq!(entries.len(), log::MAX_ENTRIES);
            assert_eq!(entries[0].message, log::MAX_ENTRIES.to_string());
        }
    }
}
