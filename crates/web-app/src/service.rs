use std::collections::VecDeque;

use planfit_domain::UserProfile;

use crate::{
    Error, ProfileRepository, ProfileService,
    log::{self, Entry},
    profile::read_or_none,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: log::Repository> log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<Entry>, log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: Entry) -> Result<(), log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: ProfileRepository> ProfileService for Service<R> {
    fn get_profile(&self) -> Option<UserProfile> {
        read_or_none(&self.repository)
    }

    fn set_profile(&self, profile: &UserProfile) -> Result<(), Error> {
        self.repository.write_profile(profile)
    }

    fn clear_profile(&self) -> Result<(), Error> {
        self.repository.delete_profile()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[derive(Default)]
    struct MemoryRepository {
        profile: RefCell<Option<String>>,
    }

    impl ProfileRepository for MemoryRepository {
        fn read_profile(&self) -> Result<Option<UserProfile>, Error> {
            self.profile
                .borrow()
                .as_deref()
                .map(serde_json::from_str)
                .transpose()
                .map_err(|err| Error::Parse(err.to_string()))
        }

        fn write_profile(&self, profile: &UserProfile) -> Result<(), Error> {
            *self.profile.borrow_mut() =
                Some(serde_json::to_string(profile).map_err(|err| Error::Parse(err.to_string()))?);
            Ok(())
        }

        fn delete_profile(&self) -> Result<(), Error> {
            *self.profile.borrow_mut() = None;
            Ok(())
        }
    }

    #[test]
    fn test_profile_replaced_wholesale() {
        let service = Service::new(MemoryRepository::default());
        assert_eq!(service.get_profile(), None);

        let first = UserProfile::new(json!({ "goal": "strength", "days": 3 }));
        let second = UserProfile::new(json!({ "goal": "endurance" }));

        service.set_profile(&first).unwrap();
        assert_eq!(service.get_profile(), Some(first));

        service.set_profile(&second).unwrap();
        assert_eq!(service.get_profile(), Some(second));

        service.clear_profile().unwrap();
        assert_eq!(service.get_profile(), None);
    }

    #[test]
    fn test_unparsable_profile_is_missing() {
        let service = Service::new(MemoryRepository {
            profile: RefCell::new(Some("{".to_string())),
        });
        assert_eq!(service.get_profile(), None);
    }
}
