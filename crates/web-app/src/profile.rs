use log::debug;
use planfit_domain::UserProfile;

use crate::Error;

pub trait ProfileService {
    fn get_profile(&self) -> Option<UserProfile>;
    #[allow(clippy::missing_errors_doc)]
    fn set_profile(&self, profile: &UserProfile) -> Result<(), Error>;
    #[allow(clippy::missing_errors_doc)]
    fn clear_profile(&self) -> Result<(), Error>;
}

#[allow(clippy::missing_errors_doc)]
pub trait ProfileRepository {
    fn read_profile(&self) -> Result<Option<UserProfile>, Error>;
    fn write_profile(&self, profile: &UserProfile) -> Result<(), Error>;
    fn delete_profile(&self) -> Result<(), Error>;
}

/// Unreadable profiles count as missing.
pub(crate) fn read_or_none(repository: &impl ProfileRepository) -> Option<UserProfile> {
    repository.read_profile().unwrap_or_else(|err| {
        debug!("failed to read user profile: {err}");
        None
    })
}
