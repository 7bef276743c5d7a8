#![warn(clippy::pedantic)]

mod completion;
mod favorites;
pub mod log;
mod profile;
mod provider;
mod service;
mod toast;

pub use completion::{CompletionRepository, WorkoutCompletion};
pub use favorites::{Favorites, FavoritesRepository};
pub use profile::{ProfileRepository, ProfileService};
pub use provider::{MissingProviderError, require};
pub use service::Service;
pub use toast::Toast;

/// Time after which a success notification disappears on its own.
pub const SUCCESS_TOAST_TIMEOUT_MS: u32 = 3_000;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("failed to parse stored data: {0}")]
    Parse(String),
    #[error("{0}")]
    Storage(String),
}
