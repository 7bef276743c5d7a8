/// A store was accessed by a component that is not rendered inside the store's provider.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{consumer} must be used within {provider}")]
pub struct MissingProviderError {
    pub consumer: &'static str,
    pub provider: &'static str,
}

impl MissingProviderError {
    #[must_use]
    pub const fn new(consumer: &'static str, provider: &'static str) -> Self {
        Self { consumer, provider }
    }
}

/// Turns an optional injected dependency into a checked one.
///
/// # Errors
///
/// Returns an error if the dependency was never provided.
pub fn require<T>(
    dependency: Option<T>,
    consumer: &'static str,
    provider: &'static str,
) -> Result<T, MissingProviderError> {
    dependency.ok_or(MissingProviderError::new(consumer, provider))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_require() {
        assert_eq!(
            require(Some(1), "use_favorites", "FavoritesProvider"),
            Ok(1)
        );
        assert_eq!(
            require::<u8>(None, "use_favorites", "FavoritesProvider"),
            Err(MissingProviderError::new("use_favorites", "FavoritesProvider"))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            MissingProviderError::new("use_workout_completion", "WorkoutCompletionProvider")
                .to_string(),
            "use_workout_completion must be used within WorkoutCompletionProvider"
        );
    }
}
