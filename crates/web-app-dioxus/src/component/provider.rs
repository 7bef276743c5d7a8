use std::rc::Rc;

use dioxus::prelude::*;

use planfit_domain::CompletionService;
use planfit_storage::{local_storage::UI, remote::CompletionChange};
use planfit_web_app::{self as web_app, MissingProviderError};

use crate::DOMAIN_SERVICE;

pub type Favorites = web_app::Favorites<UI>;
pub type WorkoutCompletion = web_app::WorkoutCompletion<UI>;

#[component]
pub fn FavoritesProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Favorites::load(UI)));
    rsx! { {children} }
}

/// Offline mode is decided once at mount by the kind of backend client in use. When online,
/// completions recorded remotely are merged into the local ones, and changes made on other
/// devices are applied while the provider is mounted.
#[component]
pub fn WorkoutCompletionProvider(children: Element) -> Element {
    let mut completion = use_context_provider(|| {
        let offline_mode = DOMAIN_SERVICE.read().repository().is_offline();
        Signal::new(WorkoutCompletion::load(UI, offline_mode))
    });

    use_future(move || async move {
        if completion.peek().is_offline_mode() {
            return;
        }
        if let Ok(ids) = DOMAIN_SERVICE.read().get_completions().await {
            let _ = completion.write().merge(ids);
        }
    });

    use_hook(move || {
        let remote = DOMAIN_SERVICE.read().repository().clone();
        Rc::new(remote.subscribe_completions(move |change| {
            let mut completion = completion;
            let _ = match change {
                CompletionChange::Recorded(id) => completion.write().mark_completed(id),
                CompletionChange::Removed(id) => completion.write().unmark_completed(&id),
            };
        }))
    });

    rsx! { {children} }
}

pub fn try_use_favorites() -> Result<Signal<Favorites>, MissingProviderError> {
    web_app::require(try_use_context(), "use_favorites", "FavoritesProvider")
}

/// # Panics
///
/// Panics if not used within a `FavoritesProvider`.
pub fn use_favorites() -> Signal<Favorites> {
    try_use_favorites().unwrap_or_else(|err| panic!("{err}"))
}

pub fn try_use_workout_completion() -> Result<Signal<WorkoutCompletion>, MissingProviderError> {
    web_app::require(
        try_use_context(),
        "use_workout_completion",
        "WorkoutCompletionProvider",
    )
}

/// # Panics
///
/// Panics if not used within a `WorkoutCompletionProvider`.
pub fn use_workout_completion() -> Signal<WorkoutCompletion> {
    try_use_workout_completion().unwrap_or_else(|err| panic!("{err}"))
}
