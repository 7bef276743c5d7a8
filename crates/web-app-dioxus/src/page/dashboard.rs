use dioxus::prelude::*;

use planfit_domain::{CompletionService, UserProfile, Workout, WorkoutID};
use planfit_web_app::ProfileService;

use crate::{
    DOMAIN_SERVICE, Route, WEB_APP_SERVICE,
    component::{
        element::{Color, Icon, IconText, Message, ProgressBar, Title},
        provider::{
            FavoritesProvider, WorkoutCompletionProvider, use_favorites, use_workout_completion,
        },
    },
    notify,
};

#[component]
pub fn Dashboard() -> Element {
    let navigator = use_navigator();

    let Some(profile) = WEB_APP_SERVICE.read().get_profile() else {
        navigator.replace(Route::Landing {});
        return rsx! {};
    };

    rsx! {
        FavoritesProvider {
            WorkoutCompletionProvider {
                Plan { profile }
            }
        }
    }
}

#[component]
fn Plan(profile: UserProfile) -> Element {
    let completion = use_workout_completion();
    let favorites = use_favorites();
    let navigator = use_navigator();

    let workouts = profile.workouts();
    let total = workouts.len();
    let attributes = profile.attributes();
    let has_attributes = !attributes.is_empty();
    let offline_mode = completion.read().is_offline_mode();
    let completed = workouts
        .iter()
        .filter(|workout| completion.read().is_completed(&workout.id))
        .count();
    let favorite_count = favorites.read().favorites().len();

    rsx! {
        if offline_mode {
            Message {
                color: Color::Warning,
                IconText {
                    icon: "plug-circle-xmark",
                    text: "Offline mode: your progress is only stored on this device",
                }
            }
        }
        Title {
            title: "Your workout plan",
            subtitle: "{completed} of {total} workouts completed, {favorite_count} favorites",
        }
        div {
            class: "block mx-2",
            ProgressBar { value: completed, max: total, color: Color::Success }
        }
        if has_attributes {
            div {
                class: "box mx-2",
                table {
                    class: "table is-fullwidth",
                    tbody {
                        for (name, value) in attributes {
                            tr {
                                key: "{name}",
                                th { "{name}" }
                                td { "{value}" }
                            }
                        }
                    }
                }
            }
        }
        if total == 0 {
            div {
                class: "block is-size-7 has-text-centered has-text-grey-light mb-6",
                "No workouts"
            }
        }
        for workout in workouts.iter() {
            WorkoutCard { key: "{workout.id}", workout: workout.clone() }
        }
        div {
            class: "field is-grouped is-grouped-centered mt-5",
            div {
                class: "control",
                button {
                    class: "button is-danger is-light",
                    onclick: move |_| {
                        match WEB_APP_SERVICE.read().clear_profile() {
                            Ok(()) => {
                                navigator.push(Route::Landing {});
                            }
                            Err(err) => notify(format!("Failed to delete plan: {err}")),
                        }
                    },
                    Icon { name: "rotate-left", is_small: true }
                    span { "Start over" }
                }
            }
        }
    }
}

#[component]
fn WorkoutCard(workout: Workout) -> Element {
    let mut completion = use_workout_completion();
    let mut favorites = use_favorites();

    let is_completed = completion.read().is_completed(&workout.id);
    let is_favorite = favorites.read().is_favorite(&workout.id);
    let favorite_id = workout.id.clone();
    let completion_id = workout.id.clone();

    rsx! {
        div {
            class: "box mx-2",
            class: if is_completed { "has-background-success-light" },
            div {
                class: "is-flex is-justify-content-space-between is-align-items-center",
                div {
                    p {
                        class: "has-text-weight-bold",
                        class: if is_completed { "has-text-success" },
                        "{workout.name}"
                    }
                    if let Some(description) = &workout.description {
                        p { class: "is-size-7", "{description}" }
                    }
                }
                div {
                    class: "is-flex is-flex-shrink-0",
                    a {
                        aria_label: "favorite",
                        class: "mx-2",
                        class: if is_favorite { "has-text-warning" } else { "has-text-grey-light" },
                        onclick: move |_| {
                            let _ = favorites.write().toggle(favorite_id.clone());
                        },
                        Icon { name: "star" }
                    }
                    a {
                        aria_label: "completed",
                        class: "mx-2",
                        class: if is_completed { "has-text-success" } else { "has-text-grey-light" },
                        onclick: move |_| {
                            let id = completion_id.clone();
                            async move {
                                toggle_completion(&mut completion, id).await;
                            }
                        },
                        Icon { name: "circle-check" }
                    }
                }
            }
        }
    }
}

/// Updates the local state first and mirrors the change to the backend when online.
async fn toggle_completion(
    completion: &mut Signal<crate::component::provider::WorkoutCompletion>,
    id: WorkoutID,
) {
    let offline_mode = completion.read().is_offline_mode();
    if completion.read().is_completed(&id) {
        let _ = completion.write().unmark_completed(&id);
        if !offline_mode {
            let _ = DOMAIN_SERVICE.read().remove_completion(id).await;
        }
    } else {
        let _ = completion.write().mark_completed(id.clone());
        if !offline_mode {
            let _ = DOMAIN_SERVICE.read().record_completion(id).await;
        }
    }
}
