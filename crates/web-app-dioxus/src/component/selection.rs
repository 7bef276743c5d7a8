use std::collections::BTreeSet;

use dioxus::prelude::*;

use planfit_domain::{
    self as domain, Equipment, EquipmentOption, MuscleGroup, MuscleGroupDropdown,
    MuscleGroupOption,
};

use crate::component::element::{Icon, IconText};

/// Multi-select dropdown of muscle groups.
///
/// The dropdown closes when its trigger loses focus, so an outside click closes it and still
/// reaches its target. Menu items keep the focus on the trigger.
#[component]
pub fn MuscleGroupSelect(
    selected: BTreeSet<MuscleGroup>,
    error: Option<String>,
    onchange: EventHandler<BTreeSet<MuscleGroup>>,
) -> Element {
    let mut dropdown = use_signal(MuscleGroupDropdown::default);
    let is_open = dropdown.read().is_open();
    let label = domain::muscle_group_label(&selected);
    let arrow = if is_open { "angle-up" } else { "angle-down" };

    rsx! {
        div {
            class: "field",
            div {
                class: "dropdown is-fullwidth",
                class: if is_open { "is-active" },
                div {
                    class: "dropdown-trigger",
                    button {
                        aria_haspopup: "true",
                        aria_expanded: is_open,
                        class: "button is-fullwidth is-justify-content-space-between",
                        class: if error.is_some() { "is-danger" },
                        onclick: move |_| dropdown.write().toggle_open(),
                        onfocusout: move |_| dropdown.write().close(),
                        span { "{label}" }
                        Icon { name: "{arrow}", is_small: true }
                    }
                }
                div {
                    class: "dropdown-menu",
                    role: "menu",
                    div {
                        class: "dropdown-content",
                        for option in MuscleGroupOption::iter() {
                            a {
                                key: "{option.id()}",
                                class: "dropdown-item",
                                class: if option.is_selected(&selected) { "is-active" },
                                onmousedown: move |evt: MouseEvent| evt.prevent_default(),
                                onclick: {
                                    let selected = selected.clone();
                                    move |_| {
                                        let selection = dropdown.write().choose(&selected, option);
                                        onchange.call(selection);
                                    }
                                },
                                IconText { icon: "{option.icon()}", text: "{option.name()}" }
                            }
                        }
                    }
                }
            }
            if let Some(error) = &error {
                p { class: "help is-danger", "{error}" }
            }
        }
    }
}

/// Grid of equipment cards with a trailing "Select All" card.
#[component]
pub fn EquipmentGrid(
    selected: BTreeSet<Equipment>,
    error: Option<String>,
    onchange: EventHandler<BTreeSet<Equipment>>,
) -> Element {
    let has_error = error.is_some();
    rsx! {
        div {
            class: "field",
            div {
                class: "grid is-col-min-9",
                for option in EquipmentOption::iter() {
                    div {
                        key: "{option.id()}",
                        class: "cell",
                        div {
                            class: "box is-clickable has-text-centered p-3",
                            class: if option.is_selected(&selected) { "has-background-link-light has-text-link" },
                            class: if has_error { "has-border-danger" },
                            onclick: {
                                let selected = selected.clone();
                                move |_| onchange.call(domain::choose_equipment(&selected, option))
                            },
                            p { class: "has-text-weight-bold", "{option.name()}" }
                            p { class: "is-size-7", "{option.description()}" }
                        }
                    }
                }
            }
            if let Some(error) = &error {
                p { class: "help is-danger", "{error}" }
            }
        }
    }
}
