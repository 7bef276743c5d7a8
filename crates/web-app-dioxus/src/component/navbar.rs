use dioxus::prelude::*;

use planfit_web_app::log::Service as _;

use crate::{
    DOMAIN_SERVICE, Route, WEB_APP_SERVICE,
    component::element::{Color, Dialog, ElementWithDescription, ErrorMessage, Icon, Message},
};

#[component]
pub fn Navbar() -> Element {
    let mut menu_visible = use_signal(|| false);
    let mut log_visible = use_signal(|| false);
    let navigator = use_navigator();
    let offline = DOMAIN_SERVICE.read().repository().is_offline();

    let page_title = match use_route::<Route>() {
        Route::Landing {} => "Planfit",
        Route::Dashboard {} => "Your plan",
        Route::NotFound { .. } => "",
    };

    rsx! {
        nav {
            class: "navbar is-fixed-top is-primary has-shadow has-text-weight-bold",
            div {
                class: "container",
                div {
                    class: "navbar-brand is-flex-grow-1",
                    a {
                        class: "navbar-item is-size-5",
                        onclick: move |_| {
                            navigator.push(Route::Landing {});
                        },
                        Icon { name: "dumbbell" }
                    }
                    div { class: "navbar-item is-size-5", "{page_title}" }
                    div { class: "mx-auto" }
                    if offline {
                        a {
                            class: "navbar-item",
                            class: "is-size-5",
                            class: "mx-1",
                            ElementWithDescription {
                                description: "Offline mode: data is stored on this device only",
                                right_aligned: true,
                                Icon { name: "plug-circle-xmark" }
                            }
                        }
                    }
                    a {
                        aria_expanded: menu_visible(),
                        aria_label: "menu",
                        class: "navbar-burger ml-0",
                        class: if menu_visible() { "is-active" },
                        role: "button",
                        onclick: move |_| { *menu_visible.write() = !menu_visible() },
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                    }
                }
                div {
                    class: "navbar-menu is-flex-grow-0",
                    class: if menu_visible() { "is-active" },
                    div {
                        class: "navbar-end",
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *menu_visible.write() = false;
                                navigator.push(Route::Landing {});
                            },
                            Icon { name: "plus", px: 5 }
                            "New plan"
                        }
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *menu_visible.write() = false;
                                navigator.push(Route::Dashboard {});
                            },
                            Icon { name: "list-check", px: 5 }
                            "Dashboard"
                        }
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *menu_visible.write() = false;
                                *log_visible.write() = true;
                            },
                            Icon { name: "list", px: 5 }
                            "Log"
                        }
                    }
                }
            }
        }

        if log_visible() {
            Log { log_visible }
        }

        Outlet::<Route> {}
    }
}

#[component]
fn Log(log_visible: Signal<bool>) -> Element {
    let entries = WEB_APP_SERVICE.read().get_log_entries();
    rsx! {
        Dialog {
            title: rsx! { "Log" },
            close_event: move |_| *log_visible.write() = false,
            match entries {
                Ok(entries) if entries.is_empty() => rsx! {
                    p { class: "has-text-centered has-text-grey-light", "No entries" }
                },
                Ok(entries) => rsx! {
                    for entry in entries {
                        Message {
                            color: match entry.level {
                                log::Level::Error => Color::Danger,
                                log::Level::Warn => Color::Warning,
                                log::Level::Info => Color::Primary,
                                log::Level::Debug => Color::Info,
                                log::Level::Trace => Color::Dark,
                            },
                            p { class: "is-size-7", {entry.time} }
                            p { "{entry.message}" }
                        }
                    }
                },
                Err(err) => rsx! {
                    ErrorMessage { message: "Failed to read log: {err}" }
                },
            }
        }
    }
}
