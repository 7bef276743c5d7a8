use dioxus::{core::Task, prelude::*};
use gloo_timers::future::TimeoutFuture;
use strum::Display;

use planfit_web_app as web_app;

use crate::TOAST;

#[allow(dead_code)]
#[derive(Display, Clone, Copy, PartialEq)]
pub enum Color {
    #[strum(to_string = "text")]
    Text,
    #[strum(to_string = "link")]
    Link,
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "info")]
    Info,
    #[strum(to_string = "success")]
    Success,
    #[strum(to_string = "warning")]
    Warning,
    #[strum(to_string = "danger")]
    Danger,
    #[strum(to_string = "dark")]
    Dark,
}

#[component]
pub fn LoadingPage(text: Option<String>) -> Element {
    rsx! {
        div {
            class: "is-size-2 has-text-centered m-6",
            i { class: "fas fa-spinner fa-pulse" }
            if let Some(text) = text {
                p { class: "is-size-6 mt-3", "{text}" }
            }
        }
    }
}

#[component]
pub fn Message(children: Element, color: Color) -> Element {
    rsx! {
        div {
            class: "message my-1 is-{color}",
            div {
                class: "message-body p-2",
                {children}
            }
        }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            class: "message is-danger mx-2",
            div {
                class: "message-body has-text-dark",
                div {
                    class: "title has-text-danger is-size-4",
                    "{message}"
                }
            }
        }
    }
}

#[component]
pub fn Icon(
    name: String,
    is_small: Option<bool>,
    px: Option<u8>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        span {
            class: "icon",
            class: if is_small.unwrap_or_default() { "is-small" },
            class: if let Some(px) = px { "px-{px}" },
            onclick: move |evt| {
                if let Some(event_handler) = onclick {
                    event_handler.call(evt);
                }
            },
            i { class: "fas fa-{name}" }
        }
    }
}

#[component]
pub fn IconText(icon: String, text: String, color: Option<Color>) -> Element {
    rsx! {
        span {
            class: "icon-text",
            class: if let Some(color) = color { "has-text-{color}" },
            Icon { name: icon }
            span { {text} }
        }
    }
}

#[component]
pub fn ElementWithDescription(
    children: Element,
    description: String,
    right_aligned: Option<bool>,
) -> Element {
    rsx! {
        div {
            class: "dropdown is-hoverable",
            class: if right_aligned.unwrap_or_default() { "is-right" },
            div {
                class: "dropdown-trigger",
                div {
                    class: "control is-clickable",
                    {children}
                }
            }
            if !description.is_empty() {
                div {
                    class: "dropdown-menu has-no-min-width",
                    div {
                        class: "dropdown-content",
                        div {
                            class: "dropdown-item",
                            "{description}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Dialog(
    children: Element,
    title: Option<Element>,
    close_event: EventHandler<MouseEvent>,
    color: Option<Color>,
) -> Element {
    let color = color.unwrap_or(Color::Primary);
    rsx! {
        div {
            class: "modal is-active",
            div {
                class: "modal-background",
                onclick: close_event
            }
            div {
                class: "modal-content",
                div {
                    class: "message is-{color} mx-2",
                    div {
                        class: "message-body has-text-text-bold has-background-scheme-main",
                        if let Some(title) = title {
                            div {
                                class: "title has-text-{color}",
                                {title}
                            }
                        }
                        {children}
                    }
                }
            }
            button {
                aria_label: "close",
                class: "modal-close",
                onclick: close_event,
            }
        }
    }
}

#[component]
pub fn Title(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        div {
            class: "block has-text-centered",
            h1 { class: "title is-5", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "subtitle is-6", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn ProgressBar(value: usize, max: usize, color: Option<Color>) -> Element {
    let color = color.unwrap_or(Color::Primary);
    rsx! {
        progress {
            class: "progress is-small is-{color}",
            value: "{value}",
            max: "{max}",
            "{value}/{max}"
        }
    }
}

/// Success notification that disappears after a few seconds.
#[component]
pub fn Toast() -> Element {
    let mut timer = use_signal(|| None::<Task>);

    use_effect(move || {
        let ticket = TOAST.read().ticket();
        if let Some(task) = timer.write().take() {
            task.cancel();
        }
        if let Some(ticket) = ticket {
            timer.set(Some(spawn(async move {
                TimeoutFuture::new(web_app::SUCCESS_TOAST_TIMEOUT_MS).await;
                TOAST.write().expire(ticket);
            })));
        }
    });

    let message = TOAST.read().message().map(str::to_string);

    rsx! {
        if let Some(message) = message {
            div {
                class: "toast notification is-success",
                role: "status",
                button {
                    aria_label: "close",
                    class: "delete",
                    onclick: move |_| TOAST.write().dismiss(),
                }
                IconText { icon: "circle-check", text: message }
            }
        }
    }
}
