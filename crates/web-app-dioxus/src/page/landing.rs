use dioxus::prelude::*;

use planfit_domain::{FormData, PlanRequest, PlanService};
use planfit_web_app::ProfileService;

use crate::{
    DOMAIN_SERVICE, Route, WEB_APP_SERVICE,
    component::{
        element::{Color, IconText, LoadingPage, Message},
        intake::IntakeForm,
    },
    notify, show_toast,
};

#[component]
pub fn Landing() -> Element {
    let mut generating = use_signal(|| false);
    let navigator = use_navigator();
    let has_profile = WEB_APP_SERVICE.read().get_profile().is_some();

    let generate = move |data: FormData| {
        generating.set(true);
        spawn(async move {
            let request = PlanRequest::from(&data);
            let result = DOMAIN_SERVICE.read().generate_plan(request).await;
            generating.set(false);
            match result {
                Ok(profile) => match WEB_APP_SERVICE.read().set_profile(&profile) {
                    Ok(()) => {
                        show_toast("Your workout plan is ready");
                        navigator.push(Route::Dashboard {});
                    }
                    Err(err) => notify(format!("Failed to save plan: {err}")),
                },
                Err(err) => notify(format!("Failed to generate plan: {err}")),
            }
        });
    };

    rsx! {
        section {
            class: "hero is-small",
            div {
                class: "hero-body has-text-centered",
                p { class: "title", "Your personal workout plan" }
                p { class: "subtitle", "Tell us what to train and what you have, we do the rest." }
            }
        }
        if has_profile {
            Message {
                color: Color::Info,
                div {
                    class: "is-flex is-justify-content-space-between is-align-items-center",
                    span { "You already have a plan. A new one replaces it." }
                    Link {
                        class: "button is-small is-info",
                        to: Route::Dashboard {},
                        IconText { icon: "list-check", text: "Show plan" }
                    }
                }
            }
        }
        if generating() {
            LoadingPage { text: "Generating your plan" }
        }
        IntakeForm { on_complete: generate, is_busy: generating() }
    }
}
