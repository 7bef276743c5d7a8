use dioxus::prelude::*;

use crate::{
    Route,
    component::element::{ErrorMessage, IconText},
};

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        ErrorMessage { message: "Page not found: /{path}" }
        div {
            class: "block has-text-centered mt-4",
            Link {
                class: "button",
                to: Route::Landing {},
                IconText { icon: "house", text: "Back to start" }
            }
        }
    }
}
