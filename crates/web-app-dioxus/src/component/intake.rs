use dioxus::prelude::*;

use planfit_domain::{Field, FormData, IntakeFlow, Next, Step};

use crate::component::{
    element::{Icon, ProgressBar, Title},
    selection::{EquipmentGrid, MuscleGroupSelect},
};

/// Two-step form collecting muscle groups and equipment.
///
/// The accumulated form data is handed to `on_complete` when the last step validates. The form
/// keeps its state afterwards, so a failed generation can be retried.
#[component]
pub fn IntakeForm(on_complete: EventHandler<FormData>, is_busy: bool) -> Element {
    let mut flow = use_signal(IntakeFlow::new);
    let step = flow.read().step();
    let data = flow.read().data().clone();
    let muscle_groups_error = flow.read().error(Field::MuscleGroups).map(String::from);
    let equipment_error = flow.read().error(Field::Equipment).map(String::from);
    let percent = usize::from(flow.read().progress());

    rsx! {
        div {
            class: "box",
            ProgressBar { value: percent, max: 100 }
            Title {
                title: "{step.title()}",
                subtitle: "Step {step.index() + 1} of {Step::COUNT}",
            }
            match step {
                Step::MuscleGroups => rsx! {
                    MuscleGroupSelect {
                        selected: data.muscle_groups,
                        error: muscle_groups_error,
                        onchange: move |selection| flow.write().set_muscle_groups(selection),
                    }
                },
                Step::Equipment => rsx! {
                    EquipmentGrid {
                        selected: data.equipment,
                        error: equipment_error,
                        onchange: move |selection| flow.write().set_equipment(selection),
                    }
                },
            }
            div {
                class: "field is-grouped is-grouped-centered mt-5",
                if step != Step::MuscleGroups {
                    div {
                        class: "control",
                        button {
                            class: "button is-light is-soft",
                            disabled: is_busy,
                            onclick: move |_| flow.write().prev(),
                            Icon { name: "arrow-left", is_small: true }
                            span { "Back" }
                        }
                    }
                }
                div {
                    class: "control",
                    button {
                        class: "button is-primary",
                        class: if is_busy { "is-loading" },
                        disabled: is_busy,
                        onclick: move |_| {
                            let next = flow.write().next();
                            if let Next::Completed(data) = next {
                                on_complete.call(data);
                            }
                        },
                        if step.is_last() {
                            span { "Generate plan" }
                            Icon { name: "wand-magic-sparkles", is_small: true }
                        } else {
                            span { "Next" }
                            Icon { name: "arrow-right", is_small: true }
                        }
                    }
                }
            }
        }
    }
}
