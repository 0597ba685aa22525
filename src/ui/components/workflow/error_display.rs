use crate::ui::workflow_context::WorkflowContext;
use dioxus::prelude::*;
use std::rc::Rc;

/// Dedicated error area. Takes exclusive visual precedence: the page only
/// renders it on the Error panel, where no progress or result area exists.
#[component]
pub fn ErrorDisplay() -> Element {
    let ctx = use_context::<Rc<WorkflowContext>>();

    if let Some(error) = ctx.error_message() {
        rsx! {
            div { class: "bg-red-50 border border-red-200 rounded-lg p-4",
                p { class: "text-sm text-red-700 select-text break-words", "{error}" }
            }
        }
    } else {
        rsx! {
            div {}
        }
    }
}
