use crate::ui::workflow_context::WorkflowContext;
use dioxus::prelude::*;
use std::rc::Rc;

/// Simulated upload progress bar. The value comes from the ticker channel,
/// forwarded into a signal by the upload flow.
#[component]
pub fn UploadStatus() -> Element {
    let ctx = use_context::<Rc<WorkflowContext>>();
    let percent = ctx.upload_percent();

    rsx! {
        div { class: "space-y-2",
            div { class: "flex justify-between text-xs text-gray-400",
                span { "Uploading..." }
                span { "{percent}%" }
            }
            div { class: "w-full bg-gray-700 rounded-full h-2",
                div {
                    class: "bg-blue-500 h-2 rounded-full transition-all",
                    style: "width: {percent}%",
                }
            }
        }
    }
}
