use super::rule_selector::RuleSelector;
use crate::ui::workflow_context::WorkflowContext;
use dioxus::prelude::*;
use std::rc::Rc;

/// Uploaded panel: the stored session summary, the rule toggles and the
/// analysis trigger
#[component]
pub fn AnalyzePanel() -> Element {
    let ctx = use_context::<Rc<WorkflowContext>>();

    let upload_card = match ctx.upload() {
        Some(upload) => {
            let type_line = if upload.file_type.is_empty() {
                String::new()
            } else {
                format!("Detected type: {}", upload.file_type)
            };
            rsx! {
                div { class: "bg-gray-700 rounded-lg p-4",
                    p { class: "text-sm text-gray-200",
                        span { class: "font-medium", "{upload.filename}" }
                        " is ready for analysis"
                    }
                    if !type_line.is_empty() {
                        p { class: "text-xs text-gray-400", "{type_line}" }
                    }
                }
            }
        }
        None => rsx! {},
    };

    let on_run = {
        let ctx = ctx.clone();
        move |_| {
            let ctx = ctx.clone();
            spawn(async move {
                let _ = ctx.run_analysis().await;
            });
        }
    };

    rsx! {
        div { class: "space-y-4",
            {upload_card}

            RuleSelector { disabled: false }

            button {
                class: "w-full px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium",
                onclick: on_run,
                "Run analysis"
            }
        }
    }
}

/// Analyzing panel: the request is in flight and the trigger is gone, so a
/// second analysis cannot start before the first settles
#[component]
pub fn AnalyzingPanel() -> Element {
    rsx! {
        div { class: "space-y-4",
            RuleSelector { disabled: true }
            div { class: "flex items-center justify-center space-x-3 py-6",
                div { class: "w-5 h-5 border-2 border-blue-500 border-t-transparent rounded-full animate-spin" }
                p { class: "text-sm text-gray-300", "Analyzing the document..." }
            }
        }
    }
}
