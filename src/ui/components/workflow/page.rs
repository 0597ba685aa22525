use super::analysis_panel::{AnalyzePanel, AnalyzingPanel};
use super::dropzone::DropZone;
use super::error_display::ErrorDisplay;
use super::file_card::SelectedFileCard;
use super::results_panel::ResultsPanel;
use super::upload_status::UploadStatus;
use crate::ui::workflow_context::WorkflowContext;
use crate::workflow::machine::Panel;
use dioxus::prelude::*;
use std::rc::Rc;

/// Single-page workflow. Exactly one stage panel renders at a time,
/// dispatched on the machine's current panel, so progress, results and error
/// areas can never be visible together.
#[component]
pub fn WorkflowPage() -> Element {
    let ctx = use_context::<Rc<WorkflowContext>>();

    {
        let ctx = ctx.clone();
        use_future(move || {
            let ctx = ctx.clone();
            async move {
                ctx.refresh_rules().await;
            }
        });
    }

    let panel = ctx.panel();
    let on_restart = {
        let ctx = ctx.clone();
        move |_| ctx.restart()
    };

    rsx! {
        div { class: "max-w-3xl mx-auto p-6",
            div { class: "mb-6 flex items-center justify-between",
                div {
                    h1 { class: "text-2xl font-bold text-white", "Accessibility Checker" }
                    p { class: "text-sm text-gray-400",
                        "Check a presentation or PDF against accessibility rules"
                    }
                }
                if panel != Panel::Idle {
                    button {
                        class: "px-4 py-2 text-sm bg-gray-700 text-gray-200 rounded-lg hover:bg-gray-600 transition-colors",
                        onclick: on_restart,
                        "Start over"
                    }
                }
            }

            div { class: "bg-gray-800 rounded-lg shadow p-6 space-y-4",
                match panel {
                    Panel::Idle => rsx! {
                        DropZone {}
                    },
                    Panel::FileSelected => rsx! {
                        SelectedFileCard {}
                    },
                    Panel::Uploading => rsx! {
                        SelectedFileCard {}
                        UploadStatus {}
                    },
                    Panel::Uploaded => rsx! {
                        AnalyzePanel {}
                    },
                    Panel::Analyzing => rsx! {
                        AnalyzingPanel {}
                    },
                    Panel::Results => rsx! {
                        ResultsPanel {}
                    },
                    Panel::Error => rsx! {
                        ErrorDisplay {}
                        DropZone {}
                    },
                }
            }
        }
    }
}
