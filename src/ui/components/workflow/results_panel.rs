use crate::ui::workflow_context::WorkflowContext;
use crate::workflow::summary::{Grade, Severity};
use dioxus::prelude::*;
use std::rc::Rc;

fn grade_class(grade: Option<Grade>) -> &'static str {
    match grade {
        Some(Grade::A) => "text-green-400",
        Some(Grade::B) => "text-lime-400",
        Some(Grade::C) => "text-yellow-400",
        Some(Grade::D) => "text-orange-400",
        Some(Grade::F) => "text-red-400",
        None => "text-gray-400",
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "text-red-400",
        Severity::High => "text-orange-400",
        Severity::Medium => "text-yellow-400",
        Severity::Low => "text-blue-400",
        Severity::Info => "text-gray-400",
    }
}

/// Score, grade and severity breakdown of the last analysis. Scrolls itself
/// into view when it appears.
#[component]
pub fn ResultsPanel() -> Element {
    let ctx = use_context::<Rc<WorkflowContext>>();
    let Some(summary) = ctx.summary() else {
        return rsx! {
            div {}
        };
    };
    let acknowledged = ctx.findings_acknowledged();

    let grade_label = summary.grade.as_ref().map(Grade::as_str).unwrap_or("—");
    let grade_color = grade_class(summary.grade);
    let severity_rows: Vec<(&'static str, &'static str, u64)> = Severity::ALL
        .iter()
        .map(|severity| {
            (
                severity.as_str(),
                severity_class(*severity),
                summary.count(*severity),
            )
        })
        .collect();

    let mut meta_parts: Vec<String> = Vec::new();
    if let Some(title) = &summary.presentation_title {
        meta_parts.push(format!("\"{}\"", title));
    }
    if let Some(slides) = summary.slide_count {
        meta_parts.push(format!("{} slides", slides));
    }
    meta_parts.push(format!("{} rules run", summary.rules_run.len()));
    let meta_line = meta_parts.join(", ");

    let on_view_findings = {
        let ctx = ctx.clone();
        move |_| ctx.acknowledge_findings_request()
    };

    rsx! {
        div {
            class: "space-y-6",
            onmounted: move |evt| {
                spawn(async move {
                    let _ = evt.data().scroll_to(ScrollBehavior::Smooth).await;
                });
            },

            div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                div { class: "bg-gray-700 rounded-lg p-4 text-center",
                    p { class: "text-3xl font-bold text-white", "{summary.overall_score}" }
                    p { class: "text-xs text-gray-400", "Overall score" }
                }
                div { class: "bg-gray-700 rounded-lg p-4 text-center",
                    p { class: "text-3xl font-bold {grade_color}", "{grade_label}" }
                    p { class: "text-xs text-gray-400", "Grade" }
                }
                div { class: "bg-gray-700 rounded-lg p-4 text-center",
                    p { class: "text-3xl font-bold text-white", "{summary.total_issues}" }
                    p { class: "text-xs text-gray-400", "Total issues" }
                }
                div { class: "bg-gray-700 rounded-lg p-4 text-center",
                    p { class: "text-3xl font-bold text-white", "{summary.issues_per_slide}" }
                    p { class: "text-xs text-gray-400", "Issues per slide" }
                }
            }

            div { class: "space-y-2",
                h3 { class: "text-sm font-semibold text-gray-300", "Findings by severity" }
                for (label , color , count) in severity_rows {
                    div { key: "{label}", class: "flex justify-between text-sm",
                        span { class: "capitalize {color}", "{label}" }
                        span { class: "text-gray-200", "{count}" }
                    }
                }
            }

            p { class: "text-xs text-gray-400", "{meta_line}" }

            div { class: "space-y-2",
                button {
                    class: "w-full px-6 py-3 bg-gray-700 text-gray-200 rounded-lg hover:bg-gray-600 transition-colors font-medium",
                    onclick: on_view_findings,
                    "View detailed findings"
                }
                if *acknowledged.read() {
                    p { class: "text-xs text-gray-400 text-center",
                        "Detailed findings review is not available yet."
                    }
                }
            }
        }
    }
}
