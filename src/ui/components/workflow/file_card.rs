use crate::ui::workflow_context::WorkflowContext;
use dioxus::prelude::*;
use std::rc::Rc;

/// Metadata of the file the user just picked
#[component]
pub fn SelectedFileCard() -> Element {
    let ctx = use_context::<Rc<WorkflowContext>>();
    let Some(file) = ctx.file() else {
        return rsx! {
            div {}
        };
    };
    let size_label = format_size(file.size);

    rsx! {
        div { class: "flex items-center space-x-3 bg-gray-700 rounded-lg p-4",
            div { class: "text-2xl", "📄" }
            div { class: "min-w-0",
                p { class: "text-sm font-medium text-gray-200 truncate", "{file.name}" }
                p { class: "text-xs text-gray-400", "{size_label}" }
            }
        }
    }
}

/// Human-readable byte size
pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;

    let bytes = bytes as f64;
    if bytes >= MIB {
        format!("{:.1} MB", bytes / MIB)
    } else if bytes >= KIB {
        format!("{:.1} KB", bytes / KIB)
    } else {
        format!("{} bytes", bytes as u64)
    }
}
