use crate::ui::workflow_context::WorkflowContext;
use crate::workflow::types::LocalDocument;
use dioxus::html::HasFileData;
use dioxus::prelude::*;
use rfd::AsyncFileDialog;
use std::rc::Rc;
use tracing::warn;

/// File intake: drag a document onto the zone or browse with the native
/// dialog. Validation and the automatic upload both run behind
/// `select_document`.
#[component]
pub fn DropZone() -> Element {
    let ctx = use_context::<Rc<WorkflowContext>>();

    let on_browse_click = {
        let ctx = ctx.clone();
        move |_| {
            let ctx = ctx.clone();
            spawn(async move {
                if let Some(file_handle) = AsyncFileDialog::new()
                    .set_title("Select a presentation or PDF")
                    .add_filter("Documents", &["pptx", "pdf"])
                    .pick_file()
                    .await
                {
                    let _ = ctx.select_path(file_handle.path().to_path_buf()).await;
                }
            });
        }
    };

    let on_drop = {
        let ctx = ctx.clone();
        move |evt: DragEvent| {
            evt.prevent_default();
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };
            let ctx = ctx.clone();
            spawn(async move {
                match file.read_bytes().await {
                    Ok(bytes) => {
                        // drops carry no reliable media type; the validator
                        // leans on the extension anyway
                        let document = LocalDocument::from_bytes(
                            file.name(),
                            String::new(),
                            bytes.to_vec(),
                        );
                        let _ = ctx.select_document(document).await;
                    }
                    Err(e) => warn!("Could not read dropped file '{}': {}", file.name(), e),
                }
            });
        }
    };

    rsx! {
        div {
            class: "border-2 border-dashed border-gray-600 rounded-lg p-10 text-center",
            ondragover: move |evt: DragEvent| evt.prevent_default(),
            ondrop: on_drop,
            div { class: "space-y-4",
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    fill: "none",
                    view_box: "0 0 24 24",
                    stroke_width: "1.5",
                    stroke: "currentColor",
                    class: "w-16 h-16 mx-auto text-gray-400",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        d: "M19.5 14.25v-2.625a3.375 3.375 0 00-3.375-3.375h-1.5A1.125 1.125 0 0113.5 7.125v-1.5a3.375 3.375 0 00-3.375-3.375H8.25m0 12.75h7.5m-7.5 3H12M10.5 2.25H5.625c-.621 0-1.125.504-1.125 1.125v17.25c0 .621.504 1.125 1.125 1.125h12.75c.621 0 1.125-.504 1.125-1.125V11.25a9 9 0 00-9-9z"
                    }
                }
                div {
                    h3 { class: "text-lg font-semibold text-gray-200 mb-2",
                        "Drop a presentation or PDF here"
                    }
                    p { class: "text-sm text-gray-400 mb-4",
                        ".pptx and .pdf documents are supported"
                    }
                    button {
                        class: "px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium",
                        onclick: on_browse_click,
                        "Browse Files"
                    }
                }
            }
        }
    }
}
