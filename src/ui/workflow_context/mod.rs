pub mod analysis;
pub mod rules;
pub mod state;
pub mod upload;

pub use rules::RuleToggle;
pub use state::WorkflowContext;

use crate::ui::AppContext;
use dioxus::prelude::*;
use std::rc::Rc;

/// Provider component making the workflow context available to the page tree
#[component]
pub fn WorkflowContextProvider(children: Element) -> Element {
    let app_context = use_context::<AppContext>();

    let workflow_ctx = WorkflowContext::new(app_context.service.clone());
    use_context_provider(move || Rc::new(workflow_ctx));

    rsx! {
        {children}
    }
}
