use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

use crate::config::Config;
use crate::ui::components::WorkflowPage;
use crate::ui::workflow_context::WorkflowContextProvider;
use crate::ui::AppContext;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("acheck")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(980, 760))
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| AppContext::new(Config::load()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        WorkflowContextProvider {
            WorkflowPage {}
        }
    }
}
