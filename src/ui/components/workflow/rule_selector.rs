use crate::ui::workflow_context::WorkflowContext;
use dioxus::prelude::*;
use std::rc::Rc;

/// Independent boolean toggles, one per rule the service can run. The
/// enabled set is read fresh when analysis starts, never here.
#[component]
pub fn RuleSelector(disabled: bool) -> Element {
    let ctx = use_context::<Rc<WorkflowContext>>();
    let rules_signal = ctx.rules();
    let rules = rules_signal.read().clone();

    rsx! {
        div { class: "space-y-3",
            h3 { class: "text-sm font-semibold text-gray-300", "Rules to run" }
            for rule in rules {
                div { key: "{rule.id}", class: "flex items-start space-x-3",
                    input {
                        r#type: "checkbox",
                        id: "rule-{rule.id}",
                        checked: rule.enabled,
                        disabled,
                        onchange: {
                            let ctx = ctx.clone();
                            let rule_id = rule.id.clone();
                            move |_| ctx.toggle_rule(&rule_id)
                        },
                        class: "mt-1 w-4 h-4 text-blue-600 border-gray-600 rounded focus:ring-blue-500 bg-gray-700",
                    }
                    label { r#for: "rule-{rule.id}", class: "text-sm text-gray-300",
                        span { class: "font-medium", "{rule.name}" }
                        p { class: "text-xs text-gray-400", "{rule.description}" }
                    }
                }
            }
        }
    }
}
