use super::state::WorkflowContext;
use dioxus::prelude::*;
use std::collections::HashMap;
use tracing::{debug, warn};

/// One rule toggle row
#[derive(Debug, Clone, PartialEq)]
pub struct RuleToggle {
    pub id: String,
    pub name: String,
    pub description: String,
    pub enabled: bool,
}

/// The service's built-in rule set, shown until the live list is fetched.
/// Everything starts enabled; running with none enabled is still allowed.
pub fn builtin_rules() -> Vec<RuleToggle> {
    vec![
        RuleToggle {
            id: "rule_01".to_string(),
            name: "Structure and Reading Order".to_string(),
            description: "Ensures all slides have titles and use proper layout structure"
                .to_string(),
            enabled: true,
        },
        RuleToggle {
            id: "rule_03".to_string(),
            name: "Color and Contrast".to_string(),
            description:
                "Ensures sufficient color contrast between text and background (WCAG 4.5:1 for AA)"
                    .to_string(),
            enabled: true,
        },
        RuleToggle {
            id: "rule_04".to_string(),
            name: "Fonts and Text Format".to_string(),
            description: "Ensures text uses readable fonts with appropriate size".to_string(),
            enabled: true,
        },
    ]
}

/// Refresh the toggle list from the service, preserving the user's choices
/// for rules that survive the refresh. Keeps the built-in list when the
/// service is unreachable.
pub async fn refresh_rules(ctx: &WorkflowContext) {
    match ctx.service.available_rules().await {
        Ok(rules) if !rules.is_empty() => {
            let previous: HashMap<String, bool> = ctx
                .rules
                .read()
                .iter()
                .map(|rule| (rule.id.clone(), rule.enabled))
                .collect();

            let toggles: Vec<RuleToggle> = rules
                .into_iter()
                .map(|info| RuleToggle {
                    enabled: previous.get(&info.rule_id).copied().unwrap_or(true),
                    id: info.rule_id,
                    name: info.name,
                    description: info.description,
                })
                .collect();

            debug!("Rule list refreshed: {} rules", toggles.len());
            let mut signal = ctx.rules;
            signal.set(toggles);
        }
        Ok(_) => debug!("Service returned an empty rule list; keeping built-ins"),
        Err(e) => warn!("Could not fetch rule list, keeping built-ins: {}", e),
    }
}

pub fn toggle(ctx: &WorkflowContext, rule_id: &str) {
    let mut signal = ctx.rules;
    let mut rules = signal.write();
    if let Some(rule) = rules.iter_mut().find(|rule| rule.id == rule_id) {
        rule.enabled = !rule.enabled;
    }
}

pub fn selected_rule_ids(ctx: &WorkflowContext) -> Vec<String> {
    ctx.rules
        .read()
        .iter()
        .filter(|rule| rule.enabled)
        .map(|rule| rule.id.clone())
        .collect()
}
