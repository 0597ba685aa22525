use super::state::WorkflowContext;
use dioxus::prelude::*;
use tracing::info;

/// Read the rule toggles and run the analysis for the current session.
/// A no-op unless the workflow is sitting on a completed upload.
pub async fn run_analysis(ctx: &WorkflowContext) -> Result<(), String> {
    let session_id = {
        let mut machine = ctx.machine;
        let started = machine.write().analysis_started();
        match started {
            Some(session_id) => session_id,
            None => {
                info!("Analysis requested without an uploaded session; ignoring");
                return Ok(());
            }
        }
    };

    let rule_ids = ctx.selected_rule_ids();
    let result = ctx.analyzer.analyze(&session_id, rule_ids).await;

    let mut machine = ctx.machine;
    match result {
        Ok(summary) => {
            machine.write().analysis_succeeded(summary);
            Ok(())
        }
        Err(e) => {
            let message = e.to_string();
            machine.write().analysis_failed(message.clone());
            Err(message)
        }
    }
}
