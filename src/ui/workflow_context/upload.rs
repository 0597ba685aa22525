use super::state::WorkflowContext;
use crate::workflow::types::LocalDocument;
use crate::workflow::validate;
use dioxus::prelude::*;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::warn;

/// Load a document picked through the native dialog or dropped as a path
pub async fn select_path(ctx: &WorkflowContext, path: PathBuf) -> Result<(), String> {
    match LocalDocument::from_path(path.clone()).await {
        Ok(document) => select_document(ctx, document).await,
        Err(e) => {
            let message = format!("Could not read '{}': {}", path.display(), e);
            let mut machine = ctx.machine;
            machine.write().validation_failed(message.clone());
            Err(message)
        }
    }
}

/// Validate the candidate, show its metadata, then hand it to the upload
/// stage. FileSelected is shown only momentarily: a valid selection moves to
/// Uploading on its own.
pub async fn select_document(ctx: &WorkflowContext, document: LocalDocument) -> Result<(), String> {
    if let Err(rejection) = validate::validate(&document.meta) {
        let message = rejection.to_string();
        warn!("Rejected '{}': {}", document.meta.name, message);
        let mut machine = ctx.machine;
        machine.write().validation_failed(message.clone());
        return Err(message);
    }

    {
        let mut machine = ctx.machine;
        if !machine.write().file_selected(document.meta.clone()) {
            // a transfer is in flight; the intake controls are hidden, but a
            // drop event can still race in
            return Err("A transfer is already in progress".to_string());
        }
    }

    upload(ctx, document).await
}

async fn upload(ctx: &WorkflowContext, document: LocalDocument) -> Result<(), String> {
    {
        let mut machine = ctx.machine;
        if !machine.write().upload_started() {
            return Err("Upload is not available right now".to_string());
        }
    }
    ctx.set_upload_percent(0);

    // forward ticker values into the signal the progress bar renders from;
    // the task ends when the coordinator drops the sender
    let (progress_tx, mut progress_rx) = mpsc::unbounded_channel();
    let mut percent_signal = ctx.upload_percent;
    spawn(async move {
        while let Some(percent) = progress_rx.recv().await {
            percent_signal.set(percent);
        }
    });

    let result = ctx.uploader.upload(&document, progress_tx).await;

    let mut machine = ctx.machine;
    match result {
        Ok(summary) => {
            machine.write().upload_succeeded(summary);
            Ok(())
        }
        Err(e) => {
            let message = e.to_string();
            machine.write().upload_failed(message.clone());
            Err(message)
        }
    }
}
