mod support;

use acheck::api::models::AnalyzeResponse;
use acheck::api::AnalysisServiceManager;
use acheck::workflow::{
    validate, AnalysisCoordinator, LocalDocument, Panel, UploadCoordinator, WorkflowMachine,
};
use std::io::Write;
use std::sync::Arc;
use support::MockAnalysisService;
use tokio::sync::mpsc;

fn sample_document() -> LocalDocument {
    LocalDocument::from_bytes("deck.pptx".to_string(), String::new(), b"PK fake pptx".to_vec())
}

fn sample_analysis() -> AnalyzeResponse {
    serde_json::from_str(
        r#"{
            "scores": {"overall_score": 87, "grade": "B", "total_issues": 12, "issues_per_slide": 1.2},
            "findings_by_severity": {"high": 3, "low": 9},
            "metadata": {"slide_count": 10, "rules_run": ["rule_01", "rule_03"]}
        }"#,
    )
    .unwrap()
}

#[tokio::test]
async fn upload_success_stores_session_and_analysis_targets_it() {
    support::tracing_init();
    let mock = Arc::new(MockAnalysisService::upload_ok("abc123").with_analysis(sample_analysis()));
    let service = AnalysisServiceManager::with_service(mock.clone());
    let uploader = UploadCoordinator::new(service.clone());
    let analyzer = AnalysisCoordinator::new(service);

    let document = sample_document();
    validate(&document.meta).unwrap();

    let mut machine = WorkflowMachine::new();
    assert!(machine.file_selected(document.meta.clone()));
    assert!(machine.upload_started());

    let (progress_tx, mut progress_rx) = mpsc::unbounded_channel();
    let summary = uploader.upload(&document, progress_tx).await.unwrap();
    machine.upload_succeeded(summary);

    assert_eq!(machine.panel(), Panel::Uploaded);
    assert_eq!(machine.session_id(), Some("abc123"));
    assert_eq!(
        mock.uploaded_filenames.lock().unwrap().as_slice(),
        ["deck.pptx"]
    );

    // the indicator settled at 100 once the call returned
    let mut values = Vec::new();
    while let Some(value) = progress_rx.recv().await {
        values.push(value);
    }
    assert_eq!(values.last(), Some(&100));
    assert!(values[..values.len() - 1].iter().all(|value| *value <= 90));

    let session_id = machine.analysis_started().expect("session must be present");
    let result = analyzer
        .analyze(&session_id, vec!["rule_01".to_string()])
        .await
        .unwrap();
    machine.analysis_succeeded(result);

    assert_eq!(machine.panel(), Panel::Results);
    assert_eq!(
        mock.analyzed_sessions.lock().unwrap().as_slice(),
        ["abc123"]
    );
    assert_eq!(
        mock.analyzed_rules.lock().unwrap().as_slice(),
        [vec!["rule_01".to_string()]]
    );

    let summary = machine.summary().unwrap();
    assert_eq!(summary.total_issues, 12);
}

#[tokio::test]
async fn upload_failure_carries_the_service_detail_message() {
    support::tracing_init();
    let mock = Arc::new(MockAnalysisService::upload_err("file too large"));
    let uploader = UploadCoordinator::new(AnalysisServiceManager::with_service(mock));

    let document = sample_document();
    let mut machine = WorkflowMachine::new();
    machine.file_selected(document.meta.clone());
    machine.upload_started();

    let (progress_tx, mut progress_rx) = mpsc::unbounded_channel();
    let error = uploader.upload(&document, progress_tx).await.unwrap_err();
    assert_eq!(error.to_string(), "Upload failed: file too large");

    machine.upload_failed(error.to_string());
    assert_eq!(machine.panel(), Panel::Error);
    assert_eq!(machine.error(), Some("Upload failed: file too large"));
    assert_eq!(machine.session_id(), None);

    // the ticker still snapped to 100 on the failure path
    let mut last = None;
    while let Some(value) = progress_rx.recv().await {
        last = Some(value);
    }
    assert_eq!(last, Some(100));
}

#[tokio::test]
async fn analysis_failure_keeps_the_session_for_a_later_strategy() {
    support::tracing_init();
    let mock =
        Arc::new(MockAnalysisService::upload_ok("abc123").with_analysis_error("engine exploded"));
    let service = AnalysisServiceManager::with_service(mock);
    let uploader = UploadCoordinator::new(service.clone());
    let analyzer = AnalysisCoordinator::new(service);

    let document = sample_document();
    let mut machine = WorkflowMachine::new();
    machine.file_selected(document.meta.clone());
    machine.upload_started();
    let (progress_tx, _progress_rx) = mpsc::unbounded_channel();
    let summary = uploader.upload(&document, progress_tx).await.unwrap();
    machine.upload_succeeded(summary);

    let session_id = machine.analysis_started().unwrap();
    let error = analyzer.analyze(&session_id, Vec::new()).await.unwrap_err();
    assert_eq!(error.to_string(), "Analysis failed: engine exploded");

    machine.analysis_failed(error.to_string());
    assert_eq!(machine.panel(), Panel::Error);
    assert_eq!(machine.session_id(), Some("abc123"));
}

#[tokio::test]
async fn restart_discards_the_session_for_service_cleanup() {
    support::tracing_init();
    let mock = Arc::new(MockAnalysisService::upload_ok("abc123"));
    let service = AnalysisServiceManager::with_service(mock.clone());
    let uploader = UploadCoordinator::new(service.clone());

    let document = sample_document();
    let mut machine = WorkflowMachine::new();
    machine.file_selected(document.meta.clone());
    machine.upload_started();
    let (progress_tx, _progress_rx) = mpsc::unbounded_channel();
    let summary = uploader.upload(&document, progress_tx).await.unwrap();
    machine.upload_succeeded(summary);

    let discarded = machine.reset().expect("session should be handed back");
    assert_eq!(machine.panel(), Panel::Idle);
    assert_eq!(machine.session_id(), None);
    assert!(machine.summary().is_none());

    service.delete_session(&discarded).await.unwrap();
    assert_eq!(
        mock.deleted_sessions.lock().unwrap().as_slice(),
        ["abc123"]
    );
}

#[tokio::test]
async fn documents_load_from_disk_with_their_metadata() {
    support::tracing_init();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Quarterly Review.PPTX");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"PK fake pptx payload").unwrap();

    let document = LocalDocument::from_path(path).await.unwrap();
    assert_eq!(document.meta.name, "Quarterly Review.PPTX");
    assert_eq!(document.meta.size, 20);
    assert!(document.meta.media_type.is_empty());
    validate(&document.meta).unwrap();

    let content = document.read().await.unwrap();
    assert_eq!(content, b"PK fake pptx payload");
}
