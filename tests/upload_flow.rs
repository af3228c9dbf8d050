use std::time::Duration;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use safework_cli::enums::highlight_markup::HighlightMarkup;
use safework_cli::enums::risk_level::RiskLevel;
use safework_cli::enums::upload_status::UploadStatus;
use safework_cli::errors::SafeworkError;
use safework_cli::services::cancellation::{cancel_pair, CancelSignal};
use safework_cli::services::safework_api::SafeworkApi;
use safework_cli::services::text_highlighter::TextHighlighter;
use safework_cli::services::upload_controller::UploadController;
use safework_cli::structs::config::api_config::ApiConfig;
use safework_cli::structs::config::upload_config::UploadConfig;
use safework_cli::structs::document_upload::DocumentUpload;

fn controller_for(server: &MockServer) -> UploadController<SafeworkApi> {
    let api = ApiConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    };
    let client = SafeworkApi::new(api).expect("client builds");
    UploadController::new(client, Duration::from_secs(5))
}

fn pdf(name: &str) -> DocumentUpload {
    DocumentUpload::new(name, "application/pdf", b"%PDF-1.4 test".to_vec())
}

async fn mount_analysis(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/upload-document"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .up_to_n_times(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn successful_upload_becomes_current_analysis() {
    let server = MockServer::start().await;
    mount_analysis(&server, json!({
        "fileId": "f1",
        "filename": "doc.pdf",
        "riskScore": 45,
        "extractedText": "unsafe ladder",
        "feedback": "Replace the ladder",
    }))
    .await;

    let controller = controller_for(&server);
    let result = controller.submit(&pdf("doc.pdf"), &CancelSignal::never()).await.expect("upload succeeds");

    assert_eq!(result.id, "f1");
    assert_eq!(result.risk_score, 45);
    assert_eq!(result.risk_level(), RiskLevel::Medium);
    assert_eq!(result.gpt_feedback.as_deref(), Some("Replace the ladder"));
    assert_eq!(controller.state().status, UploadStatus::Complete);
    assert_eq!(controller.state().message(), "Analysis complete!");
    assert_eq!(controller.current().map(|c| c.id.clone()), Some("f1".to_string()));

    let highlighted = TextHighlighter::builtin().highlight(&result.extracted_text, HighlightMarkup::Brackets);
    assert_eq!(highlighted, "[[unsafe]] ladder");
}

#[tokio::test]
async fn document_is_sent_as_file_part() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-document"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"inspection.pdf\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fileId": "f9",
            "filename": "inspection.pdf",
            "riskScore": 10,
            "extractedText": "",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let result = controller.submit(&pdf("inspection.pdf"), &CancelSignal::never()).await;

    assert!(result.is_ok(), "unexpected error: {result:?}");
}

#[tokio::test]
async fn server_error_reports_generic_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-document"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let error = controller.submit(&pdf("doc.pdf"), &CancelSignal::never()).await.unwrap_err();

    assert!(matches!(error, SafeworkError::HttpStatus { status_code: 500, .. }));
    assert_eq!(controller.state().status, UploadStatus::Error);
    assert_eq!(controller.state().message(), "Upload failed");
    assert_eq!(controller.result_count(), 0);
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn sequential_uploads_are_listed_newest_first() {
    let server = MockServer::start().await;
    mount_analysis(&server, json!({
        "fileId": "first",
        "filename": "a.pdf",
        "riskScore": 20,
        "extractedText": "ok",
    }))
    .await;

    let controller = controller_for(&server);
    controller.submit(&pdf("a.pdf"), &CancelSignal::never()).await.expect("first upload");

    mount_analysis(&server, json!({
        "fileId": "second",
        "filename": "b.pdf",
        "riskScore": 80,
        "extractedText": "missing guard rail",
    }))
    .await;
    controller.submit(&pdf("b.pdf"), &CancelSignal::never()).await.expect("second upload");

    let store = controller.store();
    let ids: Vec<String> = store
        .lock()
        .expect("store lock")
        .iter()
        .map(|r| r.id.clone())
        .collect();

    assert_eq!(ids, vec!["second".to_string(), "first".to_string()]);
    assert_eq!(controller.current().map(|c| c.risk_level()), Some(RiskLevel::High));
}

#[tokio::test]
async fn malformed_body_is_rejected_without_storing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-document"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "riskScore": 12 })))
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let error = controller.submit(&pdf("doc.pdf"), &CancelSignal::never()).await.unwrap_err();

    assert!(matches!(error, SafeworkError::MalformedResponse { .. }));
    assert_eq!(controller.state().status, UploadStatus::Error);
    assert_eq!(controller.result_count(), 0);
}

#[tokio::test]
async fn oversized_document_never_reaches_the_service() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("big.pdf");
    std::fs::write(&file, vec![0u8; 2 * 1024 * 1024]).expect("write document");

    let limits = UploadConfig {
        max_file_size_mb: 1,
        ..UploadConfig::default()
    };

    let error = DocumentUpload::load(&file, &limits).await.unwrap_err();
    assert!(matches!(error, SafeworkError::UnsupportedDocument { .. }));
}

#[tokio::test]
async fn document_loaded_from_disk_is_uploaded() {
    let server = MockServer::start().await;
    mount_analysis(&server, json!({
        "fileId": "disk",
        "filename": "photo.png",
        "riskScore": 71.6,
        "extractedText": "Damaged cable near the exit",
        "pdfUrl": "http://reports/disk.pdf",
    }))
    .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("photo.png");
    std::fs::write(&file, b"\x89PNG\r\n").expect("write document");

    let document = DocumentUpload::load(&file, &UploadConfig::default()).await.expect("document loads");
    assert_eq!(document.mime_type, "image/png");

    let controller = controller_for(&server);
    let result = controller.submit(&document, &CancelSignal::never()).await.expect("upload succeeds");

    assert_eq!(result.risk_score, 72);
    assert_eq!(result.risk_level(), RiskLevel::High);
    assert!(result.has_report());
    assert_eq!(
        TextHighlighter::builtin().find_terms(&result.extracted_text),
        vec!["Damaged"]
    );
}

#[tokio::test]
async fn upload_after_timeout_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-document"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "fileId": "slow", "filename": "a.pdf", "extractedText": "" }))
                .set_delay(Duration::from_secs(3)),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let api = ApiConfig {
        base_url: server.uri(),
        timeout_secs: 1,
    };
    let controller = UploadController::new(SafeworkApi::new(api).expect("client builds"), Duration::from_millis(300));

    let error = controller.submit(&pdf("a.pdf"), &CancelSignal::never()).await.unwrap_err();
    assert!(matches!(error, SafeworkError::Timeout { .. }));
    assert_eq!(controller.state().status, UploadStatus::Error);

    mount_analysis(&server, json!({
        "fileId": "fast",
        "filename": "a.pdf",
        "riskScore": 5,
        "extractedText": "all clear",
    }))
    .await;

    let result = controller.submit(&pdf("a.pdf"), &CancelSignal::never()).await.expect("retry succeeds");
    assert_eq!(result.id, "fast");
    assert_eq!(controller.result_count(), 1);
}

#[tokio::test]
async fn upload_after_cancel_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-document"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "fileId": "abandoned", "filename": "a.pdf", "extractedText": "" }))
                .set_delay(Duration::from_secs(3)),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let (handle, signal) = cancel_pair();
    let document = pdf("a.pdf");

    let (outcome, ()) = tokio::join!(controller.submit(&document, &signal), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.cancel();
    });

    assert!(matches!(outcome, Err(SafeworkError::Cancelled)));
    assert_eq!(controller.state().status, UploadStatus::Error);
    assert_eq!(controller.state().message(), "Upload cancelled");
    assert!(!controller.is_busy());

    mount_analysis(&server, json!({
        "fileId": "retry",
        "filename": "a.pdf",
        "riskScore": 33,
        "extractedText": "worn harness",
    }))
    .await;

    let result = controller.submit(&document, &CancelSignal::never()).await.expect("retry succeeds");
    assert_eq!(result.id, "retry");
    assert_eq!(controller.state().status, UploadStatus::Complete);
    assert_eq!(controller.result_count(), 1);
}
