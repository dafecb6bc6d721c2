use std::io::Cursor;

use bplyzer::enums::analyzer_error::AnalyzerError;
use bplyzer::errors::BplyzerError;
use bplyzer::services::analyzer::BloodPressureAnalyzer;

fn analyzer_for(server: &mockito::ServerGuard) -> BloodPressureAnalyzer {
    BloodPressureAnalyzer::new("sk-test".to_string()).with_base_url(server.url())
}

fn photo_stream() -> Cursor<Vec<u8>> {
    Cursor::new(b"\xff\xd8\xff\xe0 monitor photo".to_vec())
}

#[tokio::test]
async fn successful_response_content_is_returned_unmodified() {
    let mut server = mockito::Server::new_async().await;
    let canned = "**최고(수축기) 혈압**: 120mmHg\n**최저(이완기) 혈압**: 80mmHg\n**심박수**: 60bpm";

    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "choices": [{"message": {"content": canned}}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let result = analyzer_for(&server).analyze(&mut photo_stream()).await.unwrap();

    assert_eq!(result, canned);
    mock.assert_async().await;
}

#[tokio::test]
async fn request_body_embeds_jpeg_data_uri_and_model() {
    let mut server = mockito::Server::new_async().await;

    // The data URI must claim image/jpeg no matter what bytes went in.
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::Regex("data:image/jpeg;base64,".to_string()),
            mockito::Matcher::PartialJson(serde_json::json!({"model": "gpt-4o"})),
        ]))
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
        .create_async()
        .await;

    let mut png_stream = Cursor::new(b"\x89PNG\r\n\x1a\n fake".to_vec());
    analyzer_for(&server).analyze(&mut png_stream).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn unauthorized_fails_with_authentication_detail() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Incorrect API key provided"}}"#)
        .create_async()
        .await;

    let err = analyzer_for(&server)
        .analyze(&mut photo_stream())
        .await
        .unwrap_err();

    match &err {
        AnalyzerError::Authentication(body) => {
            assert!(body.contains("Incorrect API key provided"));
        }
        other => panic!("expected Authentication, got {:?}", other),
    }

    // The presentation layer renders this as a message carrying the status.
    let surfaced: BplyzerError = err.into();
    let message = surfaced.user_message();
    assert!(message.contains("401"));
    assert!(message.contains("Incorrect API key provided"));
}

#[tokio::test]
async fn server_error_fails_with_http_status_and_body() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let err = analyzer_for(&server)
        .analyze(&mut photo_stream())
        .await
        .unwrap_err();

    match err {
        AnalyzerError::Http { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("upstream exploded"));
        }
        other => panic!("expected Http, got {:?}", other),
    }
}

#[tokio::test]
async fn success_status_with_missing_choices_fails_with_decode() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"chatcmpl-1","object":"chat.completion"}"#)
        .create_async()
        .await;

    let err = analyzer_for(&server)
        .analyze(&mut photo_stream())
        .await
        .unwrap_err();

    assert!(matches!(err, AnalyzerError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn empty_choices_array_fails_with_decode() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let err = analyzer_for(&server)
        .analyze(&mut photo_stream())
        .await
        .unwrap_err();

    assert!(matches!(err, AnalyzerError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn unreachable_endpoint_fails_with_network_error() {
    // Nothing listens here; the request itself must fail.
    let analyzer = BloodPressureAnalyzer::new("sk-test".to_string())
        .with_base_url("http://127.0.0.1:1".to_string());

    let err = analyzer.analyze(&mut photo_stream()).await.unwrap_err();

    assert!(matches!(err, AnalyzerError::Network(_)), "got {:?}", err);
}
