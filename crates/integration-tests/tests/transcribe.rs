mod harness;

use harness::config::ConfigBuilder;
use harness::form;
use harness::mock_gemini::{Kind, MockGemini};
use harness::mock_whisper::MockWhisper;
use harness::server::TestServer;

#[tokio::test]
async fn transcribes_with_gemini() {
    let mock = MockGemini::start().await.unwrap();
    let server = TestServer::start(ConfigBuilder::new().with_gemini(&mock.base_url()).build())
        .await
        .unwrap();

    let (status, body) = server
        .post_form("/transcribe", form(&[("file", "visit.mp3", b"ID3audio")]))
        .await;

    assert_eq!(status, 200);
    assert_eq!(body, serde_json::json!({ "transcription": "Patient reports headache." }));
    assert_eq!(mock.count(Kind::Transcription), 1);
    assert_eq!(mock.api_keys(), ["test-key"]);
    assert_eq!(mock.models(), ["gemini-1.5-flash"]);
}

#[tokio::test]
async fn transcribes_with_whisper() {
    let whisper = MockWhisper::start("I have had a cough for a week.").await.unwrap();
    let config = ConfigBuilder::new().with_whisper_stt("local", &whisper.base_url()).build();
    let server = TestServer::start(config).await.unwrap();

    let (status, body) = server
        .post_form("/transcribe", form(&[("file", "visit.wav", b"RIFFaudio")]))
        .await;

    assert_eq!(status, 200);
    assert_eq!(body["transcription"], "I have had a cough for a week.");
    assert_eq!(whisper.request_count(), 1);
}

#[tokio::test]
async fn missing_file_is_bad_request() {
    let mock = MockGemini::start().await.unwrap();
    let server = TestServer::start(ConfigBuilder::new().with_gemini(&mock.base_url()).build())
        .await
        .unwrap();

    let (status, body) = server
        .post_form("/transcribe", form(&[("audio", "visit.mp3", b"ID3audio")]))
        .await;

    assert_eq!(status, 400);
    assert!(body["error"].is_string());
    assert_eq!(mock.total_count(), 0);
}

#[tokio::test]
async fn upstream_failure_is_reported() {
    let mock = MockGemini::start_with(harness::mock_gemini::MockGeminiConfig {
        failing: Some(Kind::Transcription),
        ..Default::default()
    })
    .await
    .unwrap();
    let server = TestServer::start(ConfigBuilder::new().with_gemini(&mock.base_url()).build())
        .await
        .unwrap();

    let (status, body) = server
        .post_form("/transcribe", form(&[("file", "visit.mp3", b"ID3audio")]))
        .await;

    assert_eq!(status, 502);
    assert!(body["error"].as_str().unwrap().contains("mock failure"));
}

#[tokio::test]
async fn voice_process_echoes_transcription() {
    let mock = MockGemini::start().await.unwrap();
    let server = TestServer::start(ConfigBuilder::new().with_gemini(&mock.base_url()).build())
        .await
        .unwrap();

    let (status, body) = server
        .post_form("/api/voice/process", form(&[("audio", "note.webm", b"webm")]))
        .await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        serde_json::json!({
            "transcription": "Patient reports headache.",
            "reply": "Patient reports headache.",
        })
    );
}

#[tokio::test]
async fn voice_process_requires_audio() {
    let mock = MockGemini::start().await.unwrap();
    let server = TestServer::start(ConfigBuilder::new().with_gemini(&mock.base_url()).build())
        .await
        .unwrap();

    let (status, body) = server
        .post_form("/api/voice/process", form(&[("file", "note.webm", b"webm")]))
        .await;

    assert_eq!(status, 400);
    assert_eq!(body, serde_json::json!({ "error": "No audio file provided" }));
}
