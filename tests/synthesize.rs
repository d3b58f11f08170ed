//! End-to-end synthesis against a mock HTTP endpoint.

use std::fs;

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use yating_tts::{Error, SynthesisParams, TtsClient};

const PATH: &str = "/v2/speeches/short";
const API_KEY: &str = "test-key";

fn client_for(server: &ServerGuard) -> TtsClient {
    TtsClient::new(format!("{}{}", server.url(), PATH), API_KEY)
}

#[test]
fn writes_decoded_audio_on_success() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", PATH)
        .match_header("key", API_KEY)
        .match_header("accept", "application/json")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"audioContent":"QQ==","audioConfig":{}}"#)
        .create();

    let dir = tempfile::tempdir().unwrap();
    let path = client_for(&server)
        .synthesize(&SynthesisParams::new("你好").encoding("MP3"), dir.path().join("greeting"))
        .unwrap();

    mock.assert();
    assert_eq!(path, dir.path().join("greeting.mp3"));
    assert_eq!(fs::read(&path).unwrap(), vec![0x41]);
}

#[test]
fn sends_wire_payload() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", PATH)
        .match_body(Matcher::Json(json!({
            "input": {"ssml": "<speak>hi</speak>"},
            "voice": {"model": "tai_female_2"},
            "audioConfig": {
                "speed": 1.5,
                "pitch": 0.5,
                "energy": 1.0,
                "encoding": "LINEAR16",
                "sampleRate": "16K"
            }
        })))
        .with_status(201)
        .with_body(r#"{"audioContent":"UklGRg==","audioConfig":{"encoding":"LINEAR16"}}"#)
        .create();

    let params = SynthesisParams::new("<speak>hi</speak>")
        .input_type("ssml")
        .voice_model("tai_female_2")
        .speed(1.5)
        .pitch(0.5);
    let audio = client_for(&server).fetch_audio(&params).unwrap();

    mock.assert();
    assert_eq!(audio.data.as_ref(), b"RIFF");
}

#[test]
fn non_success_status_is_service_error() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", PATH)
        .with_status(404)
        .with_body(r#"{"audioContent":"QQ=="}"#)
        .create();

    let dir = tempfile::tempdir().unwrap();
    let err = client_for(&server)
        .synthesize(&SynthesisParams::new("hi"), dir.path().join("missing"))
        .unwrap_err();

    mock.assert();
    assert!(matches!(err, Error::Service { status: 404 }));
    assert!(!dir.path().join("missing.wav").exists());
}

#[test]
fn body_without_audio_is_decode_error() {
    let mut server = Server::new();
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"{"audioConfig":{}}"#)
        .create();

    let dir = tempfile::tempdir().unwrap();
    let err = client_for(&server)
        .synthesize(&SynthesisParams::new("hi"), dir.path().join("empty"))
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn validation_failure_sends_nothing() {
    let mut server = Server::new();
    let mock = server.mock("POST", PATH).expect(0).create();

    let params = SynthesisParams::new("hi")
        .input_type("speech")
        .voice_model("nobody");
    let dir = tempfile::tempdir().unwrap();
    let err = client_for(&server)
        .synthesize(&params, dir.path().join("never"))
        .unwrap_err();

    mock.assert();
    match err {
        Error::Validation { field, value } => {
            assert_eq!(field, "inputType");
            assert_eq!(value, "speech");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn repeated_calls_overwrite_output() {
    let mut server = Server::new();
    server
        .mock("POST", PATH)
        .match_body(Matcher::PartialJson(json!({"input": {"text": "one"}})))
        .with_status(200)
        .with_body(r#"{"audioContent":"QUFBQQ==","audioConfig":{}}"#)
        .create();

    let client = client_for(&server);
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("speech");
    let path = client.synthesize(&SynthesisParams::new("one"), &base).unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"AAAA");

    server
        .mock("POST", PATH)
        .match_body(Matcher::PartialJson(json!({"input": {"text": "two"}})))
        .with_status(200)
        .with_body(r#"{"audioContent":"Qg==","audioConfig":{}}"#)
        .create();
    let again = client.synthesize(&SynthesisParams::new("two"), &base).unwrap();

    assert_eq!(again, path);
    assert_eq!(fs::read(&path).unwrap(), b"B");
}
