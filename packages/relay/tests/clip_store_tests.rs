use std::sync::{Arc, Mutex};

use audioforge_domain::{
    AudioClipRecord, ClipOwner, ModelId, SynthesisResult, VoiceId, VoiceSettings,
};
use audioforge_relay::{ClipStore, ClipStoreError, PostgrestClipStore};
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use chrono::Utc;
use serde_json::Value;

#[derive(Debug, Clone)]
struct Seen {
    headers: HeaderMap,
    body: Value,
}

#[derive(Clone)]
struct FakeBackend {
    status: StatusCode,
    reply: &'static str,
    seen: Arc<Mutex<Vec<Seen>>>,
}

async fn insert_clip(
    State(backend): State<FakeBackend>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    backend.seen.lock().expect("lock").push(Seen {
        headers,
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });
    (backend.status, backend.reply)
}

async fn spawn_backend(
    status: StatusCode,
    reply: &'static str,
) -> (PostgrestClipStore, Arc<Mutex<Vec<Seen>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let backend = FakeBackend {
        status,
        reply,
        seen: seen.clone(),
    };
    let app = Router::new()
        .route("/rest/v1/audio_clips", post(insert_clip))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let base: url::Url = format!("http://{addr}").parse().expect("valid url");
    let store = PostgrestClipStore::new(&base, "service-role-key").expect("store");
    (store, seen)
}

fn record() -> AudioClipRecord {
    let result = SynthesisResult {
        audio: Bytes::from_static(b"ID3fake"),
        voice_name: "sarah".into(),
        voice_id: VoiceId::new("EXAVITQu4vr4xnSDxMaL"),
        model_id: ModelId::TurboV2,
        voice_settings: VoiceSettings::default(),
    };
    let owner = ClipOwner {
        user_id: "user-42".into(),
        track_id: None,
    };
    AudioClipRecord::synthesized(&owner, "It was a dark and stormy night", &result, Utc::now())
}

#[tokio::test]
async fn insert_sends_service_headers_and_reads_id() {
    let (store, seen) = spawn_backend(
        StatusCode::CREATED,
        r#"{"id": "6f1c2a9e-4b7d-4c3e-9a51-0d2f8e7b1c44", "clip_type": "synthesized"}"#,
    )
    .await;

    let id = store.insert(&record()).await.expect("insert succeeds");
    assert_eq!(id, "6f1c2a9e-4b7d-4c3e-9a51-0d2f8e7b1c44");

    let seen = seen.lock().expect("lock");
    assert_eq!(seen.len(), 1);
    let headers = &seen[0].headers;
    assert_eq!(headers["apikey"], "service-role-key");
    assert_eq!(headers["authorization"], "Bearer service-role-key");
    assert_eq!(headers["prefer"], "return=representation");
    assert_eq!(headers["accept"], "application/vnd.pgrst.object+json");
    assert_eq!(headers["content-type"], "application/json");
}

#[tokio::test]
async fn insert_body_matches_audio_clips_columns() {
    let (store, seen) = spawn_backend(StatusCode::CREATED, r#"{"id": "clip-1"}"#).await;

    store.insert(&record()).await.expect("insert succeeds");

    let seen = seen.lock().expect("lock");
    let body = seen[0].body.as_object().expect("json object");
    let mut columns: Vec<&str> = body.keys().map(String::as_str).collect();
    columns.sort_unstable();
    assert_eq!(
        columns,
        [
            "audio_url",
            "clip_name",
            "clip_type",
            "duration",
            "end_time",
            "generation_model",
            "generation_prompt",
            "metadata",
            "start_time",
            "track_id",
            "user_id",
        ]
    );
    assert_eq!(body["user_id"], "user-42");
    assert!(body["track_id"].is_null());
    assert_eq!(body["clip_name"], "TTS: It was a dark and stormy night...");
    assert_eq!(body["clip_type"], "synthesized");
    assert_eq!(body["audio_url"], "");
    assert_eq!(body["end_time"], 0.0);
    assert_eq!(body["generation_model"], "elevenlabs_eleven_turbo_v2");
    assert_eq!(body["metadata"]["voice"], "sarah");
    assert_eq!(body["metadata"]["voice_id"], "EXAVITQu4vr4xnSDxMaL");
    assert_eq!(body["metadata"]["audio_format"], "mp3");
    assert_eq!(body["metadata"]["voice_settings"]["stability"], 0.5);
}

#[tokio::test]
async fn rejected_insert_reports_status_and_message() {
    let (store, _) = spawn_backend(
        StatusCode::BAD_REQUEST,
        r#"{"code":"23502","message":"null value in column \"track_id\" violates not-null constraint"}"#,
    )
    .await;

    let err = store.insert(&record()).await.expect_err("insert fails");
    match err {
        ClipStoreError::Rejected { status, message } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(message.contains("not-null constraint"), "{message}");
        }
        other => panic!("expected a rejection, got {other:?}"),
    }
}
