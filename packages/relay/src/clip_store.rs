//! Best-effort persistence of synthesis events.
//!
//! The hosted backend exposes the `audio_clips` table through PostgREST.
//! Inserts authenticate with the service-role key and ask for the created
//! row back so its id can be returned to the caller.
use async_trait::async_trait;
use audioforge_domain::{AudioClipRecord, ClipId};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const AUDIO_CLIPS_PATH: &str = "rest/v1/audio_clips";

#[derive(Debug, Error)]
pub enum ClipStoreError {
    #[error("backend request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid backend url: {0}")]
    Url(#[from] url::ParseError),
    #[error("backend rejected insert ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

#[async_trait]
pub trait ClipStore: Send + Sync {
    async fn insert(&self, record: &AudioClipRecord) -> Result<ClipId, ClipStoreError>;
}

#[derive(Debug, Clone)]
pub struct PostgrestClipStore {
    http: reqwest::Client,
    endpoint: Url,
    service_key: String,
}

#[derive(Deserialize)]
struct InsertedClip {
    id: ClipId,
}

impl PostgrestClipStore {
    pub fn new(backend_url: &Url, service_key: impl Into<String>) -> Result<Self, ClipStoreError> {
        let mut endpoint = backend_url.clone();
        let prefix = backend_url.path().trim_end_matches('/');
        endpoint.set_path(&format!("{prefix}/{AUDIO_CLIPS_PATH}"));

        Ok(Self {
            http: reqwest::Client::builder().build()?,
            endpoint,
            service_key: service_key.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ClipStore for PostgrestClipStore {
    async fn insert(&self, record: &AudioClipRecord) -> Result<ClipId, ClipStoreError> {
        let resp = self
            .http
            .post(self.endpoint.clone())
            .header("apikey", &self.service_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.service_key))
            .header("Prefer", "return=representation")
            .header(ACCEPT, "application/vnd.pgrst.object+json")
            .json(record)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClipStoreError::Rejected { status, message });
        }

        let inserted: InsertedClip = resp.json().await?;
        Ok(inserted.id)
    }
}
