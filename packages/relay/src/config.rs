//! Command-line and environment configuration.
//!
//! Missing secrets never stop the server from starting. A missing provider
//! key is reported on every synthesis call instead, and a missing backend
//! turns auditing off.
use std::net::SocketAddr;
use std::sync::Arc;

use audioforge_elevenlabs::{DEFAULT_BASE_URL, ElevenLabsClient};
use clap::Parser;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use crate::clip_store::{ClipStoreError, PostgrestClipStore};
use crate::relay::Relay;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "RELAY_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// ElevenLabs API key
    #[arg(long, env = "ELEVENLABS_API_KEY", hide_env_values = true)]
    pub elevenlabs_api_key: Option<String>,

    /// ElevenLabs API base URL
    #[arg(long, env = "ELEVENLABS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub elevenlabs_base_url: Url,

    /// Hosted backend URL used for clip auditing
    #[arg(long, env = "SUPABASE_URL")]
    pub supabase_url: Option<Url>,

    /// Service-role key for the hosted backend
    #[arg(long, env = "SUPABASE_SERVICE_ROLE_KEY", hide_env_values = true)]
    pub supabase_service_role_key: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("provider client: {0}")]
    Provider(#[from] audioforge_elevenlabs::Error),
    #[error("clip store: {0}")]
    ClipStore(#[from] ClipStoreError),
}

impl Args {
    /// The provider key, treating an empty value as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.elevenlabs_api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    /// Backend URL and key, only when both are present.
    pub fn backend(&self) -> Option<(&Url, &str)> {
        let url = self.supabase_url.as_ref()?;
        let key = self
            .supabase_service_role_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())?;
        Some((url, key))
    }

    pub fn build_relay(&self) -> Result<Relay, ConfigError> {
        let mut relay = Relay::new();

        match self.api_key() {
            Some(key) => {
                let client =
                    ElevenLabsClient::new(key)?.with_base_url(self.elevenlabs_base_url.clone());
                info!(base_url = %client.base_url(), "ElevenLabs provider configured");
                relay = relay.with_provider(Arc::new(client));
            }
            None => warn!("ELEVENLABS_API_KEY not set, synthesis requests will fail"),
        }

        match self.backend() {
            Some((url, key)) => {
                let store = PostgrestClipStore::new(url, key)?;
                info!(endpoint = %store.endpoint(), "clip auditing enabled");
                relay = relay.with_clip_store(Arc::new(store));
            }
            None => warn!("backend credentials not set, clip auditing disabled"),
        }

        Ok(relay)
    }
}
