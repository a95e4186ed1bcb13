use crate::endpoints::{ElevenLabsEndpoint, RequestBody};
use crate::error::Error;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Url};

pub type Result<T> = std::result::Result<T, Error>;

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

const XI_API_KEY_HEADER: &str = "xi-api-key";
const APPLICATION_JSON: &str = "application/json";

/// Stateless ElevenLabs client: one request per [`hit`](Self::hit), no retries.
#[derive(Clone, Debug)]
pub struct ElevenLabsClient {
    inner: reqwest::Client,
    api_key: String,
    base_url: Url,
}

impl ElevenLabsClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            inner: client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.parse()?,
        })
    }

    /// Point the client at a different API host, e.g. a regional endpoint or proxy.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn hit<T: ElevenLabsEndpoint>(&self, endpoint: T) -> Result<T::ResponseBody> {
        let url = endpoint.url(&self.base_url)?;
        tracing::debug!(method = %T::METHOD, %url, "calling ElevenLabs");

        let mut builder = self
            .inner
            .request(T::METHOD, url)
            .header(XI_API_KEY_HEADER, &self.api_key);

        if let Some(accept) = T::ACCEPT {
            builder = builder.header(ACCEPT, accept);
        }

        if matches!(T::METHOD, Method::POST | Method::PATCH) {
            builder = match endpoint.request_body()? {
                RequestBody::Json(json) => {
                    builder.header(CONTENT_TYPE, APPLICATION_JSON).json(&json)
                }
                RequestBody::Empty => return Err(Error::MissingRequestBody),
            };
        }

        let resp = builder.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let raw = resp.bytes().await?;
            let body = serde_json::from_slice(&raw).ok();
            return Err(Error::HttpError { status, body });
        }

        endpoint.response_body(resp.bytes().await?)
    }
}
