pub(crate) use crate::client::Result;
pub(crate) use bytes::Bytes;
pub(crate) use reqwest::{Method, Url};
pub(crate) use serde::Serialize;
pub(crate) use serde_json::Value;

pub mod genai;

type QueryValues = Vec<(&'static str, String)>;

#[derive(Debug)]
pub enum RequestBody {
    Json(Value),
    Empty,
}

/// One ElevenLabs HTTP operation.
///
/// `PATH` may contain `:name` placeholders, filled from [`path_params`].
///
/// [`path_params`]: ElevenLabsEndpoint::path_params
pub trait ElevenLabsEndpoint {
    const PATH: &'static str;

    const METHOD: Method;

    /// Value for the `Accept` header, if the endpoint needs a specific one.
    const ACCEPT: Option<&'static str> = None;

    type ResponseBody;

    fn query_params(&self) -> Option<QueryValues> {
        None
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![]
    }

    fn request_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Empty)
    }

    fn response_body(self, body: Bytes) -> Result<Self::ResponseBody>;

    fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();

        let mut path = Self::PATH.to_string();
        for (placeholder, id) in self.path_params() {
            path = path.replace(placeholder, id);
        }

        let prefix = base.path().trim_end_matches('/');
        url.set_path(&format!("{prefix}/{path}"));

        if let Some(query_params) = self.query_params() {
            url.query_pairs_mut().extend_pairs(query_params);
        }

        Ok(url)
    }
}
