//! HTTP client for the management API
//!
//! [`MiClient`] performs one request at a time against the current remote's
//! base URL and decodes JSON replies into caller-chosen record types.
//!
//! Certificate validation is off unless `verify_tls` is set: management
//! endpoints usually present a self-signed certificate.

use crate::config::RemoteConfig;
use crate::models::ErrorEnvelope;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Client, Method, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Failures of a single management API call
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("cannot reach {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unauthorized: the server rejected the credentials")]
    Unauthorized,
    #[error("{}", api_message(.status, .message))]
    Api {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("unexpected response body from the server: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// Message carried by the server's `{"Error": ...}` body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

fn api_message(status: &StatusCode, message: &Option<String>) -> String {
    match message {
        Some(m) => m.clone(),
        None => status.to_string(),
    }
}

/// Printed to stderr when the server answers 401
const LOGIN_HINT: &str = "Unauthorized. Please log in with `mi remote login` and try again.";

pub struct MiClient {
    pub base_url: String,
    access_token: String,
    unauthorized_hint: &'static str,
    client: Client,
}

impl MiClient {
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        verify_tls: bool,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!verify_tls)
            .build()?;
        Ok(MiClient {
            base_url: base_url.into(),
            access_token: access_token.into(),
            unauthorized_hint: LOGIN_HINT,
            client,
        })
    }

    /// Replace the hint printed on a 401 reply
    pub fn with_unauthorized_hint(mut self, hint: &'static str) -> Self {
        self.unauthorized_hint = hint;
        self
    }

    /// Client bound to the current remote of `cfg`
    pub fn for_current(cfg: &RemoteConfig, verify_tls: bool) -> anyhow::Result<Self> {
        let base_url = cfg.base_url()?;
        let remote = cfg.current_remote()?;
        Ok(MiClient::new(base_url, remote.access_token.clone(), verify_tls)?)
    }

    /// Absolute URL of a resource path such as `apis` or `server/summary`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get(
        &self,
        url: &str,
        headers: HeaderMap,
        params: &[(&str, &str)],
    ) -> Result<Response, ClientError> {
        self.send(Method::GET, url, headers, params, None::<&()>).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        headers: HeaderMap,
        body: &B,
    ) -> Result<Response, ClientError> {
        self.send(Method::POST, url, headers, &[], Some(body)).await
    }

    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        url: &str,
        headers: HeaderMap,
        body: &B,
    ) -> Result<Response, ClientError> {
        self.send(Method::PATCH, url, headers, &[], Some(body)).await
    }

    pub async fn delete(
        &self,
        url: &str,
        headers: HeaderMap,
        params: &[(&str, &str)],
    ) -> Result<Response, ClientError> {
        self.send(Method::DELETE, url, headers, params, None::<&()>).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        params: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<Response, ClientError> {
        debug!(%method, url, ?params, "sending request");
        let mut req = self.client.request(method, url).headers(headers);
        if !params.is_empty() {
            req = req.query(params);
        }
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::Unreachable {
                    url: url.to_string(),
                    source: e,
                }
            } else {
                ClientError::Http(e)
            }
        })?;
        debug!(status = %resp.status(), url, "received response");
        Ok(resp)
    }

    /// Default headers plus a bearer token, unless the caller already chose
    /// an `Authorization` header
    fn with_auth(&self, mut headers: HeaderMap) -> Result<HeaderMap, ClientError> {
        headers
            .entry(ACCEPT)
            .or_insert(HeaderValue::from_static("application/json"));
        if !headers.contains_key(AUTHORIZATION) && !self.access_token.is_empty() {
            let hv = HeaderValue::from_str(&format!("Bearer {}", self.access_token))?;
            headers.insert(AUTHORIZATION, hv);
        }
        Ok(headers)
    }

    /// GET `path` and decode the reply into `T`
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        self.fetch_with_headers(path, HeaderMap::new(), params).await
    }

    pub async fn fetch_with_headers<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: HeaderMap,
        params: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let headers = self.with_auth(headers)?;
        let resp = self.get(&self.url(path), headers, params).await?;
        decode(resp, self.unauthorized_hint).await
    }

    /// GET `path` and return the reply body as text, for non-JSON resources
    pub async fn fetch_text(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<String, ClientError> {
        let headers = self.with_auth(HeaderMap::new())?;
        let resp = self.get(&self.url(path), headers, params).await?;
        let bytes = read_success(resp, self.unauthorized_hint).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// POST `body` as JSON to `path` and decode the reply into `T`
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let headers = self.with_auth(json_headers())?;
        let resp = self.post(&self.url(path), headers, body).await?;
        decode(resp, self.unauthorized_hint).await
    }

    /// PATCH `body` as JSON to `path` and decode the reply into `T`
    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let headers = self.with_auth(json_headers())?;
        let resp = self.patch(&self.url(path), headers, body).await?;
        decode(resp, self.unauthorized_hint).await
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Turn a response into `T` on 200, or into the matching [`ClientError`]
async fn decode<T: DeserializeOwned>(
    resp: Response,
    hint: &str,
) -> Result<T, ClientError> {
    let bytes = read_success(resp, hint).await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Decode)
}

/// Body of a 200 reply; any other status becomes a [`ClientError`]
async fn read_success(resp: Response, hint: &str) -> Result<Vec<u8>, ClientError> {
    let status = resp.status();
    let bytes = resp.bytes().await?;

    if status == StatusCode::OK {
        return Ok(bytes.to_vec());
    }
    if status == StatusCode::UNAUTHORIZED {
        warn!("server rejected the request credentials");
        eprintln!("{hint}");
        return Err(ClientError::Unauthorized);
    }

    let message = if bytes.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        match serde_json::from_slice::<ErrorEnvelope>(&bytes) {
            Ok(envelope) => Some(envelope.error),
            Err(_) => Some(String::from_utf8_lossy(&bytes).trim().to_string()),
        }
    };
    Err(ClientError::Api { status, message })
}
