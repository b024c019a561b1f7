// Backend API access: stateless request helpers over the reactive config.
pub mod codec;
pub mod status;
pub mod transport;

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::api::codec::{Codec, JsonCodec};
use crate::api::transport::{FetchTransport, HttpRequest, Method, Transport};
use crate::config::ApiConfig;

/// Failure of a single request. Every variant propagates to the caller
/// unchanged; there is no retry, no fallback URL, no local recovery.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The exchange never completed (DNS, refused connection, ...).
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("API {status}: {status_text}")]
    Http { status: u16, status_text: String },
    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(String),
    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Request helpers bound to an [`ApiConfig`].
///
/// The base URL is re-read from the config on every call, so a
/// `set_base_url` between two requests redirects only the second one; an
/// in-flight request keeps the URL it started with. The client itself
/// carries no session state.
#[derive(Clone)]
pub struct ApiClient<C = JsonCodec> {
    config: ApiConfig,
    transport: Rc<dyn Transport>,
    codec: C,
}

impl ApiClient {
    /// Client talking to the real backend over the browser's fetch API.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_parts(config, Rc::new(FetchTransport), JsonCodec)
    }
}

impl<C: Codec> ApiClient<C> {
    /// Client with a custom transport and codec. Tests substitute an
    /// in-memory transport here; nothing in the client assumes a live
    /// network.
    pub fn with_parts(config: ApiConfig, transport: Rc<dyn Transport>, codec: C) -> Self {
        ApiClient {
            config,
            transport,
            codec,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET {base}{path}`, decoded into `T`. `path` must start with `/`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = HttpRequest {
            method: Method::Get,
            url: self.url(path),
            content_type: None,
            body: None,
        };
        self.exchange(request).await
    }

    /// `POST {base}{path}` with `body` encoded by the codec and the codec's
    /// content type on the wire.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = HttpRequest {
            method: Method::Post,
            url: self.url(path),
            content_type: Some(self.codec.content_type()),
            body: Some(self.codec.encode(body)?),
        };
        self.exchange(request).await
    }

    async fn exchange<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::Http {
                status: response.status,
                status_text: response.status_text,
            });
        }
        self.codec.decode(&response.body)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }
}

impl<C: PartialEq> PartialEq for ApiClient<C> {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && Rc::ptr_eq(&self.transport, &other.transport)
            && self.codec == other.codec
    }
}
