//! Authenticated SwitchTube API client
//!
//! Thin wrapper around [`reqwest::Client`] that injects the
//! `Authorization: Token <token>` header, checks for a 200 status and
//! decodes JSON responses. Binary streams are handed back as the raw
//! [`reqwest::Response`] so callers can copy them to disk chunk by chunk.
//!
//! The base URL is overridable so tests can point the client at a local
//! stub server.

use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{ChannelInfo, Video, VideoVariant};

/// Production SwitchTube base URL. Always ends with a slash.
pub const BASE_URL: &str = "https://tube.switch.ch/";

const VIDEO_API: &str = "api/v1/browse/videos/";
const CHANNEL_API: &str = "api/v1/browse/channels/";

/// Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from talking to the SwitchTube API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request could not be sent or the connection failed
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-200 status
    #[error("HTTP {status} for {path}")]
    Status {
        /// HTTP status code returned by the server
        status: u16,
        /// Request path that produced the status
        path: String,
    },

    /// The response body could not be decoded as the expected JSON shape
    #[error("failed to decode response for {path}: {source}")]
    Decode {
        /// Request path that produced the body
        path: String,
        /// Underlying decode error
        #[source]
        source: reqwest::Error,
    },
}

/// Authenticated client for the SwitchTube browse API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// Create a client against the production base URL.
    pub fn new(token: String) -> Self {
        Self::with_base_url(BASE_URL, token)
    }

    /// Create a client against a custom base URL (used by tests).
    ///
    /// A missing trailing slash is added so path joining stays uniform.
    pub fn with_base_url(base_url: impl Into<String>, token: String) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    /// Fetch metadata for a single video.
    pub async fn video(&self, video_id: &str) -> ApiResult<Video> {
        self.get_json(&format!("{VIDEO_API}{video_id}")).await
    }

    /// Fetch the downloadable variants of a video.
    pub async fn video_variants(&self, video_id: &str) -> ApiResult<Vec<VideoVariant>> {
        self.get_json(&format!("{VIDEO_API}{video_id}/video_variants"))
            .await
    }

    /// Fetch metadata for a channel.
    pub async fn channel(&self, channel_id: &str) -> ApiResult<ChannelInfo> {
        self.get_json(&format!("{CHANNEL_API}{channel_id}")).await
    }

    /// Fetch the full video listing of a channel.
    pub async fn channel_videos(&self, channel_id: &str) -> ApiResult<Vec<Video>> {
        self.get_json(&format!("{CHANNEL_API}{channel_id}/videos"))
            .await
    }

    /// Authenticated GET returning the decoded JSON body.
    pub async fn get_json<T>(&self, path: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.get(path).await?;

        response.json().await.map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }

    /// Authenticated GET returning the raw response for streaming.
    ///
    /// The status check has already happened; callers only consume the body.
    pub async fn get_stream(&self, path: &str) -> ApiResult<reqwest::Response> {
        self.get(path).await
    }

    async fn get(&self, path: &str) -> ApiResult<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path.trim_start_matches('/'));
        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Token {}", self.token))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                path: path.to_string(),
            });
        }

        Ok(response)
    }
}
