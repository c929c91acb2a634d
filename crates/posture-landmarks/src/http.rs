//! Landmark source backed by an HTTP pose-estimation sidecar.

use std::io::Cursor;
use std::time::Duration;

use async_trait::async_trait;
use image::{ImageFormat, RgbImage};
use serde::{Deserialize, Serialize};

use posture_core::{Error, LandmarkSet, Result};

use crate::source::LandmarkSource;
use crate::wire::DetectionResponse;

/// Sidecar connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandmarkSourceConfig {
    /// URL the PNG-encoded frame is POSTed to
    pub endpoint: String,

    /// Per-request timeout (milliseconds)
    pub timeout_ms: u64,

    /// Run at most one detection at a time
    pub serialize_requests: bool,
}

impl Default for LandmarkSourceConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8501/v1/pose".to_string(),
            timeout_ms: 5_000,
            serialize_requests: false,
        }
    }
}

/// Forwards frames to a pose-estimation sidecar.
///
/// The underlying `reqwest::Client` pools connections and is safe to share,
/// so a single instance serves all requests concurrently.
#[derive(Debug, Clone)]
pub struct HttpLandmarkSource {
    client: reqwest::Client,
    endpoint: String,
    timeout_ms: u64,
}

impl HttpLandmarkSource {
    pub fn new(config: &LandmarkSourceConfig) -> Result<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(Error::Config("landmark source endpoint is empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout_ms: config.timeout_ms,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn encode_frame(frame: &RgbImage) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        frame
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| Error::Image(e.to_string()))?;
        Ok(buffer.into_inner())
    }

    fn map_request_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout {
                duration_ms: self.timeout_ms,
            }
        } else {
            Error::LandmarkSource(e.to_string())
        }
    }
}

#[async_trait]
impl LandmarkSource for HttpLandmarkSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn detect(&self, frame: &RgbImage) -> Result<Option<LandmarkSet>> {
        let body = Self::encode_frame(frame)?;

        tracing::debug!(
            endpoint = %self.endpoint,
            width = frame.width(),
            height = frame.height(),
            bytes = body.len(),
            "requesting landmarks"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "image/png")
            .body(body)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?
            .error_for_status()
            .map_err(|e| Error::LandmarkSource(e.to_string()))?;

        let detection: DetectionResponse = response
            .json()
            .await
            .map_err(|e| self.map_request_error(e))?;

        detection.into_landmark_set()
    }
}
