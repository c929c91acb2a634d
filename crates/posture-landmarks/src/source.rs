//! Landmark source trait and in-process backends.

use std::sync::Arc;

use async_trait::async_trait;
use image::RgbImage;
use tokio::sync::Mutex;

use posture_core::{LandmarkSet, Result};

/// A pose-estimation backend.
///
/// Implementations are shared across concurrent requests, so they must be
/// safe to call from several tasks at once. Backends that are not can be
/// wrapped in [`SerializedSource`].
#[async_trait]
pub trait LandmarkSource: Send + Sync {
    /// Backend name, used in logs
    fn name(&self) -> &str;

    /// Detect body landmarks in an RGB frame.
    ///
    /// `Ok(None)` means no subject was found, which is not an error.
    async fn detect(&self, frame: &RgbImage) -> Result<Option<LandmarkSet>>;
}

#[async_trait]
impl<S: LandmarkSource + ?Sized> LandmarkSource for Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn detect(&self, frame: &RgbImage) -> Result<Option<LandmarkSet>> {
        (**self).detect(frame).await
    }
}

/// Backend that returns the same detection for every frame
#[derive(Debug, Clone, Default)]
pub struct FixedLandmarkSource {
    landmarks: Option<LandmarkSet>,
}

impl FixedLandmarkSource {
    pub fn new(landmarks: LandmarkSet) -> Self {
        Self {
            landmarks: Some(landmarks),
        }
    }

    /// Source that never sees anybody
    pub fn empty() -> Self {
        Self { landmarks: None }
    }
}

#[async_trait]
impl LandmarkSource for FixedLandmarkSource {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn detect(&self, _frame: &RgbImage) -> Result<Option<LandmarkSet>> {
        Ok(self.landmarks.clone())
    }
}

/// Runs at most one detection at a time against the wrapped backend
pub struct SerializedSource<S> {
    inner: S,
    gate: Mutex<()>,
}

impl<S: LandmarkSource> SerializedSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            gate: Mutex::new(()),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[async_trait]
impl<S: LandmarkSource> LandmarkSource for SerializedSource<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn detect(&self, frame: &RgbImage) -> Result<Option<LandmarkSet>> {
        let _guard = self.gate.lock().await;
        tracing::trace!(source = self.inner.name(), "serialized detection");
        self.inner.detect(frame).await
    }
}
