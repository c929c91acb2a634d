//! Error types for the posture analysis service.

use thiserror::Error;

use crate::types::BodyLandmark;

#[derive(Error, Debug)]
pub enum Error {
    #[error("required landmark `{0}` missing from landmark set")]
    MissingLandmark(BodyLandmark),

    #[error("Landmark index {0} out of range")]
    LandmarkIndex(usize),

    #[error("Landmark source error: {0}")]
    LandmarkSource(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("Timeout after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
