//! # Posture-Landmarks
//!
//! The Landmark Source boundary. A pose-estimation model is treated as a
//! black box that turns a decoded RGB frame into a [`LandmarkSet`], or
//! reports that nobody is in the frame.
//!
//! ## Backends
//!
//! - [`HttpLandmarkSource`] forwards frames to a pose-estimation sidecar
//! - [`FixedLandmarkSource`] answers every frame with a preset detection
//! - [`SerializedSource`] wraps a backend that must not be called concurrently
//!
//! [`LandmarkSet`]: posture_core::LandmarkSet

pub mod http;
pub mod source;
pub mod wire;

pub use http::*;
pub use source::*;
pub use wire::*;
