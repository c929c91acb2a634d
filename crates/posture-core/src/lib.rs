//! # Posture-Core
//!
//! Core types and utilities shared by the posture analysis service:
//! body landmarks as produced by a pose-estimation model, the 2D geometry
//! used by the posture rules, and the common error type.

pub mod error;
pub mod geometry;
pub mod types;

pub use error::{Error, Result};
pub use geometry::*;
pub use types::*;
