//! # Posture-API
//!
//! HTTP server for single-frame posture analysis, built on Axum.
//!
//! ## Endpoints
//!
//! - `GET /` - Health check
//! - `POST /analyze` - Analyze one frame (multipart, image field `frame`)
//! - `GET /test` - Canned analysis for integration smoke tests

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::*;
pub use error::*;
pub use server::*;
pub use state::*;
