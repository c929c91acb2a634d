//! Shared application state.

use std::sync::Arc;

use posture_analysis::PostureAnalyzer;

/// State handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<PostureAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: PostureAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}
