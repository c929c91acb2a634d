//! Request handlers.

use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use image::RgbImage;
use serde_json::{json, Value};

use posture_analysis::AnalysisResult;

use crate::error::ApiError;
use crate::state::AppState;

/// Multipart field holding the uploaded frame
pub const FRAME_FIELD: &str = "frame";

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Posture Detection API is running",
        "endpoints": {
            "analyze": "/analyze (POST)",
            "health": "/ (GET)"
        }
    }))
}

/// Canned result for integration smoke tests
pub async fn test_analysis() -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "API is working correctly",
        "test_analysis": {
            "is_bad_posture": true,
            "message": "This is a test response",
            "confidence": 0.85,
            "details": {
                "neck_angle": 25.5,
                "back_angle": 160.2,
                "knee_toe_alignment": true
            }
        }
    }))
}

pub async fn analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let bytes = read_frame_field(&mut multipart)
        .await?
        .ok_or_else(|| ApiError::bad_request("No frame provided"))?;

    let frame = decode_frame(bytes).await?;
    let result = state.analyzer.analyze_frame(&frame).await;

    tracing::info!(
        exercise = ?result.exercise_type,
        confidence = result.confidence,
        "Analysis completed: {}",
        result.message
    );

    Ok(Json(result))
}

/// Bytes of the first `frame` field, skipping any other fields
async fn read_frame_field(multipart: &mut Multipart) -> Result<Option<Bytes>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?
    {
        if field.name() == Some(FRAME_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?;
            return Ok(Some(bytes));
        }
    }

    Ok(None)
}

/// Decode any supported image format into RGB8 off the async runtime
async fn decode_frame(bytes: Bytes) -> Result<RgbImage, ApiError> {
    tokio::task::spawn_blocking(move || image::load_from_memory(&bytes).map(|img| img.to_rgb8()))
        .await
        .map_err(|e| ApiError::internal(format!("frame decoder task failed: {e}")))?
        .map_err(|e| ApiError::bad_request(format!("Unreadable image: {e}")))
}
