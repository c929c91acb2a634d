//! Posture analyzer orchestrating landmark detection, classification and rules.

use std::sync::Arc;

use image::RgbImage;

use posture_core::{LandmarkSet, Result};
use posture_landmarks::LandmarkSource;

use crate::classifier::{ExerciseType, REQUIRED_LANDMARKS};
use crate::result::AnalysisResult;
use crate::thresholds::PostureThresholds;

/// Stateless per-frame posture analyzer.
///
/// The landmark source is injected so the rule logic can be exercised
/// without a real pose model.
#[derive(Clone)]
pub struct PostureAnalyzer {
    source: Arc<dyn LandmarkSource>,
    thresholds: PostureThresholds,
}

impl PostureAnalyzer {
    pub fn new(source: Arc<dyn LandmarkSource>) -> Self {
        Self::with_thresholds(source, PostureThresholds::default())
    }

    pub fn with_thresholds(source: Arc<dyn LandmarkSource>, thresholds: PostureThresholds) -> Self {
        Self { source, thresholds }
    }

    /// Analyze one decoded frame.
    ///
    /// Never fails: source and rule errors are reported as a degraded result.
    pub async fn analyze_frame(&self, frame: &RgbImage) -> AnalysisResult {
        match self.source.detect(frame).await {
            Ok(Some(landmarks)) => self.analyze_landmarks(&landmarks),
            Ok(None) => {
                tracing::debug!(source = self.source.name(), "no subject in frame");
                AnalysisResult::no_subject()
            }
            Err(e) => {
                tracing::error!(source = self.source.name(), "Landmark detection failed: {}", e);
                AnalysisResult::failed(&e)
            }
        }
    }

    /// Analyze landmarks that were already detected
    pub fn analyze_landmarks(&self, landmarks: &LandmarkSet) -> AnalysisResult {
        match self.evaluate(landmarks) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Frame analysis error: {}", e);
                AnalysisResult::failed(&e)
            }
        }
    }

    fn evaluate(&self, landmarks: &LandmarkSet) -> Result<AnalysisResult> {
        landmarks.require_all(&REQUIRED_LANDMARKS)?;

        let exercise_type = ExerciseType::classify(landmarks, &self.thresholds)?;
        let assessment = exercise_type.assess(landmarks, &self.thresholds)?;

        tracing::debug!(
            exercise = %exercise_type,
            issues = assessment.issues.len(),
            "posture assessed"
        );

        Ok(AnalysisResult::compose(exercise_type, assessment))
    }

    pub fn thresholds(&self) -> &PostureThresholds {
        &self.thresholds
    }
}
