//! Posture issues, measurements and the composed analysis result.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classifier::ExerciseType;
use crate::desk::DeskMeasurements;
use crate::squat::SquatMeasurements;
use crate::thresholds::{CONFIDENCE_FLOOR, CONFIDENCE_PENALTY_PER_ISSUE};

pub const NO_SUBJECT_MESSAGE: &str = "No person detected in frame";

/// Posture problem reported by a rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    ForwardHeadPosture,
    Slouching,
    UnevenShoulders,
    KneesBeyondToes,
    RoundedBack,
    PoorKneeTracking,
}

impl Issue {
    pub fn description(&self) -> &'static str {
        match self {
            Self::ForwardHeadPosture => "Forward head posture detected",
            Self::Slouching => "Slouching detected",
            Self::UnevenShoulders => "Uneven shoulders",
            Self::KneesBeyondToes => "Knees extending beyond toes",
            Self::RoundedBack => "Rounded back detected",
            Self::PoorKneeTracking => "Poor knee tracking",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Empty measurement record, serialized as `{}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NoMeasurements {}

/// Per-rule measurements; the schema depends on the exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measurements {
    Desk(DeskMeasurements),
    Squat(SquatMeasurements),
    Empty(NoMeasurements),
}

impl Measurements {
    pub fn empty() -> Self {
        Self::Empty(NoMeasurements {})
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }
}

impl Default for Measurements {
    fn default() -> Self {
        Self::empty()
    }
}

/// Output of one rule set: ordered issues plus measurements
#[derive(Debug, Clone, PartialEq)]
pub struct PostureAssessment {
    pub issues: Vec<Issue>,
    pub measurements: Measurements,
}

/// `max(0.5, 1.0 - 0.2 * issues)` for an analyzed subject
pub fn confidence_for(issue_count: usize) -> f64 {
    (1.0 - CONFIDENCE_PENALTY_PER_ISSUE * issue_count as f64).max(CONFIDENCE_FLOOR)
}

/// Posture judgment for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub subject_detected: bool,
    pub exercise_type: Option<ExerciseType>,
    pub is_bad_posture: bool,
    pub issues: Vec<Issue>,
    pub measurements: Measurements,
    pub confidence: f64,
    pub message: String,
}

impl AnalysisResult {
    /// Compose the result for an analyzed subject
    pub fn compose(exercise_type: ExerciseType, assessment: PostureAssessment) -> Self {
        let PostureAssessment {
            issues,
            measurements,
        } = assessment;

        let is_bad_posture = !issues.is_empty();
        let message = if is_bad_posture {
            let descriptions: Vec<_> = issues.iter().map(Issue::description).collect();
            format!("Bad posture detected: {}", descriptions.join(", "))
        } else {
            format!("Good {} posture!", exercise_type.label())
        };

        Self {
            subject_detected: true,
            exercise_type: Some(exercise_type),
            is_bad_posture,
            confidence: confidence_for(issues.len()),
            issues,
            measurements,
            message,
        }
    }

    /// Nobody in the frame; a normal outcome rather than a failure
    pub fn no_subject() -> Self {
        Self::degraded(NO_SUBJECT_MESSAGE.to_string())
    }

    /// Analysis could not be completed
    pub fn failed(error: &dyn fmt::Display) -> Self {
        Self::degraded(format!("Analysis error: {error}"))
    }

    fn degraded(message: String) -> Self {
        Self {
            subject_detected: false,
            exercise_type: None,
            is_bad_posture: false,
            issues: Vec::new(),
            measurements: Measurements::empty(),
            confidence: 0.0,
            message,
        }
    }
}
