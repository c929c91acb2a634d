//! Exercise type discrimination.

use std::fmt;

use serde::{Deserialize, Serialize};

use posture_core::{joint_angle, BodyLandmark, LandmarkSet, Result};

use crate::desk::DeskAssessment;
use crate::result::PostureAssessment;
use crate::squat::SquatAssessment;
use crate::thresholds::PostureThresholds;

/// Landmarks a frame must carry before either rule set is evaluated
pub const REQUIRED_LANDMARKS: [BodyLandmark; 10] = [
    BodyLandmark::LeftShoulder,
    BodyLandmark::RightShoulder,
    BodyLandmark::LeftEar,
    BodyLandmark::RightEar,
    BodyLandmark::LeftHip,
    BodyLandmark::RightHip,
    BodyLandmark::LeftKnee,
    BodyLandmark::RightKnee,
    BodyLandmark::LeftAnkle,
    BodyLandmark::RightAnkle,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    Squat,
    DeskSitting,
}

impl ExerciseType {
    /// Classify a frame from its knee/hip angle; the boundary itself is desk sitting
    pub fn from_knee_hip_angle(knee_hip_angle: f64, thresholds: &PostureThresholds) -> Self {
        if knee_hip_angle < thresholds.squat_knee_hip_angle {
            Self::Squat
        } else {
            Self::DeskSitting
        }
    }

    /// Classify a frame from its landmarks
    pub fn classify(landmarks: &LandmarkSet, thresholds: &PostureThresholds) -> Result<Self> {
        let angle = knee_hip_angle(landmarks)?;
        Ok(Self::from_knee_hip_angle(angle, thresholds))
    }

    /// Run the rule set that belongs to this exercise
    pub fn assess(
        self,
        landmarks: &LandmarkSet,
        thresholds: &PostureThresholds,
    ) -> Result<PostureAssessment> {
        match self {
            Self::Squat => SquatAssessment::from_landmarks(landmarks, thresholds).map(Into::into),
            Self::DeskSitting => {
                DeskAssessment::from_landmarks(landmarks, thresholds).map(Into::into)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::DeskSitting => "desk_sitting",
        }
    }

    /// Human-readable name ("desk sitting")
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Angle at the left hip between the left knee and the right hip
pub fn knee_hip_angle(landmarks: &LandmarkSet) -> Result<f64> {
    Ok(joint_angle(
        landmarks.point(BodyLandmark::LeftKnee)?,
        landmarks.point(BodyLandmark::LeftHip)?,
        landmarks.point(BodyLandmark::RightHip)?,
    ))
}
