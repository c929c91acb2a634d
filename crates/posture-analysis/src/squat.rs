//! Squat form rules.
//!
//! The back angle is measured on the left side only; the right shoulder,
//! hip and knee do not contribute to the rounded-back check.

use serde::{Deserialize, Serialize};

use posture_core::{joint_angle, BodyLandmark, LandmarkSet, Result};

use crate::result::{Issue, Measurements, PostureAssessment};
use crate::thresholds::PostureThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquatMeasurements {
    /// Neither knee passes its ankle horizontally
    pub knee_toe_alignment: bool,
    /// Left shoulder/hip/knee angle in degrees
    pub back_angle: f64,
    /// Both knees stay over their ankles
    pub knee_tracking: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SquatAssessment {
    pub issues: Vec<Issue>,
    pub left_knee_over_toe: bool,
    pub right_knee_over_toe: bool,
    pub knee_tracking_left: bool,
    pub knee_tracking_right: bool,
    pub measurements: SquatMeasurements,
}

impl SquatAssessment {
    pub fn from_landmarks(landmarks: &LandmarkSet, thresholds: &PostureThresholds) -> Result<Self> {
        let left_knee = landmarks.point(BodyLandmark::LeftKnee)?;
        let right_knee = landmarks.point(BodyLandmark::RightKnee)?;
        let left_ankle = landmarks.point(BodyLandmark::LeftAnkle)?;
        let right_ankle = landmarks.point(BodyLandmark::RightAnkle)?;
        let left_hip = landmarks.point(BodyLandmark::LeftHip)?;
        let left_shoulder = landmarks.point(BodyLandmark::LeftShoulder)?;

        let mut issues = Vec::new();

        let left_knee_over_toe = left_knee.x > left_ankle.x;
        let right_knee_over_toe = right_knee.x > right_ankle.x;
        if left_knee_over_toe || right_knee_over_toe {
            issues.push(Issue::KneesBeyondToes);
        }

        let back_angle = joint_angle(left_shoulder, left_hip, left_knee);
        if back_angle < thresholds.rounded_back_angle {
            issues.push(Issue::RoundedBack);
        }

        let knee_tracking_left = (left_knee.x - left_ankle.x).abs() < thresholds.knee_tracking_offset;
        let knee_tracking_right =
            (right_knee.x - right_ankle.x).abs() < thresholds.knee_tracking_offset;
        if !(knee_tracking_left && knee_tracking_right) {
            issues.push(Issue::PoorKneeTracking);
        }

        let measurements = SquatMeasurements {
            knee_toe_alignment: !(left_knee_over_toe || right_knee_over_toe),
            back_angle,
            knee_tracking: knee_tracking_left && knee_tracking_right,
        };

        Ok(Self {
            issues,
            left_knee_over_toe,
            right_knee_over_toe,
            knee_tracking_left,
            knee_tracking_right,
            measurements,
        })
    }
}

impl From<SquatAssessment> for PostureAssessment {
    fn from(assessment: SquatAssessment) -> Self {
        Self {
            issues: assessment.issues,
            measurements: Measurements::Squat(assessment.measurements),
        }
    }
}
