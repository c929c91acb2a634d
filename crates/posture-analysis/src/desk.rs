//! Seated (desk) posture rules.
//!
//! Works on the midpoints of the ear, shoulder and hip pairs, so it is
//! tolerant to which side faces the camera.
//!
//! | Check            | Metric                                   | Issue when  |
//! |------------------|------------------------------------------|-------------|
//! | Forward head     | angle ear - shoulder - hip               | < 150°      |
//! | Slouching        | horizontal shoulder/hip offset           | > 0.1       |
//! | Uneven shoulders | vertical left/right shoulder difference  | > 0.05      |

use serde::{Deserialize, Serialize};

use posture_core::{joint_angle, BodyLandmark, LandmarkSet, Result};

use crate::result::{Issue, Measurements, PostureAssessment};
use crate::thresholds::PostureThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeskMeasurements {
    /// Ear/shoulder/hip angle in degrees, 180 when perfectly stacked
    pub neck_angle: f64,
    /// `180 - neck_angle`; a linear proxy rather than an anatomical angle
    pub back_angle: f64,
    /// Shoulders sit over the hips within the slouch tolerance
    pub shoulder_alignment: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeskAssessment {
    pub issues: Vec<Issue>,
    pub neck_angle: f64,
    pub shoulder_hip_horizontal_diff: f64,
    pub shoulder_level_diff: f64,
    pub measurements: DeskMeasurements,
}

impl DeskAssessment {
    pub fn from_landmarks(landmarks: &LandmarkSet, thresholds: &PostureThresholds) -> Result<Self> {
        let left_shoulder = landmarks.point(BodyLandmark::LeftShoulder)?;
        let right_shoulder = landmarks.point(BodyLandmark::RightShoulder)?;
        let avg_shoulder = landmarks.midpoint(BodyLandmark::LeftShoulder, BodyLandmark::RightShoulder)?;
        let avg_ear = landmarks.midpoint(BodyLandmark::LeftEar, BodyLandmark::RightEar)?;
        let avg_hip = landmarks.midpoint(BodyLandmark::LeftHip, BodyLandmark::RightHip)?;

        let mut issues = Vec::new();

        let neck_angle = joint_angle(avg_ear, avg_shoulder, avg_hip);
        if neck_angle < thresholds.forward_head_neck_angle {
            issues.push(Issue::ForwardHeadPosture);
        }

        let shoulder_hip_horizontal_diff = (avg_shoulder.x - avg_hip.x).abs();
        if shoulder_hip_horizontal_diff > thresholds.slouch_horizontal_offset {
            issues.push(Issue::Slouching);
        }

        let shoulder_level_diff = (left_shoulder.y - right_shoulder.y).abs();
        if shoulder_level_diff > thresholds.uneven_shoulder_offset {
            issues.push(Issue::UnevenShoulders);
        }

        let measurements = DeskMeasurements {
            neck_angle,
            back_angle: 180.0 - neck_angle,
            shoulder_alignment: shoulder_hip_horizontal_diff <= thresholds.slouch_horizontal_offset,
        };

        Ok(Self {
            issues,
            neck_angle,
            shoulder_hip_horizontal_diff,
            shoulder_level_diff,
            measurements,
        })
    }
}

impl From<DeskAssessment> for PostureAssessment {
    fn from(assessment: DeskAssessment) -> Self {
        Self {
            issues: assessment.issues,
            measurements: Measurements::Desk(assessment.measurements),
        }
    }
}
