//! Empirically calibrated posture thresholds.

use serde::{Deserialize, Serialize};

/// Knee/hip angle (degrees) below which a frame is classified as a squat
pub const SQUAT_KNEE_HIP_ANGLE: f64 = 120.0;

/// Ear/shoulder/hip angle (degrees) below which the head is forward
pub const FORWARD_HEAD_NECK_ANGLE: f64 = 150.0;

/// Horizontal shoulder/hip offset above which the subject is slouching
pub const SLOUCH_HORIZONTAL_OFFSET: f64 = 0.1;

/// Vertical left/right shoulder difference above which shoulders are uneven
pub const UNEVEN_SHOULDER_OFFSET: f64 = 0.05;

/// Shoulder/hip/knee angle (degrees) below which the back is rounded
pub const ROUNDED_BACK_ANGLE: f64 = 150.0;

/// Horizontal knee/ankle offset that still counts as tracking over the foot
pub const KNEE_TRACKING_OFFSET: f64 = 0.1;

/// Confidence lost per detected issue
pub const CONFIDENCE_PENALTY_PER_ISSUE: f64 = 0.2;

/// Lowest confidence reported for a subject that was analyzed
pub const CONFIDENCE_FLOOR: f64 = 0.5;

/// Thresholds used by the classifier and both rule sets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostureThresholds {
    pub squat_knee_hip_angle: f64,
    pub forward_head_neck_angle: f64,
    pub slouch_horizontal_offset: f64,
    pub uneven_shoulder_offset: f64,
    pub rounded_back_angle: f64,
    pub knee_tracking_offset: f64,
}

impl Default for PostureThresholds {
    fn default() -> Self {
        Self {
            squat_knee_hip_angle: SQUAT_KNEE_HIP_ANGLE,
            forward_head_neck_angle: FORWARD_HEAD_NECK_ANGLE,
            slouch_horizontal_offset: SLOUCH_HORIZONTAL_OFFSET,
            uneven_shoulder_offset: UNEVEN_SHOULDER_OFFSET,
            rounded_back_angle: ROUNDED_BACK_ANGLE,
            knee_tracking_offset: KNEE_TRACKING_OFFSET,
        }
    }
}
