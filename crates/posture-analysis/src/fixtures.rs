//! Landmark sets shared by the unit tests.

use posture_core::{BodyLandmark, Landmark, LandmarkSet};

pub fn place(landmarks: &mut LandmarkSet, id: BodyLandmark, x: f64, y: f64) {
    landmarks.insert(Landmark::new(id, x, y, 1.0));
}

pub fn shift(landmarks: &mut LandmarkSet, id: BodyLandmark, dx: f64, dy: f64) {
    let point = landmarks.point(id).unwrap();
    place(landmarks, id, point.x + dx, point.y + dy);
}

/// Ears, shoulders and hips stacked vertically, knees out in front
pub fn upright_desk() -> LandmarkSet {
    LandmarkSet::new()
        .with(BodyLandmark::Nose, 0.5, 0.18)
        .with(BodyLandmark::LeftEar, 0.48, 0.2)
        .with(BodyLandmark::RightEar, 0.52, 0.2)
        .with(BodyLandmark::LeftShoulder, 0.45, 0.4)
        .with(BodyLandmark::RightShoulder, 0.55, 0.4)
        .with(BodyLandmark::LeftHip, 0.45, 0.7)
        .with(BodyLandmark::RightHip, 0.55, 0.7)
        .with(BodyLandmark::LeftKnee, 0.3, 0.75)
        .with(BodyLandmark::RightKnee, 0.4, 0.75)
        .with(BodyLandmark::LeftAnkle, 0.3, 0.95)
        .with(BodyLandmark::RightAnkle, 0.4, 0.95)
}

/// Desk posture whose ear/shoulder/hip angle is `neck_angle` degrees
pub fn forward_head_desk(neck_angle: f64) -> LandmarkSet {
    let (shoulder_x, shoulder_y, reach) = (0.5, 0.5, 0.2);
    let radians = neck_angle.to_radians();
    let ear_x = shoulder_x + reach * radians.sin();
    let ear_y = shoulder_y + reach * radians.cos();

    LandmarkSet::new()
        .with(BodyLandmark::LeftEar, ear_x - 0.02, ear_y)
        .with(BodyLandmark::RightEar, ear_x + 0.02, ear_y)
        .with(BodyLandmark::LeftShoulder, 0.45, shoulder_y)
        .with(BodyLandmark::RightShoulder, 0.55, shoulder_y)
        .with(BodyLandmark::LeftHip, 0.45, 0.8)
        .with(BodyLandmark::RightHip, 0.55, 0.8)
        .with(BodyLandmark::LeftKnee, 0.3, 0.85)
        .with(BodyLandmark::RightKnee, 0.4, 0.85)
        .with(BodyLandmark::LeftAnkle, 0.3, 0.98)
        .with(BodyLandmark::RightAnkle, 0.4, 0.98)
}

/// Head forward, shoulders drifted past the hips and tilted
pub fn slumped_desk() -> LandmarkSet {
    LandmarkSet::new()
        .with(BodyLandmark::LeftEar, 0.88, 0.4)
        .with(BodyLandmark::RightEar, 0.92, 0.4)
        .with(BodyLandmark::LeftShoulder, 0.6, 0.38)
        .with(BodyLandmark::RightShoulder, 0.7, 0.46)
        .with(BodyLandmark::LeftHip, 0.45, 0.7)
        .with(BodyLandmark::RightHip, 0.55, 0.7)
        .with(BodyLandmark::LeftKnee, 0.3, 0.75)
        .with(BodyLandmark::RightKnee, 0.4, 0.75)
        .with(BodyLandmark::LeftAnkle, 0.3, 0.95)
        .with(BodyLandmark::RightAnkle, 0.4, 0.95)
}

/// Front view squat with a straight back and knees over the ankles
pub fn clean_squat() -> LandmarkSet {
    LandmarkSet::new()
        .with(BodyLandmark::LeftEar, 0.47, 0.1)
        .with(BodyLandmark::RightEar, 0.53, 0.1)
        .with(BodyLandmark::LeftShoulder, 0.45, 0.2)
        .with(BodyLandmark::RightShoulder, 0.55, 0.2)
        .with(BodyLandmark::LeftHip, 0.45, 0.5)
        .with(BodyLandmark::RightHip, 0.55, 0.5)
        .with(BodyLandmark::LeftKnee, 0.45, 0.7)
        .with(BodyLandmark::RightKnee, 0.55, 0.7)
        .with(BodyLandmark::LeftAnkle, 0.45, 0.9)
        .with(BodyLandmark::RightAnkle, 0.55, 0.9)
}
