//! Fundamental types for posture analysis.

use std::collections::HashMap;
use std::fmt;

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 33-landmark whole-body topology (BlazePose ordering)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BodyLandmark {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl BodyLandmark {
    pub const COUNT: usize = 33;

    pub const ALL: [BodyLandmark; Self::COUNT] = [
        Self::Nose,
        Self::LeftEyeInner,
        Self::LeftEye,
        Self::LeftEyeOuter,
        Self::RightEyeInner,
        Self::RightEye,
        Self::RightEyeOuter,
        Self::LeftEar,
        Self::RightEar,
        Self::MouthLeft,
        Self::MouthRight,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftPinky,
        Self::RightPinky,
        Self::LeftIndex,
        Self::RightIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEyeInner => "left_eye_inner",
            Self::LeftEye => "left_eye",
            Self::LeftEyeOuter => "left_eye_outer",
            Self::RightEyeInner => "right_eye_inner",
            Self::RightEye => "right_eye",
            Self::RightEyeOuter => "right_eye_outer",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::MouthLeft => "mouth_left",
            Self::MouthRight => "mouth_right",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftPinky => "left_pinky",
            Self::RightPinky => "right_pinky",
            Self::LeftIndex => "left_index",
            Self::RightIndex => "right_index",
            Self::LeftThumb => "left_thumb",
            Self::RightThumb => "right_thumb",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::LeftHeel => "left_heel",
            Self::RightHeel => "right_heel",
            Self::LeftFootIndex => "left_foot_index",
            Self::RightFootIndex => "right_foot_index",
        }
    }
}

impl fmt::Display for BodyLandmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 2D point in normalized image space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `a` and `b`
    pub fn midpoint(a: Point2D, b: Point2D) -> Self {
        Self::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }

    pub fn to_nalgebra(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Vector pointing from `origin` to `self`
    pub fn vector_from(&self, origin: &Point2D) -> Vector2<f64> {
        self.to_nalgebra() - origin.to_nalgebra()
    }
}

/// Single landmark detection, x/y normalized to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: BodyLandmark,
    pub x: f64,
    pub y: f64,
    pub visibility: f32,
}

impl Landmark {
    pub fn new(id: BodyLandmark, x: f64, y: f64, visibility: f32) -> Self {
        Self {
            id,
            x,
            y,
            visibility,
        }
    }

    pub fn point(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Landmarks detected on one subject in one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSet {
    landmarks: HashMap<BodyLandmark, Landmark>,
}

impl LandmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a landmark, replacing any earlier detection with the same id
    pub fn insert(&mut self, landmark: Landmark) {
        self.landmarks.insert(landmark.id, landmark);
    }

    pub fn with(mut self, id: BodyLandmark, x: f64, y: f64) -> Self {
        self.insert(Landmark::new(id, x, y, 1.0));
        self
    }

    pub fn remove(&mut self, id: BodyLandmark) -> Option<Landmark> {
        self.landmarks.remove(&id)
    }

    pub fn get(&self, id: BodyLandmark) -> Option<&Landmark> {
        self.landmarks.get(&id)
    }

    /// Landmark lookup that treats absence as a computation error
    pub fn require(&self, id: BodyLandmark) -> Result<&Landmark> {
        self.get(id).ok_or(Error::MissingLandmark(id))
    }

    /// Fails on the first of `ids` that is absent
    pub fn require_all(&self, ids: &[BodyLandmark]) -> Result<()> {
        ids.iter().try_for_each(|&id| self.require(id).map(|_| ()))
    }

    pub fn point(&self, id: BodyLandmark) -> Result<Point2D> {
        self.require(id).map(Landmark::point)
    }

    /// Midpoint of a left/right landmark pair
    pub fn midpoint(&self, left: BodyLandmark, right: BodyLandmark) -> Result<Point2D> {
        Ok(Point2D::midpoint(self.point(left)?, self.point(right)?))
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.values()
    }
}

impl FromIterator<Landmark> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        let mut set = Self::new();
        for landmark in iter {
            set.insert(landmark);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_index_roundtrip() {
        for i in 0..BodyLandmark::COUNT {
            let landmark = BodyLandmark::from_index(i).unwrap();
            assert_eq!(landmark.index(), i);
        }
        assert!(BodyLandmark::from_index(BodyLandmark::COUNT).is_none());
    }

    #[test]
    fn test_landmark_names_match_serde() {
        for landmark in BodyLandmark::ALL {
            let json = serde_json::to_string(&landmark).unwrap();
            assert_eq!(json, format!("\"{}\"", landmark.name()));
        }
    }

    #[test]
    fn test_midpoint() {
        let set = LandmarkSet::new()
            .with(BodyLandmark::LeftShoulder, 0.4, 0.3)
            .with(BodyLandmark::RightShoulder, 0.6, 0.5);

        let mid = set
            .midpoint(BodyLandmark::LeftShoulder, BodyLandmark::RightShoulder)
            .unwrap();
        assert!((mid.x - 0.5).abs() < 1e-12);
        assert!((mid.y - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_require_missing_landmark() {
        let set = LandmarkSet::new().with(BodyLandmark::LeftHip, 0.5, 0.5);

        match set.require(BodyLandmark::RightHip) {
            Err(Error::MissingLandmark(BodyLandmark::RightHip)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_require_all_reports_first_missing() {
        let set = LandmarkSet::new()
            .with(BodyLandmark::LeftHip, 0.5, 0.5)
            .with(BodyLandmark::RightHip, 0.6, 0.5);

        assert!(set
            .require_all(&[BodyLandmark::LeftHip, BodyLandmark::RightHip])
            .is_ok());
        assert!(matches!(
            set.require_all(&[
                BodyLandmark::LeftHip,
                BodyLandmark::LeftKnee,
                BodyLandmark::RightKnee,
            ]),
            Err(Error::MissingLandmark(BodyLandmark::LeftKnee))
        ));
    }

    #[test]
    fn test_insert_replaces() {
        let mut set = LandmarkSet::new().with(BodyLandmark::Nose, 0.1, 0.1);
        set.insert(Landmark::new(BodyLandmark::Nose, 0.2, 0.3, 0.5));

        assert_eq!(set.len(), 1);
        assert_eq!(set.point(BodyLandmark::Nose).unwrap(), Point2D::new(0.2, 0.3));
    }
}
