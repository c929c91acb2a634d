//! JSON wire format spoken by pose-estimation sidecars.
//!
//! ```text
//! { "landmarks": [ { "index": 11, "x": 0.41, "y": 0.37, "visibility": 0.98 }, ... ] }
//! { "landmarks": null }
//! ```
//!
//! `index` may be omitted, in which case list position gives the landmark
//! in BlazePose order.

use serde::{Deserialize, Serialize};

use posture_core::{BodyLandmark, Error, Landmark, LandmarkSet, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireLandmark {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_visibility")]
    pub visibility: f32,
}

fn default_visibility() -> f32 {
    1.0
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionResponse {
    #[serde(default)]
    pub landmarks: Option<Vec<WireLandmark>>,
}

impl DetectionResponse {
    /// Convert into a landmark set; an absent or empty list means no subject
    pub fn into_landmark_set(self) -> Result<Option<LandmarkSet>> {
        let landmarks = match self.landmarks {
            Some(landmarks) if !landmarks.is_empty() => landmarks,
            _ => return Ok(None),
        };

        let mut set = LandmarkSet::new();
        for (position, wire) in landmarks.into_iter().enumerate() {
            let index = wire.index.unwrap_or(position);
            let id = BodyLandmark::from_index(index).ok_or(Error::LandmarkIndex(index))?;
            set.insert(Landmark::new(id, wire.x, wire.y, wire.visibility));
        }

        Ok(Some(set))
    }

    pub fn from_landmark_set(set: Option<&LandmarkSet>) -> Self {
        let landmarks = set.map(|set| {
            let mut wire: Vec<_> = set
                .iter()
                .map(|landmark| WireLandmark {
                    index: Some(landmark.id.index()),
                    x: landmark.x,
                    y: landmark.y,
                    visibility: landmark.visibility,
                })
                .collect();
            wire.sort_by_key(|w| w.index);
            wire
        });

        Self { landmarks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_landmarks() {
        let json = r#"{"landmarks": [
            {"x": 0.5, "y": 0.1, "visibility": 0.9},
            {"x": 0.49, "y": 0.09}
        ]}"#;

        let response: DetectionResponse = serde_json::from_str(json).unwrap();
        let set = response.into_landmark_set().unwrap().unwrap();

        assert_eq!(set.len(), 2);
        let nose = set.get(BodyLandmark::Nose).unwrap();
        assert_eq!(nose.visibility, 0.9);
        let eye = set.get(BodyLandmark::LeftEyeInner).unwrap();
        assert_eq!(eye.visibility, 1.0);
    }

    #[test]
    fn test_indexed_landmarks() {
        let json = r#"{"landmarks": [
            {"index": 27, "x": 0.4, "y": 0.9},
            {"index": 25, "x": 0.42, "y": 0.7}
        ]}"#;

        let response: DetectionResponse = serde_json::from_str(json).unwrap();
        let set = response.into_landmark_set().unwrap().unwrap();

        assert_eq!(set.point(BodyLandmark::LeftAnkle).unwrap().x, 0.4);
        assert_eq!(set.point(BodyLandmark::LeftKnee).unwrap().y, 0.7);
    }

    #[test]
    fn test_no_subject() {
        for json in [r#"{"landmarks": null}"#, r#"{"landmarks": []}"#, "{}"] {
            let response: DetectionResponse = serde_json::from_str(json).unwrap();
            assert!(response.into_landmark_set().unwrap().is_none());
        }
    }

    #[test]
    fn test_out_of_range_index() {
        let json = r#"{"landmarks": [{"index": 40, "x": 0.4, "y": 0.9}]}"#;
        let response: DetectionResponse = serde_json::from_str(json).unwrap();

        assert!(matches!(
            response.into_landmark_set(),
            Err(Error::LandmarkIndex(40))
        ));
    }

    #[test]
    fn test_from_landmark_set_is_ordered() {
        let set = LandmarkSet::new()
            .with(BodyLandmark::RightAnkle, 0.6, 0.9)
            .with(BodyLandmark::Nose, 0.5, 0.1);

        let response = DetectionResponse::from_landmark_set(Some(&set));
        let indices: Vec<_> = response
            .landmarks
            .unwrap()
            .iter()
            .map(|w| w.index)
            .collect();
        assert_eq!(indices, vec![Some(0), Some(28)]);
    }
}
