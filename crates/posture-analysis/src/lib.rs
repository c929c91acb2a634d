//! # Posture-Analysis
//!
//! Turns the landmarks of a single frame into a posture judgment.
//!
//! ## Pipeline
//!
//! 1. **Classify** the exercise from the knee/hip angle: squat or desk sitting
//! 2. **Assess** the matching rule set, collecting issues in a fixed order
//! 3. **Compose** the verdict, message and confidence
//!
//! Every frame is judged on its own. There is no smoothing across frames, so
//! a subject hovering around the classifier boundary may flip between
//! exercise types from one frame to the next.
//!
//! ## Rule Sets
//!
//! - **Desk**: forward head posture, slouching, uneven shoulders
//! - **Squat**: knees beyond toes, rounded back, poor knee tracking

pub mod analyzer;
pub mod classifier;
pub mod desk;
pub mod result;
pub mod squat;
pub mod thresholds;

pub use analyzer::*;
pub use classifier::*;
pub use desk::*;
pub use result::*;
pub use squat::*;
pub use thresholds::*;

#[cfg(test)]
pub(crate) mod fixtures;
