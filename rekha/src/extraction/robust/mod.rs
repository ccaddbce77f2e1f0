//! Robust iterative segment extraction.
//!
//! Unlike the regression finder this does not rely on scan order: each round
//! fits the dominant line of the remaining points by random sample consensus
//! and consumes its inliers.
//!
//! ```text
//! remaining points ──► consensus fit ──► inliers ──► gap split ──► segments
//!        ▲                                  │
//!        └──────────── remove inliers ◄─────┘
//! ```

mod config;
mod consensus;
mod finder;

pub use config::RobustConfig;
pub use consensus::{ConsensusFit, ConsensusLineFit, LineModel};
pub use finder::RobustSegmentFinder;
