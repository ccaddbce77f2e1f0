//! # Rekha: Line Segment Extraction from 2D Range Scans
//!
//! Extracts straight wall segments from the point cloud of a single
//! rotating range-scanner sweep.
//!
//! ## Features
//!
//! - **Regression finder**: sliding-window least squares, windows merged by
//!   Mahalanobis distance of their `(slope, offset)` estimates
//! - **Robust finder**: repeated random sample consensus, insensitive to
//!   point order and outliers
//! - **Gap splitting**: collinear walls separated by doorways become
//!   separate segments
//! - **URG `.xy` reader** with zero-return and duplicate filtering
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use rekha::{RegressionSegmentFinder, RekhaConfig, SegmentFinder};
//! use rekha::core::Segment2D;
//! use rekha::io::{ScanFilter, read_area};
//!
//! let config = RekhaConfig::load_default()?;
//! let finder = RegressionSegmentFinder::new(config.regression)?;
//!
//! let mut area = read_area(Path::new("scan.xy"), ScanFilter::default())?;
//! finder.find(&mut area)?;
//!
//! for segment in area.get_objects::<Segment2D>() {
//!     println!("{}", segment);
//! }
//! # Ok::<(), rekha::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Point, line and segment types, matrix helpers
//! - [`extraction`]: Projection grouping and both finders
//! - [`area`]: Typed object store shared by readers and finders
//! - [`io`]: Scan file reader
//! - [`config`]: YAML configuration
//!
//! ## Data Flow
//!
//! ```text
//!   scan.xy ──► read_area ──► Area { Point2D }
//!                                   │
//!                    ┌──────────────┴──────────────┐
//!                    ▼                             ▼
//!         RegressionSegmentFinder         RobustSegmentFinder
//!      (windows → intervals → lines)   (consensus → inliers → lines)
//!                    └──────────────┬──────────────┘
//!                                   ▼
//!                      projection::find_segments
//!                                   │
//!                                   ▼
//!                          Area { Segment2D }
//! ```

pub mod area;
pub mod config;
pub mod core;
pub mod error;
pub mod extraction;
pub mod io;

pub use area::Area;
pub use config::RekhaConfig;
pub use error::{Error, Result};
pub use extraction::{
    RegressionConfig, RegressionSegmentFinder, RobustConfig, RobustSegmentFinder, SegmentFinder,
    SegmentationStrategy,
};
