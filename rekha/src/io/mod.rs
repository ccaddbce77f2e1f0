//! Scan file input.
//!
//! Only the URG `.xy` text format is supported.

pub mod urg_xy;

pub use urg_xy::{ScanFilter, parse_line, read_area, read_xy_file};
