//! Segment extraction from a URG scan dump.
//!
//! Reads a single-record `.xy` file, runs one finder and prints the
//! segments it found.
//!
//! Usage:
//!   cargo run --example find_segments -- --input scan.xy
//!   cargo run --example find_segments -- -i scan.xy --finder robust
//!   RUST_LOG=debug cargo run --example find_segments -- -i scan.xy -c configs/rekha.yaml

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};

use rekha::core::{Point2D, Segment2D};
use rekha::io::{ScanFilter, read_area};
use rekha::{RegressionSegmentFinder, RekhaConfig, RobustSegmentFinder, SegmentFinder};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FinderKind {
    /// Sliding-window regression, needs points in scan order
    Regression,
    /// Iterative random sample consensus
    Robust,
}

/// Find line segments in a URG .xy scan
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scan file with exactly one record
    #[arg(short, long)]
    input: PathBuf,

    /// Configuration file path (defaults are used when absent)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Finder to run
    #[arg(short, long, value_enum, default_value_t = FinderKind::Regression)]
    finder: FinderKind,

    /// Keep (0, 0) returns
    #[arg(long)]
    keep_zero_points: bool,

    /// Keep consecutive duplicate points
    #[arg(long)]
    keep_duplicates: bool,
}

fn run(args: &Args) -> rekha::Result<()> {
    let config = match &args.config {
        Some(path) => RekhaConfig::load(path)?,
        None => RekhaConfig::load_default()?,
    };

    let finder: Box<dyn SegmentFinder> = match args.finder {
        FinderKind::Regression => Box::new(RegressionSegmentFinder::new(config.regression)?),
        FinderKind::Robust => Box::new(RobustSegmentFinder::new(config.robust)?),
    };

    let filter = ScanFilter {
        ignore_zero_points: !args.keep_zero_points,
        merge_duplicates: !args.keep_duplicates,
    };
    let mut area = read_area(&args.input, filter)?;
    info!(
        "Loaded {} points from {}",
        area.count::<Point2D>(),
        args.input.display()
    );

    let added = finder.find(&mut area)?;
    info!("{:?} finder found {} segments", args.finder, added);

    for (i, segment) in area.get_objects::<Segment2D>().iter().enumerate() {
        println!("{:3}: {} (length {:.2})", i, segment, segment.length());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
