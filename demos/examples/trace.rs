// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run the closest-pair engine and replay its trace on the terminal.
//!
//! This example shows how a renderer consumes the frame log:
//! - `Divide` frames become vertical lines (`FrameKind::divide_line`),
//! - `Strip` frames become highlighted bands (`FrameKind::strip_band`),
//! - `BruteForce`/`StripClosest` frames highlight a pair and the elements involved.
//!
//! Without `--count` the six-point preset is used.
//!
//! Run:
//! - `cargo run -p pairtrace_demos --example trace`
//! - `cargo run -p pairtrace_demos --example trace -- --count 40 --seed 7`
//! - `cargo run -p pairtrace_demos --example trace -- --json`
//!
//! Set `RUST_LOG=pairtrace=trace` to see the engine's own diagnostics on stderr.

use anyhow::{Context, Result, ensure};
use clap::Parser;
use kurbo::Point;
use pairtrace::{Frame, FrameKind, Solver, SolverConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Closest pair of points, replayed frame by frame.
#[derive(Parser, Debug)]
#[command(name = "trace")]
struct Args {
    /// Number of random points; the six-point preset is used when omitted.
    #[arg(short = 'n', long)]
    count: Option<usize>,
    /// Seed for random point placement.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Width of the canvas random points are placed on.
    #[arg(long, default_value_t = 600.0)]
    width: f64,
    /// Height of the canvas random points are placed on.
    #[arg(long, default_value_t = 400.0)]
    height: f64,
    /// Space drawn above the topmost point.
    #[arg(long, default_value_t = SolverConfig::default().y_start_padding)]
    y_start_padding: f64,
    /// Space drawn below the bottommost point.
    #[arg(long, default_value_t = SolverConfig::default().y_end_padding)]
    y_end_padding: f64,
    /// Print the result and frame log as JSON instead of a text replay.
    #[arg(long)]
    json: bool,
}

fn preset() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 3.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 3.0),
        Point::new(2.0, 1.0),
        Point::new(2.0, 2.0),
    ]
}

fn random_points(count: usize, seed: u64, width: f64, height: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)))
        .collect()
}

fn describe(frame: &Frame<usize>) -> String {
    let kind = &frame.kind;
    let detail = match kind {
        FrameKind::Divide { .. } => match kind.divide_line() {
            Some(line) => format!(
                "split at x = {:.2}, line from y = {:.2} to {:.2}",
                line.p0.x, line.p0.y, line.p1.y
            ),
            None => String::new(),
        },
        FrameKind::Compare => "compare left and right results".to_owned(),
        FrameKind::Strip { handles, .. } => match kind.strip_band() {
            Some(band) => format!(
                "strip x in ({:.2}, {:.2}), width {:.2}, elements {:?}",
                band.x0,
                band.x1,
                band.width(),
                handles
            ),
            None => String::new(),
        },
        FrameKind::BruteForce {
            p1,
            p2,
            distance,
            handles,
        } => format!(
            "brute force over {:?}: ({:.2}, {:.2}) - ({:.2}, {:.2}) = {:.4}",
            handles, p1.x, p1.y, p2.x, p2.y, distance
        ),
        FrameKind::StripClosest {
            p1,
            p2,
            distance,
            improved_in_strip,
            handles,
        } => format!(
            "strip scan over {:?}: ({:.2}, {:.2}) - ({:.2}, {:.2}) = {:.4}{}",
            handles,
            p1.x,
            p1.y,
            p2.x,
            p2.y,
            distance,
            if *improved_in_strip {
                " (closer pair found in strip)"
            } else {
                ""
            }
        ),
    };
    format!("[{:>4}] {:<13} {}", frame.sequence_number, kind.name(), detail)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    ensure!(
        args.width > 0.0 && args.height > 0.0,
        "canvas must have a positive size, got {} x {}",
        args.width,
        args.height
    );
    let points = match args.count {
        Some(count) => random_points(count, args.seed, args.width, args.height),
        None => preset(),
    };
    // Element handles are indices into `points`.
    let handles: Vec<usize> = (0..points.len()).collect();

    let config = SolverConfig {
        y_start_padding: args.y_start_padding,
        y_end_padding: args.y_end_padding,
    };
    let mut solver = Solver::with_config(config);
    let pair = solver
        .solve(&points, &handles)
        .with_context(|| format!("solving {} points", points.len()))?;
    info!(
        points = points.len(),
        frames = solver.frames().len(),
        "run complete"
    );

    if args.json {
        let out = serde_json::json!({
            "result": pair,
            "frames": solver.frames(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("== {} points ==", points.len());
    for (i, p) in points.iter().enumerate() {
        println!("  #{i:<3} ({:.2}, {:.2})", p.x, p.y);
    }
    println!("\n== Replay ==");
    for frame in solver.frames() {
        println!("{}", describe(frame));
    }
    println!(
        "\nClosest pair: ({:.2}, {:.2}) - ({:.2}, {:.2}), distance {:.4}",
        pair.p1.x, pair.p1.y, pair.p2.x, pair.p2.y, pair.distance
    );
    Ok(())
}
