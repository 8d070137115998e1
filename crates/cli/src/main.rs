use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use maxtri::api::{
    circle_points, convex_hull_from_points, largest_triangle, random_points,
    try_largest_triangle, Point, ReplayToken, SolveCfg,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod run_record;

use points_io::{read_points_csv, write_points_csv, write_timings_csv};
use run_record::{code_rev, RunRecord, RunSummary};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Largest-triangle runner: sampling, solving, timing")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SampleKind {
    /// Uniform in the square [-radius, radius)²
    Random,
    /// On the circle of integer radius, distinct integer abscissae
    Circle,
}

#[derive(Subcommand)]
enum Action {
    /// Sample a point set and write it as CSV (x,y)
    Sample {
        #[arg(long, value_enum, default_value_t = SampleKind::Circle)]
        kind: SampleKind,
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 10_000)]
        radius: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Build the hull of a CSV point set and find its largest triangle
    Solve {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Stop splitting below this recursion depth
        #[arg(long)]
        max_depth: Option<usize>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Time the solver on circle point sets of growing size
    Compare {
        #[arg(long, default_value_t = 1000)]
        max_n: usize,
        /// Number of consecutive sizes averaged into one row
        #[arg(long, default_value_t = 100)]
        window: usize,
        #[arg(long, default_value_t = 10_000)]
        radius: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the build revision and library version as JSON
    Report,
}

#[derive(Serialize)]
struct SolveOutput {
    input_points: usize,
    hull: Vec<[f64; 2]>,
    triangle: [[f64; 2]; 3],
    area: f64,
    start: usize,
    elapsed_s: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sample {
            kind,
            n,
            radius,
            seed,
            out,
        } => sample(kind, n, radius, seed, &out),
        Action::Solve {
            input,
            start,
            max_depth,
            out,
        } => solve(&input, start, SolveCfg { max_depth }, &out),
        Action::Compare {
            max_n,
            window,
            radius,
            seed,
            out,
        } => compare(max_n, window, radius, seed, &out),
        Action::Report => report(),
    }
}

fn draw(kind: SampleKind, n: usize, radius: u32, tok: ReplayToken) -> Result<Vec<Point>> {
    let mut rng = tok.to_std_rng();
    Ok(match kind {
        SampleKind::Random => random_points(n, radius as f64, &mut rng),
        SampleKind::Circle => circle_points(n, radius, &mut rng)?,
    })
}

fn sample(kind: SampleKind, n: usize, radius: u32, seed: u64, out: &Path) -> Result<()> {
    tracing::info!(?kind, n, radius, seed, out = %out.display(), "sample");
    let pts = draw(kind, n, radius, ReplayToken { seed, index: 0 })
        .with_context(|| format!("sampling {n} {kind:?} points"))?;
    write_points_csv(out, &pts)?;
    RunRecord::new(
        out,
        RunSummary::Sample {
            kind: format!("{kind:?}").to_lowercase(),
            n,
            radius,
            seed,
        },
    )
    .write()?;
    Ok(())
}

fn solve(input: &Path, start: usize, cfg: SolveCfg, out: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), start, max_depth = ?cfg.max_depth, "solve");
    let pts = read_points_csv(input)?;
    let hull = convex_hull_from_points(&pts);
    tracing::info!(points = pts.len(), hull = hull.len(), "hull");

    let t0 = Instant::now();
    let tri = try_largest_triangle(&hull, start, cfg)
        .with_context(|| format!("solving on the hull of {}", input.display()))?;
    let elapsed_s = t0.elapsed().as_secs_f64();
    tracing::info!(area = tri.area(), elapsed_s, "largest_triangle");

    let output = SolveOutput {
        input_points: pts.len(),
        hull: hull.iter().map(|p| [p.x, p.y]).collect(),
        triangle: tri.points().map(|p| [p.x, p.y]),
        area: tri.area(),
        start,
        elapsed_s,
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&output)?)
        .with_context(|| format!("writing {}", out.display()))?;
    RunRecord::new(
        out,
        RunSummary::Solve {
            input: input.to_string_lossy().into_owned(),
            start,
            max_depth: cfg.max_depth,
            input_points: output.input_points,
            hull_vertices: hull.len(),
            area: output.area,
            elapsed_s,
        },
    )
    .write()?;
    Ok(())
}

/// Mean solver time per window of consecutive sizes `3..max_n`.
///
/// Rows are labelled with the first size of their window. See
/// [`window_means`] for how a trailing partial window is averaged.
fn timing_curve(max_n: usize, window: usize, radius: u32, seed: u64) -> Result<Vec<(usize, f64)>> {
    let mut times: Vec<f64> = Vec::with_capacity(max_n.saturating_sub(3));
    for n in 3..max_n {
        let tok = ReplayToken {
            seed,
            index: n as u64,
        };
        let pts = circle_points(n, radius, &mut tok.to_std_rng())
            .with_context(|| format!("sampling {n} circle points"))?;
        let hull = convex_hull_from_points(&pts);
        let t0 = Instant::now();
        std::hint::black_box(largest_triangle(std::hint::black_box(&hull), 0));
        times.push(t0.elapsed().as_secs_f64());
    }
    let rows = window_means(&times, window, 3);
    for (n, mean_s) in &rows {
        tracing::info!(n, mean_s, "timing");
    }
    Ok(rows)
}

/// Average `times` in windows of `window` samples, labelling each row with
/// `first + k * window`.
///
/// A trailing window shorter than `window` is divided by its own length, not
/// by `window`.
fn window_means(times: &[f64], window: usize, first: usize) -> Vec<(usize, f64)> {
    let window = window.max(1);
    times
        .chunks(window)
        .enumerate()
        .map(|(k, chunk)| (first + k * window, chunk.iter().sum::<f64>() / chunk.len() as f64))
        .collect()
}

fn compare(max_n: usize, window: usize, radius: u32, seed: u64, out: &Path) -> Result<()> {
    tracing::info!(max_n, window, radius, seed, out = %out.display(), "compare");
    let rows = timing_curve(max_n, window, radius, seed)?;
    write_timings_csv(out, &rows)?;
    RunRecord::new(
        out,
        RunSummary::Compare {
            max_n,
            window,
            radius,
            seed,
            rows: rows.len(),
        },
    )
    .write()?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": code_rev(),
        "maxtri_version": maxtri::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn timing_curve_windows() {
        let rows = timing_curve(30, 10, 100, 1).unwrap();
        let labels: Vec<usize> = rows.iter().map(|r| r.0).collect();
        assert_eq!(labels, vec![3, 13, 23]);
        assert!(rows.iter().all(|r| r.1 >= 0.0));
    }

    #[test]
    fn trailing_window_is_averaged_over_its_own_length() {
        let times = [1.0, 3.0, 5.0, 7.0, 10.0];
        assert_eq!(window_means(&times, 2, 3), vec![(3, 2.0), (5, 6.0), (7, 10.0)]);
        assert_eq!(window_means(&times, 0, 3).len(), 5);
        assert!(window_means(&[], 4, 3).is_empty());
    }

    #[test]
    fn timing_curve_rejects_oversized_circle() {
        assert!(timing_curve(30, 10, 5, 1).is_err());
    }

    #[test]
    fn sample_then_solve_writes_result_and_run_records() {
        let dir = tempdir().unwrap();
        let pts_path = dir.path().join("pts.csv");
        sample(SampleKind::Circle, 12, 50, 7, &pts_path).unwrap();
        let rec: serde_json::Value =
            serde_json::from_slice(&std::fs::read(dir.path().join("pts.run.json")).unwrap()).unwrap();
        assert_eq!(rec["command"], "sample");
        assert_eq!(rec["kind"], "circle");
        assert_eq!(rec["n"], 12);

        let out = dir.path().join("out/result.json");
        solve(&pts_path, 0, SolveCfg::default(), &out).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["input_points"], 12);
        assert_eq!(parsed["hull"].as_array().unwrap().len(), 12);
        assert_eq!(parsed["triangle"].as_array().unwrap().len(), 3);
        assert!(parsed["area"].as_f64().unwrap() > 0.0);
        let rec: serde_json::Value = serde_json::from_slice(
            &std::fs::read(dir.path().join("out/result.run.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(rec["command"], "solve");
        assert_eq!(rec["hull_vertices"], 12);
        assert_eq!(rec["max_depth"], serde_json::Value::Null);
        assert_eq!(rec["area"], parsed["area"]);
    }

    #[test]
    fn solve_rejects_degenerate_input() {
        let dir = tempdir().unwrap();
        let pts_path = dir.path().join("line.csv");
        std::fs::write(&pts_path, "x,y\n0,0\n1,1\n2,2\n").unwrap();
        let err = solve(&pts_path, 0, SolveCfg::default(), &dir.path().join("r.json")).unwrap_err();
        assert!(format!("{err:#}").contains("needs at least 3"));
    }
}
