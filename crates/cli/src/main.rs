use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use closest::api::{
    brute_force, closest_pair, closest_pair_with, example_points, lattice_points, uniform_points,
    CountingObserver, PointPair, Rect, ReplayToken, SolveObserver, SolverCfg, TracingObserver,
};
use nalgebra::Vector2;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;

#[derive(Parser)]
#[command(name = "closest")]
#[command(about = "Closest pair of points: solver, demo, and timing runner")]
struct Cmd {
    /// Log solver events (divide/strip/combine) at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a point set read from a CSV with `x` and `y` columns
    Solve {
        #[arg(long)]
        input: PathBuf,
        /// Write the pair as JSON (plus a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Cross-check the distance against brute force
        #[arg(long)]
        verify: bool,
        /// Ranges of at most this many points are solved by brute force
        #[arg(long, default_value_t = SolverCfg::default().base_threshold)]
        base_threshold: usize,
    },
    /// Six-point example, its brute-force check, and a 20-point lattice sample
    Demo {
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Write a reproducible random point set as CSV
    Random {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Integer lattice `[0, side)²` instead of uniform reals in `[0, 1000)²`
        #[arg(long)]
        side: Option<u32>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Time the solver on uniform samples of the given sizes
    Timing {
        #[arg(long, value_delimiter = ',', default_value = "100,1000,10000")]
        sizes: Vec<usize>,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Also run brute force and compare distances
        #[arg(long)]
        verify: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

/// JSON form of a `PointPair`.
#[derive(Debug, Serialize)]
struct PairRecord {
    i: usize,
    j: usize,
    p: [f64; 2],
    q: [f64; 2],
    distance: f64,
}

impl From<&PointPair> for PairRecord {
    fn from(pair: &PointPair) -> Self {
        Self {
            i: pair.i,
            j: pair.j,
            p: [pair.p.x, pair.p.y],
            q: [pair.q.x, pair.q.y],
            distance: pair.distance,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Solve {
            input,
            out,
            verify,
            base_threshold,
        } => solve(&input, out.as_deref(), verify, base_threshold, cmd.verbose),
        Action::Demo { seed } => demo(seed),
        Action::Random { n, seed, side, out } => random(n, seed, side, &out),
        Action::Timing {
            sizes,
            seed,
            verify,
        } => timing(&sizes, seed, verify),
        Action::Report => report(),
    }
}

fn solve(
    input: &Path,
    out: Option<&Path>,
    verify: bool,
    base_threshold: usize,
    verbose: bool,
) -> Result<()> {
    tracing::info!(input = %input.display(), base_threshold, "solve");
    let points = points_io::read_points_csv(input)?;
    let cfg = SolverCfg { base_threshold };
    let mut counter = CountingObserver::new();
    let pair = if verbose {
        closest_pair_with(&points, cfg, &mut (&mut counter, TracingObserver))
    } else {
        closest_pair_with(&points, cfg, &mut counter)
    }
    .with_context(|| format!("solving {}", input.display()))?;
    tracing::info!(
        points = points.len(),
        evaluations = counter.distance_evaluations(),
        max_depth = counter.max_depth,
        strip_wins = counter.strip_wins,
        observer = counter.name(),
        "solved"
    );
    println!("Closest pair: {pair}");

    if verify {
        let oracle = brute_force(&points, 0, points.len() - 1)?;
        ensure!(
            oracle.distance == pair.distance,
            "brute force disagrees: {} vs {}",
            oracle.distance,
            pair.distance
        );
        println!("Brute force result: {oracle}");
    }

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(out, serde_json::to_vec_pretty(&PairRecord::from(&pair))?)
            .with_context(|| format!("writing {}", out.display()))?;
        let payload = provenance::Payload::new(
            "solve",
            serde_json::json!({
                "input": input.to_string_lossy(),
                "points": points.len(),
                "base_threshold": base_threshold,
                "verified": verify
            }),
        );
        provenance::write_sidecar(out, payload)?;
    }
    Ok(())
}

fn demo(seed: u64) -> Result<()> {
    let points = example_points();
    println!("Points: {}", format_points(&points));
    let pair = closest_pair(&points)?;
    println!("Closest pair: {pair}");
    println!(
        "Distance: {:.3} (sqrt(2) = {:.3})",
        pair.distance,
        2f64.sqrt()
    );

    let oracle = brute_force(&points, 0, points.len() - 1)?;
    println!("Brute force result: {oracle}");

    let sample = lattice_points(20, 100, ReplayToken::new(seed, 0));
    let pair = closest_pair(&sample)?;
    println!("Closest pair in 20 random points: {pair}");
    Ok(())
}

fn random(n: usize, seed: u64, side: Option<u32>, out: &Path) -> Result<()> {
    let tok = ReplayToken::new(seed, 0);
    let points = match side {
        Some(side) => lattice_points(n, side, tok),
        None => uniform_points(n, Rect::default(), tok),
    };
    points_io::write_points_csv(out, &points)?;
    tracing::info!(n, seed, side = ?side, out = %out.display(), "random");
    let payload = provenance::Payload::new(
        "random",
        serde_json::json!({ "n": n, "seed": seed, "side": side }),
    );
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn timing(sizes: &[usize], seed: u64, verify: bool) -> Result<()> {
    for (k, &n) in sizes.iter().enumerate() {
        let points = uniform_points(n, Rect::default(), ReplayToken::new(seed, k as u64));
        let mut obs = CountingObserver::new();
        let start = Instant::now();
        let pair = closest_pair_with(&points, SolverCfg::default(), &mut obs)
            .with_context(|| format!("timing n={n}"))?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
        println!(
            "n={n:>6}: {elapsed_ms:.3} ms, {} distance evaluations, distance {:.6}",
            obs.distance_evaluations(),
            pair.distance
        );
        if verify {
            let start = Instant::now();
            let oracle = brute_force(&points, 0, n - 1)?;
            let brute_ms = start.elapsed().as_secs_f64() * 1e3;
            ensure!(
                oracle.distance == pair.distance,
                "n={n}: brute force {} vs divide and conquer {}",
                oracle.distance,
                pair.distance
            );
            println!("        brute force: {brute_ms:.3} ms (agrees)");
        }
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "closest_version": closest::VERSION,
        "command": "report",
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn format_points(points: &[Vector2<f64>]) -> String {
    let parts: Vec<String> = points.iter().map(|p| format!("({},{})", p.x, p.y)).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn pair_record_serializes_fields() {
        let pair = closest_pair(&example_points()).unwrap();
        let v = serde_json::to_value(PairRecord::from(&pair)).unwrap();
        assert_eq!(v["i"], 1);
        assert_eq!(v["j"], 2);
        assert_eq!(v["p"][0], 1.0);
        assert_eq!(v["distance"], 2f64.sqrt());
    }

    #[test]
    fn random_then_solve_writes_outputs() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("pts.csv");
        random(64, 7, Some(20), &csv).unwrap();
        assert!(dir.path().join("pts.provenance.json").exists());

        let out = dir.path().join("res/pair.json");
        solve(&csv, Some(out.as_path()), true, 3, false).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        let expected = closest_pair(&lattice_points(64, 20, ReplayToken::new(7, 0))).unwrap();
        assert_eq!(v["distance"], expected.distance);
        assert!(dir.path().join("res/pair.provenance.json").exists());
    }

    #[test]
    fn solve_rejects_single_point() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("one.csv");
        std::fs::write(&csv, "x,y\n1,1\n").unwrap();
        let err = solve(&csv, None, false, 3, false).unwrap_err();
        assert!(format!("{err:#}").contains("need at least 2 points"));
    }

    #[test]
    fn format_points_matches_demo_style() {
        assert_eq!(
            format_points(&[Vector2::new(0.0, 0.0), Vector2::new(1.5, 2.0)]),
            "[(0,0), (1.5,2)]"
        );
    }
}
