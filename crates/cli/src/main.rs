use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use graphnum::geom2::convex_hull;
use graphnum::sample::{sample_sequence_cfg, SampleCfg, SampleSeed};
use graphnum::window::{running_mean_cfg, MeanMethod, WindowCfg};
use graphnum::Vec2;
use polars::prelude::*;
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Run graphnum utilities over CSV inputs")]
struct Cmd {
    /// Optional run label; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sliding-window mean of one numeric column
    RunningMean {
        #[arg(long)]
        input: String,
        #[arg(long, default_value = "value")]
        column: String,
        #[arg(long)]
        width: usize,
        /// Sum each window independently instead of keeping a running sum
        #[arg(long)]
        recompute: bool,
        #[arg(long)]
        out: String,
    },
    /// Increasing random sample of distinct integers from [low, high]
    Sample {
        #[arg(long, allow_hyphen_values = true)]
        low: i64,
        #[arg(long, allow_hyphen_values = true)]
        high: i64,
        #[arg(long)]
        count: u64,
        /// Replay seed; without it the thread-local RNG is used
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: String,
    },
    /// Convex hull of the points in two numeric columns
    Hull {
        #[arg(long)]
        input: String,
        #[arg(long, default_value = "x")]
        x: String,
        #[arg(long, default_value = "y")]
        y: String,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::RunningMean {
            input,
            column,
            width,
            recompute,
            out,
        } => running_mean(
            RunningMeanParams {
                input,
                column,
                width,
                recompute,
            },
            &out,
            cmd.tag,
        ),
        Action::Sample {
            low,
            high,
            count,
            seed,
            index,
            out,
        } => sample(
            SampleParams {
                low,
                high,
                count,
                seed,
                index,
            },
            &out,
            cmd.tag,
        ),
        Action::Hull { input, x, y, out } => hull(HullParams { input, x, y }, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

#[derive(Debug, Serialize)]
struct RunningMeanParams {
    input: String,
    column: String,
    width: usize,
    recompute: bool,
}

#[derive(Debug, Serialize)]
struct SampleParams {
    low: i64,
    high: i64,
    count: u64,
    seed: Option<u64>,
    index: u64,
}

#[derive(Debug, Serialize)]
struct HullParams {
    input: String,
    x: String,
    y: String,
}

fn running_mean(params: RunningMeanParams, out: &str, tag: Option<String>) -> Result<()> {
    tracing::info!(?params, out, tag = ?tag, "running_mean");
    let df = table::read_csv(&params.input)?;
    let values = table::f64_column(&df, &params.column)?;
    let cfg = WindowCfg {
        method: if params.recompute {
            MeanMethod::Recompute
        } else {
            MeanMethod::Running
        },
    };
    let means = running_mean_cfg(&values, params.width, cfg)
        .with_context(|| format!("running mean over {:?}", params.column))?;
    let rows = means.len();
    let mut res = df!("mean" => means)?;
    table::write_csv(&mut res, out)?;
    write_sidecar(
        out,
        rows,
        Payload::new("running-mean", serde_json::to_value(&params)?)
            .with_tag(tag)
            .with_input(params.input.as_str(), values.len()),
    )?;
    Ok(())
}

fn sample(params: SampleParams, out: &str, tag: Option<String>) -> Result<()> {
    tracing::info!(?params, out, tag = ?tag, "sample");
    let cfg = SampleCfg::default();
    let drawn = match params.seed {
        Some(seed) => {
            let mut rng = SampleSeed {
                seed,
                index: params.index,
            }
            .rng();
            sample_sequence_cfg(&mut rng, params.low, params.high, params.count, cfg)
        }
        None => sample_sequence_cfg(
            &mut rand::thread_rng(),
            params.low,
            params.high,
            params.count,
            cfg,
        ),
    }
    .context("sampling")?;
    let rows = drawn.len();
    let mut res = df!("value" => drawn)?;
    table::write_csv(&mut res, out)?;
    write_sidecar(
        out,
        rows,
        Payload::new("sample", serde_json::to_value(&params)?).with_tag(tag),
    )?;
    Ok(())
}

fn hull(params: HullParams, out: &str, tag: Option<String>) -> Result<()> {
    tracing::info!(?params, out, tag = ?tag, "hull");
    let df = table::read_csv(&params.input)?;
    let xs = table::f64_column(&df, &params.x)?;
    let ys = table::f64_column(&df, &params.y)?;
    let points: Vec<Vec2<f64>> = xs.iter().zip(&ys).map(|(&x, &y)| Vec2::new(x, y)).collect();
    let h = convex_hull(&points);
    tracing::info!(points = points.len(), vertices = h.len(), "hull_done");
    let (indices, coords) = h.into_parts();
    let mut res = df!(
        "index" => indices.iter().map(|&i| i as u64).collect::<Vec<u64>>(),
        "x" => coords.iter().map(|p| p.x).collect::<Vec<f64>>(),
        "y" => coords.iter().map(|p| p.y).collect::<Vec<f64>>()
    )?;
    table::write_csv(&mut res, out)?;
    write_sidecar(
        out,
        indices.len(),
        Payload::new("hull", serde_json::to_value(&params)?)
            .with_tag(tag)
            .with_input(params.input.as_str(), points.len()),
    )?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::code_rev(),
        "graphnum_version": graphnum::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn hull_command_writes_vertices_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("points.csv");
        fs::write(&input, "x,y\n0,0\n1,1\n2,2\n0,2\n2,0\n").unwrap();
        let out = dir.path().join("out/hull.csv");
        hull(
            HullParams {
                input: input.to_string_lossy().into_owned(),
                x: "x".into(),
                y: "y".into(),
            },
            &out.to_string_lossy(),
            None,
        )
        .unwrap();
        let df = table::read_csv(&out.to_string_lossy()).unwrap();
        let idx = table::f64_column(&df, "index").unwrap();
        assert_eq!(idx, vec![0.0, 4.0, 2.0, 3.0]);
        let sidecar: serde_json::Value = serde_json::from_slice(
            &fs::read(dir.path().join("out/hull.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(sidecar["inputs"][0]["rows"], 5);
        assert_eq!(sidecar["outputs"][0]["rows"], 4);
    }

    #[test]
    fn running_mean_command_rejects_wide_window() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("v.csv");
        fs::write(&input, "value\n1\n2\n").unwrap();
        let out = dir.path().join("m.csv");
        let err = running_mean(
            RunningMeanParams {
                input: input.to_string_lossy().into_owned(),
                column: "value".into(),
                width: 5,
                recompute: false,
            },
            &out.to_string_lossy(),
            None,
        )
        .unwrap_err();
        let root = err.root_cause().to_string();
        assert!(root.starts_with("invalid input"), "{root}");
        assert!(!out.exists());
    }

    #[test]
    fn running_mean_command_writes_means() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("v.csv");
        fs::write(&input, "value\n1\n2\n3\n4\n5\n").unwrap();
        let out = dir.path().join("m.csv");
        running_mean(
            RunningMeanParams {
                input: input.to_string_lossy().into_owned(),
                column: "value".into(),
                width: 2,
                recompute: true,
            },
            &out.to_string_lossy(),
            Some("t".into()),
        )
        .unwrap();
        let df = table::read_csv(&out.to_string_lossy()).unwrap();
        assert_eq!(
            table::f64_column(&df, "mean").unwrap(),
            vec![1.5, 2.5, 3.5, 4.5]
        );
    }

    #[test]
    fn seeded_sample_command_is_reproducible() {
        let dir = tempdir().unwrap();
        let run = |name: &str| {
            let out = dir.path().join(name);
            sample(
                SampleParams {
                    low: -100,
                    high: 100,
                    count: 10,
                    seed: Some(9),
                    index: 2,
                },
                &out.to_string_lossy(),
                None,
            )
            .unwrap();
            fs::read_to_string(out).unwrap()
        };
        let a = run("a.csv");
        let b = run("b.csv");
        assert_eq!(a, b);
        assert_eq!(a.lines().count(), 11);
    }
}
