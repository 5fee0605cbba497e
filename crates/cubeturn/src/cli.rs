use std::io::Read;
use std::path::PathBuf;

use cubemath::prelude::*;
use cubeprefs::Preferences;
use cubepuzzle::{CameraAxes, CameraTransform, CubeSimulation, Move, parse_moves};
use eyre::{Result, WrapErr, eyre};
use itertools::Itertools;
use serde::Serialize;
use web_time::Duration;

/// Length of one simulated frame.
const FRAME: Duration = Duration::from_micros(16_667);
/// Maximum number of frames to simulate before giving up.
const MAX_FRAMES: usize = 1_000_000;

/// Cubeturn command-line interface
///
/// Runs the 3x3x3 move engine without a renderer.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file (YAML). Missing fields use the defaults.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply moves in standard notation and print the resulting facelets.
    Apply {
        /// Moves (such as `R U R' U'`).
        moves: Vec<String>,
        /// File to read more moves from, use '-' for stdin.
        #[arg(short, long, value_parser)]
        input: Option<clio::Input>,
        /// Print a JSON report instead of the facelet string.
        #[arg(long)]
        json: bool,
    },
    /// Press keys relative to a camera and print the resulting facelets.
    Keys {
        /// Keys to press, one character each (such as `RUru`).
        keys: String,
        #[command(flatten)]
        camera: CameraArgs,
        /// Print a JSON report instead of the facelet string.
        #[arg(long)]
        json: bool,
    },
    /// Print the faces seen from a camera as JSON.
    Axes {
        #[command(flatten)]
        camera: CameraArgs,
    },
}

#[derive(clap::Args, Debug, Copy, Clone)]
pub(crate) struct CameraArgs {
    /// Camera position as `X,Y,Z`.
    #[arg(long, value_parser = parse_point, default_value = "0,0,6", allow_hyphen_values = true)]
    pub camera: Point3<f32>,
    /// Camera roll in radians.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub roll: f32,
}
impl CameraArgs {
    fn transform(self) -> CameraTransform {
        CameraTransform::new(self.camera, self.roll)
    }
}

/// Result of running a sequence of moves.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct Report {
    /// Moves that were applied, in order.
    pub moves: Vec<String>,
    /// Number of frames it took to animate all moves.
    pub frames: usize,
    /// 54-character facelet string.
    pub facelets: String,
    /// Whether every face is a single color.
    pub solved: bool,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs = match &args.prefs {
        Some(path) => Preferences::try_load(Some(path.as_path()))?,
        None => Preferences::default(),
    };

    match args.subcommand {
        Subcommand::Apply {
            moves,
            input,
            json,
        } => {
            let mut notation = moves.join(" ");
            if let Some(mut input) = input {
                let mut buffer = String::new();
                input
                    .read_to_string(&mut buffer)
                    .wrap_err("error reading moves")?;
                notation.push(' ');
                notation.push_str(&buffer);
            }
            let report = apply(prefs, &notation)?;
            write_report(&report, json)
        }

        Subcommand::Keys { keys, camera, json } => {
            let report = press_keys(prefs, &keys, &camera.transform())?;
            write_report(&report, json)
        }

        Subcommand::Axes { camera } => {
            write_json_output(&CameraAxes::resolve(&camera.transform()))
        }
    }
}

pub(crate) fn apply(prefs: Preferences, notation: &str) -> Result<Report> {
    let moves = parse_moves(notation, &CameraAxes::default())
        .wrap_err_with(|| format!("error parsing moves {notation:?}"))?;
    let mut sim = CubeSimulation::new(prefs);
    sim.enqueue_all(moves.iter().copied());
    run(sim, &moves)
}

pub(crate) fn press_keys(
    prefs: Preferences,
    keys: &str,
    camera: &CameraTransform,
) -> Result<Report> {
    let mut sim = CubeSimulation::new(prefs);
    let mut moves = vec![];
    for key in keys.chars().filter(|c| !c.is_whitespace()) {
        match sim.handle_key(&key.to_string(), camera) {
            Some(mv) => moves.push(mv),
            None => log::warn!("key {key:?} is not bound to a move"),
        }
    }
    run(sim, &moves)
}

fn run(mut sim: CubeSimulation, moves: &[Move]) -> Result<Report> {
    let mut frames = 0;
    while !sim.is_idle() {
        if frames >= MAX_FRAMES {
            return Err(eyre!("animation did not finish after {MAX_FRAMES} frames"));
        }
        let update = sim.tick(FRAME);
        if let Some(mv) = update.completed {
            log::debug!("frame {frames}: completed {mv}");
        }
        frames += 1;
    }
    Ok(Report {
        moves: moves.iter().map(|m| m.to_string()).collect_vec(),
        frames,
        facelets: sim.facelets(),
        solved: sim.is_solved(),
    })
}

fn write_report(report: &Report, json: bool) -> Result<()> {
    if json {
        write_json_output(report)
    } else {
        println!("{}", report.facelets);
        Ok(())
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .wrap_err("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

fn parse_point(s: &str) -> Result<Point3<f32>, String> {
    let coords = s
        .split(',')
        .map(|c| c.trim().parse::<f32>())
        .collect::<Result<Vec<f32>, _>>()
        .map_err(|e| format!("bad coordinate in {s:?}: {e}"))?;
    match coords[..] {
        [x, y, z] => Ok(Point3::new(x, y, z)),
        _ => Err(format!("expected three comma-separated numbers, got {s:?}")),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use cubepuzzle::SOLVED_FACELETS;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("0, -6,0.5"), Ok(Point3::new(0.0, -6.0, 0.5)));
        assert!(parse_point("1,2").is_err());
        assert!(parse_point("1,2,z").is_err());
    }

    #[test]
    fn test_apply() {
        let report = apply(Preferences::default(), "R U R' U' ").unwrap();
        assert_eq!(report.moves, ["R", "U", "R'", "U'"]);
        assert!(report.frames > 4);
        assert!(!report.solved);

        let report = apply(Preferences::default(), "R2 L2 U2 D2 F2 B2 B2 F2 D2 U2 L2 R2").unwrap();
        assert_eq!(report.facelets, SOLVED_FACELETS);
        assert!(report.solved);

        assert!(apply(Preferences::default(), "R Q").is_err());
    }

    #[test]
    fn test_keys_match_notation() {
        let camera = CameraTransform::default();
        let keys = press_keys(Preferences::default(), "RUru?", &camera).unwrap();
        let notation = apply(Preferences::default(), "R U R' U'").unwrap();
        assert_eq!(keys.facelets, notation.facelets);
        assert_eq!(keys.moves, notation.moves);
    }

    #[test]
    fn test_args() {
        let args = Args::parse_from(["cubeturn", "keys", "RU", "--camera", "-6,0,0", "--roll", "-1"]);
        let Subcommand::Keys { keys, camera, json } = args.subcommand else {
            panic!("wrong subcommand");
        };
        assert_eq!(keys, "RU");
        assert_eq!(camera.camera, Point3::new(-6.0, 0.0, 0.0));
        assert_eq!(camera.roll, -1.0);
        assert!(!json);
    }
}
