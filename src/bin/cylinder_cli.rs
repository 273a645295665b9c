use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::error::Error;
use std::io::{self, Write};

use cylinder_unwind::constants::{
    DEFAULT_DURATION_S, DEFAULT_FORCE_N, DEFAULT_FRAME_RATE, DEFAULT_INNER_RADIUS_M, DEFAULT_MASS_KG,
    DEFAULT_OUTER_RADIUS_M, DEFAULT_TORQUE_NM, DEFAULT_UNWOUND_DISTANCE_M,
};
use cylinder_unwind::params::{validate_cylinder, validate_frame_rate, validate_motion};
use cylinder_unwind::{
    evaluate, CylinderSpec, EnergyBreakdown, Evaluation, FrameSink, KinematicSample, MotionSpec,
    PlotSeries, ReplayFrame, ReplayState, ShapeKind, SimulationConfig, SimulationError,
    SimulationResult,
};

#[derive(Parser)]
#[command(name = "cylinder")]
#[command(version)]
#[command(about = "Rotating cylinder unwinding a cord: kinematics and energy", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute inertia, motion and final energies
    Evaluate {
        #[command(flatten)]
        params: ParamArgs,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Sample the motion at a fixed frame rate
    Trajectory {
        #[command(flatten)]
        params: ParamArgs,

        /// Frames per second
        #[arg(long, default_value_t = DEFAULT_FRAME_RATE)]
        fps: f64,

        /// Show only every n-th frame in table output (last frame always shown)
        #[arg(long, default_value = "1")]
        every: usize,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Play the animation frame by frame as text
    Replay {
        #[command(flatten)]
        params: ParamArgs,

        /// Frames per second
        #[arg(long, default_value_t = DEFAULT_FRAME_RATE)]
        fps: f64,

        /// Print only every n-th frame (last frame always shown)
        #[arg(long, default_value = "1")]
        every: usize,
    },

    /// Display model information
    Info,
}

#[derive(Args, Debug, Clone)]
struct ParamArgs {
    /// Cylinder mass (kg)
    #[arg(short = 'm', long, default_value_t = DEFAULT_MASS_KG)]
    mass: f64,

    /// Outer radius (m)
    #[arg(short = 'r', long, default_value_t = DEFAULT_OUTER_RADIUS_M)]
    radius: f64,

    /// Cross-section type: solid, hollow or thin-walled
    #[arg(short = 's', long, default_value = "solid", value_parser = parse_shape)]
    shape: ShapeKind,

    /// Inner radius for hollow cylinders (m)
    #[arg(long, default_value_t = DEFAULT_INNER_RADIUS_M)]
    inner_radius: f64,

    /// How the motion is specified
    #[arg(long, default_value = "force")]
    mode: ModeArg,

    /// Force pulling the cord (N), force mode
    #[arg(short = 'f', long, default_value_t = DEFAULT_FORCE_N)]
    force: f64,

    /// Cord length unwound (m), force mode
    #[arg(short = 'd', long, default_value_t = DEFAULT_UNWOUND_DISTANCE_M)]
    distance: f64,

    /// Applied torque (N·m), torque mode
    #[arg(short = 't', long, default_value_t = DEFAULT_TORQUE_NM)]
    torque: f64,

    /// Duration of the run (s), torque mode
    #[arg(long, default_value_t = DEFAULT_DURATION_S)]
    duration: f64,

    /// Skip the control-panel range checks
    #[arg(long)]
    unchecked: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Force,
    Torque,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Table,
}

fn parse_shape(s: &str) -> Result<ShapeKind, String> {
    ShapeKind::from_str(s).ok_or_else(|| format!("unknown shape '{}' (expected solid, hollow or thin-walled)", s))
}

impl ParamArgs {
    fn cylinder(&self) -> CylinderSpec {
        CylinderSpec {
            mass: self.mass,
            outer_radius: self.radius,
            shape: self.shape,
            inner_radius: if self.shape == ShapeKind::Hollow { self.inner_radius } else { 0.0 },
        }
    }

    fn motion(&self) -> MotionSpec {
        match self.mode {
            ModeArg::Force => MotionSpec::ForceUnwind {
                force: self.force,
                unwound_distance: self.distance,
            },
            ModeArg::Torque => MotionSpec::ConstantTorque {
                torque: self.torque,
                duration: self.duration,
            },
        }
    }

    /// Validate and evaluate, printing any model warnings to stderr.
    fn evaluate(&self) -> SimulationResult<Evaluation> {
        let cylinder = self.cylinder();
        let motion = self.motion();

        if !self.unchecked {
            validate_cylinder(&cylinder)?;
            validate_motion(&motion)?;
        }

        let evaluation = evaluate(&cylinder, &motion);
        for warning in &evaluation.warnings {
            eprintln!("Warning: {}", warning);
        }
        Ok(evaluation)
    }

    fn check_frame_rate(&self, frame_rate: f64) -> SimulationResult<()> {
        if self.unchecked {
            Ok(())
        } else {
            validate_frame_rate(frame_rate)
        }
    }
}

#[derive(Debug, Serialize)]
struct SampleRow {
    #[serde(flatten)]
    sample: KinematicSample,
    energy: EnergyBreakdown,
}

#[derive(Debug, Serialize)]
struct TrajectoryOutput<'a> {
    evaluation: &'a Evaluation,
    frame_rate: f64,
    samples: Vec<SampleRow>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    match cli.command {
        Commands::Evaluate { params, output } => {
            let evaluation = params.evaluate()?;
            display_evaluation(&mut io::stdout().lock(), &evaluation, output)?;
        }

        Commands::Trajectory { params, fps, every, output } => {
            params.check_frame_rate(fps)?;
            let evaluation = params.evaluate()?;
            display_trajectory(&mut io::stdout().lock(), &evaluation, fps, every, output)?;
        }

        Commands::Replay { params, fps, every } => {
            params.check_frame_rate(fps)?;
            let evaluation = params.evaluate()?;
            let config = SimulationConfig { frame_rate: fps };
            let mut session = evaluation.replay(&config);

            let mut renderer = TextRenderer {
                out: io::stdout().lock(),
                series: evaluation.plot_series(fps),
                every: every.max(1),
                last_frame: session.trajectory().len().saturating_sub(1),
            };

            // Rendering failures end the replay but are reported, not fatal
            match session.play(&mut renderer) {
                Ok(frames) => log::info!("rendered {} frames", frames),
                Err(e) => eprintln!("Replay stopped: {}", SimulationError::from(e)),
            }
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║      CYLINDER UNWIND SIMULATOR         ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Moment of inertia:                     ║");
            println!("║ • Solid:        I = ½·M·R²             ║");
            println!("║ • Hollow:       I = ½·M·(R² + r²)      ║");
            println!("║ • Thin-walled:  I = M·R²               ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Force mode:   W = F·d, ω = √(2W/I)     ║");
            println!("║               θ = d/R, α = ω²/(2θ)     ║");
            println!("║ Torque mode:  α = τ/I, ω = α·t         ║");
            println!("║               θ = ½·α·t², d = θ·R      ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Energies:     E_rot = ½·I·ω²           ║");
            println!("║               E_trans = ½·M·v²         ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_evaluation<W: Write>(out: &mut W, evaluation: &Evaluation, format: OutputFormat) -> SimulationResult<()> {
    let m = &evaluation.motion;
    let k = &evaluation.kinematics;

    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(evaluation)?)?;
        }

        OutputFormat::Csv => {
            writeln!(out, "metric,value")?;
            writeln!(out, "moment_of_inertia,{:.6}", evaluation.inertia.value())?;
            writeln!(out, "angular_accel,{:.6}", m.angular_accel)?;
            writeln!(out, "tangential_accel,{:.6}", k.tangential_accel)?;
            writeln!(out, "final_angular_velocity,{:.6}", m.final_angular_velocity)?;
            writeln!(out, "final_linear_velocity,{:.6}", k.linear_velocity)?;
            writeln!(out, "final_angle,{:.6}", m.final_angle)?;
            writeln!(out, "duration,{:.6}", m.duration)?;
            writeln!(out, "unwound_distance,{:.6}", m.unwound_distance)?;
            writeln!(out, "applied_torque,{:.6}", m.applied_torque)?;
            writeln!(out, "rotational_energy,{:.6}", k.energy.rotational)?;
            writeln!(out, "translational_energy,{:.6}", k.energy.translational)?;
            writeln!(out, "total_energy,{:.6}", k.energy.total)?;
        }

        OutputFormat::Table => {
            writeln!(out, "╔════════════════════════════════════════╗")?;
            writeln!(out, "║         SIMULATION RESULTS             ║")?;
            writeln!(out, "╠════════════════════════════════════════╣")?;
            writeln!(out, "║ Shape:             {:>12}        ║", evaluation.cylinder.shape.to_string())?;
            writeln!(out, "║ Inertia:           {:>8.4} kg·m²      ║", evaluation.inertia.value())?;
            writeln!(out, "║ Applied Torque:    {:>8.3} N·m        ║", m.applied_torque)?;
            writeln!(out, "╠════════════════════════════════════════╣")?;
            writeln!(out, "║ Angular Accel:     {:>8.3} rad/s²     ║", m.angular_accel)?;
            writeln!(out, "║ Tangential Accel:  {:>8.3} m/s²       ║", k.tangential_accel)?;
            writeln!(out, "║ Final Ang. Vel.:   {:>8.3} rad/s      ║", m.final_angular_velocity)?;
            writeln!(out, "║ Final Lin. Vel.:   {:>8.3} m/s        ║", k.linear_velocity)?;
            writeln!(out, "║ Angle Turned:      {:>8.3} rad        ║", m.final_angle)?;
            writeln!(out, "║ Duration:          {:>8.3} s          ║", m.duration)?;
            writeln!(out, "║ Cord Unwound:      {:>8.3} m          ║", m.unwound_distance)?;
            writeln!(out, "╠════════════════════════════════════════╣")?;
            writeln!(out, "║ Rotational KE:     {:>8.3} J          ║", k.energy.rotational)?;
            writeln!(out, "║ Translational KE:  {:>8.3} J          ║", k.energy.translational)?;
            writeln!(out, "║ Total KE:          {:>8.3} J          ║", k.energy.total)?;
            writeln!(out, "╚════════════════════════════════════════╝")?;
        }
    }

    Ok(())
}

fn display_trajectory<W: Write>(
    out: &mut W,
    evaluation: &Evaluation,
    frame_rate: f64,
    every: usize,
    format: OutputFormat,
) -> SimulationResult<()> {
    let trajectory = evaluation.trajectory(frame_rate);
    let series = evaluation.plot_series(frame_rate);
    let rows: Vec<SampleRow> = trajectory
        .iter()
        .enumerate()
        .map(|(i, sample)| SampleRow {
            sample,
            energy: EnergyBreakdown {
                rotational: series.rotational_energy[i],
                translational: series.translational_energy[i],
                total: series.total_energy[i],
            },
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let output = TrajectoryOutput {
                evaluation,
                frame_rate,
                samples: rows,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }

        OutputFormat::Csv => {
            writeln!(out, "frame,time,angle,angular_velocity,linear_velocity,tangential_accel,unwound_length,e_rot,e_trans,e_total")?;
            for r in &rows {
                let s = &r.sample;
                writeln!(
                    out,
                    "{},{:.4},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
                    s.frame, s.time, s.angle, s.angular_velocity, s.linear_velocity,
                    s.tangential_accel, s.unwound_length,
                    r.energy.rotational, r.energy.translational, r.energy.total
                )?;
            }
        }

        OutputFormat::Table => {
            let (peak_omega, peak_velocity, peak_energy) = series.peaks();
            writeln!(out, "Trajectory: {} frames at {} Hz", rows.len(), frame_rate)?;
            writeln!(
                out,
                "Peaks: ω {:.3} rad/s, v {:.3} m/s, E_total {:.3} J",
                peak_omega, peak_velocity, peak_energy
            )?;
            writeln!(out, "┌───────┬──────────┬──────────┬──────────┬──────────┬──────────┬──────────┐")?;
            writeln!(out, "│ Frame │ Time (s) │ θ (rad)  │ ω(rad/s) │ v (m/s)  │ Cord (m) │ E_tot(J) │")?;
            writeln!(out, "├───────┼──────────┼──────────┼──────────┼──────────┼──────────┼──────────┤")?;

            let step = every.max(1);
            for (i, r) in rows.iter().enumerate() {
                if i % step == 0 || i == rows.len() - 1 {
                    let s = &r.sample;
                    writeln!(
                        out,
                        "│ {:>5} │ {:>8.3} │ {:>8.3} │ {:>8.3} │ {:>8.3} │ {:>8.3} │ {:>8.3} │",
                        s.frame, s.time, s.angle, s.angular_velocity, s.linear_velocity,
                        s.unwound_length, r.energy.total
                    )?;
                }
            }
            writeln!(out, "└───────┴──────────┴──────────┴──────────┴──────────┴──────────┴──────────┘")?;
        }
    }

    Ok(())
}

/// Writes one status line per frame in place of drawing the animation
struct TextRenderer<W: Write> {
    out: W,
    series: PlotSeries,
    every: usize,
    last_frame: usize,
}

impl<W: Write> FrameSink for TextRenderer<W> {
    type Error = io::Error;

    fn render_frame(&mut self, state: &ReplayState, frame: &ReplayFrame) -> io::Result<()> {
        let index = match state {
            ReplayState::Playing(index) => *index,
            ReplayState::NotStarted | ReplayState::Finished => return Ok(()),
        };
        if index % self.every != 0 && index != self.last_frame {
            return Ok(());
        }

        let s = &frame.sample;
        let cursor = self.series.cursor(index).unwrap_or(s.time);
        let energy = self.series.total_energy.get(index).copied().unwrap_or(0.0);
        write!(
            self.out,
            "[{:>4}] Time: {:.2} s | Lin. Vel.: {:.2} m/s | Tang. Accel.: {:.2} m/s² | marker ({:+.3}, {:+.3}) | cord {:.3} m | E_total {:.3} J @ {:.2} s",
            index,
            s.time,
            s.linear_velocity,
            s.tangential_accel,
            frame.marker_tip.x,
            frame.marker_tip.y,
            frame.cord_length(),
            energy,
            cursor,
        )?;
        match frame.hole_radius {
            Some(hole) => writeln!(self.out, " | hole {:.3} m", hole)?,
            None => writeln!(self.out)?,
        }

        if index == self.last_frame {
            self.out.flush()?;
        }
        Ok(())
    }
}
