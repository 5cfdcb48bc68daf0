use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use chrono::Local;
use clap::Parser;
use projectile_sim::chart::{default_chart_path, render_chart};
use projectile_sim::cli::LaunchArgs;
use projectile_sim::config::LaunchInputs;
use projectile_sim::report::{Report, ReportFormat};
use projectile_sim::{Error, logging, simulation};

#[derive(Parser)]
#[command(name = "projectile_sim", version)]
#[command(about = "Flight time and sampled path of a projectile without air resistance")]
struct Cli {
    #[command(flatten)]
    launch: LaunchArgs,

    /// Prompt for the launch values on stdin
    #[arg(short, long)]
    interactive: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = ReportFormat::Table)]
    format: ReportFormat,

    /// List every frame in table output
    #[arg(long)]
    full: bool,

    /// Write a chart (.png or .svg); without a path a timestamped PNG is created
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    plot: Option<Option<PathBuf>>,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn read_f64(input: &mut impl BufRead, prompt: &str, default: f64) -> anyhow::Result<f64> {
    loop {
        print!("{prompt} [{default}]: ");
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let bytes = input.read_line(&mut line).context("could not read input")?;
        if bytes == 0 {
            bail!("input ended unexpectedly (EOF)");
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn prompt_launch_inputs(defaults: LaunchInputs) -> anyhow::Result<LaunchInputs> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    Ok(LaunchInputs {
        x0_m: read_f64(&mut input, "x0 (m)", defaults.x0_m)?,
        y0_m: read_f64(&mut input, "y0 (m)", defaults.y0_m)?,
        speed_mps: read_f64(&mut input, "Initial velocity (m/s)", defaults.speed_mps)?,
        angle_deg: read_f64(&mut input, "Angle (degrees)", defaults.angle_deg)?,
        gravity_mps2: read_f64(&mut input, "Gravity (m/s^2)", defaults.gravity_mps2)?,
    })
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = cli.launch.resolve()?;
    if cli.interactive {
        config.launch = prompt_launch_inputs(config.launch)?;
        println!();
    }

    let trajectory = match simulation::run(&config) {
        Ok(trajectory) => trajectory,
        Err(err) if err.is_degenerate() => {
            return Err(Error::from(err)).context("no valid trajectory for these inputs");
        }
        Err(err) => return Err(err.into()),
    };

    let now = Local::now();
    let report = Report::new(config.launch, &trajectory, now);
    print!("{}", report.render(cli.format, cli.full)?);

    if let Some(plot) = cli.plot {
        let path = plot.unwrap_or_else(|| default_chart_path(now));
        render_chart(&trajectory, &path)
            .with_context(|| format!("failed to write chart to {}", path.display()))?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::read_f64;

    #[test]
    fn reprompts_until_a_number_is_entered() {
        let mut bad_then_blank = "abc\n\n".as_bytes();
        let mut bad_then_number = "nope\n12.5\n".as_bytes();

        assert_eq!(read_f64(&mut bad_then_blank, "x", 3.0).unwrap(), 3.0);
        assert_eq!(read_f64(&mut bad_then_number, "x", 3.0).unwrap(), 12.5);
    }

    #[test]
    fn eof_is_an_error() {
        let mut input = "".as_bytes();
        assert!(read_f64(&mut input, "x", 0.0).is_err());
    }
}
