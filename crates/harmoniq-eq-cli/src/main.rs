use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use harmoniq_eq::{Coefficients, Cookbook, Filter, FilterKind, FilterParams};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

mod raw;
mod render;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => execute_render(args),
        Commands::Coeffs(args) => execute_coeffs(args),
    }
}

#[derive(Parser)]
#[command(author, version, about = "Cookbook biquad equalizer for raw PCM files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter an interleaved little-endian f64 raw file.
    Render(RenderArgs),
    /// Print the raw coefficients of a filter as JSON.
    Coeffs(FilterArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Raw input file (interleaved little-endian f64 samples).
    #[arg(long)]
    input: PathBuf,
    /// Output path for the filtered raw file.
    #[arg(long)]
    output: PathBuf,
    /// Number of interleaved channels; each gets its own filter.
    #[arg(long, default_value_t = 2)]
    channels: usize,
    #[command(flatten)]
    filter: FilterArgs,
}

#[derive(Args)]
struct FilterArgs {
    /// JSON preset describing the filter; flags below are ignored when set.
    #[arg(long)]
    preset: Option<PathBuf>,
    /// Filter kind, e.g. low-pass, band-pass, peaking.
    #[arg(long, required_unless_present = "preset")]
    kind: Option<FilterKind>,
    /// Sample rate in Hz.
    #[arg(long, required_unless_present = "preset")]
    sample_rate: Option<f64>,
    /// Cutoff or centre frequency in Hz.
    #[arg(long, required_unless_present = "preset")]
    frequency: Option<f64>,
    /// Q for low-pass, high-pass, all-pass and the shelves.
    #[arg(long)]
    q: Option<f64>,
    /// Bandwidth in octaves for band-pass, band-reject and peaking.
    #[arg(long)]
    width: Option<f64>,
    /// Gain in dB for the shelves and peaking.
    #[arg(long, allow_negative_numbers = true)]
    gain: Option<f64>,
    /// Override the value of pi used for the angular frequency.
    #[arg(long)]
    pi: Option<f64>,
    /// Reject out-of-range parameters instead of producing non-finite coefficients.
    #[arg(long)]
    checked: bool,
}

/// On-disk preset: a filter description plus an optional pi override.
#[derive(Debug, Deserialize)]
struct Preset {
    #[serde(default)]
    pi: Option<f64>,
    filter: FilterParams,
}

impl FilterArgs {
    fn resolve(&self) -> Result<(Cookbook, FilterParams)> {
        let mut cookbook = Cookbook::default();
        let params = match &self.preset {
            Some(path) => {
                let data = fs::read_to_string(path)
                    .with_context(|| format!("failed to read preset {}", path.display()))?;
                let preset: Preset = serde_json::from_str(&data)
                    .with_context(|| format!("{} is not a valid filter preset", path.display()))?;
                if let Some(pi) = preset.pi {
                    cookbook.set_pi(pi);
                }
                preset.filter
            }
            None => {
                let (Some(kind), Some(sample_rate), Some(frequency)) =
                    (self.kind, self.sample_rate, self.frequency)
                else {
                    bail!("--kind, --sample-rate and --frequency are required without --preset");
                };
                FilterParams::from_parts(
                    kind,
                    sample_rate,
                    frequency,
                    self.q,
                    self.width,
                    self.gain,
                )?
            }
        };
        if let Some(pi) = self.pi {
            cookbook.set_pi(pi);
        }
        Ok((cookbook, params))
    }

    fn build(&self) -> Result<(FilterParams, Filter)> {
        let (cookbook, params) = self.resolve()?;
        let filter = if self.checked {
            params.try_build(&cookbook)?
        } else {
            params.build(&cookbook)
        };
        if !cookbook.is_reference() {
            tracing::info!(pi = cookbook.pi(), "using pi override");
        }
        Ok((params, filter))
    }
}

fn execute_render(args: RenderArgs) -> Result<()> {
    if args.channels == 0 {
        bail!("--channels must be at least 1");
    }
    let (params, filter) = args.filter.build()?;

    let data = fs::read(&args.input)
        .with_context(|| format!("failed to read input file {}", args.input.display()))?;
    let mut samples = raw::decode(&data)
        .with_context(|| format!("{} is not a raw f64 file", args.input.display()))?;

    let mut filters = vec![filter; args.channels];
    tracing::debug!(
        kind = %params.kind(),
        channels = args.channels,
        samples = samples.len(),
        "rendering"
    );
    render::filter_interleaved(&mut samples, &mut filters);

    if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
        tracing::warn!(index, "output contains non-finite samples");
    }

    fs::write(&args.output, raw::encode(&samples))
        .with_context(|| format!("failed to write output file {}", args.output.display()))?;
    println!(
        "Filtered {} samples ({} channels, {}) into {}",
        samples.len(),
        args.channels,
        params.kind(),
        args.output.display()
    );
    Ok(())
}

#[derive(Serialize)]
struct CoefficientReport<'a> {
    kind: FilterKind,
    coefficients: &'a Coefficients,
}

fn execute_coeffs(args: FilterArgs) -> Result<()> {
    let (_, filter) = args.build()?;
    let report = CoefficientReport {
        kind: filter.kind(),
        coefficients: filter.coefficients(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
