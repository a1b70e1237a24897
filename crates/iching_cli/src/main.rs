//! iching: offline tool for the I Ching random CV generator
//!
//! Renders the generator to a WAV file and inspects its databases:
//!
//! - `render`: run the generator against synthetic clock/trigger inputs
//! - `params`: show the parameter table or the params JSON Schema
//! - `scales`: list the 133 scales
//! - `sequences`: list the integer sequence tables
//! - `hexagrams`: clock the scheduler and draw each hexagram

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use iching_core::dsp::intseq::{self, NUM_INTSEQ};
use iching_core::dsp::random::DEFAULT_SEED;
use iching_core::dsp::{BlueResponse, EntropySource, HexagramScheduler, scale};
use iching_core::host::{NUM_BUSSES, bus_range};
use iching_core::params::Unit;
use iching_core::{IChingParams, IChingRandom, PARAMETERS};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Output channel names, in WAV channel order.
const CHANNELS: [&str; 6] = ["cv", "quant", "intseq", "noise", "clock_thru", "clock_div"];

/// Offline tool for the I Ching random CV generator
#[derive(Parser)]
#[command(name = "iching")]
#[command(about = "Render and inspect the I Ching random CV generator")]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the six outputs to a 32-bit float WAV file (JSON summary with --format json)
    Render {
        /// Output WAV path
        #[arg(short, long, default_value = "iching.wav")]
        out: PathBuf,

        /// Params JSON file (missing fields take defaults)
        #[arg(short, long)]
        params: Option<PathBuf>,

        /// Length in seconds
        #[arg(long, default_value_t = 10.0)]
        seconds: f32,

        /// Sample rate in Hz
        #[arg(short, long, default_value_t = 48000)]
        sample_rate: u32,

        /// Clock input frequency in Hz
        #[arg(long, default_value_t = 4.0)]
        clock_hz: f32,

        /// Integer sequence trigger frequency in Hz
        #[arg(long, default_value_t = 2.0)]
        trig_hz: f32,

        /// Frames per block callback
        #[arg(long, default_value_t = 128)]
        block: usize,

        /// Seed for the generator
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u32,

        /// Use the one-pole high-pass for blue noise
        #[arg(long)]
        high_pass_blue: bool,
    },

    /// Show the parameter table, or the params JSON Schema with --format json
    Params,

    /// List the scale database
    Scales,

    /// List the integer sequence tables
    Sequences {
        /// Number of leading terms to show
        #[arg(short = 'n', long, default_value_t = 16)]
        terms: usize,
    },

    /// Clock the hexagram scheduler and draw every hexagram
    Hexagrams {
        /// Number of clock edges
        #[arg(short, long, default_value_t = 8)]
        clocks: usize,

        /// Seed for the scheduler
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u32,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_params(path: Option<&Path>) -> Result<IChingParams> {
    let Some(path) = path else {
        return Ok(IChingParams::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read params file {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let params = IChingParams::from_json(value)
        .with_context(|| format!("invalid params in {}", path.display()))?;
    debug!(path = %path.display(), ?params, "loaded params");
    Ok(params)
}

/// Square wave at `hz`, high for the first half of each cycle.
fn square_level(n: u64, hz: f32, sample_rate: u32) -> f32 {
    if hz <= 0.0 {
        return 0.0;
    }
    let period = (sample_rate as f32 / hz).max(2.0) as u64;
    if n % period < period / 2 { 5.0 } else { 0.0 }
}

/// JSON summary printed by `render --format json`.
fn render_summary(
    out: &Path,
    frames: u64,
    sample_rate: u32,
    generator: &IChingRandom,
) -> serde_json::Value {
    serde_json::json!({
        "out": out.display().to_string(),
        "frames": frames,
        "sampleRate": sample_rate,
        "channels": CHANNELS,
        "epochs": generator.scheduler().reshuffles(),
        "lastHexagram": generator.hexagram().index(),
    })
}

#[allow(clippy::too_many_arguments)]
fn cmd_render(
    format: OutputFormat,
    out: &Path,
    params: IChingParams,
    seconds: f32,
    sample_rate: u32,
    clock_hz: f32,
    trig_hz: f32,
    block: usize,
    seed: u32,
    high_pass_blue: bool,
) -> Result<()> {
    if seconds <= 0.0 || sample_rate == 0 {
        bail!("seconds and sample rate must be positive");
    }
    let block = block.max(1);
    let total = (seconds * sample_rate as f32) as u64;

    let mut generator = IChingRandom::with_seed(params, sample_rate as f32, seed);
    if high_pass_blue {
        generator.set_blue_response(BlueResponse::HighPass);
    }

    let spec = hound::WavSpec {
        channels: CHANNELS.len() as u16,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(out, spec)
        .with_context(|| format!("failed to create {}", out.display()))?;

    let mut buses = vec![0.0f32; NUM_BUSSES as usize * block];
    let inputs = [
        (params.clock_in, clock_hz),
        (params.int_seq_trig_in, trig_hz),
    ];
    let outputs = [
        params.cv_out,
        params.quant_out,
        params.int_seq_out,
        params.noise_out,
        params.clock_thru_out,
        params.clock_div_out,
    ];

    info!(
        frames = total,
        sample_rate,
        block,
        seed,
        "rendering to {}",
        out.display()
    );

    let mut n = 0u64;
    while n < total {
        let frames = block.min((total - n) as usize);
        for (bus, hz) in inputs {
            if let Some(range) = bus_range(bus, frames, buses.len()) {
                for (i, sample) in buses[range].iter_mut().enumerate() {
                    *sample = square_level(n + i as u64, hz, sample_rate);
                }
            }
        }
        generator.step(&mut buses, frames);
        for i in 0..frames {
            for bus in outputs {
                let value = bus_range(bus, frames, buses.len()).map_or(0.0, |r| buses[r.start + i]);
                writer.write_sample(value)?;
            }
        }
        n += frames as u64;
    }
    writer.finalize().context("failed to finalize WAV file")?;

    match format {
        OutputFormat::Json => {
            println!("{}", render_summary(out, total, sample_rate, &generator));
        }
        OutputFormat::Table => {
            println!(
                "{} {} frames x {} channels ({}) to {}",
                "Wrote".green(),
                total,
                CHANNELS.len(),
                CHANNELS.join(", "),
                out.display()
            );
            println!(
                "  epochs: {}  last hexagram: {}",
                generator.scheduler().reshuffles(),
                generator.hexagram().index()
            );
        }
    }
    Ok(())
}

fn cmd_params(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let schema = schemars::schema_for!(IChingParams);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        OutputFormat::Table => {
            println!(
                "{:>3} {:16} {:>5} {:>5} {:>7}  {}",
                "#", "Name", "Min", "Max", "Default", "Labels"
            );
            println!("{}", "-".repeat(80));
            for (i, spec) in PARAMETERS.iter().enumerate() {
                let labels = match (spec.unit, spec.enum_strings) {
                    (Unit::Enum, Some(labels)) if labels.len() > 4 => {
                        format!("{}, ... ({} values)", labels[..3].join(", "), labels.len())
                    }
                    (Unit::Enum, Some(labels)) => labels.join(", "),
                    _ => String::new(),
                };
                println!(
                    "{:>3} {:16} {:>5} {:>5} {:>7}  {}",
                    i.to_string().dimmed(),
                    spec.name.cyan(),
                    spec.min,
                    spec.max,
                    spec.default.to_string().yellow(),
                    labels.dimmed()
                );
            }
        }
    }
    Ok(())
}

fn cmd_scales(format: OutputFormat) -> Result<()> {
    for s in scale::scales() {
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string(s)?),
            OutputFormat::Table => {
                let offsets: Vec<String> = s.offsets().iter().map(|o| format!("{}", o)).collect();
                println!(
                    "{:>3} {:24} {:8} {}",
                    s.index().to_string().dimmed(),
                    s.name().cyan(),
                    format!("{:?}", s.kind()).to_lowercase(),
                    offsets.join(" ")
                );
            }
        }
    }
    Ok(())
}

fn cmd_sequences(format: OutputFormat, terms: usize) -> Result<()> {
    let terms = terms.min(intseq::INTSEQ_MAX_LEN);
    for index in 0..NUM_INTSEQ as i32 {
        let (Some(name), Some(table)) = (intseq::sequence_name(index), intseq::table(index)) else {
            continue;
        };
        let head = &table[..terms];
        match format {
            OutputFormat::Json => {
                let obj = serde_json::json!({ "index": index, "name": name, "terms": head });
                println!("{}", obj);
            }
            OutputFormat::Table => {
                let values: Vec<String> = head.iter().map(|v| v.to_string()).collect();
                println!(
                    "{:>2} {:6} {}",
                    index.to_string().dimmed(),
                    name.cyan(),
                    values.join(" ")
                );
            }
        }
    }
    Ok(())
}

fn cmd_hexagrams(format: OutputFormat, clocks: usize, seed: u32) -> Result<()> {
    let mut rng = EntropySource::seeded(seed);
    let mut scheduler = HexagramScheduler::new(&mut rng);
    for clock in 1..=clocks {
        let epoch = scheduler.reshuffles();
        let hexagram = scheduler.draw(&mut rng);
        match format {
            OutputFormat::Json => {
                let obj = serde_json::json!({
                    "clock": clock,
                    "epoch": epoch,
                    "index": hexagram.index(),
                    "lines": hexagram.lines(),
                });
                println!("{}", obj);
            }
            OutputFormat::Table => {
                println!(
                    "{} {}  index {}",
                    "clock".dimmed(),
                    clock,
                    hexagram.index().to_string().yellow()
                );
                println!("{}\n", hexagram.render_text());
                if scheduler.reshuffles() > epoch {
                    println!("{}\n", format!("--- epoch {} reshuffled ---", epoch + 1).magenta());
                }
            }
        }
    }
    debug!(clocks, epochs = scheduler.reshuffles(), "hexagram walk finished");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render {
            out,
            params,
            seconds,
            sample_rate,
            clock_hz,
            trig_hz,
            block,
            seed,
            high_pass_blue,
        } => {
            let params = load_params(params.as_deref())?;
            cmd_render(
                cli.format,
                &out,
                params,
                seconds,
                sample_rate,
                clock_hz,
                trig_hz,
                block,
                seed,
                high_pass_blue,
            )
        }
        Commands::Params => cmd_params(cli.format),
        Commands::Scales => cmd_scales(cli.format),
        Commands::Sequences { terms } => cmd_sequences(cli.format, terms),
        Commands::Hexagrams { clocks, seed } => cmd_hexagrams(cli.format, clocks, seed),
    }
}
