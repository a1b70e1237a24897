//! iching-bench: Benchmark harness for DSP profiling
//!
//! Runs the generator's block callback without any host so native profilers
//! (samply, Instruments, perf) see only the DSP code.
//!
//! Usage:
//!   iching-bench run --frames 1000000 --block 128
//!   iching-bench run --params pendulum.json
//!   iching-bench smoke
//!   samply record ./target/profiling/iching-bench run

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use iching_core::dsp::{Direction, NoiseKind};
use iching_core::host::NUM_BUSSES;
use iching_core::{IChingParams, IChingRandom};
use std::fs;
use std::hint::black_box;
use std::path::{Path, PathBuf};
use std::time::Instant;

const DEFAULT_SAMPLE_RATE: f32 = 48000.0;
const DEFAULT_FRAMES: u64 = 48000 * 10; // 10 seconds at 48kHz

/// Benchmark harness for the I Ching generator
#[derive(Parser)]
#[command(name = "iching-bench")]
#[command(about = "Profile and benchmark the I Ching generator DSP")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the block callback for a number of frames
    Run {
        /// Params JSON file (missing fields take defaults)
        #[arg(short, long)]
        params: Option<PathBuf>,

        /// Number of audio frames to process
        #[arg(short, long, default_value_t = DEFAULT_FRAMES)]
        frames: u64,

        /// Sample rate in Hz
        #[arg(short, long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: f32,

        /// Frames per block callback
        #[arg(short, long, default_value_t = 128)]
        block: usize,

        /// Warmup frames before measurement
        #[arg(short, long, default_value_t = 48000)]
        warmup: u64,
    },

    /// Run briefly with every noise type and direction
    Smoke {
        /// Frames per configuration
        #[arg(short, long, default_value_t = 4800)]
        frames: u64,
    },
}

fn main() -> Result<()> {
    // Initialize Tracy if profile feature is enabled
    #[cfg(feature = "profile")]
    {
        use tracing_subscriber::prelude::*;
        let tracy_layer = tracing_tracy::TracyLayer::default();
        tracing_subscriber::registry().with(tracy_layer).init();
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            params,
            frames,
            sample_rate,
            block,
            warmup,
        } => {
            let params = match params {
                Some(path) => load_params(&path)?,
                None => IChingParams::default(),
            };
            run_benchmark(params, frames, sample_rate, block.max(1), warmup);
        }
        Commands::Smoke { frames } => smoke_test(frames),
    }
    Ok(())
}

fn load_params(path: &Path) -> Result<IChingParams> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read params file {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    IChingParams::from_json(value).with_context(|| format!("invalid params in {}", path.display()))
}

/// Bus buffer with a 100 Hz square clock on the clock bus and a 25 Hz
/// trigger on the trigger bus.
struct Stimulus {
    buses: Vec<f32>,
    block: usize,
    clock_bus: usize,
    trig_bus: usize,
    sample: u64,
    clock_period: u64,
    trig_period: u64,
}

impl Stimulus {
    fn new(params: &IChingParams, block: usize, sample_rate: f32) -> Self {
        Self {
            buses: vec![0.0; NUM_BUSSES as usize * block],
            block,
            clock_bus: params.clock_in.max(1) as usize - 1,
            trig_bus: params.int_seq_trig_in.max(1) as usize - 1,
            sample: 0,
            clock_period: (sample_rate / 100.0).max(2.0) as u64,
            trig_period: (sample_rate / 25.0).max(2.0) as u64,
        }
    }

    /// Fill the input busses for the next block.
    fn fill(&mut self) {
        for i in 0..self.block {
            let n = self.sample + i as u64;
            let clock = if n % self.clock_period < self.clock_period / 2 { 5.0 } else { 0.0 };
            let trig = if n % self.trig_period < self.trig_period / 2 { 5.0 } else { 0.0 };
            self.buses[self.clock_bus * self.block + i] = clock;
            self.buses[self.trig_bus * self.block + i] = trig;
        }
        self.sample += self.block as u64;
    }
}

/// Process `frames` frames in whole blocks. Returns the frames processed.
#[inline(always)]
fn process_frames(generator: &mut IChingRandom, stimulus: &mut Stimulus, frames: u64) -> u64 {
    #[cfg(feature = "profile")]
    let _span = tracing::info_span!("process_frames").entered();

    let blocks = frames.div_ceil(stimulus.block as u64);
    for _ in 0..blocks {
        stimulus.fill();
        generator.step(&mut stimulus.buses, stimulus.block);
        black_box(&stimulus.buses);
    }
    blocks * stimulus.block as u64
}

fn run_benchmark(params: IChingParams, frames: u64, sample_rate: f32, block: usize, warmup: u64) {
    let mut generator = IChingRandom::new(params, sample_rate);
    let mut stimulus = Stimulus::new(&params, block, sample_rate);

    println!(
        "Params: scale={} intSeq={} dir={} noise={} clockDiv={}",
        params.scale,
        params.int_seq,
        params.direction().name(),
        params.noise_kind().name(),
        params.clock_div
    );
    println!(
        "\nRunning benchmark: {} frames ({:.2}s at {}Hz)",
        frames,
        frames as f64 / sample_rate as f64,
        sample_rate
    );
    println!("  Warmup: {} frames", warmup);
    println!("  Block:  {} frames", block);

    print!("Warming up...");
    process_frames(&mut generator, &mut stimulus, warmup);
    println!(" done");

    print!("Benchmarking...");
    let start = Instant::now();
    let processed = process_frames(&mut generator, &mut stimulus, frames);
    let elapsed = start.elapsed();
    println!(" done\n");

    let total_ns = elapsed.as_nanos() as f64;
    let ns_per_frame = total_ns / processed.max(1) as f64;
    let frames_per_sec = 1_000_000_000.0 / ns_per_frame;
    let realtime_budget_ns = 1_000_000_000.0 / sample_rate as f64;
    let budget_usage = (ns_per_frame / realtime_budget_ns) * 100.0;

    println!("Results:");
    println!("  Total time:     {:?}", elapsed);
    println!("  Frames:         {}", processed);
    println!("  ns/frame:       {:.2}", ns_per_frame);
    println!("  frames/sec:     {:.0}", frames_per_sec);
    println!(
        "  Real-time budget: {:.2} ns/frame @ {}Hz",
        realtime_budget_ns, sample_rate
    );
    println!("  Budget usage:   {:.2}%", budget_usage);
    println!("  Epochs:         {}", generator.scheduler().reshuffles());

    if budget_usage > 100.0 {
        println!("\n  WARNING: Exceeds real-time budget!");
    } else {
        println!(
            "\n  Within real-time budget ({:.1}x headroom)",
            100.0 / budget_usage
        );
    }
}

fn smoke_test(frames: u64) {
    println!("Running smoke test with {} frames per configuration\n", frames);

    for kind in NoiseKind::ALL {
        for direction in [Direction::Loop, Direction::Pendulum] {
            let params = IChingParams {
                noise_type: kind.index(),
                int_seq_dir: direction.index(),
                ..IChingParams::default()
            };
            print!("Testing {:>5} / {:<8}... ", kind.name(), direction.name());

            let mut generator = IChingRandom::new(params, DEFAULT_SAMPLE_RATE);
            let mut stimulus = Stimulus::new(&params, 128, DEFAULT_SAMPLE_RATE);
            let start = Instant::now();
            let processed = process_frames(&mut generator, &mut stimulus, frames);
            let elapsed = start.elapsed();

            let finite = stimulus.buses.iter().all(|v| v.is_finite());
            let ns_per_frame = elapsed.as_nanos() as f64 / processed.max(1) as f64;
            if finite {
                println!("OK ({:.2} ns/frame)", ns_per_frame);
            } else {
                println!("FAILED: non-finite output");
            }
        }
    }
}
