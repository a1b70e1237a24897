//! Frame orchestrator.
//!
//! [`IChingRandom`] owns one instance of every component and runs them once
//! per sample: clock edge, divider, hexagram draw, quantized outputs, integer
//! sequence and noise.

use tracing::debug;

use crate::dsp::intseq::IntSeqSettings;
use crate::dsp::noise::NoiseKind;
use crate::dsp::{
    BlueResponse, ClockDivider, EdgeDetector, Entropy, EntropySource, Hexagram,
    HexagramScheduler, IntSeqPlayer, NoiseBank, Quantizer, scale,
};
use crate::host::{self, Routing};
use crate::params::{IChingParams, ParamId};
use crate::types::{
    DEFAULT_SAMPLE_RATE, GATE_THRESHOLD, IChingError, NOISE_AMPLITUDE, Result,
    SEMITONES_PER_OCTAVE, gate_voltage,
};

/// Hexagram indices at or above this give a raw CV of 0.
const CV_INDEX_LIMIT: i32 = 60;
/// Semitones per step of the raw hexagram CV.
const CV_STEP: i32 = 5;

/// One sample of every output.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    pub cv: f32,
    pub quant: f32,
    pub intseq: f32,
    pub noise: f32,
    pub clock_thru: f32,
    pub clock_div: f32,
}

impl Frame {
    pub fn to_array(self) -> [f32; 6] {
        [
            self.cv,
            self.quant,
            self.intseq,
            self.noise,
            self.clock_thru,
            self.clock_div,
        ]
    }
}

#[derive(Debug)]
pub struct IChingRandom {
    params: IChingParams,
    sample_rate: f32,
    entropy: EntropySource,
    scheduler: HexagramScheduler,
    clock: EdgeDetector,
    divider: ClockDivider,
    intseq: IntSeqPlayer,
    intseq_settings: IntSeqSettings,
    quantizer: Quantizer,
    noise: NoiseBank,
    noise_kind: NoiseKind,
}

impl IChingRandom {
    pub fn new(params: IChingParams, sample_rate: f32) -> Self {
        Self::with_entropy(params, sample_rate, EntropySource::default())
    }

    pub fn with_seed(params: IChingParams, sample_rate: f32, seed: u32) -> Self {
        Self::with_entropy(params, sample_rate, EntropySource::seeded(seed))
    }

    pub fn with_entropy(params: IChingParams, sample_rate: f32, mut entropy: EntropySource) -> Self {
        scale::warm();
        let scheduler = HexagramScheduler::new(&mut entropy);
        let sample_rate = if sample_rate > 0.0 {
            sample_rate
        } else {
            DEFAULT_SAMPLE_RATE
        };
        debug!(
            sample_rate,
            scale = params.scale,
            int_seq = params.int_seq,
            noise_type = params.noise_type,
            shared = matches!(entropy, EntropySource::Shared(_)),
            "constructed I Ching generator"
        );
        Self {
            params,
            sample_rate,
            entropy,
            scheduler,
            clock: EdgeDetector::default(),
            divider: ClockDivider::default(),
            intseq: IntSeqPlayer::default(),
            intseq_settings: params.int_seq(),
            quantizer: Quantizer::new(params.quantizer()),
            noise: NoiseBank::default(),
            noise_kind: params.noise_kind(),
        }
    }

    /// Host-style construction: validates the params and the scratch region
    /// before building anything.
    pub fn construct(
        params: IChingParams,
        sample_rate: f32,
        scratch_bytes: usize,
        entropy: EntropySource,
    ) -> Result<Self> {
        if let Err(err) = host::check_scratch(scratch_bytes).and_then(|_| params.validate()) {
            debug!(%err, "refusing to construct generator");
            return Err(err);
        }
        Ok(Self::with_entropy(params, sample_rate, entropy))
    }

    pub fn params(&self) -> &IChingParams {
        &self.params
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        if sample_rate > 0.0 {
            self.sample_rate = sample_rate;
        }
    }

    pub fn set_blue_response(&mut self, response: BlueResponse) {
        self.noise.set_blue_response(response);
    }

    /// Change one parameter by table index. The value is clamped into range;
    /// the stored value is returned.
    pub fn set_parameter(&mut self, index: usize, value: i32) -> Result<i32> {
        let id = ParamId::from_index(index)
            .ok_or_else(|| IChingError::UnknownParameter(format!("#{}", index)))?;
        let stored = self.params.set(id, value);
        debug!(param = id.spec().name, requested = value, stored, "parameter changed");
        self.apply_params();
        Ok(stored)
    }

    /// Replace every parameter from JSON. Missing fields take defaults; the
    /// current params are untouched on error.
    pub fn try_update_params(&mut self, value: serde_json::Value) -> Result<()> {
        let params = IChingParams::from_json(value)?;
        self.set_params(params)
    }

    pub fn set_params(&mut self, params: IChingParams) -> Result<()> {
        params.validate()?;
        self.params = params;
        self.apply_params();
        debug!(?params, "params replaced");
        Ok(())
    }

    fn apply_params(&mut self) {
        self.quantizer.configure(self.params.quantizer());
        self.intseq_settings = self.params.int_seq();
        self.noise_kind = self.params.noise_kind();
    }

    /// Current hexagram. Index 0 until the first clock edge.
    pub fn hexagram(&self) -> Hexagram {
        self.scheduler.current()
    }

    pub fn scheduler(&self) -> &HexagramScheduler {
        &self.scheduler
    }

    pub fn divider(&self) -> &ClockDivider {
        &self.divider
    }

    pub fn noise(&self) -> &NoiseBank {
        &self.noise
    }

    pub fn intseq_position(&self) -> u32 {
        self.intseq.position()
    }

    /// Run one sample.
    ///
    /// The integer sequence output reflects the position before this
    /// sample's trigger edge is applied.
    #[inline]
    pub fn process_sample(&mut self, clock: f32, trig: f32) -> Frame {
        let mut frame = Frame {
            clock_thru: gate_voltage(clock > GATE_THRESHOLD),
            ..Frame::default()
        };

        if self.clock.process(clock) {
            self.divider.on_edge(self.params.clock_division());
            self.scheduler.draw(&mut self.entropy);
        }
        frame.clock_div = self.divider.output();

        let index = i32::from(self.scheduler.current().index());
        let semitones = if index < CV_INDEX_LIMIT {
            (index % SEMITONES_PER_OCTAVE) * CV_STEP
        } else {
            0
        };
        frame.cv = semitones as f32 / SEMITONES_PER_OCTAVE as f32;
        frame.quant = self
            .quantizer
            .process(index as f32 / SEMITONES_PER_OCTAVE as f32);

        frame.intseq = self
            .quantizer
            .process(self.intseq.value(&self.intseq_settings));
        self.intseq.process_trigger(trig, &self.intseq_settings);

        let white = self.entropy.white();
        frame.noise = self
            .noise
            .process(self.noise_kind, white, self.sample_rate)
            * NOISE_AMPLITUDE;

        frame
    }

    /// Host block callback.
    ///
    /// `buses` holds every bus back to back, `num_frames` samples each. Both
    /// inputs of a sample are read before any of its outputs are written.
    /// Unrouted or out-of-range busses read as 0.0 and are never written.
    pub fn step(&mut self, buses: &mut [f32], num_frames: usize) {
        profiling::scope!("iching_step");
        let routing = Routing::resolve(&self.params, num_frames, buses.len());
        let read = |buses: &[f32], range: &Option<std::ops::Range<usize>>, i: usize| {
            range.as_ref().map_or(0.0, |r| buses[r.start + i])
        };

        for i in 0..num_frames {
            let clock = read(buses, &routing.clock_in, i);
            let trig = read(buses, &routing.trig_in, i);
            let frame = self.process_sample(clock, trig);
            for (range, value) in routing.outputs().into_iter().zip(frame.to_array()) {
                if let Some(range) = range {
                    buses[range.start + i] = value;
                }
            }
        }
    }

    /// Offline helper: run the generator over separate input slices and
    /// collect every frame.
    pub fn render(&mut self, clock: &[f32], trig: &[f32]) -> Vec<Frame> {
        profiling::scope!("iching_render");
        clock
            .iter()
            .zip(trig)
            .map(|(&c, &t)| self.process_sample(c, t))
            .collect()
    }
}
