//! Coloured noise filters fed from the generator's white noise source.

use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const NOISE_NAMES: [&str; 4] = ["White", "Pink", "Brown", "Blue"];

#[derive(Clone, Copy, Deserialize, Serialize, JsonSchema, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum NoiseKind {
    #[default]
    White,
    Pink,
    Brown,
    Blue,
}

impl NoiseKind {
    pub const ALL: [NoiseKind; 4] = [
        NoiseKind::White,
        NoiseKind::Pink,
        NoiseKind::Brown,
        NoiseKind::Blue,
    ];

    /// Unknown selector values play white noise.
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => NoiseKind::Pink,
            2 => NoiseKind::Brown,
            3 => NoiseKind::Blue,
            _ => NoiseKind::White,
        }
    }

    pub fn index(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        NOISE_NAMES[self as usize]
    }
}

/// Three-pole Paul Kellet pink filter.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PinkFilter {
    b0: f32,
    b1: f32,
    b2: f32,
}

impl PinkFilter {
    #[inline]
    pub fn process(&mut self, white: f32) -> f32 {
        self.b0 = 0.99886 * self.b0 + 0.0555179 * white;
        self.b1 = 0.99332 * self.b1 + 0.0750759 * white;
        self.b2 = 0.96900 * self.b2 + 0.1538520 * white;
        0.5362 * (self.b0 + self.b1 + self.b2) + 0.1 * white
    }

    pub fn poles(&self) -> [f32; 3] {
        [self.b0, self.b1, self.b2]
    }
}

const BROWN_INTEGRATION: f32 = 0.05;
const BROWN_DAMPING: f32 = 0.0005;

/// Leaky integrator. The damping term bleeds off DC; the output is not clipped.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct BrownFilter {
    level: f32,
}

impl BrownFilter {
    #[inline]
    pub fn process(&mut self, white: f32) -> f32 {
        self.level += BROWN_INTEGRATION * white;
        self.level -= BROWN_DAMPING * self.level;
        self.level
    }

    pub fn level(&self) -> f32 {
        self.level
    }
}

const BLUE_CUTOFF_HZ: f32 = 100.0;

/// How the blue noise differentiator responds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum BlueResponse {
    /// Matches the hardware module: the previous input cancels out of the
    /// difference term, leaving `alpha * in`.
    #[default]
    Legacy,
    /// One-pole high-pass `y = alpha * (y[n-1] + x - x[n-1])`.
    HighPass,
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct BlueFilter {
    last_input: f32,
    last_output: f32,
}

impl BlueFilter {
    #[inline]
    pub fn alpha(sample_rate: f32) -> f32 {
        sample_rate / (sample_rate + 2.0 * PI * BLUE_CUTOFF_HZ)
    }

    #[inline]
    pub fn process(&mut self, white: f32, sample_rate: f32, response: BlueResponse) -> f32 {
        let alpha = Self::alpha(sample_rate);
        let out = match response {
            BlueResponse::Legacy => alpha * (self.last_input + white - self.last_input),
            BlueResponse::HighPass => alpha * (self.last_output + white - self.last_input),
        };
        self.last_input = white;
        self.last_output = out;
        out
    }

    pub fn last_input(&self) -> f32 {
        self.last_input
    }
}

/// Filter registers for every colour. Each colour only advances its own
/// registers while selected.
#[repr(C)]
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct NoiseState {
    pub pink: PinkFilter,
    pub brown: BrownFilter,
    pub blue: BlueFilter,
}

#[derive(Default, Clone, Debug)]
pub struct NoiseBank {
    state: NoiseState,
    blue_response: BlueResponse,
}

impl NoiseBank {
    pub fn new(blue_response: BlueResponse) -> Self {
        Self {
            state: NoiseState::default(),
            blue_response,
        }
    }

    /// Colour one white sample. Output is unscaled (roughly unit range).
    #[inline]
    pub fn process(&mut self, kind: NoiseKind, white: f32, sample_rate: f32) -> f32 {
        match kind {
            NoiseKind::White => white,
            NoiseKind::Pink => self.state.pink.process(white),
            NoiseKind::Brown => self.state.brown.process(white),
            NoiseKind::Blue => self
                .state
                .blue
                .process(white, sample_rate, self.blue_response),
        }
    }

    pub fn state(&self) -> &NoiseState {
        &self.state
    }

    pub fn blue_response(&self) -> BlueResponse {
        self.blue_response
    }

    pub fn set_blue_response(&mut self, response: BlueResponse) {
        self.blue_response = response;
    }

    pub fn reset(&mut self) {
        self.state = NoiseState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::random::{Entropy, Xorshift32};

    const SR: f32 = 48_000.0;

    #[test]
    fn unknown_selector_is_white() {
        assert_eq!(NoiseKind::from_index(7), NoiseKind::White);
        assert_eq!(NoiseKind::from_index(-1), NoiseKind::White);
        assert_eq!(NoiseKind::from_index(3), NoiseKind::Blue);
        assert_eq!(NoiseKind::Brown.name(), "Brown");
    }

    #[test]
    fn white_passes_through() {
        let mut bank = NoiseBank::default();
        assert_eq!(bank.process(NoiseKind::White, 0.25, SR), 0.25);
        assert_eq!(*bank.state(), NoiseState::default());
    }

    #[test]
    fn pink_first_sample_matches_pole_gains() {
        let mut pink = PinkFilter::default();
        let out = pink.process(1.0);
        let expected = 0.5362 * (0.0555179 + 0.0750759 + 0.1538520) + 0.1;
        assert!((out - expected).abs() < 1e-6, "got {out}, expected {expected}");
    }

    #[test]
    fn pink_decays_without_input() {
        let mut pink = PinkFilter::default();
        pink.process(1.0);
        let mut last = f32::MAX;
        for _ in 0..1000 {
            let out = pink.process(0.0);
            assert!(out <= last);
            last = out;
        }
        assert!(last > 0.0);
    }

    #[test]
    fn brown_integrates_with_damping() {
        let mut brown = BrownFilter::default();
        let out = brown.process(1.0);
        assert!((out - 0.05 * (1.0 - 0.0005)).abs() < 1e-7);
    }

    #[test]
    fn brown_is_not_clipped() {
        let mut brown = BrownFilter::default();
        let mut out = 0.0;
        for _ in 0..20_000 {
            out = brown.process(1.0);
        }
        // Steady state of the leaky integrator sits well above 1.0.
        assert!(out > 1.0, "brown noise should run unclipped, got {out}");
    }

    #[test]
    fn brown_stays_bounded_on_white_input() {
        let mut rng = Xorshift32::default();
        let mut brown = BrownFilter::default();
        for _ in 0..200_000 {
            let out = brown.process(rng.white());
            assert!(out.abs() < 100.0);
        }
    }

    #[test]
    fn blue_legacy_collapses_to_scaled_input() {
        let mut blue = BlueFilter::default();
        let alpha = BlueFilter::alpha(SR);
        for x in [0.5, -0.25, 0.75, 0.75] {
            let out = blue.process(x, SR, BlueResponse::Legacy);
            assert!((out - alpha * x).abs() < 1e-6);
        }
        assert_eq!(blue.last_input(), 0.75);
    }

    #[test]
    fn blue_high_pass_blocks_dc() {
        let mut blue = BlueFilter::default();
        let mut out = 1.0;
        for _ in 0..48_000 {
            out = blue.process(1.0, SR, BlueResponse::HighPass);
        }
        assert!(out.abs() < 1e-3, "DC should decay through the high-pass, got {out}");
    }

    #[test]
    fn alpha_tracks_sample_rate() {
        let low = BlueFilter::alpha(8_000.0);
        let high = BlueFilter::alpha(96_000.0);
        assert!(low < high);
        assert!(high < 1.0);
    }

    #[test]
    fn selected_colour_only_touches_its_registers() {
        let mut bank = NoiseBank::default();
        bank.process(NoiseKind::Pink, 0.5, SR);
        assert_eq!(bank.state().brown, BrownFilter::default());
        assert_eq!(bank.state().blue, BlueFilter::default());
        assert_ne!(bank.state().pink, PinkFilter::default());
        bank.reset();
        assert_eq!(*bank.state(), NoiseState::default());
    }
}
