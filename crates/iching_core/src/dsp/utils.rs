use crate::types::GATE_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeState {
    #[default]
    Low,
    High,
}

/// Single-threshold rising edge detector.
///
/// Starts low, so an input that is already high on the very first sample
/// reports an edge.
#[derive(Debug, Clone, Copy)]
pub struct EdgeDetector {
    state: EdgeState,
    threshold: f32,
}

impl EdgeDetector {
    pub fn new(threshold: f32) -> Self {
        Self {
            state: EdgeState::Low,
            threshold,
        }
    }

    /// Latch `input` and return true if it went from low to high.
    #[inline]
    pub fn process(&mut self, input: f32) -> bool {
        let high = input > self.threshold;
        let rising = high && self.state == EdgeState::Low;
        self.state = if high { EdgeState::High } else { EdgeState::Low };
        rising
    }

    pub fn is_high(&self) -> bool {
        self.state == EdgeState::High
    }

    pub fn state(&self) -> EdgeState {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = EdgeState::Low;
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new(GATE_THRESHOLD)
    }
}
