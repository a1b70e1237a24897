use crate::types::gate_voltage;

/// Divides rising clock edges by an integer factor.
///
/// The output goes high on every `division`-th edge and low on the others,
/// holding its level between edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockDivider {
    counter: u32,
    high: bool,
}

impl ClockDivider {
    /// Register one rising edge. Returns the new output level.
    #[inline]
    pub fn on_edge(&mut self, division: u32) -> bool {
        self.counter += 1;
        if self.counter >= division.max(1) {
            self.high = true;
            self.counter = 0;
        } else {
            self.high = false;
        }
        self.high
    }

    pub fn is_high(&self) -> bool {
        self.high
    }

    pub fn output(&self) -> f32 {
        gate_voltage(self.high)
    }

    /// Edges seen since the output last went high.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nth_edge_is_high() {
        let mut div = ClockDivider::default();
        let levels: Vec<bool> = (0..12).map(|_| div.on_edge(4)).collect();
        let highs: Vec<usize> = levels
            .iter()
            .enumerate()
            .filter(|(_, h)| **h)
            .map(|(i, _)| i + 1)
            .collect();
        assert_eq!(highs, vec![4, 8, 12]);
    }

    #[test]
    fn high_count_is_floor_of_edges_over_division() {
        for division in 2..=9u32 {
            let mut div = ClockDivider::default();
            let edges = 100;
            let highs = (0..edges).filter(|_| div.on_edge(division)).count();
            assert_eq!(highs as u32, edges / division);
        }
    }

    #[test]
    fn level_holds_between_edges() {
        let mut div = ClockDivider::default();
        div.on_edge(2);
        assert!(!div.is_high());
        div.on_edge(2);
        assert!(div.is_high());
        assert_eq!(div.output(), 5.0);
        assert_eq!(div.counter(), 0);
    }

    #[test]
    fn zero_division_acts_as_one() {
        let mut div = ClockDivider::default();
        assert!(div.on_edge(0));
        assert!(div.on_edge(0));
    }

    #[test]
    fn reset_clears_counter() {
        let mut div = ClockDivider::default();
        div.on_edge(3);
        div.on_edge(3);
        div.reset();
        assert_eq!(div.counter(), 0);
        assert!(!div.on_edge(3));
    }
}
