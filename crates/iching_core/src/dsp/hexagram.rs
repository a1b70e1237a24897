//! Hexagram scheduler: a shuffled deck of the 64 six-line patterns.
//!
//! Every epoch of 64 draws visits each hexagram exactly once. When the deck
//! runs out it is reshuffled with a Fisher-Yates pass and dealing starts over.

use std::fmt;

use super::random::Entropy;

pub const NUM_HEXAGRAMS: usize = 64;
pub const NUM_LINES: usize = 6;

const YANG_LINE: &str = "━━━━━━━━━";
const YIN_LINE: &str = "━━━   ━━━";

/// Six binary lines packed into the low bits of a byte; bit 0 is the bottom
/// line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hexagram(u8);

impl Hexagram {
    pub fn from_index(index: u8) -> Self {
        Hexagram(index & 0x3F)
    }

    pub fn from_lines(lines: [bool; NUM_LINES]) -> Self {
        let index = lines
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, &line)| acc | ((line as u8) << i));
        Hexagram(index)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Line `i`, counted from the bottom. Solid (yang) lines are `true`.
    pub fn line(self, i: usize) -> bool {
        i < NUM_LINES && (self.0 >> i) & 1 == 1
    }

    pub fn lines(self) -> [bool; NUM_LINES] {
        std::array::from_fn(|i| self.line(i))
    }

    /// Six-row diagram, top line first, solid for yang and broken for yin.
    pub fn render_text(self) -> String {
        (0..NUM_LINES)
            .rev()
            .map(|i| if self.line(i) { YANG_LINE } else { YIN_LINE })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Hexagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text())
    }
}

#[derive(Clone, Debug)]
pub struct HexagramScheduler {
    order: [u8; NUM_HEXAGRAMS],
    cursor: usize,
    current: Hexagram,
    reshuffles: u64,
}

impl HexagramScheduler {
    /// Build a scheduler whose first epoch is already shuffled.
    pub fn new<R: Entropy + ?Sized>(rng: &mut R) -> Self {
        let mut scheduler = Self {
            order: identity(),
            cursor: 0,
            current: Hexagram::default(),
            reshuffles: 0,
        };
        scheduler.shuffle(rng);
        scheduler
    }

    /// Deal the next hexagram, reshuffling once the epoch is exhausted.
    pub fn draw<R: Entropy + ?Sized>(&mut self, rng: &mut R) -> Hexagram {
        self.current = Hexagram::from_index(self.order[self.cursor]);
        self.cursor += 1;
        if self.cursor >= NUM_HEXAGRAMS {
            self.shuffle(rng);
            self.reshuffles += 1;
            tracing::trace!(epoch = self.reshuffles, "hexagram order reshuffled");
        }
        self.current
    }

    /// Reset to identity order, then Fisher-Yates from the top down with a
    /// modulo-reduced draw for each slot.
    fn shuffle<R: Entropy + ?Sized>(&mut self, rng: &mut R) {
        self.order = identity();
        for i in (1..NUM_HEXAGRAMS).rev() {
            let j = rng.below(i as u32 + 1) as usize;
            self.order.swap(i, j);
        }
        self.cursor = 0;
    }

    pub fn order(&self) -> &[u8; NUM_HEXAGRAMS] {
        &self.order
    }

    /// Position of the next hexagram to deal within the current order.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Hexagram {
        self.current
    }

    /// Reshuffles triggered by draws; the construction-time shuffle is not
    /// counted.
    pub fn reshuffles(&self) -> u64 {
        self.reshuffles
    }
}

fn identity() -> [u8; NUM_HEXAGRAMS] {
    std::array::from_fn(|i| i as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::random::Xorshift32;
    use std::collections::HashSet;

    fn is_permutation(values: &[u8]) -> bool {
        let set: HashSet<u8> = values.iter().copied().collect();
        values.len() == NUM_HEXAGRAMS && set.len() == NUM_HEXAGRAMS && set.iter().all(|&v| v < 64)
    }

    #[test]
    fn lines_follow_bits() {
        let h = Hexagram::from_index(0b000101);
        assert_eq!(h.lines(), [true, false, true, false, false, false]);
        assert_eq!(Hexagram::from_lines(h.lines()), h);
        assert!(!h.line(6));
    }

    #[test]
    fn index_is_masked_to_six_bits() {
        assert_eq!(Hexagram::from_index(0xFF).index(), 63);
    }

    #[test]
    fn render_draws_top_line_first() {
        let h = Hexagram::from_index(0b100000);
        let text = h.render_text();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), NUM_LINES);
        assert_eq!(rows[0], YANG_LINE);
        assert!(rows[1..].iter().all(|&r| r == YIN_LINE));
    }

    #[test]
    fn first_epoch_is_a_permutation() {
        let mut rng = Xorshift32::default();
        let mut scheduler = HexagramScheduler::new(&mut rng);
        assert!(is_permutation(scheduler.order()));
        assert_ne!(scheduler.order(), &identity(), "construction should shuffle");

        let drawn: Vec<u8> = (0..64).map(|_| scheduler.draw(&mut rng).index()).collect();
        assert!(is_permutation(&drawn));
    }

    #[test]
    fn every_epoch_is_a_permutation() {
        let mut rng = Xorshift32::new(99);
        let mut scheduler = HexagramScheduler::new(&mut rng);
        for epoch in 0..20 {
            let drawn: Vec<u8> = (0..64).map(|_| scheduler.draw(&mut rng).index()).collect();
            assert!(is_permutation(&drawn), "epoch {epoch} repeated a hexagram");
        }
    }

    #[test]
    fn reshuffle_happens_on_64th_draw() {
        let mut rng = Xorshift32::default();
        let mut scheduler = HexagramScheduler::new(&mut rng);
        for i in 1..64 {
            scheduler.draw(&mut rng);
            assert_eq!(scheduler.cursor(), i);
            assert_eq!(scheduler.reshuffles(), 0);
        }
        scheduler.draw(&mut rng);
        assert_eq!(scheduler.cursor(), 0);
        assert_eq!(scheduler.reshuffles(), 1);
    }

    #[test]
    fn draw_reports_current() {
        let mut rng = Xorshift32::default();
        let mut scheduler = HexagramScheduler::new(&mut rng);
        let expected = scheduler.order()[0];
        let h = scheduler.draw(&mut rng);
        assert_eq!(h.index(), expected);
        assert_eq!(scheduler.current(), h);
    }

    #[test]
    fn same_seed_same_order() {
        let mut a_rng = Xorshift32::new(1234);
        let mut b_rng = Xorshift32::new(1234);
        let a = HexagramScheduler::new(&mut a_rng);
        let b = HexagramScheduler::new(&mut b_rng);
        assert_eq!(a.order(), b.order());
    }
}
