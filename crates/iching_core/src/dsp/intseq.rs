//! Integer sequence player.
//!
//! Walks one of ten fixed 128-term tables, either looping forward or sweeping
//! back and forth, and reduces the term to a pitch class for the quantizer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::intseq_tables::{INTSEQ_NAMES, INTSEQ_TABLES};
use super::utils::EdgeDetector;
use crate::types::SEMITONES_PER_OCTAVE;

pub const NUM_INTSEQ: usize = 10;
pub const INTSEQ_MAX_LEN: usize = 128;

pub const DIRECTION_NAMES: [&str; 2] = ["loop", "pendulum"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    #[default]
    Loop,
    Pendulum,
}

impl Direction {
    /// Anything other than 1 loops.
    pub fn from_index(index: i32) -> Self {
        if index == 1 {
            Direction::Pendulum
        } else {
            Direction::Loop
        }
    }

    pub fn index(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        DIRECTION_NAMES[self as usize]
    }
}

pub fn table(index: i32) -> Option<&'static [i16; INTSEQ_MAX_LEN]> {
    usize::try_from(index)
        .ok()
        .and_then(|i| INTSEQ_TABLES.get(i).copied())
}

pub fn sequence_name(index: i32) -> Option<&'static str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| INTSEQ_NAMES.get(i).copied())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct IntSeqSettings {
    pub sequence: i32,
    /// Terms are reduced modulo this when it is greater than 1.
    pub modulo: i32,
    pub start: i32,
    pub length: i32,
    pub direction: Direction,
    pub stride: i32,
}

impl Default for IntSeqSettings {
    fn default() -> Self {
        Self {
            sequence: 0,
            modulo: 1,
            start: 0,
            length: 16,
            direction: Direction::Loop,
            stride: 1,
        }
    }
}

impl IntSeqSettings {
    fn length(&self) -> i64 {
        i64::from(self.length.max(1))
    }

    /// Steps before the traversal repeats: `length` when looping,
    /// `2 * length - 2` for a pendulum. A pendulum over a single term never
    /// moves, so its period is 1.
    pub fn period(&self) -> u32 {
        let length = self.length();
        let period = match self.direction {
            Direction::Loop => length,
            Direction::Pendulum => 2 * length - 2,
        };
        period.max(1) as u32
    }

    /// Table offset for step `position`, before wrapping into the table.
    pub fn offset(&self, position: u32) -> i64 {
        let position = i64::from(position);
        let start = i64::from(self.start);
        let stride = i64::from(self.stride);
        let length = self.length();
        match self.direction {
            Direction::Loop => start + (position * stride) % length,
            Direction::Pendulum => {
                let cycle = 2 * length - 2;
                if cycle <= 0 {
                    return start;
                }
                let p = position % cycle;
                if p >= length {
                    start + (cycle - p) * stride
                } else {
                    start + p * stride
                }
            }
        }
    }

    /// Raw table term at step `position`, after the optional modulo. `None`
    /// when the sequence selector is out of range.
    pub fn term(&self, position: u32) -> Option<i32> {
        let table = table(self.sequence)?;
        let index = self.offset(position).rem_euclid(INTSEQ_MAX_LEN as i64) as usize;
        let mut value = i32::from(table[index]);
        if self.modulo > 1 {
            value %= self.modulo;
        }
        Some(value)
    }

    /// Term folded into `0..12`. An unknown sequence reads as 0.
    pub fn pitch_class(&self, position: u32) -> i32 {
        self.term(position)
            .map(|v| v.rem_euclid(SEMITONES_PER_OCTAVE))
            .unwrap_or(0)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct IntSeqPlayer {
    position: u32,
    trigger: EdgeDetector,
}

impl IntSeqPlayer {
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Pitch class at the current position, as a normalized pitch for the
    /// quantizer.
    #[inline]
    pub fn value(&self, settings: &IntSeqSettings) -> f32 {
        settings.pitch_class(self.position) as f32 / SEMITONES_PER_OCTAVE as f32
    }

    /// Latch the trigger level; step forward on a rising edge. Returns true if
    /// the position moved.
    #[inline]
    pub fn process_trigger(&mut self, level: f32, settings: &IntSeqSettings) -> bool {
        if self.trigger.process(level) {
            self.position = (self.position + 1) % settings.period();
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.position = 0;
        self.trigger.reset();
    }
}
