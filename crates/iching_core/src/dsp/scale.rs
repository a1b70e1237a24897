//! Scale database.
//!
//! 133 scales live in one table: 16 "standard" scales built from integer
//! semitone intervals followed by 117 "exotic" scales with fractional
//! (microtonal) offsets. Both kinds are stored the same way, as the populated
//! prefix of at most [`SCALE_MAX_LEN`] offsets, so an offset of `0.0` always
//! means a real unison degree and never unused padding.

use arrayvec::ArrayVec;
use serde::Serialize;

use super::scale_tables::{EXOTIC_INTERVALS, SCALE_NAMES, STANDARD_INTERVALS};

pub const NUM_STANDARD_SCALES: usize = 16;
pub const NUM_EXOTIC_SCALES: usize = 117;
pub const NUM_SCALES: usize = NUM_STANDARD_SCALES + NUM_EXOTIC_SCALES;
pub const SCALE_MAX_LEN: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleKind {
    Standard,
    Exotic,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scale {
    index: usize,
    name: &'static str,
    kind: ScaleKind,
    offsets: ArrayVec<f32, SCALE_MAX_LEN>,
}

impl Scale {
    /// Build the scale at `index`, or `None` past the end of the table.
    pub fn build(index: usize) -> Option<Self> {
        let (kind, offsets) = if index < NUM_STANDARD_SCALES {
            let offsets = STANDARD_INTERVALS[index]
                .iter()
                .map(|&semitones| semitones as f32)
                .collect();
            (ScaleKind::Standard, offsets)
        } else if index < NUM_SCALES {
            let offsets = EXOTIC_INTERVALS[index - NUM_STANDARD_SCALES]
                .iter()
                .copied()
                .collect();
            (ScaleKind::Exotic, offsets)
        } else {
            return None;
        };

        Some(Self {
            index,
            name: SCALE_NAMES[index],
            kind,
            offsets,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }

    pub fn valid_len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

lazy_static! {
    static ref SCALES: Vec<Scale> = (0..NUM_SCALES).filter_map(Scale::build).collect();
}

/// Look up a scale. Negative or out-of-range indices yield `None`, which the
/// quantizer treats as an empty scale.
pub fn scale(index: i32) -> Option<&'static Scale> {
    usize::try_from(index).ok().and_then(|i| SCALES.get(i))
}

pub fn scales() -> &'static [Scale] {
    &SCALES
}

/// Integer intervals of a standard scale.
pub fn standard_intervals(index: i32) -> Option<&'static [u8]> {
    usize::try_from(index)
        .ok()
        .and_then(|i| STANDARD_INTERVALS.get(i).copied())
}

pub fn scale_name(index: i32) -> Option<&'static str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| SCALE_NAMES.get(i).copied())
}

/// Force the table to be built now rather than on first use from the audio
/// callback.
pub fn warm() {
    lazy_static::initialize(&SCALES);
}
