//! Host contract: resource requirements, scratch check and bus layout.
//!
//! The host hands every block a flat buffer holding all busses back to back,
//! `num_frames` samples each. Bus parameters are 1-based.

use std::mem::size_of;
use std::ops::Range;

use serde::Serialize;

use crate::dsp::NoiseState;
use crate::generator::IChingRandom;
use crate::params::{IChingParams, NUM_PARAMS};
use crate::types::{IChingError, Result};

pub use crate::params::NUM_BUSSES;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    pub num_parameters: usize,
    /// Bytes of per-instance state.
    pub instance_bytes: usize,
    /// Bytes of scratch the host must provide for the noise filters.
    pub scratch_bytes: usize,
}

pub fn requirements() -> Requirements {
    Requirements {
        num_parameters: NUM_PARAMS,
        instance_bytes: size_of::<IChingRandom>(),
        scratch_bytes: size_of::<NoiseState>(),
    }
}

/// Refuse construction when the host's scratch region is too small.
pub fn check_scratch(available: usize) -> Result<()> {
    let required = size_of::<NoiseState>();
    if available < required {
        return Err(IChingError::InsufficientScratch {
            required,
            available,
        });
    }
    Ok(())
}

/// Sample range of a 1-based `bus` inside a buffer of `buffer_len` samples.
///
/// `None` when the bus is 0, negative, or would run past the end of the
/// buffer.
pub fn bus_range(bus: i32, num_frames: usize, buffer_len: usize) -> Option<Range<usize>> {
    let index = usize::try_from(bus).ok()?.checked_sub(1)?;
    let start = index.checked_mul(num_frames)?;
    let end = start.checked_add(num_frames)?;
    (end <= buffer_len).then_some(start..end)
}

/// Bus ranges for one block, resolved once from the params.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Routing {
    pub clock_in: Option<Range<usize>>,
    pub trig_in: Option<Range<usize>>,
    pub cv_out: Option<Range<usize>>,
    pub quant_out: Option<Range<usize>>,
    pub int_seq_out: Option<Range<usize>>,
    pub noise_out: Option<Range<usize>>,
    pub clock_thru_out: Option<Range<usize>>,
    pub clock_div_out: Option<Range<usize>>,
}

impl Routing {
    pub fn resolve(params: &IChingParams, num_frames: usize, buffer_len: usize) -> Self {
        let range = |bus| bus_range(bus, num_frames, buffer_len);
        Self {
            clock_in: range(params.clock_in),
            trig_in: range(params.int_seq_trig_in),
            cv_out: range(params.cv_out),
            quant_out: range(params.quant_out),
            int_seq_out: range(params.int_seq_out),
            noise_out: range(params.noise_out),
            clock_thru_out: range(params.clock_thru_out),
            clock_div_out: range(params.clock_div_out),
        }
    }

    /// Output slots in frame order: cv, quant, intseq, noise, thru, div.
    pub fn outputs(&self) -> [Option<&Range<usize>>; 6] {
        [
            self.cv_out.as_ref(),
            self.quant_out.as_ref(),
            self.int_seq_out.as_ref(),
            self.noise_out.as_ref(),
            self.clock_thru_out.as_ref(),
            self.clock_div_out.as_ref(),
        ]
    }
}
