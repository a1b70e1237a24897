//! I Ching random CV generator core
//!
//! Clock-driven hexagram scheduler, a scale quantizer over 133 scales, an
//! integer sequence player and a coloured noise bank, run once per sample by
//! [`IChingRandom`]. Pure library: no I/O, no allocation on the audio path.

#[macro_use]
extern crate lazy_static;

pub mod dsp;
pub mod generator;
pub mod host;
pub mod params;
pub mod types;

pub use generator::{Frame, IChingRandom};
pub use host::{Requirements, requirements};
pub use params::{IChingParams, PARAMETERS, ParamId, ParameterSpec};
pub use types::{IChingError, Result};
