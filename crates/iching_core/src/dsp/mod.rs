pub mod clock_divider;
pub mod hexagram;
pub mod intseq;
mod intseq_tables;
pub mod noise;
pub mod quantizer;
pub mod random;
pub mod scale;
mod scale_tables;
pub mod utils;

pub use clock_divider::ClockDivider;
pub use hexagram::{Hexagram, HexagramScheduler};
pub use intseq::{Direction, IntSeqPlayer, IntSeqSettings};
pub use intseq_tables::INTSEQ_NAMES;
pub use noise::{BlueResponse, NoiseBank, NoiseKind, NoiseState};
pub use quantizer::{Quantizer, QuantizerSettings, quantize, quantize_index};
pub use random::{DEFAULT_SEED, Entropy, EntropySource, SharedRng, Xorshift32};
pub use scale::{Scale, ScaleKind};
pub use scale_tables::SCALE_NAMES;
pub use utils::EdgeDetector;
