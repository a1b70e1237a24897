use std::fmt;

/// Level above which a clock or trigger input reads as logic high.
pub const GATE_THRESHOLD: f32 = 1.0;

/// Gate outputs swing between these two levels.
pub const GATE_HIGH: f32 = 5.0;
pub const GATE_LOW: f32 = 0.0;

/// Peak level of the noise output.
pub const NOISE_AMPLITUDE: f32 = 5.0;

pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// Default sample rate used when the host does not report one.
pub const DEFAULT_SAMPLE_RATE: f32 = 48_000.0;

/// Errors raised while constructing or configuring a generator.
///
/// None of these can occur inside the per-sample loop; `step` is infallible.
#[derive(Debug, Clone, PartialEq)]
pub enum IChingError {
    /// The host scratch region cannot hold the noise filter state.
    InsufficientScratch { required: usize, available: usize },
    UnknownParameter(String),
    ParameterOutOfRange {
        name: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
    /// Params JSON could not be parsed, or the raw vector had the wrong shape.
    InvalidParams(String),
}

impl fmt::Display for IChingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IChingError::InsufficientScratch {
                required,
                available,
            } => write!(
                f,
                "scratch region too small: need {} bytes, host provided {}",
                required, available
            ),
            IChingError::UnknownParameter(name) => write!(f, "unknown parameter: {}", name),
            IChingError::ParameterOutOfRange {
                name,
                value,
                min,
                max,
            } => write!(f, "{}: {} is outside {}..={}", name, value, min, max),
            IChingError::InvalidParams(message) => write!(f, "invalid params: {}", message),
        }
    }
}

impl std::error::Error for IChingError {}

impl From<serde_json::Error> for IChingError {
    fn from(err: serde_json::Error) -> Self {
        IChingError::InvalidParams(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IChingError>;

/// Map a logic level onto the gate output voltage.
#[inline]
pub fn gate_voltage(high: bool) -> f32 {
    if high { GATE_HIGH } else { GATE_LOW }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_voltage_levels() {
        assert_eq!(gate_voltage(true), 5.0);
        assert_eq!(gate_voltage(false), 0.0);
    }

    #[test]
    fn scratch_error_message_names_both_sizes() {
        let err = IChingError::InsufficientScratch {
            required: 24,
            available: 8,
        };
        let message = err.to_string();
        assert!(message.contains("24"), "got {message}");
        assert!(message.contains('8'), "got {message}");
    }

    #[test]
    fn serde_errors_become_invalid_params() {
        let err: IChingError = serde_json::from_str::<i32>("nope").unwrap_err().into();
        assert!(matches!(err, IChingError::InvalidParams(_)));
    }
}
