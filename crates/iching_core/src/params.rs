//! Parameter table and the typed parameter set.
//!
//! The host sees a flat vector of 20 integers, each described by a
//! [`ParameterSpec`]. [`IChingParams`] is the typed, serde-friendly view of the
//! same vector.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dsp::intseq::{DIRECTION_NAMES, Direction, IntSeqSettings};
use crate::dsp::noise::{NOISE_NAMES, NoiseKind};
use crate::dsp::quantizer::QuantizerSettings;
use crate::dsp::scale::NUM_SCALES;
use crate::dsp::{INTSEQ_NAMES, SCALE_NAMES};
use crate::types::{IChingError, Result};

pub const NUM_PARAMS: usize = 20;

/// Number of busses the host exposes; bus parameters are 1-based.
pub const NUM_BUSSES: i32 = 28;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Unit {
    None,
    Enum,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSpec {
    pub name: &'static str,
    pub min: i32,
    pub max: i32,
    pub default: i32,
    pub unit: Unit,
    pub enum_strings: Option<&'static [&'static str]>,
}

impl ParameterSpec {
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    pub fn check(&self, value: i32) -> Result<i32> {
        if (self.min..=self.max).contains(&value) {
            Ok(value)
        } else {
            Err(IChingError::ParameterOutOfRange {
                name: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Enum label for `value`, if this is an enum parameter.
    pub fn label(&self, value: i32) -> Option<&'static str> {
        let labels = self.enum_strings?;
        let index = usize::try_from(value - self.min).ok()?;
        labels.get(index).copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamId {
    ClockIn,
    IntSeqTrigIn,
    CvOut,
    QuantOut,
    IntSeqOut,
    NoiseOut,
    ClockThruOut,
    ClockDivOut,
    Scale,
    Root,
    Transpose,
    MaskRotate,
    IntSeqSelect,
    IntSeqMod,
    IntSeqStart,
    IntSeqLen,
    IntSeqDir,
    IntSeqStride,
    NoiseType,
    ClockDiv,
}

impl ParamId {
    pub const ALL: [ParamId; NUM_PARAMS] = [
        ParamId::ClockIn,
        ParamId::IntSeqTrigIn,
        ParamId::CvOut,
        ParamId::QuantOut,
        ParamId::IntSeqOut,
        ParamId::NoiseOut,
        ParamId::ClockThruOut,
        ParamId::ClockDivOut,
        ParamId::Scale,
        ParamId::Root,
        ParamId::Transpose,
        ParamId::MaskRotate,
        ParamId::IntSeqSelect,
        ParamId::IntSeqMod,
        ParamId::IntSeqStart,
        ParamId::IntSeqLen,
        ParamId::IntSeqDir,
        ParamId::IntSeqStride,
        ParamId::NoiseType,
        ParamId::ClockDiv,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Look up by display name, ignoring case and spaces.
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = normalize(name);
        Self::ALL
            .iter()
            .copied()
            .find(|id| normalize(id.spec().name) == wanted)
            .ok_or_else(|| IChingError::UnknownParameter(name.to_string()))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> &'static ParameterSpec {
        &PARAMETERS[self as usize]
    }

    pub fn is_bus(self) -> bool {
        self.index() <= ParamId::ClockDivOut.index()
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

const SCALE_LABELS: &[&str] = &SCALE_NAMES;
const INTSEQ_LABELS: &[&str] = &INTSEQ_NAMES;
const DIRECTION_LABELS: &[&str] = &DIRECTION_NAMES;
const NOISE_LABELS: &[&str] = &NOISE_NAMES;

const fn bus(name: &'static str, default: i32) -> ParameterSpec {
    ParameterSpec {
        name,
        min: 1,
        max: NUM_BUSSES,
        default,
        unit: Unit::None,
        enum_strings: None,
    }
}

const fn number(name: &'static str, min: i32, max: i32, default: i32) -> ParameterSpec {
    ParameterSpec {
        name,
        min,
        max,
        default,
        unit: Unit::None,
        enum_strings: None,
    }
}

const fn choice(
    name: &'static str,
    max: i32,
    default: i32,
    labels: &'static [&'static str],
) -> ParameterSpec {
    ParameterSpec {
        name,
        min: 0,
        max,
        default,
        unit: Unit::Enum,
        enum_strings: Some(labels),
    }
}

pub static PARAMETERS: [ParameterSpec; NUM_PARAMS] = [
    bus("Clock In", 1),
    bus("IntSeqTrigIn", 2),
    bus("CV Out", 13),
    bus("Quant Out", 14),
    bus("IntSeq Out", 15),
    bus("Noise Out", 16),
    bus("Clock Thru Out", 17),
    bus("Clock Div Out", 18),
    choice("Scale", NUM_SCALES as i32 - 1, 0, SCALE_LABELS),
    number("Root", 0, 11, 0),
    number("Transpose", -24, 24, 0),
    number("MaskRot", 0, 15, 0),
    choice("IntSeq", INTSEQ_NAMES.len() as i32 - 1, 0, INTSEQ_LABELS),
    number("IntSeqMod", 1, 32, 1),
    number("IntSeqStart", 0, 126, 0),
    number("IntSeqLen", 1, 128, 16),
    choice("IntSeqDir", 1, 0, DIRECTION_LABELS),
    number("IntSeqStride", 1, 16, 1),
    choice("Noise Type", 3, 0, NOISE_LABELS),
    number("Clock Div", 2, 512, 2),
];

/// Typed parameter set.
///
/// Bus fields are 1-based indices into the host bus array. Missing JSON
/// fields take the table defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct IChingParams {
    /// Clock input bus
    pub clock_in: i32,
    /// Integer sequence trigger input bus
    pub int_seq_trig_in: i32,
    /// Raw hexagram CV output bus
    pub cv_out: i32,
    /// Quantized hexagram output bus
    pub quant_out: i32,
    /// Quantized integer sequence output bus
    pub int_seq_out: i32,
    pub noise_out: i32,
    pub clock_thru_out: i32,
    pub clock_div_out: i32,
    /// Scale index, 0..=132
    pub scale: i32,
    /// Root note in semitones, 0..=11
    pub root: i32,
    /// Transpose in semitones, -24..=24
    pub transpose: i32,
    /// Rotation applied to scale degrees when matching, 0..=15
    pub mask_rotate: i32,
    /// Integer sequence selector, 0..=9
    pub int_seq: i32,
    pub int_seq_mod: i32,
    pub int_seq_start: i32,
    pub int_seq_len: i32,
    /// 0 = loop, 1 = pendulum
    pub int_seq_dir: i32,
    pub int_seq_stride: i32,
    /// 0 = white, 1 = pink, 2 = brown, 3 = blue
    pub noise_type: i32,
    /// Clock edges per divider output pulse
    pub clock_div: i32,
}

impl Default for IChingParams {
    fn default() -> Self {
        let defaults: [i32; NUM_PARAMS] = std::array::from_fn(|i| PARAMETERS[i].default);
        Self::from_array(defaults)
    }
}

impl IChingParams {
    fn from_array(v: [i32; NUM_PARAMS]) -> Self {
        Self {
            clock_in: v[0],
            int_seq_trig_in: v[1],
            cv_out: v[2],
            quant_out: v[3],
            int_seq_out: v[4],
            noise_out: v[5],
            clock_thru_out: v[6],
            clock_div_out: v[7],
            scale: v[8],
            root: v[9],
            transpose: v[10],
            mask_rotate: v[11],
            int_seq: v[12],
            int_seq_mod: v[13],
            int_seq_start: v[14],
            int_seq_len: v[15],
            int_seq_dir: v[16],
            int_seq_stride: v[17],
            noise_type: v[18],
            clock_div: v[19],
        }
    }

    /// Build from the host's raw vector, rejecting wrong lengths and
    /// out-of-range values.
    pub fn from_values(values: &[i32]) -> Result<Self> {
        let values: [i32; NUM_PARAMS] = values.try_into().map_err(|_| {
            IChingError::InvalidParams(format!(
                "expected {} parameter values, got {}",
                NUM_PARAMS,
                values.len()
            ))
        })?;
        let params = Self::from_array(values);
        params.validate()?;
        Ok(params)
    }

    pub fn to_values(&self) -> [i32; NUM_PARAMS] {
        std::array::from_fn(|i| self.get(ParamId::ALL[i]))
    }

    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let params: Self = serde_json::from_value(value)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        for id in ParamId::ALL {
            id.spec().check(self.get(id))?;
        }
        Ok(())
    }

    pub fn get(&self, id: ParamId) -> i32 {
        match id {
            ParamId::ClockIn => self.clock_in,
            ParamId::IntSeqTrigIn => self.int_seq_trig_in,
            ParamId::CvOut => self.cv_out,
            ParamId::QuantOut => self.quant_out,
            ParamId::IntSeqOut => self.int_seq_out,
            ParamId::NoiseOut => self.noise_out,
            ParamId::ClockThruOut => self.clock_thru_out,
            ParamId::ClockDivOut => self.clock_div_out,
            ParamId::Scale => self.scale,
            ParamId::Root => self.root,
            ParamId::Transpose => self.transpose,
            ParamId::MaskRotate => self.mask_rotate,
            ParamId::IntSeqSelect => self.int_seq,
            ParamId::IntSeqMod => self.int_seq_mod,
            ParamId::IntSeqStart => self.int_seq_start,
            ParamId::IntSeqLen => self.int_seq_len,
            ParamId::IntSeqDir => self.int_seq_dir,
            ParamId::IntSeqStride => self.int_seq_stride,
            ParamId::NoiseType => self.noise_type,
            ParamId::ClockDiv => self.clock_div,
        }
    }

    /// Store `value` clamped into the parameter's declared range and return
    /// what was stored.
    pub fn set(&mut self, id: ParamId, value: i32) -> i32 {
        let value = id.spec().clamp(value);
        let slot = match id {
            ParamId::ClockIn => &mut self.clock_in,
            ParamId::IntSeqTrigIn => &mut self.int_seq_trig_in,
            ParamId::CvOut => &mut self.cv_out,
            ParamId::QuantOut => &mut self.quant_out,
            ParamId::IntSeqOut => &mut self.int_seq_out,
            ParamId::NoiseOut => &mut self.noise_out,
            ParamId::ClockThruOut => &mut self.clock_thru_out,
            ParamId::ClockDivOut => &mut self.clock_div_out,
            ParamId::Scale => &mut self.scale,
            ParamId::Root => &mut self.root,
            ParamId::Transpose => &mut self.transpose,
            ParamId::MaskRotate => &mut self.mask_rotate,
            ParamId::IntSeqSelect => &mut self.int_seq,
            ParamId::IntSeqMod => &mut self.int_seq_mod,
            ParamId::IntSeqStart => &mut self.int_seq_start,
            ParamId::IntSeqLen => &mut self.int_seq_len,
            ParamId::IntSeqDir => &mut self.int_seq_dir,
            ParamId::IntSeqStride => &mut self.int_seq_stride,
            ParamId::NoiseType => &mut self.noise_type,
            ParamId::ClockDiv => &mut self.clock_div,
        };
        *slot = value;
        value
    }

    pub fn quantizer(&self) -> QuantizerSettings {
        QuantizerSettings {
            scale: self.scale,
            root: self.root,
            transpose: self.transpose,
            mask_rotate: self.mask_rotate,
        }
    }

    pub fn int_seq(&self) -> IntSeqSettings {
        IntSeqSettings {
            sequence: self.int_seq,
            modulo: self.int_seq_mod,
            start: self.int_seq_start,
            length: self.int_seq_len,
            direction: self.direction(),
            stride: self.int_seq_stride,
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::from_index(self.int_seq_dir)
    }

    pub fn noise_kind(&self) -> NoiseKind {
        NoiseKind::from_index(self.noise_type)
    }

    pub fn clock_division(&self) -> u32 {
        self.clock_div.max(1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_table() {
        let params = IChingParams::default();
        assert_eq!(params.clock_in, 1);
        assert_eq!(params.int_seq_trig_in, 2);
        assert_eq!(params.cv_out, 13);
        assert_eq!(params.clock_div_out, 18);
        assert_eq!(params.int_seq_len, 16);
        assert_eq!(params.clock_div, 2);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn ids_line_up_with_table() {
        for (i, id) in ParamId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(ParamId::from_index(i), Some(*id));
        }
        assert_eq!(ParamId::Scale.spec().name, "Scale");
        assert_eq!(ParamId::ClockDiv.spec().max, 512);
        assert!(ParamId::ClockDivOut.is_bus());
        assert!(!ParamId::Scale.is_bus());
    }

    #[test]
    fn values_round_trip_through_vector() {
        let mut params = IChingParams::default();
        params.scale = 42;
        params.transpose = -7;
        let values = params.to_values();
        assert_eq!(values[ParamId::Scale.index()], 42);
        assert_eq!(IChingParams::from_values(&values).unwrap(), params);
    }

    #[test]
    fn from_values_rejects_bad_shape_and_range() {
        assert!(matches!(
            IChingParams::from_values(&[1, 2, 3]),
            Err(IChingError::InvalidParams(_))
        ));
        let mut values = IChingParams::default().to_values();
        values[ParamId::Root.index()] = 12;
        assert!(matches!(
            IChingParams::from_values(&values),
            Err(IChingError::ParameterOutOfRange { name: "Root", .. })
        ));
    }

    #[test]
    fn set_clamps_to_range() {
        let mut params = IChingParams::default();
        assert_eq!(params.set(ParamId::Transpose, -100), -24);
        assert_eq!(params.set(ParamId::ClockDiv, 1), 2);
        assert_eq!(params.set(ParamId::Scale, 132), 132);
        assert_eq!(params.get(ParamId::Scale), 132);
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let params = IChingParams::from_json(json!({ "scale": 11, "intSeqDir": 1 })).unwrap();
        assert_eq!(params.scale, 11);
        assert_eq!(params.direction(), Direction::Pendulum);
        assert_eq!(params.clock_div, 2);
    }

    #[test]
    fn json_out_of_range_is_rejected() {
        let err = IChingParams::from_json(json!({ "noiseType": 9 })).unwrap_err();
        assert!(matches!(err, IChingError::ParameterOutOfRange { name: "Noise Type", .. }));
        let err = IChingParams::from_json(json!({ "scale": "major" })).unwrap_err();
        assert!(matches!(err, IChingError::InvalidParams(_)));
    }

    #[test]
    fn labels_resolve_enum_values() {
        assert_eq!(ParamId::Scale.spec().label(0), Some("Major"));
        assert_eq!(ParamId::IntSeqSelect.spec().label(9), Some("Frcti"));
        assert_eq!(ParamId::IntSeqDir.spec().label(1), Some("pendulum"));
        assert_eq!(ParamId::NoiseType.spec().label(2), Some("Brown"));
        assert_eq!(ParamId::Root.spec().label(2), None);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(ParamId::from_name("clock div").unwrap(), ParamId::ClockDiv);
        assert_eq!(ParamId::from_name("MaskRot").unwrap(), ParamId::MaskRotate);
        assert!(ParamId::from_name("tempo").is_err());
    }

    #[test]
    fn typed_views() {
        let params = IChingParams {
            noise_type: 2,
            int_seq_len: 8,
            ..IChingParams::default()
        };
        assert_eq!(params.noise_kind(), NoiseKind::Brown);
        assert_eq!(params.int_seq().length, 8);
        assert_eq!(params.quantizer().scale, 0);
        assert_eq!(params.clock_division(), 2);
    }
}
