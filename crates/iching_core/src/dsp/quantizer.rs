//! Quantizer - snaps normalized pitch values to scale degrees.
//!
//! Input and output are in octave units (1.0 = 12 semitones). The target is
//! rounded to the nearest semitone, shifted by root and transpose, and then
//! matched against the scale's degrees by pitch class. The octave of the
//! rounded target is kept.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::scale::{self, Scale};
use crate::types::SEMITONES_PER_OCTAVE;

const OCTAVE: f32 = SEMITONES_PER_OCTAVE as f32;

/// Bound on the semitone target so the octave arithmetic cannot overflow.
const TARGET_LIMIT: i32 = i32::MAX / 24;

/// Snap `value` to the nearest degree of `scale`.
///
/// Degrees are compared by `(offset + mask_rotate) mod 12` against the
/// target's pitch class using plain absolute distance (no wrap-around), and
/// the first degree with the smallest distance wins. Rotation only changes
/// which degree is picked; the unrotated offset is what gets emitted.
///
/// A missing or empty scale leaves the sentinel unison degree selected, so
/// the output collapses to the target's octave.
///
/// Out-of-range or non-finite inputs saturate at about +/-7 million octaves;
/// NaN is treated as 0.
pub fn quantize(
    value: f32,
    scale: Option<&Scale>,
    root: i32,
    transpose: i32,
    mask_rotate: i32,
) -> f32 {
    let limit = TARGET_LIMIT as f32;
    let rounded = (value * OCTAVE).round().clamp(-limit, limit) as i32;
    let target = rounded
        .saturating_add(root)
        .saturating_add(transpose)
        .clamp(-TARGET_LIMIT, TARGET_LIMIT);
    let pitch_class = target.rem_euclid(SEMITONES_PER_OCTAVE) as f32;
    let octave = target.div_euclid(SEMITONES_PER_OCTAVE);

    let mut chosen = 0.0;
    let mut min_dist = f32::MAX;
    let offsets = scale.map(Scale::offsets).unwrap_or(&[]);
    for &offset in offsets {
        let degree = (offset + mask_rotate as f32).rem_euclid(OCTAVE);
        let dist = (pitch_class - degree).abs();
        if dist < min_dist {
            min_dist = dist;
            chosen = offset;
        }
    }

    ((octave * SEMITONES_PER_OCTAVE) as f32 + chosen) / OCTAVE
}

/// Quantize against a scale by database index.
pub fn quantize_index(
    value: f32,
    scale_index: i32,
    root: i32,
    transpose: i32,
    mask_rotate: i32,
) -> f32 {
    quantize(value, scale::scale(scale_index), root, transpose, mask_rotate)
}

/// The four quantizer controls, resolved once per block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct QuantizerSettings {
    pub scale: i32,
    pub root: i32,
    pub transpose: i32,
    pub mask_rotate: i32,
}

#[derive(Clone, Copy, Debug)]
pub struct Quantizer {
    settings: QuantizerSettings,
    scale: Option<&'static Scale>,
}

impl Quantizer {
    pub fn new(settings: QuantizerSettings) -> Self {
        Self {
            settings,
            scale: scale::scale(settings.scale),
        }
    }

    pub fn configure(&mut self, settings: QuantizerSettings) {
        if settings.scale != self.settings.scale || self.scale.is_none() {
            self.scale = scale::scale(settings.scale);
        }
        self.settings = settings;
    }

    pub fn settings(&self) -> QuantizerSettings {
        self.settings
    }

    pub fn scale(&self) -> Option<&'static Scale> {
        self.scale
    }

    #[inline]
    pub fn process(&self, value: f32) -> f32 {
        quantize(
            value,
            self.scale,
            self.settings.root,
            self.settings.transpose,
            self.settings.mask_rotate,
        )
    }
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::new(QuantizerSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn semis(v: f32) -> f32 {
        v * 12.0
    }

    #[test]
    fn on_scale_value_is_unchanged() {
        // D in C major
        let out = quantize_index(2.0 / 12.0, 0, 0, 0, 0);
        assert!((semis(out) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn off_scale_value_snaps_to_first_nearest() {
        // C# in C major: C (dist 1) comes before D (dist 1)
        let out = quantize_index(1.0 / 12.0, 0, 0, 0, 0);
        assert!((semis(out) - 0.0).abs() < 1e-5);
        // F# in C major: F (dist 1) is encountered before G
        let out = quantize_index(6.0 / 12.0, 0, 0, 0, 0);
        assert!((semis(out) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn keeps_octave_of_target() {
        let out = quantize_index(2.0 + 4.0 / 12.0, 0, 0, 0, 0);
        assert!((semis(out) - 28.0).abs() < 1e-5);
    }

    #[test]
    fn root_and_transpose_shift_target() {
        // 0 + root 2 + transpose 12 = 14 -> D one octave up
        let out = quantize_index(0.0, 0, 2, 12, 0);
        assert!((semis(out) - 14.0).abs() < 1e-5);
    }

    #[test]
    fn negative_target_rounds_down_an_octave() {
        // -1 semitone is B below; pitch class 11 lives in octave -1
        let out = quantize_index(0.0, 0, 0, -1, 0);
        assert!((semis(out) - (-1.0)).abs() < 1e-5);
    }

    #[test]
    fn mask_rotation_changes_selection_not_offset() {
        // Minor pentatonic [0,3,5,7,10], target pitch class 4.
        // Unrotated: 3 and 5 tie at distance 1, 3 wins.
        let plain = quantize_index(4.0 / 12.0, 11, 0, 0, 0);
        assert!((semis(plain) - 3.0).abs() < 1e-5);
        // Rotated by 1: degrees become [1,4,6,8,11]; offset 3 (class 4) matches.
        let rotated = quantize_index(4.0 / 12.0, 11, 0, 0, 1);
        assert!((semis(rotated) - 3.0).abs() < 1e-5);
        // Rotated by 2: degrees [2,5,7,9,0]; offset 5 lands on class 7.
        let rotated = quantize_index(7.0 / 12.0, 11, 0, 0, 2);
        assert!((semis(rotated) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn exotic_offsets_stay_microtonal() {
        // Pythagorean second degree sits at 0.898 semitones
        let out = quantize_index(1.0 / 12.0, 25, 0, 0, 0);
        assert!((semis(out) - 0.898).abs() < 1e-4);
    }

    #[test]
    fn invalid_scale_falls_back_to_unison() {
        let out = quantize_index(1.0 + 5.0 / 12.0, 500, 0, 0, 0);
        assert!((semis(out) - 12.0).abs() < 1e-5);
        let out = quantize_index(0.3, -4, 0, 0, 0);
        assert_eq!(out, 0.0);
    }

    #[test]
    fn quantizer_struct_tracks_scale_changes() {
        let mut q = Quantizer::new(QuantizerSettings::default());
        assert_eq!(q.scale().unwrap().name(), "Major");
        q.configure(QuantizerSettings {
            scale: 11,
            ..QuantizerSettings::default()
        });
        assert_eq!(q.scale().unwrap().name(), "Min Pent");
        assert!((semis(q.process(4.0 / 12.0)) - 3.0).abs() < 1e-5);
    }

    #[test]
    fn extreme_inputs_saturate() {
        let cases = [
            (-1.0e9, 0, 0, 0),
            (f32::INFINITY, 11, 24, 0),
            (f32::NEG_INFINITY, -11, -24, 11),
            (1.0e30, i32::MAX, i32::MAX, 0),
            (-1.0e30, i32::MIN, i32::MIN, 0),
        ];
        for (value, root, transpose, rotate) in cases {
            for index in [0, 25, 132, 500] {
                let out = quantize_index(value, index, root, transpose, rotate);
                assert!(out.is_finite(), "{value} on scale {index} gave {out}");
            }
        }
        assert!(quantize_index(f32::INFINITY, 0, 0, 0, 0) > 1.0e6);
        assert!(quantize_index(-1.0e9, 0, 0, 0, 0) < -1.0e6);
        assert_eq!(quantize_index(f32::NAN, 0, 0, 0, 0), 0.0);
    }
}
