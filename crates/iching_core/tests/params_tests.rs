//! Parameter table, typed params and host contract.

use iching_core::dsp::scale::NUM_SCALES;
use iching_core::dsp::{INTSEQ_NAMES, SCALE_NAMES};
use iching_core::host::{check_scratch, requirements};
use iching_core::params::{NUM_PARAMS, Unit};
use iching_core::{IChingError, IChingParams, IChingRandom, PARAMETERS, ParamId};
use serde_json::json;

#[test]
fn table_defaults_lie_inside_their_ranges() {
    for spec in &PARAMETERS {
        assert!(spec.min <= spec.max, "{}", spec.name);
        assert!(
            (spec.min..=spec.max).contains(&spec.default),
            "{} default {} outside range",
            spec.name,
            spec.default
        );
    }
}

#[test]
fn enum_parameters_label_every_value() {
    for spec in PARAMETERS.iter().filter(|s| s.unit == Unit::Enum) {
        let labels = spec.enum_strings.expect("enum parameter without labels");
        assert_eq!(labels.len() as i32, spec.max - spec.min + 1, "{}", spec.name);
    }
    assert_eq!(ParamId::Scale.spec().max as usize, NUM_SCALES - 1);
    assert_eq!(ParamId::Scale.spec().label(132), Some(SCALE_NAMES[132]));
    assert_eq!(ParamId::IntSeqSelect.spec().label(1), Some(INTSEQ_NAMES[1]));
}

#[test]
fn bus_parameters_span_the_bus_array() {
    let busses: Vec<_> = ParamId::ALL.iter().filter(|id| id.is_bus()).collect();
    assert_eq!(busses.len(), 8);
    for id in busses {
        assert_eq!(id.spec().min, 1);
        assert_eq!(id.spec().max, 28);
    }
}

#[test]
fn params_serialize_camel_case() {
    let value = serde_json::to_value(IChingParams::default()).unwrap();
    assert_eq!(value["clockIn"], 1);
    assert_eq!(value["intSeqTrigIn"], 2);
    assert_eq!(value["maskRotate"], 0);
    assert_eq!(value["clockDiv"], 2);
    assert_eq!(value.as_object().unwrap().len(), NUM_PARAMS);
}

#[test]
fn schema_lists_every_field() {
    let schema = serde_json::to_value(schemars::schema_for!(IChingParams)).unwrap();
    let properties = schema["properties"].as_object().unwrap();
    assert_eq!(properties.len(), NUM_PARAMS);
    assert!(properties.contains_key("intSeqStride"));
}

#[test]
fn unknown_json_fields_are_ignored() {
    let params = IChingParams::from_json(json!({ "tempo": 120, "root": 4 })).unwrap();
    assert_eq!(params.root, 4);
}

#[test]
fn raw_vector_from_host() {
    let mut values = IChingParams::default().to_values();
    values[ParamId::NoiseType.index()] = 3;
    values[ParamId::IntSeqDir.index()] = 1;
    let params = IChingParams::from_values(&values).unwrap();
    let g = IChingRandom::new(params, 44_100.0);
    assert_eq!(g.params().noise_type, 3);
    assert_eq!(g.sample_rate(), 44_100.0);
}

#[test]
fn construction_refused_without_scratch() {
    let req = requirements();
    assert!(check_scratch(req.scratch_bytes).is_ok());
    let err = IChingRandom::construct(
        IChingParams::default(),
        48_000.0,
        0,
        Default::default(),
    )
    .unwrap_err();
    assert!(matches!(err, IChingError::InsufficientScratch { available: 0, .. }));
    assert!(err.to_string().contains("scratch"));
}

#[test]
fn set_parameter_reconfigures_running_generator() {
    let mut g = IChingRandom::new(IChingParams::default(), 48_000.0);
    g.set_parameter(ParamId::NoiseType.index(), 2).unwrap();
    for _ in 0..32 {
        g.process_sample(0.0, 0.0);
    }
    assert_ne!(g.noise().state().brown.level(), 0.0);
    assert_eq!(g.noise().state().pink.poles(), [0.0; 3]);
}
