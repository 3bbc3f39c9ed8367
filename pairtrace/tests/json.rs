// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serialized shape of the frame log, as consumed by renderers.

#![cfg(feature = "serde")]

use kurbo::Point;
use pairtrace::{Frame, Solver, SolverConfig};
use serde_json::{Value, json};

fn six_point_frames() -> Vec<Frame<u32>> {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(0.0, 3.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 3.0),
        Point::new(2.0, 1.0),
        Point::new(2.0, 2.0),
    ];
    let mut solver = Solver::new();
    solver
        .solve(&points, &[0, 1, 2, 3, 4, 5])
        .expect("valid input");
    solver.take_frames()
}

#[test]
fn frames_use_camel_case_and_type_tags() {
    let frames = six_point_frames();
    let value = serde_json::to_value(&frames).expect("frames serialize");

    assert_eq!(
        value[0],
        json!({
            "sequenceNumber": 0,
            "type": "divide",
            "lineX": 2.0,
            "lineYStart": -10.0,
            "lineYEnd": 23.0,
        })
    );
    assert_eq!(value[3], json!({ "sequenceNumber": 3, "type": "compare" }));
    assert_eq!(value[4]["type"], "strip");
    assert_eq!(value[4]["handles"], json!([0, 1, 4, 5, 2, 3]));
    assert_eq!(value[1]["type"], "bruteForce");

    let last = &value[5];
    assert_eq!(last["type"], "stripClosest");
    assert_eq!(last["improvedInStrip"], Value::Bool(true));
    assert_eq!(last["distance"], json!(1.0));
    assert_eq!(last["p1"], json!({ "x": 2.0, "y": 1.0 }));
}

#[test]
fn frame_log_round_trips() {
    let frames = six_point_frames();
    let text = serde_json::to_string(&frames).expect("frames serialize");
    let back: Vec<Frame<u32>> = serde_json::from_str(&text).expect("frames deserialize");
    assert_eq!(back, frames);
}

#[test]
fn config_fills_missing_fields_with_defaults() {
    let config: SolverConfig =
        serde_json::from_str(r#"{ "yStartPadding": 4.0 }"#).expect("config parses");
    assert_eq!(config.y_start_padding, 4.0);
    assert_eq!(config.y_end_padding, SolverConfig::default().y_end_padding);
}
