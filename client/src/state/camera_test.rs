use futures::executor::block_on;
use plans::ExpressionResult;
use plans::capture::CaptureStatus;
use serde_json::json;

use super::*;
use crate::net::api::ApiError;
use crate::net::fake::{Call, FakeApi};

fn settings(value: serde_json::Value) -> FakeApi {
    let serde_json::Value::Object(blob) = value else {
        unreachable!("settings fixture must be an object");
    };
    FakeApi {
        settings: Ok(blob),
        ..FakeApi::default()
    }
}

#[test]
fn flag_loads_from_settings() {
    let api = settings(json!({ "ENABLE_FACIAL_ANALYSIS": "true" }));
    assert!(block_on(load_feature_flag(&api)));
    assert_eq!(api.calls(), vec![Call::LoadSettings]);
}

#[test]
fn flag_defaults_off_on_error() {
    let api = FakeApi::default();
    assert!(!block_on(load_feature_flag(&api)));
}

#[test]
fn disabled_feature_refuses_start() {
    let mut state = CameraState::default();
    assert_eq!(state.request_start(), Err(FEATURE_DISABLED));
    assert_eq!(state.status, CaptureStatus::Stopped);
}

#[test]
fn start_then_stop_restores_idle_ui() {
    let mut state = CameraState {
        enabled: true,
        ..CameraState::default()
    };
    let generation = state.request_start().unwrap();
    assert!(state.is_current(generation));
    assert_eq!(state.status, CaptureStatus::Starting);
    state.started();
    assert!(state.request_start().is_err());
    state.stopped();
    assert_eq!(state.status, CaptureStatus::Stopped);
    assert!(state.feedback.is_empty());
    assert!(state.status.can_start());
}

#[test]
fn frame_analysis_formats_label() {
    let api = FakeApi {
        expression: Ok(ExpressionResult {
            expression: Some("Engaged".to_owned()),
            confidence: Some(0.9),
            message: None,
        }),
        ..FakeApi::default()
    };
    let label = block_on(analyze_frame(&api, "data:image/jpeg;base64,AAAA"));
    assert_eq!(label.as_deref(), Some("Engaged (90.00%)"));
    assert_eq!(api.calls(), vec![Call::Analyze("data:image/jpeg;base64,AAAA".to_owned())]);
}

#[test]
fn failed_analysis_keeps_previous_label() {
    let api = FakeApi {
        expression: Err(ApiError::Status(500)),
        ..FakeApi::default()
    };
    let mut state = CameraState {
        enabled: true,
        ..CameraState::default()
    };
    state.request_start().unwrap();
    state.started();
    state.record_feedback("Focused (80.00%)".to_owned());
    if let Some(label) = block_on(analyze_frame(&api, "data:")) {
        state.record_feedback(label);
    }
    assert_eq!(state.feedback, "Focused (80.00%)");
}

#[test]
fn late_feedback_after_stop_is_dropped() {
    let mut state = CameraState {
        enabled: true,
        ..CameraState::default()
    };
    state.request_start().unwrap();
    state.started();
    state.stopped();
    state.record_feedback("Neutral".to_owned());
    assert!(state.feedback.is_empty());
}

#[test]
fn stop_during_permission_prompt_retires_that_start() {
    let mut state = CameraState {
        enabled: true,
        ..CameraState::default()
    };
    let first = state.request_start().unwrap();
    state.stopped();
    assert!(!state.is_current(first));

    let second = state.request_start().unwrap();
    assert_ne!(first, second);
    assert!(!state.is_current(first));
    assert!(state.is_current(second));
}

#[test]
fn running_capture_is_no_longer_starting() {
    let mut state = CameraState {
        enabled: true,
        ..CameraState::default()
    };
    let generation = state.request_start().unwrap();
    state.started();
    assert!(!state.is_current(generation));
}
