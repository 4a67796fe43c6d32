use super::*;

fn playback(paused: bool, ended: bool, ready_state: u16) -> Playback {
    Playback {
        paused,
        ended,
        ready_state,
    }
}

#[test]
fn captures_only_while_playing() {
    assert!(playback(false, false, 4).is_playing());
    assert!(!playback(true, false, 4).is_playing());
    assert!(!playback(false, true, 4).is_playing());
    assert!(!playback(false, false, 1).is_playing());
}

#[test]
fn status_controls_buttons() {
    assert!(CaptureStatus::Stopped.can_start());
    assert!(!CaptureStatus::Stopped.can_stop());
    assert!(!CaptureStatus::Running.can_start());
    assert!(CaptureStatus::Running.can_stop());
    assert!(CaptureStatus::Starting.can_stop());
    assert_eq!(CaptureStatus::default().status_text(), "Camera off");
}

#[test]
fn label_shows_expression_and_percentage() {
    let result = ExpressionResult {
        expression: Some("Focused".to_owned()),
        confidence: Some(0.8734),
        message: Some("Facial analysis performed.".to_owned()),
    };
    assert_eq!(feedback_label(&result), "Focused (87.34%)");
}

#[test]
fn label_without_confidence_is_expression_only() {
    let result = ExpressionResult {
        expression: Some("Neutral".to_owned()),
        ..ExpressionResult::default()
    };
    assert_eq!(feedback_label(&result), "Neutral");
}

#[test]
fn label_falls_back_to_message() {
    let result = ExpressionResult {
        message: Some("No face detected".to_owned()),
        ..ExpressionResult::default()
    };
    assert_eq!(feedback_label(&result), "No face detected");
}

#[test]
fn label_defaults_to_inconclusive() {
    assert_eq!(feedback_label(&ExpressionResult::default()), INCONCLUSIVE);
}
