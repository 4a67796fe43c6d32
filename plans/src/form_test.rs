use super::*;

fn fields(pairs: &[(&str, &str)]) -> FormFields {
    pairs.iter().copied().collect()
}

// =============================================================
// goals
// =============================================================

#[test]
fn goals_are_split_and_trimmed() {
    assert_eq!(split_goals("a, b ,c"), vec!["a", "b", "c"]);
}

#[test]
fn goals_drop_empty_segments() {
    assert_eq!(split_goals(" , x,,  y , "), vec!["x", "y"]);
}

#[test]
fn blank_goals_are_omitted() {
    let req = normalize_request(&fields(&[("topic", "Go"), ("goals", " , ")])).unwrap();
    assert!(req.goals.is_none());
}

// =============================================================
// checkboxes
// =============================================================

#[test]
fn checked_checkbox_maps_to_true() {
    let req = normalize_request(&fields(&[("topic", "Go"), ("include_resources", "on")])).unwrap();
    assert_eq!(req.include_resources, Some(true));
}

#[test]
fn absent_checkbox_is_omitted() {
    let req = normalize_request(&fields(&[("topic", "Go")])).unwrap();
    assert!(req.include_resources.is_none());
    assert!(req.generate_goals.is_none());
    let json = serde_json::to_value(&req).unwrap();
    assert!(json.get("include_resources").is_none());
}

#[test]
fn push_checkbox_only_adds_checked_boxes() {
    let mut form = FormFields::new();
    form.push("topic", "Go");
    form.push_checkbox("generate_goals", true);
    form.push_checkbox("include_resources", false);
    assert_eq!(form.get("generate_goals"), Some("on"));
    assert_eq!(form.get("include_resources"), None);
}

// =============================================================
// numbers
// =============================================================

#[test]
fn numeric_fields_are_parsed() {
    let req = normalize_request(&fields(&[
        ("topic", "Linear Algebra"),
        ("depth_level", "3"),
        ("duration_weeks", " 4 "),
    ]))
    .unwrap();
    assert_eq!(req.depth_level, Some(3));
    assert_eq!(req.duration_weeks, Some(4));
}

#[test]
fn blank_numeric_fields_are_omitted() {
    let req = normalize_request(&fields(&[("topic", "Go"), ("duration_weeks", "")])).unwrap();
    assert!(req.duration_weeks.is_none());
}

#[test]
fn non_numeric_value_is_rejected() {
    let err = normalize_request(&fields(&[("topic", "Go"), ("depth_level", "deep")])).unwrap_err();
    assert_eq!(
        err,
        FormError::InvalidNumber {
            field: "depth_level",
            value: "deep".to_owned()
        }
    );
}

// =============================================================
// strings
// =============================================================

#[test]
fn blank_strings_are_omitted_and_unknown_keys_ignored() {
    let req = normalize_request(&fields(&[
        ("topic", "Go"),
        ("learning_style", ""),
        ("prior_knowledge", "beginner"),
        ("csrf", "abc"),
    ]))
    .unwrap();
    assert!(req.learning_style.is_none());
    assert_eq!(req.prior_knowledge.as_deref(), Some("beginner"));
}

#[test]
fn missing_topic_is_rejected() {
    assert_eq!(
        normalize_request(&fields(&[("topic", "   ")])),
        Err(FormError::MissingTopic)
    );
    assert_eq!(normalize_request(&FormFields::new()), Err(FormError::MissingTopic));
}

#[test]
fn full_submission_serializes_compact_payload() {
    let req = normalize_request(&fields(&[
        ("topic", "Linear Algebra"),
        ("goals", "eigenvalues, proofs"),
        ("duration_weeks", "4"),
        ("additional_context", ""),
        ("generate_goals", "on"),
    ]))
    .unwrap();
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "topic": "Linear Algebra",
            "goals": ["eigenvalues", "proofs"],
            "duration_weeks": 4,
            "generate_goals": true
        })
    );
}

#[test]
fn non_empty_json_strips_blank_values() {
    let json = fields(&[("AI_PROVIDER", "gemini"), ("GEMINI_MODEL", "")]).non_empty_json();
    assert_eq!(json.len(), 1);
    assert_eq!(json.get("AI_PROVIDER"), Some(&serde_json::json!("gemini")));
}
