use super::*;

#[test]
fn request_skips_unset_fields() {
    let req = StudyPlanRequest {
        topic: "Rust".to_owned(),
        duration_weeks: Some(4),
        ..StudyPlanRequest::default()
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "topic": "Rust", "duration_weeks": 4 }));
}

#[test]
fn for_topic_carries_only_topic() {
    let json = serde_json::to_value(StudyPlanRequest::for_topic("Chess")).unwrap();
    assert_eq!(json, serde_json::json!({ "topic": "Chess" }));
}

#[test]
fn result_tolerates_null_and_missing_collections() {
    let raw = serde_json::json!({
        "topic": "Linear Algebra",
        "duration_weeks": 4,
        "summary": "Vectors and matrices.",
        "learning_objectives": null,
        "milestones": [{ "title": "Vectors", "description": "Basics", "estimated_hours": 6, "tasks": null }],
        "resources": null
    });
    let result: StudyPlanResult = serde_json::from_value(raw).unwrap();
    assert!(result.learning_objectives.is_empty());
    assert!(result.key_concepts.is_empty());
    assert!(result.resources.is_empty());
    assert_eq!(result.milestones.len(), 1);
    assert!(result.milestones[0].tasks.is_empty());
    assert!((result.milestones[0].estimated_hours - 6.0).abs() < f64::EPSILON);
}

#[test]
fn resource_type_maps_to_kind() {
    let resource: Resource =
        serde_json::from_value(serde_json::json!({ "title": "SICP", "type": "Book" })).unwrap();
    assert_eq!(resource.kind.as_deref(), Some("Book"));
    assert!(resource.url.is_none());
}

#[test]
fn calendar_event_reads_html_link() {
    let info: CalendarInfo = serde_json::from_value(serde_json::json!({
        "created_events": [
            { "summary": "Week 1", "htmlLink": "https://calendar.example/e1" },
            { "summary": "Week 2", "error": "quota exceeded" }
        ]
    }))
    .unwrap();
    let events = info.created_events.unwrap();
    assert_eq!(events[0].html_link.as_deref(), Some("https://calendar.example/e1"));
    assert_eq!(events[1].error.as_deref(), Some("quota exceeded"));
}

#[test]
fn expression_result_fields_are_optional() {
    let result: ExpressionResult = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(result, ExpressionResult::default());
}
