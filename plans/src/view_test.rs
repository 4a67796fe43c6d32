use super::*;
use crate::types::{Milestone, Resource, StudyPlanResult};

fn linear_algebra() -> StudyPlanResult {
    StudyPlanResult {
        topic: "Linear Algebra".to_owned(),
        duration_weeks: 4,
        summary: "From vectors to eigenvalues.".to_owned(),
        learning_objectives: vec!["Solve linear systems".to_owned()],
        key_concepts: vec!["Vector spaces".to_owned(), "Determinants".to_owned()],
        milestones: vec![Milestone {
            title: "Vectors".to_owned(),
            description: "Geometry of vectors".to_owned(),
            week: Some(1),
            estimated_hours: 6.0,
            tasks: vec!["Read chapter 1".to_owned()],
        }],
        ..StudyPlanResult::default()
    }
}

// =============================================================
// headings
// =============================================================

#[test]
fn title_and_subtitle_follow_topic_and_duration() {
    let view = PlanView::from_result(&linear_algebra());
    assert_eq!(view.title, "Study Plan: Linear Algebra");
    assert_eq!(view.subtitle, "4-week study roadmap");
}

#[test]
fn milestone_card_formats_hours_and_week() {
    let view = PlanView::from_result(&linear_algebra());
    let card = &view.milestones[0];
    assert_eq!(card.hours_label, "Estimated time: 6 hours");
    assert_eq!(card.week_label.as_deref(), Some("Week 1"));
    assert_eq!(card.tasks, vec!["Read chapter 1"]);
}

#[test]
fn fractional_hours_keep_their_decimals() {
    assert_eq!(format_hours(1.5), "1.5");
    assert_eq!(format_hours(12.0), "12");
}

// =============================================================
// section visibility
// =============================================================

#[test]
fn empty_resources_hide_the_section() {
    let view = PlanView::from_result(&linear_algebra());
    assert!(!view.show_resources());
}

#[test]
fn resource_without_url_renders_plain_title() {
    let mut result = linear_algebra();
    result.resources = vec![Resource {
        title: "Linear Algebra Done Right".to_owned(),
        kind: Some("Book".to_owned()),
        url: None,
        description: None,
    }];
    let view = PlanView::from_result(&result);
    assert!(view.show_resources());
    assert!(view.resources[0].link.is_none());
    assert_eq!(view.resources[0].description, "");
}

#[test]
fn blank_url_is_not_a_link() {
    let resource = Resource {
        title: "Notes".to_owned(),
        url: Some("  ".to_owned()),
        ..Resource::default()
    };
    assert!(ResourceView::from_resource(&resource).link.is_none());
}

#[test]
fn recommendations_hidden_when_absent_or_blank() {
    let mut result = linear_algebra();
    assert!(!PlanView::from_result(&result).show_recommendations());
    result.recommendations = Some("   ".to_owned());
    assert!(!PlanView::from_result(&result).show_recommendations());
    result.recommendations = Some("Practice daily.".to_owned());
    let view = PlanView::from_result(&result);
    assert_eq!(view.recommendations.as_deref(), Some("Practice daily."));
}

#[test]
fn rebuilding_does_not_accumulate_entries() {
    let result = linear_algebra();
    let first = PlanView::from_result(&result);
    let second = PlanView::from_result(&result);
    assert_eq!(first, second);
    assert_eq!(second.concepts.len(), 2);
}

// =============================================================
// icons
// =============================================================

#[test]
fn icon_matches_keyword_case_insensitively() {
    assert_eq!(ResourceIcon::for_kind(Some("E-Book")), ResourceIcon::Book);
    assert_eq!(ResourceIcon::for_kind(Some("YouTube VIDEO")), ResourceIcon::Video);
    assert_eq!(ResourceIcon::for_kind(Some("Online course")), ResourceIcon::Course);
    assert_eq!(ResourceIcon::for_kind(Some("community forum")), ResourceIcon::Community);
}

#[test]
fn icon_first_keyword_wins() {
    assert_eq!(ResourceIcon::for_kind(Some("video course")), ResourceIcon::Video);
}

#[test]
fn icon_defaults_when_missing_or_unknown() {
    assert_eq!(ResourceIcon::for_kind(None), ResourceIcon::Default);
    assert_eq!(ResourceIcon::for_kind(Some("podcast")), ResourceIcon::Default);
    assert_eq!(ResourceIcon::Default.css_class(), "fa-file-alt");
    assert_eq!(ResourceIcon::Course.css_class(), "fa-graduation-cap");
}

// =============================================================
// text rendering
// =============================================================

#[test]
fn text_rendering_includes_sections_present() {
    let text = PlanView::from_result(&linear_algebra()).to_text();
    assert!(text.starts_with("Study Plan: Linear Algebra\n4-week study roadmap\n"));
    assert!(text.contains("Week 1: Vectors"));
    assert!(text.contains("    - Read chapter 1"));
    assert!(!text.contains("Resources"));
}
