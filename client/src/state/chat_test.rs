use futures::executor::block_on;
use plans::chat::{APOLOGY, ChatSession, ConversationState, Sender};
use plans::{StudyPlanRequest, StudyPlanResult};

use super::*;
use crate::net::api::ApiError;
use crate::net::fake::{Call, FakeApi};

fn chat_turn(api: &FakeApi, session: &mut ChatSession, plan: &mut PlanState, input: &str) {
    let Some(topic) = session.submit(input) else {
        return;
    };
    let outcome = block_on(generate_for_topic(api, &topic));
    apply_generation(session, plan, &outcome);
}

#[test]
fn chat_posts_topic_only_payload() {
    let api = FakeApi {
        plan: Ok(StudyPlanResult {
            topic: "Rust".to_owned(),
            duration_weeks: 4,
            ..StudyPlanResult::default()
        }),
        ..FakeApi::default()
    };
    let mut session = ChatSession::new();
    let mut plan = PlanState::default();
    session.open();
    chat_turn(&api, &mut session, &mut plan, "Rust");

    assert_eq!(api.calls(), vec![Call::Generate(StudyPlanRequest::for_topic("Rust"))]);
    assert_eq!(session.state(), ConversationState::Idle);
    assert_eq!(plan.view.unwrap().title, "Study Plan: Rust");
}

#[test]
fn failed_generation_allows_retry() {
    let api = FakeApi {
        plan: Err(ApiError::Status(503)),
        ..FakeApi::default()
    };
    let mut session = ChatSession::new();
    let mut plan = PlanState::default();
    session.open();
    chat_turn(&api, &mut session, &mut plan, "Rust");

    assert_eq!(session.state(), ConversationState::AwaitingTopic);
    let last = session.messages().last().unwrap();
    assert_eq!((last.sender, last.text.as_str()), (Sender::Bot, APOLOGY));
    assert!(plan.view.is_none());

    chat_turn(&api, &mut session, &mut plan, "Go");
    assert_eq!(api.calls().len(), 2);
}

#[test]
fn unopened_chat_sends_nothing() {
    let api = FakeApi::default();
    let mut session = ChatSession::new();
    let mut plan = PlanState::default();
    chat_turn(&api, &mut session, &mut plan, "Rust");
    assert!(api.calls().is_empty());
    assert!(session.messages().is_empty());
}
