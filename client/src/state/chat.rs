//! Chat widget controller.
//!
//! The conversation itself is `plans::chat::ChatSession`; this module wires
//! a generation round trip into it and into the shared results panel.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use plans::chat::ChatSession;
use plans::{StudyPlanRequest, StudyPlanResult};

use super::plan::{PlanState, fetch_plan};
use crate::net::api::{ApiError, PlannerApi};

/// Generate a plan for a topic named in chat.
///
/// # Errors
///
/// Propagates the [`ApiError`] so the session can roll back.
pub async fn generate_for_topic<A: PlannerApi>(
    api: &A,
    topic: &str,
) -> Result<StudyPlanResult, ApiError> {
    fetch_plan(api, &StudyPlanRequest::for_topic(topic)).await
}

/// Fold a finished generation into the chat log and the results panel.
pub fn apply_generation(
    session: &mut ChatSession,
    plan: &mut PlanState,
    outcome: &Result<StudyPlanResult, ApiError>,
) {
    match outcome {
        Ok(result) => {
            plan.show(result);
            session.succeed(result);
        }
        Err(_) => session.fail(),
    }
}
