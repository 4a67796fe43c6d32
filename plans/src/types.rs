//! Wire DTOs for the planner HTTP API.
//!
//! DESIGN
//! ======
//! Request types skip `None` fields so the JSON payload only carries what the
//! user actually filled in. Response types are lenient: missing or `null`
//! collections decode as empty so one sloppy server field does not sink the
//! whole render.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Payload for `POST /api/generate-study-plan`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyPlanRequest {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<String>>,
    /// 1-5, where 5 is the most detailed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth_level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_weeks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_resources: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_goals: Option<bool>,
    /// visual, auditory, reading/writing, kinesthetic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_style: Option<String>,
    /// none, beginner, intermediate, advanced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prior_knowledge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl StudyPlanRequest {
    /// Minimal request carrying only a topic, as sent by the chat widget.
    #[must_use]
    pub fn for_topic(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }
}

/// Generated plan returned by `POST /api/generate-study-plan`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyPlanResult {
    pub topic: String,
    pub duration_weeks: u32,
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub learning_objectives: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_concepts: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub milestones: Vec<Milestone>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub recommendations: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub calendar_events_info: Option<CalendarInfo>,
}

/// One stage of a plan.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub week: Option<u32>,
    #[serde(default)]
    pub estimated_hours: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<String>,
}

/// A recommended learning resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    /// Free-form kind label such as `"Book"` or `"Video course"`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Outcome of the server's calendar sync for a generated plan.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarInfo {
    #[serde(default)]
    pub created_events: Option<Vec<CalendarEvent>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One calendar event the server attempted to create.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub summary: String,
    #[serde(default, rename = "htmlLink")]
    pub html_link: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `POST /api/login`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload for `POST /api/analyze-expression`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpressionRequest {
    /// `data:image/jpeg;base64,...` URL of one captured frame.
    pub image: String,
}

/// Response of `POST /api/analyze-expression`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpressionResult {
    #[serde(default)]
    pub expression: Option<String>,
    /// Fraction in `0.0..=1.0`.
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
