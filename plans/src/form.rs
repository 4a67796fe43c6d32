//! Raw form submissions and their normalization into request payloads.
//!
//! A browser form posts an ordered list of `name=value` pairs where unchecked
//! checkboxes are simply absent. `FormFields` models exactly that, so the
//! normalization rules can be exercised without a document.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde_json::{Map, Value};

use crate::types::StudyPlanRequest;

/// Form control names used by the study-plan form.
pub mod field {
    pub const TOPIC: &str = "topic";
    pub const GOALS: &str = "goals";
    pub const DEPTH_LEVEL: &str = "depth_level";
    pub const DURATION_WEEKS: &str = "duration_weeks";
    pub const INCLUDE_RESOURCES: &str = "include_resources";
    pub const GENERATE_GOALS: &str = "generate_goals";
    pub const LEARNING_STYLE: &str = "learning_style";
    pub const PRIOR_KNOWLEDGE: &str = "prior_knowledge";
    pub const ADDITIONAL_CONTEXT: &str = "additional_context";
    pub const LANGUAGE: &str = "language";
}

/// Value a checked checkbox submits.
pub const CHECKBOX_ON: &str = "on";

/// Validation failure raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a topic to study.")]
    MissingTopic,
    #[error("`{field}` must be a whole number, got `{value}`")]
    InvalidNumber { field: &'static str, value: String },
}

/// Ordered `name=value` pairs as submitted by an HTML form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    entries: Vec<(String, String)>,
}

impl FormFields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Repeated names are kept in order like `FormData`.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Append a checkbox: present with `"on"` when checked, absent otherwise.
    pub fn push_checkbox(&mut self, name: impl Into<String>, checked: bool) {
        if checked {
            self.push(name, CHECKBOX_ON);
        }
    }

    /// First value submitted under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON object of every field with a non-empty value.
    ///
    /// Used by the settings form so blank inputs never overwrite stored values.
    #[must_use]
    pub fn non_empty_json(&self) -> Map<String, Value> {
        let mut out = Map::new();
        for (key, value) in self.iter() {
            if !value.is_empty() {
                out.insert(key.to_owned(), Value::String(value.to_owned()));
            }
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (k, v) in iter {
            fields.push(k, v);
        }
        fields
    }
}

/// Split a comma-separated goals string into trimmed, non-empty goals.
#[must_use]
pub fn split_goals(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|goal| !goal.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Normalize a study-plan form submission into a request payload.
///
/// Blank fields are omitted, goals are split on commas, checkboxes become
/// booleans and numeric fields are parsed as integers.
///
/// # Errors
///
/// Returns [`FormError::MissingTopic`] when the topic is blank and
/// [`FormError::InvalidNumber`] when a numeric field does not parse.
pub fn normalize_request(fields: &FormFields) -> Result<StudyPlanRequest, FormError> {
    let mut req = StudyPlanRequest::default();

    for (key, value) in fields.iter() {
        match key {
            field::GOALS => {
                let goals = split_goals(value);
                if !goals.is_empty() {
                    req.goals = Some(goals);
                }
            }
            field::INCLUDE_RESOURCES => req.include_resources = Some(value == CHECKBOX_ON),
            field::GENERATE_GOALS => req.generate_goals = Some(value == CHECKBOX_ON),
            field::DEPTH_LEVEL => req.depth_level = parse_number(field::DEPTH_LEVEL, value)?,
            field::DURATION_WEEKS => {
                req.duration_weeks = parse_number(field::DURATION_WEEKS, value)?;
            }
            _ if value.trim().is_empty() => {}
            field::TOPIC => req.topic = value.trim().to_owned(),
            field::LEARNING_STYLE => req.learning_style = Some(value.to_owned()),
            field::PRIOR_KNOWLEDGE => req.prior_knowledge = Some(value.to_owned()),
            field::ADDITIONAL_CONTEXT => req.additional_context = Some(value.to_owned()),
            field::LANGUAGE => req.language = Some(value.to_owned()),
            _ => {}
        }
    }

    if req.topic.is_empty() {
        return Err(FormError::MissingTopic);
    }
    Ok(req)
}

fn parse_number(field: &'static str, value: &str) -> Result<Option<u32>, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| FormError::InvalidNumber {
            field,
            value: value.to_owned(),
        })
}
