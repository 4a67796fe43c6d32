//! Study-plan form and results state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the plan form and the chat widget render into the same results
//! panel, so the planner page owns one `PlanState` signal and hands it to
//! both. Each generation replaces the view wholesale.

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use plans::form::{FormFields, field};
use plans::{PlanView, StudyPlanRequest, StudyPlanResult};

use crate::net::api::{ApiError, PlannerApi};

pub const GENERATION_FAILED: &str =
    "An error occurred while generating your study plan. Please try again.";
pub const DOWNLOAD_PENDING: &str =
    "PDF download functionality will be implemented in future updates.";

/// Example topics offered as one-click buttons.
pub const EXAMPLE_TOPICS: [&str; 4] = [
    "Machine Learning Fundamentals",
    "Spanish for Beginners",
    "Linear Algebra",
    "Web Development with Rust",
];

/// DOM ids the page scrolls to.
pub const FORM_ID: &str = "studyPlanForm";
pub const RESULTS_ID: &str = "resultsSection";

/// Raw values of the plan form inputs, as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanFormInput {
    pub topic: String,
    pub goals: String,
    pub depth_level: String,
    pub duration_weeks: String,
    pub include_resources: bool,
    pub generate_goals: bool,
    pub learning_style: String,
    pub prior_knowledge: String,
    pub additional_context: String,
    pub language: String,
}

impl Default for PlanFormInput {
    fn default() -> Self {
        Self {
            topic: String::new(),
            goals: String::new(),
            depth_level: "3".to_owned(),
            duration_weeks: "4".to_owned(),
            include_resources: true,
            generate_goals: false,
            learning_style: String::new(),
            prior_knowledge: String::new(),
            additional_context: String::new(),
            language: String::new(),
        }
    }
}

impl PlanFormInput {
    /// Serialize the inputs the way a submitted `<form>` would.
    pub fn to_fields(&self) -> FormFields {
        let mut fields = FormFields::new();
        fields.push(field::TOPIC, self.topic.as_str());
        fields.push(field::GOALS, self.goals.as_str());
        fields.push(field::DEPTH_LEVEL, self.depth_level.as_str());
        fields.push(field::DURATION_WEEKS, self.duration_weeks.as_str());
        fields.push_checkbox(field::INCLUDE_RESOURCES, self.include_resources);
        fields.push_checkbox(field::GENERATE_GOALS, self.generate_goals);
        fields.push(field::LEARNING_STYLE, self.learning_style.as_str());
        fields.push(field::PRIOR_KNOWLEDGE, self.prior_knowledge.as_str());
        fields.push(field::ADDITIONAL_CONTEXT, self.additional_context.as_str());
        fields.push(field::LANGUAGE, self.language.as_str());
        fields
    }
}

/// Loading flag plus the currently rendered plan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanState {
    pub loading: bool,
    pub view: Option<PlanView>,
}

impl PlanState {
    /// A request is going out: show the spinner, hide old results.
    pub fn begin(&mut self) {
        self.loading = true;
        self.view = None;
    }

    /// Render a fresh plan, replacing whatever was shown before.
    pub fn show(&mut self, result: &StudyPlanResult) {
        self.loading = false;
        self.view = Some(PlanView::from_result(result));
    }

    /// Generation failed: hide the spinner, keep results hidden.
    pub fn fail(&mut self) {
        self.loading = false;
        self.view = None;
    }

    /// "New plan": back to an empty form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn results_visible(&self) -> bool {
        !self.loading && self.view.is_some()
    }
}

/// Send one generation request, logging failures.
///
/// # Errors
///
/// Propagates the [`ApiError`] for the caller's failure path.
pub async fn fetch_plan<A: PlannerApi>(
    api: &A,
    request: &StudyPlanRequest,
) -> Result<StudyPlanResult, ApiError> {
    log::info!("generating study plan for {:?}", request.topic);
    api.generate_study_plan(request).await.inspect_err(|e| {
        log::error!("error generating study plan: {e}");
    })
}
