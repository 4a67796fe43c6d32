//! Scriptable in-memory `PlannerApi` for controller tests.

use std::cell::RefCell;

use plans::settings::SettingsBlob;
use plans::{Credentials, ExpressionResult, LoginResponse, StudyPlanRequest, StudyPlanResult};
use serde_json::{Map, Value};

use super::api::{ApiError, PlannerApi};

/// One recorded API call.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    Login(Credentials),
    Generate(StudyPlanRequest),
    Suggestions(String),
    Analyze(String),
    LoadSettings,
    SaveSettings(Map<String, Value>),
}

/// Returns canned responses and records every call it receives.
pub(crate) struct FakeApi {
    pub(crate) calls: RefCell<Vec<Call>>,
    pub login: Result<LoginResponse, ApiError>,
    pub plan: Result<StudyPlanResult, ApiError>,
    pub suggestions: Result<Vec<String>, ApiError>,
    pub expression: Result<ExpressionResult, ApiError>,
    pub settings: Result<SettingsBlob, ApiError>,
    pub save: Result<(), ApiError>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            login: Err(ApiError::Status(500)),
            plan: Err(ApiError::Status(500)),
            suggestions: Err(ApiError::Status(500)),
            expression: Err(ApiError::Status(500)),
            settings: Err(ApiError::Status(500)),
            save: Err(ApiError::Status(500)),
        }
    }
}

impl FakeApi {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl PlannerApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.record(Call::Login(credentials.clone()));
        self.login.clone()
    }

    async fn generate_study_plan(
        &self,
        request: &StudyPlanRequest,
    ) -> Result<StudyPlanResult, ApiError> {
        self.record(Call::Generate(request.clone()));
        self.plan.clone()
    }

    async fn suggestions(&self, query: &str) -> Result<Vec<String>, ApiError> {
        self.record(Call::Suggestions(query.to_owned()));
        self.suggestions.clone()
    }

    async fn analyze_expression(&self, image: &str) -> Result<ExpressionResult, ApiError> {
        self.record(Call::Analyze(image.to_owned()));
        self.expression.clone()
    }

    async fn load_settings(&self) -> Result<SettingsBlob, ApiError> {
        self.record(Call::LoadSettings);
        self.settings.clone()
    }

    async fn save_settings(&self, payload: &Map<String, Value>) -> Result<(), ApiError> {
        self.record(Call::SaveSettings(payload.clone()));
        self.save.clone()
    }
}
