//! REST API calls against the planner server.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Any non-2xx status becomes [`ApiError::Status`] regardless of body, with
//! one exception: login decodes the body first so the server's rejection
//! message can be shown.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use plans::settings::SettingsBlob;
use plans::{Credentials, ExpressionResult, LoginResponse, StudyPlanRequest, StudyPlanResult};
use serde_json::{Map, Value};

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP error! Status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Every server call the client makes.
#[allow(async_fn_in_trait)]
pub trait PlannerApi {
    /// `POST /api/login`.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `POST /api/generate-study-plan`.
    async fn generate_study_plan(
        &self,
        request: &StudyPlanRequest,
    ) -> Result<StudyPlanResult, ApiError>;

    /// `GET /api/suggestions?query=`.
    async fn suggestions(&self, query: &str) -> Result<Vec<String>, ApiError>;

    /// `POST /api/analyze-expression` with a frame data URL.
    async fn analyze_expression(&self, image: &str) -> Result<ExpressionResult, ApiError>;

    /// `GET /api/settings/get`.
    async fn load_settings(&self) -> Result<SettingsBlob, ApiError>;

    /// `POST /settings`.
    async fn save_settings(&self, payload: &Map<String, Value>) -> Result<(), ApiError>;
}

/// Same-origin API client backed by the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserApi;

impl PlannerApi for BrowserApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(plans::endpoints::LOGIN)
                .json(credentials)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let status = resp.status();
            match resp.json::<LoginResponse>().await {
                Ok(body) => Ok(body),
                Err(_) if !(200..300).contains(&status) => Err(ApiError::Status(status)),
                Err(e) => Err(ApiError::Decode(e.to_string())),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn generate_study_plan(
        &self,
        request: &StudyPlanRequest,
    ) -> Result<StudyPlanResult, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(plans::endpoints::GENERATE_STUDY_PLAN)
                .json(request)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn suggestions(&self, query: &str) -> Result<Vec<String>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(plans::endpoints::SUGGESTIONS)
                .query([("query", query)])
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = query;
            Err(ApiError::Unavailable)
        }
    }

    async fn analyze_expression(&self, image: &str) -> Result<ExpressionResult, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = plans::types::ExpressionRequest {
                image: image.to_owned(),
            };
            let resp = gloo_net::http::Request::post(plans::endpoints::ANALYZE_EXPRESSION)
                .json(&body)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = image;
            Err(ApiError::Unavailable)
        }
    }

    async fn load_settings(&self) -> Result<SettingsBlob, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(plans::endpoints::SETTINGS_GET)
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn save_settings(&self, payload: &Map<String, Value>) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(plans::endpoints::SETTINGS_SAVE)
                .json(payload)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn transport(error: gloo_net::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

#[cfg(feature = "csr")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
