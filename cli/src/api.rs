//! Async HTTP client for the planner server.
//!
//! Mirrors the browser client's calls over `reqwest`. Any non-2xx status is a
//! failure carrying the response body, except login, whose body is decoded
//! first so the server's rejection message reaches the user.

use plans::endpoints;
use plans::settings::SettingsBlob;
use plans::types::ExpressionRequest;
use plans::{Credentials, ExpressionResult, LoginResponse, StudyPlanRequest};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::CliError;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.to_owned(),
        })
    }

    fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    pub async fn health(&self) -> Result<(), CliError> {
        let response = self.http.get(self.url(endpoints::HEALTH)).send().await?;
        ensure_success(response).await.map(drop)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, CliError> {
        let response = self
            .http
            .post(self.url(endpoints::LOGIN))
            .json(credentials)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        match serde_json::from_str::<LoginResponse>(&text) {
            Ok(body) => Ok(body),
            Err(_) if !status.is_success() => Err(CliError::Status {
                status: status.as_u16(),
                body: text,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Raw response body, so `--json` can echo fields the typed model drops.
    pub async fn generate_study_plan(&self, request: &StudyPlanRequest) -> Result<Value, CliError> {
        self.post_json(endpoints::GENERATE_STUDY_PLAN, request).await
    }

    pub async fn suggestions(&self, query: &str) -> Result<Vec<String>, CliError> {
        let response = self
            .http
            .get(self.url(endpoints::SUGGESTIONS))
            .query(&[("query", query)])
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn trending_topics(&self) -> Result<Vec<String>, CliError> {
        self.get_json(endpoints::TRENDING_TOPICS).await
    }

    pub async fn analyze_expression(&self, image: String) -> Result<ExpressionResult, CliError> {
        self.post_json(endpoints::ANALYZE_EXPRESSION, &ExpressionRequest { image })
            .await
    }

    pub async fn load_settings(&self) -> Result<SettingsBlob, CliError> {
        self.get_json(endpoints::SETTINGS_GET).await
    }

    pub async fn save_settings(&self, payload: &Map<String, Value>) -> Result<(), CliError> {
        let response = self
            .http
            .post(self.url(endpoints::SETTINGS_SAVE))
            .json(payload)
            .send()
            .await?;
        ensure_success(response).await.map(drop)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CliError> {
        let response = self.http.get(self.url(path)).send().await?;
        read_json(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, CliError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        read_json(response).await
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CliError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(CliError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CliError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<T>().await?)
}
