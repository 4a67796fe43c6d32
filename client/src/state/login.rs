//! Login form controller.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use plans::endpoints::POST_LOGIN_REDIRECT;
use plans::login::{LoginError, validate_credentials};

use crate::net::api::PlannerApi;

pub const LOGIN_SUCCEEDED: &str = "Login successful!";
pub const LOGIN_ERRORED: &str = "An error occurred during login. Please try again.";

/// What the login page should do after a submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Blocked client-side; nothing was sent.
    Invalid(LoginError),
    /// Server accepted the credentials.
    Redirect(&'static str),
    /// Server answered but refused the credentials.
    Rejected(String),
    /// Transport or decode failure.
    Failed,
}

impl LoginOutcome {
    /// Alert shown to the user for this outcome.
    pub fn alert_text(&self) -> String {
        match self {
            Self::Invalid(error) => error.to_string(),
            Self::Redirect(_) => LOGIN_SUCCEEDED.to_owned(),
            Self::Rejected(message) => format!("Login failed: {message}"),
            Self::Failed => LOGIN_ERRORED.to_owned(),
        }
    }
}

/// Validate the inputs and, if they pass, submit them.
pub async fn submit_login<A: PlannerApi>(api: &A, email: &str, password: &str) -> LoginOutcome {
    let credentials = match validate_credentials(email, password) {
        Ok(credentials) => credentials,
        Err(error) => return LoginOutcome::Invalid(error),
    };

    log::debug!("attempting login for {}", credentials.email);
    match api.login(&credentials).await {
        Ok(resp) if resp.success => LoginOutcome::Redirect(POST_LOGIN_REDIRECT),
        Ok(resp) => LoginOutcome::Rejected(resp.message.unwrap_or_else(|| "unknown error".to_owned())),
        Err(e) => {
            log::error!("login request failed: {e}");
            LoginOutcome::Failed
        }
    }
}
