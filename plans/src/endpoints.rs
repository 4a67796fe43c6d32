//! Server API paths consumed by the client and CLI.

pub const LOGIN: &str = "/api/login";
pub const GENERATE_STUDY_PLAN: &str = "/api/generate-study-plan";
pub const SUGGESTIONS: &str = "/api/suggestions";
pub const ANALYZE_EXPRESSION: &str = "/api/analyze-expression";
pub const SETTINGS_SAVE: &str = "/settings";
pub const SETTINGS_GET: &str = "/api/settings/get";
pub const TRENDING_TOPICS: &str = "/api/topics/trending";
pub const HEALTH: &str = "/health";

/// Where the browser lands after a successful login.
pub const POST_LOGIN_REDIRECT: &str = "/dashboard";

/// Join a base URL and an absolute API path without doubling slashes.
#[must_use]
pub fn join(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_trims_trailing_slash() {
        assert_eq!(join("http://localhost:8000/", LOGIN), "http://localhost:8000/api/login");
        assert_eq!(join("http://localhost:8000", HEALTH), "http://localhost:8000/health");
    }
}
