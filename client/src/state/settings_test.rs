use futures::executor::block_on;
use plans::settings::{MASKED_PLACEHOLDER, Provider, SettingsForm};
use serde_json::json;

use super::*;
use crate::net::api::ApiError;
use crate::net::fake::{Call, FakeApi};

#[test]
fn load_populates_form_with_masked_keys() {
    let serde_json::Value::Object(blob) = json!({
        "AI_PROVIDER": "gemini",
        "GEMINI_API_KEY": "AIza-secret",
        "GEMINI_MODEL": "gemini-1.5-flash"
    }) else {
        unreachable!("fixture is an object");
    };
    let api = FakeApi {
        settings: Ok(blob),
        ..FakeApi::default()
    };
    let form = block_on(load_form(&api)).unwrap();
    assert_eq!(form.provider, Provider::Gemini);
    assert_eq!(form.gemini_model, "gemini-1.5-flash");
    assert_eq!(form.gemini_api_key, "");
    assert_eq!(form.gemini_key_placeholder, MASKED_PLACEHOLDER);
}

#[test]
fn load_failure_keeps_defaults() {
    let api = FakeApi::default();
    assert_eq!(block_on(load_form(&api)), None);
}

#[test]
fn save_with_blank_fields_sends_only_provider() {
    let api = FakeApi {
        save: Ok(()),
        ..FakeApi::default()
    };
    let form = SettingsForm {
        provider: Provider::OpenRouter,
        ..SettingsForm::default()
    };
    assert_eq!(block_on(save_form(&api, &form)), Banner::Success);

    let serde_json::Value::Object(expected) = json!({ "AI_PROVIDER": "openrouter" }) else {
        unreachable!("fixture is an object");
    };
    assert_eq!(api.calls(), vec![Call::SaveSettings(expected)]);
}

#[test]
fn save_failure_shows_error_banner() {
    let api = FakeApi {
        save: Err(ApiError::Status(500)),
        ..FakeApi::default()
    };
    let banner = block_on(save_form(&api, &SettingsForm::default()));
    assert_eq!(banner, Banner::Error);
    assert_eq!(banner.text(), "Error saving settings. Please try again.");
}
