//! AI-provider settings form model.
//!
//! DESIGN
//! ======
//! Stored API keys never round-trip into input values. The form only learns
//! whether a key is configured and shows a masked placeholder, so a save with
//! the key input left blank keeps the stored key.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde_json::{Map, Value};

use crate::form::FormFields;

/// Settings as returned by `GET /api/settings/get`.
pub type SettingsBlob = Map<String, Value>;

/// Setting names shared with the server's environment file.
pub mod key {
    pub const AI_PROVIDER: &str = "AI_PROVIDER";
    pub const OLLAMA_HOST: &str = "OLLAMA_HOST";
    pub const OLLAMA_MODEL: &str = "OLLAMA_MODEL";
    pub const OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";
    pub const OPENROUTER_MODEL: &str = "OPENROUTER_MODEL";
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    pub const ENABLE_FACIAL_ANALYSIS: &str = "ENABLE_FACIAL_ANALYSIS";
}

/// Placeholder shown in a key input when a key is already stored.
pub const MASKED_PLACEHOLDER: &str = "********";

/// Supported AI providers; each owns one group of form fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Provider {
    #[default]
    Ollama,
    OpenRouter,
    Gemini,
}

impl Provider {
    pub const ALL: [Self; 3] = [Self::Ollama, Self::OpenRouter, Self::Gemini];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ollama => "ollama",
            Self::OpenRouter => "openrouter",
            Self::Gemini => "gemini",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ollama => "Ollama (local)",
            Self::OpenRouter => "OpenRouter",
            Self::Gemini => "Google Gemini",
        }
    }

    /// Parse a selector value. Unknown or missing values fall back to Ollama.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str().eq_ignore_ascii_case(value))
            .unwrap_or_default()
    }
}

/// Editable settings form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub provider: Provider,
    pub ollama_host: String,
    pub ollama_model: String,
    /// Always starts blank; typing a value replaces the stored key.
    pub openrouter_api_key: String,
    pub openrouter_model: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub enable_facial_analysis: bool,
    pub openrouter_key_placeholder: String,
    pub gemini_key_placeholder: String,
}

impl SettingsForm {
    /// Populate the form from stored settings.
    #[must_use]
    pub fn from_blob(blob: &SettingsBlob) -> Self {
        Self {
            provider: Provider::parse(&string_setting(blob, key::AI_PROVIDER)),
            ollama_host: string_setting(blob, key::OLLAMA_HOST),
            ollama_model: string_setting(blob, key::OLLAMA_MODEL),
            openrouter_api_key: String::new(),
            openrouter_model: string_setting(blob, key::OPENROUTER_MODEL),
            gemini_api_key: String::new(),
            gemini_model: string_setting(blob, key::GEMINI_MODEL),
            enable_facial_analysis: facial_analysis_enabled(blob),
            openrouter_key_placeholder: masked_placeholder(blob, key::OPENROUTER_API_KEY),
            gemini_key_placeholder: masked_placeholder(blob, key::GEMINI_API_KEY),
        }
    }

    /// Form fields in document order, as the browser would submit them.
    #[must_use]
    pub fn to_fields(&self) -> FormFields {
        let mut fields = FormFields::new();
        fields.push(key::AI_PROVIDER, self.provider.as_str());
        fields.push(key::OLLAMA_HOST, self.ollama_host.trim());
        fields.push(key::OLLAMA_MODEL, self.ollama_model.trim());
        fields.push(key::OPENROUTER_API_KEY, self.openrouter_api_key.trim());
        fields.push(key::OPENROUTER_MODEL, self.openrouter_model.trim());
        fields.push(key::GEMINI_API_KEY, self.gemini_api_key.trim());
        fields.push(key::GEMINI_MODEL, self.gemini_model.trim());
        if self.enable_facial_analysis {
            fields.push(key::ENABLE_FACIAL_ANALYSIS, "true");
        }
        fields
    }

    /// JSON body for `POST /settings`: blank fields stripped.
    #[must_use]
    pub fn to_payload(&self) -> Map<String, Value> {
        self.to_fields().non_empty_json()
    }
}

/// Whether the camera feedback feature is switched on.
///
/// Accepts a JSON bool or the strings `true`, `1`, `yes` in any case.
#[must_use]
pub fn facial_analysis_enabled(blob: &SettingsBlob) -> bool {
    match blob.get(key::ENABLE_FACIAL_ANALYSIS) {
        Some(Value::Bool(enabled)) => *enabled,
        Some(Value::String(raw)) => {
            let raw = raw.trim();
            ["true", "1", "yes"].iter().any(|on| raw.eq_ignore_ascii_case(on))
        }
        _ => false,
    }
}

/// Placeholder for a secret input: masked when a value is stored.
#[must_use]
pub fn masked_placeholder(blob: &SettingsBlob, name: &str) -> String {
    if string_setting(blob, name).is_empty() {
        String::new()
    } else {
        MASKED_PLACEHOLDER.to_owned()
    }
}

/// Copy of `blob` with every stored API key replaced by the mask.
#[must_use]
pub fn mask_secrets(blob: &SettingsBlob) -> SettingsBlob {
    let mut out = blob.clone();
    for name in [key::OPENROUTER_API_KEY, key::GEMINI_API_KEY] {
        if out.contains_key(name) {
            out.insert(name.to_owned(), Value::String(masked_placeholder(blob, name)));
        }
    }
    out
}

fn string_setting(blob: &SettingsBlob, name: &str) -> String {
    match blob.get(name) {
        Some(Value::String(value)) => value.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
