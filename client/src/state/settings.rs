//! Settings page controller.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use plans::settings::SettingsForm;

use crate::net::api::PlannerApi;

/// Result banner shown after a save attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Banner {
    Success,
    Error,
}

impl Banner {
    pub fn text(self) -> &'static str {
        match self {
            Self::Success => "Settings saved successfully.",
            Self::Error => "Error saving settings. Please try again.",
        }
    }
}

/// Settings page state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsState {
    pub form: SettingsForm,
    pub banner: Option<Banner>,
    pub saving: bool,
}

/// Load stored settings into a form. `None` leaves the defaults in place.
pub async fn load_form<A: PlannerApi>(api: &A) -> Option<SettingsForm> {
    match api.load_settings().await {
        Ok(blob) => Some(SettingsForm::from_blob(&blob)),
        Err(e) => {
            log::error!("error loading initial settings: {e}");
            None
        }
    }
}

/// Save the form, sending only non-empty fields.
pub async fn save_form<A: PlannerApi>(api: &A, form: &SettingsForm) -> Banner {
    match api.save_settings(&form.to_payload()).await {
        Ok(()) => Banner::Success,
        Err(e) => {
            log::error!("error saving settings: {e}");
            Banner::Error
        }
    }
}
