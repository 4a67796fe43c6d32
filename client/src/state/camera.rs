//! Camera expression-feedback controller.
//!
//! DESIGN
//! ======
//! The feature flag is read once when the widget mounts. Until it loads, and
//! whenever it is off, the widget stays hidden and `request_start` refuses.
//! Media handles themselves live in the component; this state only tracks
//! what the UI shows.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use plans::capture::{CaptureStatus, feedback_label};
use plans::settings::facial_analysis_enabled;

use crate::net::api::PlannerApi;

pub const FEATURE_DISABLED: &str = "Facial analysis is disabled. Enable it on the settings page.";
pub const AWAITING_FEEDBACK: &str = "Waiting for analysis...";

/// What the camera widget shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CameraState {
    pub enabled: bool,
    pub status: CaptureStatus,
    pub feedback: String,
    generation: u64,
}

impl CameraState {
    /// Gate a start click. `Ok` carries the generation this start owns;
    /// `Err` carries the alert to show.
    ///
    /// # Errors
    ///
    /// Refuses when the feature is disabled or capture is already running.
    pub fn request_start(&mut self) -> Result<u64, &'static str> {
        if !self.enabled {
            return Err(FEATURE_DISABLED);
        }
        if !self.status.can_start() {
            return Err("The camera is already running.");
        }
        self.generation = self.generation.wrapping_add(1);
        self.status = CaptureStatus::Starting;
        Ok(self.generation)
    }

    /// Whether the start holding `generation` may still bind its stream.
    ///
    /// False once a stop, or a stop followed by a newer start, has intervened.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation && self.status == CaptureStatus::Starting
    }

    /// Stream acquired and bound; the capture loop is ticking.
    pub fn started(&mut self) {
        self.status = CaptureStatus::Running;
        AWAITING_FEEDBACK.clone_into(&mut self.feedback);
    }

    /// Back to the idle UI. Safe to call in any state.
    pub fn stopped(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.status = CaptureStatus::Stopped;
        self.feedback.clear();
    }

    /// Update the label, ignoring late responses once capture has stopped.
    pub fn record_feedback(&mut self, label: String) {
        if self.status == CaptureStatus::Running {
            self.feedback = label;
        }
    }
}

/// Fetch the facial-analysis flag. Any failure leaves the feature off.
pub async fn load_feature_flag<A: PlannerApi>(api: &A) -> bool {
    match api.load_settings().await {
        Ok(blob) => facial_analysis_enabled(&blob),
        Err(e) => {
            log::warn!("could not load facial analysis setting: {e}");
            false
        }
    }
}

/// Post one captured frame and turn the answer into a feedback label.
///
/// Returns `None` on failure so the previous label stays up.
pub async fn analyze_frame<A: PlannerApi>(api: &A, data_url: &str) -> Option<String> {
    match api.analyze_expression(data_url).await {
        Ok(result) => Some(feedback_label(&result)),
        Err(e) => {
            log::error!("error analyzing expression: {e}");
            None
        }
    }
}
