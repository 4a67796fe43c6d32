//! Decisions for the camera expression-feedback loop.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

use crate::types::ExpressionResult;

/// Period between frame captures.
pub const CAPTURE_INTERVAL_MS: u32 = 1_000;

/// JPEG quality passed to the canvas encoder.
pub const JPEG_QUALITY: f64 = 0.8;

pub const JPEG_MIME: &str = "image/jpeg";

/// Label shown when the server returns neither an expression nor a message.
pub const INCONCLUSIVE: &str = "Inconclusive";

/// `HTMLMediaElement.HAVE_CURRENT_DATA`.
const HAVE_CURRENT_DATA: u16 = 2;

/// Snapshot of a video element's playback flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Playback {
    pub paused: bool,
    pub ended: bool,
    pub ready_state: u16,
}

impl Playback {
    /// A tick only captures while the video is actively playing a frame.
    #[must_use]
    pub fn is_playing(self) -> bool {
        !self.paused && !self.ended && self.ready_state >= HAVE_CURRENT_DATA
    }
}

/// Lifecycle of the capture widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureStatus {
    #[default]
    Stopped,
    Starting,
    Running,
}

impl CaptureStatus {
    #[must_use]
    pub fn status_text(self) -> &'static str {
        match self {
            Self::Stopped => "Camera off",
            Self::Starting => "Starting camera...",
            Self::Running => "Camera on, analyzing expressions",
        }
    }

    #[must_use]
    pub fn can_start(self) -> bool {
        self == Self::Stopped
    }

    #[must_use]
    pub fn can_stop(self) -> bool {
        self != Self::Stopped
    }
}

/// Feedback line for one analysis response.
#[must_use]
pub fn feedback_label(result: &ExpressionResult) -> String {
    let expression = result.expression.as_deref().filter(|e| !e.is_empty());
    let message = result.message.as_deref().filter(|m| !m.is_empty());
    match (expression, result.confidence, message) {
        (Some(expression), Some(confidence), _) => {
            format!("{expression} ({:.2}%)", confidence * 100.0)
        }
        (Some(expression), None, _) => expression.to_owned(),
        (None, _, Some(message)) => message.to_owned(),
        (None, _, None) => INCONCLUSIVE.to_owned(),
    }
}
