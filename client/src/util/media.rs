//! Camera and canvas plumbing for the expression-feedback widget.
//!
//! All functions are browser-only; the widget calls them from `csr` blocks.

#[cfg(feature = "csr")]
use plans::capture::{JPEG_MIME, JPEG_QUALITY, Playback};
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(feature = "csr")]
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

/// Ask for the camera and return the live stream, unbound.
///
/// # Errors
///
/// Returns a readable message when the browser has no camera API or the user
/// denies permission.
#[cfg(feature = "csr")]
pub async fn open_camera() -> Result<MediaStream, String> {
    use wasm_bindgen_futures::JsFuture;

    let devices = web_sys::window()
        .ok_or("no window")?
        .navigator()
        .media_devices()
        .map_err(js_error)?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(js_error)?;
    JsFuture::from(promise)
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)
}

/// Bind `stream` to `video` and start playback.
///
/// # Errors
///
/// Returns a readable message when the browser refuses to play.
#[cfg(feature = "csr")]
pub async fn attach(video: &HtmlVideoElement, stream: &MediaStream) -> Result<(), String> {
    use wasm_bindgen_futures::JsFuture;

    video.set_src_object(Some(stream));
    let play = video.play().map_err(js_error)?;
    JsFuture::from(play).await.map_err(js_error)?;
    Ok(())
}

/// Current playback flags of `video`.
#[cfg(feature = "csr")]
pub fn playback(video: &HtmlVideoElement) -> Playback {
    Playback {
        paused: video.paused(),
        ended: video.ended(),
        ready_state: video.ready_state(),
    }
}

/// Draw the current video frame onto `canvas` and encode it as a JPEG data URL.
#[cfg(feature = "csr")]
pub fn capture_frame(video: &HtmlVideoElement, canvas: &HtmlCanvasElement) -> Option<String> {
    let (width, height) = (video.video_width(), video.video_height());
    if width == 0 || height == 0 {
        return None;
    }
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx = context_2d(canvas)?;
    ctx.draw_image_with_html_video_element(video, 0.0, 0.0).ok()?;
    canvas
        .to_data_url_with_type_and_encoder_options(JPEG_MIME, &JsValue::from_f64(JPEG_QUALITY))
        .ok()
}

/// Stop every track and unbind the stream from `video`.
#[cfg(feature = "csr")]
pub fn release(stream: &MediaStream, video: Option<&HtmlVideoElement>) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
    if let Some(video) = video {
        video.set_src_object(None);
    }
}

/// Wipe the off-screen capture canvas.
#[cfg(feature = "csr")]
pub fn clear_canvas(canvas: &HtmlCanvasElement) {
    if let Some(ctx) = context_2d(canvas) {
        ctx.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
    }
}

#[cfg(feature = "csr")]
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

#[cfg(feature = "csr")]
fn js_error(value: JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
