//! Camera widget that reports the learner's facial expression.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hidden unless facial analysis is enabled in settings. While running, a
//! one-second interval grabs a JPEG frame from the live video and posts it
//! for analysis; the answer replaces the feedback line.
//!
//! TRADE-OFFS
//! ==========
//! Frames are skipped, not queued, while the video is paused or not yet
//! ready. Analysis requests are not sequenced, so a slow response can
//! briefly overwrite a newer one.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use plans::capture::CAPTURE_INTERVAL_MS;

use crate::net::api::BrowserApi;
use crate::state::camera::{CameraState, load_feature_flag};
#[cfg(feature = "csr")]
use crate::state::camera::analyze_frame;
use crate::util::dom;
#[cfg(feature = "csr")]
use crate::util::media;

/// Browser handles owned by one mounted widget.
#[cfg(feature = "csr")]
#[derive(Clone, Copy)]
struct Capture {
    stream: StoredValue<Option<web_sys::MediaStream>, LocalStorage>,
    ticker: StoredValue<Option<gloo_timers::callback::Interval>, LocalStorage>,
    video: NodeRef<leptos::html::Video>,
    canvas: NodeRef<leptos::html::Canvas>,
}

#[cfg(feature = "csr")]
impl Capture {
    fn new(video: NodeRef<leptos::html::Video>, canvas: NodeRef<leptos::html::Canvas>) -> Self {
        Self {
            stream: StoredValue::new_local(None),
            ticker: StoredValue::new_local(None),
            video,
            canvas,
        }
    }

    async fn start(self, camera: RwSignal<CameraState>, generation: u64) {
        let current = move || camera.with_untracked(|c| c.is_current(generation));
        let Some(video) = self.video.get_untracked() else {
            camera.update(CameraState::stopped);
            return;
        };
        let stream = match media::open_camera().await {
            Ok(stream) => stream,
            Err(e) => {
                log::error!("error accessing camera: {e}");
                if current() {
                    dom::alert(&format!("Could not access the camera: {e}"));
                    camera.update(CameraState::stopped);
                }
                return;
            }
        };

        // Stopped while the permission prompt was up; the video may already
        // belong to a newer start.
        if !current() {
            media::release(&stream, None);
            return;
        }

        self.stream.set_value(Some(stream.clone()));
        if let Err(e) = media::attach(&video, &stream).await {
            log::error!("error starting camera playback: {e}");
            if current() {
                dom::alert(&format!("Could not access the camera: {e}"));
                self.stop();
                camera.update(CameraState::stopped);
            }
            return;
        }
        if !current() {
            return;
        }

        let interval = gloo_timers::callback::Interval::new(CAPTURE_INTERVAL_MS, move || self.tick(camera));
        self.ticker.set_value(Some(interval));
        camera.update(CameraState::started);
    }

    fn tick(self, camera: RwSignal<CameraState>) {
        let (Some(video), Some(canvas)) = (self.video.get_untracked(), self.canvas.get_untracked())
        else {
            return;
        };
        if !media::playback(&video).is_playing() {
            return;
        }
        let Some(frame) = media::capture_frame(&video, &canvas) else {
            return;
        };
        leptos::task::spawn_local(async move {
            if let Some(label) = analyze_frame(&BrowserApi, &frame).await {
                camera.update(|c| c.record_feedback(label));
            }
        });
    }

    fn stop(self) {
        self.ticker.set_value(None);
        let video = self.video.get_untracked();
        self.stream.update_value(|stream| {
            if let Some(stream) = stream.take() {
                media::release(&stream, video.as_ref());
            }
        });
        if let Some(canvas) = self.canvas.get_untracked() {
            media::clear_canvas(&canvas);
        }
    }
}

#[component]
pub fn CameraWidget() -> impl IntoView {
    let camera = RwSignal::new(CameraState::default());
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    let capture = Capture::new(video_ref, canvas_ref);
    #[cfg(feature = "csr")]
    on_cleanup(move || capture.stop());

    leptos::task::spawn_local(async move {
        let enabled = load_feature_flag(&BrowserApi).await;
        camera.update(|c| c.enabled = enabled);
    });

    let on_start = move |_| {
        let mut gate = Ok(0);
        camera.update(|c| gate = c.request_start());
        let generation = match gate {
            Ok(generation) => generation,
            Err(message) => {
                dom::alert(message);
                return;
            }
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(capture.start(camera, generation));
        #[cfg(not(feature = "csr"))]
        {
            let _ = generation;
        }
    };

    let on_stop = move |_| {
        #[cfg(feature = "csr")]
        capture.stop();
        camera.update(CameraState::stopped);
    };

    view! {
        <Show when=move || camera.with(|c| c.enabled)>
            <div class="camera-widget">
                <video
                    class="camera-widget__video"
                    node_ref=video_ref
                    autoplay=true
                    playsinline=true
                    prop:muted=true
                ></video>
                <canvas node_ref=canvas_ref style="display: none;"></canvas>
                <div class="camera-widget__status">
                    {move || camera.with(|c| c.status.status_text())}
                </div>
                <div class="camera-widget__feedback">{move || camera.get().feedback}</div>
                <div class="camera-widget__actions">
                    <button
                        class="btn btn--primary"
                        on:click=on_start
                        disabled=move || !camera.with(|c| c.status.can_start())
                    >
                        "Start Camera"
                    </button>
                    <button
                        class="btn"
                        on:click=on_stop
                        disabled=move || !camera.with(|c| c.status.can_stop())
                    >
                        "Stop Camera"
                    </button>
                </div>
            </div>
        </Show>
    }
}
