//! getUserMedia plumbing: acquiring the stream, wiring it to the preview
//! video element, snapshotting a frame and releasing the hardware.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Requests camera access. Resolves once the user grants permission; a denial
/// or missing device surfaces as the error string.
pub async fn open() -> Result<MediaStream, String> {
    let window = web_sys::window().ok_or_else(|| "no window available".to_string())?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| describe(&e))?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::from_bool(true));

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| describe(&e))?;
    let stream = JsFuture::from(promise).await.map_err(|e| describe(&e))?;

    stream
        .dyn_into::<MediaStream>()
        .map_err(|_| "getUserMedia did not return a media stream".to_string())
}

pub fn attach(stream: &MediaStream, video: &HtmlVideoElement) {
    video.set_src_object(Some(stream));
    let _ = video.play();
}

/// Stops every track so the hardware light goes off, and detaches the stream
/// from the preview element if it is still mounted.
pub fn shutdown(stream: &MediaStream, video: Option<&HtmlVideoElement>) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
    if let Some(video) = video {
        video.set_src_object(None);
    }
}

/// Snapshots the current video frame through the hidden canvas and returns it
/// as a JPEG data URL.
pub fn capture_frame(
    video: &HtmlVideoElement,
    canvas: &HtmlCanvasElement,
) -> Result<String, String> {
    canvas.set_width(video.video_width());
    canvas.set_height(video.video_height());

    let context = canvas
        .get_context("2d")
        .map_err(|e| describe(&e))?
        .ok_or_else(|| "canvas has no 2d context".to_string())?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "canvas context is not 2d".to_string())?;

    context
        .draw_image_with_html_video_element(video, 0.0, 0.0)
        .map_err(|e| describe(&e))?;

    canvas
        .to_data_url_with_type("image/jpeg")
        .map_err(|e| describe(&e))
}
