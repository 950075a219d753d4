//! Rear camera feed for the AR smog scope.

use crate::util::error::BrowserError;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Slider position (0..=100) as overlay opacity.
pub fn smog_opacity(level: u8) -> f64 {
	f64::from(level.min(100)) / 100.0
}

pub fn smog_label(level: u8) -> String {
	format!("{}%", level.min(100))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VideoConstraints {
	facing_mode: &'static str,
}

/// Asks for the environment-facing camera.
pub async fn open_rear_camera() -> Result<web_sys::MediaStream, BrowserError> {
	let devices = gloo_utils::window().navigator().media_devices()?;
	let constraints = web_sys::MediaStreamConstraints::new();
	let video = serde_wasm_bindgen::to_value(&VideoConstraints {
		facing_mode: "environment",
	})
	.map_err(|err| BrowserError(err.to_string()))?;
	constraints.set_video(&video);
	let stream = JsFuture::from(devices.get_user_media_with_constraints(&constraints)?).await?;
	Ok(stream.unchecked_into())
}

/// Stops every track so the browser releases the camera.
pub fn stop(stream: &web_sys::MediaStream) {
	for track in stream.get_tracks().iter() {
		if let Some(track) = track.dyn_ref::<web_sys::MediaStreamTrack>() {
			track.stop();
		}
	}
}
