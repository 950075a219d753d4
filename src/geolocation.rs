use futures::channel::oneshot;
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Position as GeolocationPosition, PositionError as GeolocationPositionError};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LocationError {
	#[error("Geolocation is not supported by this browser")]
	Unsupported,
	#[error("Failed to get location: {0}")]
	Failed(String),
}

/// One-shot position fix as `(latitude, longitude)`.
pub async fn current_position() -> Result<(f64, f64), LocationError> {
	let geolocation = gloo_utils::window()
		.navigator()
		.geolocation()
		.map_err(|_| LocationError::Unsupported)?;

	let (send, recv) = oneshot::channel();
	let send = std::rc::Rc::new(std::cell::RefCell::new(Some(send)));
	let on_success = {
		let send = send.clone();
		Closure::once(move |position: GeolocationPosition| {
			let coords = position.coords();
			if let Some(send) = send.borrow_mut().take() {
				let _ = send.send(Ok((coords.latitude(), coords.longitude())));
			}
		})
	};
	let on_error = Closure::once(move |error: GeolocationPositionError| {
		if let Some(send) = send.borrow_mut().take() {
			let _ = send.send(Err(LocationError::Failed(error.message())));
		}
	});
	geolocation
		.get_current_position_with_error_callback(
			on_success.as_ref().unchecked_ref(),
			Some(on_error.as_ref().unchecked_ref()),
		)
		.map_err(|err| LocationError::Failed(crate::util::error::js_message(&err)))?;

	// the closures must outlive the browser's callback
	let result = recv.await.map_err(|_| LocationError::Failed("request was dropped".to_owned()))?;
	drop((on_success, on_error));
	result
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn messages() {
		assert_eq!(
			LocationError::Unsupported.to_string(),
			"Geolocation is not supported by this browser"
		);
		assert_eq!(
			LocationError::Failed("User denied Geolocation".into()).to_string(),
			"Failed to get location: User denied Geolocation"
		);
	}
}
