use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

/// Current text of the input or textarea that fired `event`.
pub fn target_value(event: &web_sys::Event) -> String {
	let Some(target) = event.target() else {
		return String::new();
	};
	if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
		return input.value();
	}
	if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
		return area.value();
	}
	String::new()
}

/// Blocking `window.confirm`; a browser without dialogs counts as "no".
pub fn confirm(message: &str) -> bool {
	gloo_utils::window().confirm_with_message(message).unwrap_or(false)
}
