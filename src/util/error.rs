use wasm_bindgen::{JsCast, JsValue};

/// Browser APIs reject with whatever the engine felt like throwing.
/// This picks the most readable description out of it.
pub fn js_message(value: &JsValue) -> String {
	if let Some(exception) = value.dyn_ref::<web_sys::DomException>() {
		return exception.message();
	}
	if let Some(text) = value.as_string() {
		return text;
	}
	format!("{value:?}")
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct BrowserError(pub String);

impl From<JsValue> for BrowserError {
	fn from(value: JsValue) -> Self {
		Self(js_message(&value))
	}
}
