use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
	/// Chrome and Safari only expose the prefixed constructor.
	#[wasm_bindgen(js_name = webkitSpeechRecognition)]
	pub type SpeechRecognition;

	#[wasm_bindgen(constructor, js_class = "webkitSpeechRecognition", catch)]
	pub fn new() -> Result<SpeechRecognition, JsValue>;

	#[wasm_bindgen(method, setter)]
	pub fn set_continuous(this: &SpeechRecognition, value: bool);

	#[wasm_bindgen(method, setter = interimResults)]
	pub fn set_interim_results(this: &SpeechRecognition, value: bool);

	#[wasm_bindgen(method, setter)]
	pub fn set_onresult(this: &SpeechRecognition, handler: Option<&JsValue>);

	#[wasm_bindgen(method, setter)]
	pub fn set_onerror(this: &SpeechRecognition, handler: Option<&JsValue>);

	#[wasm_bindgen(method, catch)]
	pub fn start(this: &SpeechRecognition) -> Result<(), JsValue>;

	#[wasm_bindgen(extends = web_sys::Event)]
	pub type SpeechRecognitionEvent;

	#[wasm_bindgen(method, getter)]
	pub fn results(this: &SpeechRecognitionEvent) -> SpeechRecognitionResultList;

	pub type SpeechRecognitionResultList;

	#[wasm_bindgen(method)]
	pub fn item(this: &SpeechRecognitionResultList, index: u32) -> Option<SpeechRecognitionResult>;

	pub type SpeechRecognitionResult;

	#[wasm_bindgen(method)]
	pub fn item(this: &SpeechRecognitionResult, index: u32) -> Option<SpeechRecognitionAlternative>;

	pub type SpeechRecognitionAlternative;

	#[wasm_bindgen(method, getter)]
	pub fn transcript(this: &SpeechRecognitionAlternative) -> String;

	#[wasm_bindgen(extends = web_sys::Event)]
	pub type SpeechRecognitionErrorEvent;

	#[wasm_bindgen(method, getter)]
	pub fn error(this: &SpeechRecognitionErrorEvent) -> String;
}

impl SpeechRecognitionEvent {
	/// Best alternative of the first result.
	pub fn first_transcript(&self) -> Option<String> {
		Some(self.results().item(0)?.item(0)?.transcript())
	}
}
