//! Spoken questions about the dashboard. Only two topics are understood: the AQI and the weather.

use crate::{bindings::speech::SpeechRecognition, notification, util::error::BrowserError};
use wasm_bindgen::{prelude::Closure, JsCast};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCommand {
	Aqi,
	Weather,
	Unknown,
}

impl VoiceCommand {
	pub fn parse(transcript: &str) -> Self {
		let transcript = transcript.to_lowercase();
		if transcript.contains("aqi") || transcript.contains("air quality") {
			Self::Aqi
		} else if transcript.contains("weather") {
			Self::Weather
		} else {
			Self::Unknown
		}
	}
}

/// What the dashboard currently shows, as displayed text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Readings {
	pub aqi: String,
	pub level: String,
	pub temp: String,
	pub wind: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
	pub speech: String,
	pub notification: Option<String>,
}

pub fn respond(command: VoiceCommand, readings: &Readings) -> Reply {
	match command {
		VoiceCommand::Aqi => Reply {
			speech: format!(
				"The current Air Quality Index is {}, which is {}.",
				readings.aqi, readings.level
			),
			notification: Some(format!("AQI: {} ({})", readings.aqi, readings.level)),
		},
		VoiceCommand::Weather => Reply {
			speech: format!("Current weather is {} with wind speed {}", readings.temp, readings.wind),
			notification: None,
		},
		VoiceCommand::Unknown => Reply {
			speech: "I didn't understand that command. Try asking about AQI or weather.".to_owned(),
			notification: None,
		},
	}
}

/// Reads `text` aloud if the browser can.
pub fn speak(text: &str) {
	let Ok(synthesis) = gloo_utils::window().speech_synthesis() else {
		log::debug!(target: "voice", "speech synthesis unavailable");
		return;
	};
	match web_sys::SpeechSynthesisUtterance::new_with_text(text) {
		Ok(utterance) => {
			utterance.set_rate(0.9);
			utterance.set_pitch(1.0);
			synthesis.speak(&utterance);
		}
		Err(err) => log::error!(target: "voice", "{:?}", BrowserError::from(err)),
	}
}

/// A one-shot recognizer. Results go to `on_transcript`; the callbacks live as long as this does.
pub struct Listener {
	recognition: SpeechRecognition,
	_on_result: Closure<dyn FnMut(web_sys::Event)>,
	_on_error: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
	/// `None` when the browser has no speech recognition.
	pub fn new(on_transcript: impl Fn(String) + 'static) -> Option<Self> {
		let recognition = match SpeechRecognition::new() {
			Ok(recognition) => recognition,
			Err(err) => {
				log::info!(target: "voice", "speech recognition unsupported: {:?}", BrowserError::from(err));
				return None;
			}
		};
		recognition.set_continuous(false);
		recognition.set_interim_results(false);

		let on_result = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
			let event = event.unchecked_into::<crate::bindings::speech::SpeechRecognitionEvent>();
			if let Some(transcript) = event.first_transcript() {
				on_transcript(transcript.to_lowercase());
			}
		});
		let on_error = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
			let event = event.unchecked_into::<crate::bindings::speech::SpeechRecognitionErrorEvent>();
			log::error!(target: "voice", "speech recognition error: {}", event.error());
		});
		recognition.set_onresult(Some(on_result.as_ref()));
		recognition.set_onerror(Some(on_error.as_ref()));

		Some(Self {
			recognition,
			_on_result: on_result,
			_on_error: on_error,
		})
	}

	pub fn listen(&self) {
		match self.recognition.start() {
			Ok(()) => notification::info("Listening... Speak now"),
			Err(err) => notification::error(format!("Voice recognition error: {}", BrowserError::from(err))),
		}
	}
}

impl Drop for Listener {
	fn drop(&mut self) {
		self.recognition.set_onresult(None);
		self.recognition.set_onerror(None);
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn readings() -> Readings {
		Readings {
			aqi: "182".into(),
			level: "Moderate".into(),
			temp: "24°C".into(),
			wind: "11 km/h".into(),
		}
	}

	#[test]
	fn parses_topics() {
		assert_eq!(VoiceCommand::parse("What is the AQI today"), VoiceCommand::Aqi);
		assert_eq!(VoiceCommand::parse("how is the air quality"), VoiceCommand::Aqi);
		assert_eq!(VoiceCommand::parse("tell me the weather"), VoiceCommand::Weather);
		assert_eq!(VoiceCommand::parse("play some music"), VoiceCommand::Unknown);
	}

	#[test]
	fn aqi_takes_precedence_over_weather() {
		assert_eq!(VoiceCommand::parse("aqi and weather please"), VoiceCommand::Aqi);
	}

	#[test]
	fn aqi_reply_speaks_and_notifies() {
		let reply = respond(VoiceCommand::Aqi, &readings());
		assert_eq!(reply.speech, "The current Air Quality Index is 182, which is Moderate.");
		assert_eq!(reply.notification.as_deref(), Some("AQI: 182 (Moderate)"));
	}

	#[test]
	fn weather_reply_only_speaks() {
		let reply = respond(VoiceCommand::Weather, &readings());
		assert_eq!(reply.speech, "Current weather is 24°C with wind speed 11 km/h");
		assert_eq!(reply.notification, None);
	}

	#[test]
	fn unknown_reply_suggests_topics() {
		let reply = respond(VoiceCommand::Unknown, &readings());
		assert!(reply.speech.contains("Try asking about AQI or weather."));
	}
}
