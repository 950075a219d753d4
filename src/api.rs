//! The single remote endpoint. Every request is a form-encoded `POST` carrying an `action`
//! name and a flat bag of parameters; every reply is `{ success, message?, ...payload }`.

use crate::config;
use serde::{de::DeserializeOwned, Deserialize};

pub mod payload;
pub mod response;
use response::Response;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	Login,
	Register,
	GetDashboard,
	GetMapData,
	ReportSpot,
	SubmitComplaint,
}

impl Action {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Login => "login",
			Self::Register => "register",
			Self::GetDashboard => "getDashboard",
			Self::GetMapData => "getMapData",
			Self::ReportSpot => "reportSpot",
			Self::SubmitComplaint => "submitComplaint",
		}
	}
}

/// Request parameters in the order they are appended to the body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
	pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
		self.0.push((key, value.to_string()));
		self
	}

	fn into_form(self, action: Action) -> Vec<(&'static str, String)> {
		let mut form = Vec::with_capacity(self.0.len() + 1);
		form.push(("action", action.as_str().to_owned()));
		form.extend(self.0);
		form
	}
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reply<T> {
	#[serde(default)]
	pub success: bool,
	#[serde(default)]
	pub message: Option<String>,
	#[serde(flatten)]
	pub payload: Option<T>,
}

impl<T> Reply<T> {
	pub fn network_error() -> Self {
		Self {
			success: false,
			message: Some("Network error".to_owned()),
			payload: None,
		}
	}

	/// The payload of a successful reply, or the message to show for a failed one.
	pub fn into_result(self) -> Result<T, String> {
		match (self.success, self.payload) {
			(true, Some(payload)) => Ok(payload),
			_ => Err(self.message.unwrap_or_else(|| "Request failed".to_owned())),
		}
	}
}

pub fn endpoint() -> Result<url::Url, url::ParseError> {
	url::Url::parse(config::API_URL)
}

/// Posts `action` with `params` and decodes the reply.
/// Anything that goes wrong in transit comes back as an unsuccessful "Network error" reply.
pub async fn call<T>(action: Action, params: Params) -> Reply<T>
where
	T: DeserializeOwned,
{
	let endpoint = match endpoint() {
		Ok(url) => url,
		Err(err) => {
			log::error!(target: "api", "invalid endpoint {:?}: {err}", config::API_URL);
			return Reply::network_error();
		}
	};
	log::debug!(target: "api", "-> {}", action.as_str());
	let request = Response::<Reply<T>>::from(reqwest::Client::new().post(endpoint)).with_form(&params.into_form(action));
	match request.send().await {
		Ok(reply) => {
			log::debug!(target: "api", "<- {} success={}", action.as_str(), reply.success);
			reply
		}
		Err(err) => {
			log::error!(target: "api", "{} failed: {err:?}", action.as_str());
			Reply::network_error()
		}
	}
}
