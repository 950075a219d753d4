//! The scripted complaint chat: a fixed greeting, a kind picked by the user, a form, and a
//! closing message once the endpoint accepts the complaint.

use crate::api::Params;
use std::{rc::Rc, str::FromStr};
use yew::Reducible;

pub static GREETING: &str = "Hi! I'm here to help you report air quality issues. What would you like to report?";
pub static SUBMITTED: &str = "Complaint submitted successfully! Our team will review it shortly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintKind {
	Fire,
	Dust,
	Industrial,
}

impl ComplaintKind {
	pub const ALL: [Self; 3] = [Self::Fire, Self::Dust, Self::Industrial];

	pub fn id(&self) -> &'static str {
		match self {
			Self::Fire => "fire",
			Self::Dust => "dust",
			Self::Industrial => "industrial",
		}
	}

	pub fn display_name(&self) -> &'static str {
		match self {
			Self::Fire => "Fire/Smoke",
			Self::Dust => "Construction Dust",
			Self::Industrial => "Industrial Pollution",
		}
	}

	pub fn icon(&self) -> &'static str {
		match self {
			Self::Fire => "fire",
			Self::Dust => "hard-hat",
			Self::Industrial => "industry",
		}
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("unknown complaint type {0:?}")]
pub struct UnknownKind(pub String);

impl FromStr for ComplaintKind {
	type Err = UnknownKind;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"fire" => Ok(Self::Fire),
			"dust" => Ok(Self::Dust),
			"industrial" => Ok(Self::Industrial),
			_ => Err(UnknownKind(s.to_owned())),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
	Bot,
	User,
}

impl Sender {
	pub fn class(&self) -> &'static str {
		match self {
			Self::Bot => "message bot-message",
			Self::User => "message user-message",
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
	pub sender: Sender,
	pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatScript {
	messages: Vec<ChatMessage>,
	// the kind the open form is tagged with; `None` while the form is hidden
	pending: Option<ComplaintKind>,
}

impl Default for ChatScript {
	fn default() -> Self {
		Self {
			messages: vec![ChatMessage {
				sender: Sender::Bot,
				text: GREETING.to_owned(),
			}],
			pending: None,
		}
	}
}

impl ChatScript {
	pub fn messages(&self) -> &[ChatMessage] {
		&self.messages
	}

	pub fn pending(&self) -> Option<ComplaintKind> {
		self.pending
	}

	pub fn form_visible(&self) -> bool {
		self.pending.is_some()
	}

	/// Records the user's pick and opens the form. Returns the bot's follow-up, which the page
	/// posts after a short delay.
	pub fn start(&mut self, kind: ComplaintKind) -> String {
		self.push(Sender::User, format!("I want to report {}", kind.display_name()));
		self.pending = Some(kind);
		follow_up(kind)
	}

	pub fn push(&mut self, sender: Sender, text: impl Into<String>) {
		self.messages.push(ChatMessage {
			sender,
			text: text.into(),
		});
	}

	/// The endpoint accepted the complaint: thank the user and close the form.
	pub fn submitted(&mut self) {
		self.push(Sender::Bot, SUBMITTED);
		self.pending = None;
	}
}

pub fn follow_up(kind: ComplaintKind) -> String {
	format!(
		"Please provide details about the {} issue. You can also get your current location automatically.",
		kind.display_name()
	)
}

pub enum ScriptAction {
	Start(ComplaintKind),
	Say(Sender, String),
	Submitted,
}

impl Reducible for ChatScript {
	type Action = ScriptAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut script = (*self).clone();
		match action {
			ScriptAction::Start(kind) => {
				script.start(kind);
			}
			ScriptAction::Say(sender, text) => script.push(sender, text),
			ScriptAction::Submitted => script.submitted(),
		}
		Rc::new(script)
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DraftError {
	#[error("Please fill all fields")]
	Incomplete,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplaintDraft {
	pub description: String,
	pub lat: String,
	pub lng: String,
}

impl ComplaintDraft {
	pub fn set_location(&mut self, lat: f64, lng: f64) {
		self.lat = format_coordinate(lat);
		self.lng = format_coordinate(lng);
	}

	pub fn validate(&self) -> Result<(), DraftError> {
		let fields = [&self.description, &self.lat, &self.lng];
		match fields.iter().any(|field| field.trim().is_empty()) {
			true => Err(DraftError::Incomplete),
			false => Ok(()),
		}
	}

	pub fn params(&self, user_id: &str, kind: ComplaintKind) -> Result<Params, DraftError> {
		self.validate()?;
		Ok(Params::default()
			.with("userID", user_id)
			.with("type", kind.id())
			.with("description", &self.description)
			.with("lat", &self.lat)
			.with("lng", &self.lng))
	}
}

/// Edits to the complaint form. Each one touches only its own fields.
pub enum DraftAction {
	Description(String),
	Lat(String),
	Lng(String),
	Located(f64, f64),
	Clear,
}

impl Reducible for ComplaintDraft {
	type Action = DraftAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut draft = (*self).clone();
		match action {
			DraftAction::Description(value) => draft.description = value,
			DraftAction::Lat(value) => draft.lat = value,
			DraftAction::Lng(value) => draft.lng = value,
			DraftAction::Located(lat, lng) => draft.set_location(lat, lng),
			DraftAction::Clear => draft = Self::default(),
		}
		Rc::new(draft)
	}
}

/// Six decimals, as the location inputs display them.
pub fn format_coordinate(value: f64) -> String {
	format!("{value:.6}")
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn script_opens_with_greeting() {
		let script = ChatScript::default();
		assert_eq!(script.messages().len(), 1);
		assert_eq!(script.messages()[0].sender, Sender::Bot);
		assert_eq!(script.messages()[0].text, GREETING);
		assert!(!script.form_visible());
	}

	#[test]
	fn start_posts_user_message_and_opens_form() {
		let mut script = ChatScript::default();
		let reply = script.start(ComplaintKind::Dust);
		assert_eq!(script.messages()[1].sender, Sender::User);
		assert_eq!(script.messages()[1].text, "I want to report Construction Dust");
		assert_eq!(script.pending(), Some(ComplaintKind::Dust));
		assert!(reply.starts_with("Please provide details about the Construction Dust issue."));
	}

	#[test]
	fn submission_closes_form() {
		let mut script = ChatScript::default();
		script.start(ComplaintKind::Fire);
		script.submitted();
		assert!(!script.form_visible());
		assert_eq!(script.messages().last().map(|m| m.text.as_str()), Some(SUBMITTED));
	}

	#[test]
	fn bot_reply_lands_after_user_pick() {
		let script = Rc::new(ChatScript::default());
		let script = script.reduce(ScriptAction::Start(ComplaintKind::Industrial));
		let script = script.reduce(ScriptAction::Say(Sender::Bot, follow_up(ComplaintKind::Industrial)));
		let senders = script.messages().iter().map(|m| m.sender).collect::<Vec<_>>();
		assert_eq!(senders, [Sender::Bot, Sender::User, Sender::Bot]);
		let script = script.reduce(ScriptAction::Submitted);
		assert_eq!(script.messages().len(), 4);
		assert!(!script.form_visible());
	}

	#[test]
	fn location_fix_keeps_description_typed_meanwhile() {
		let draft = Rc::new(ComplaintDraft::default());
		// typed while the position fix was still pending
		let draft = draft.reduce(DraftAction::Description("smoke".into()));
		let draft = draft.reduce(DraftAction::Located(28.6139, 77.209));
		assert_eq!(draft.description, "smoke");
		assert_eq!(draft.lat, "28.613900");
		assert_eq!(draft.lng, "77.209000");
		let draft = draft.reduce(DraftAction::Clear);
		assert_eq!(*draft, ComplaintDraft::default());
	}

	#[test]
	fn kinds_round_trip_through_ids() {
		for kind in ComplaintKind::ALL {
			assert_eq!(kind.id().parse::<ComplaintKind>(), Ok(kind));
		}
		assert!("smoke".parse::<ComplaintKind>().is_err());
	}

	#[test]
	fn incomplete_draft_is_rejected() {
		let draft = ComplaintDraft {
			description: "Burning garbage near the park".into(),
			lat: "28.613900".into(),
			lng: " ".into(),
		};
		assert_eq!(draft.validate(), Err(DraftError::Incomplete));
		assert_eq!(DraftError::Incomplete.to_string(), "Please fill all fields");
	}

	#[test]
	fn complete_draft_builds_params() {
		let mut draft = ComplaintDraft {
			description: "Burning garbage near the park".into(),
			..Default::default()
		};
		draft.set_location(28.61394, 77.2090001);
		assert_eq!(draft.lat, "28.613940");
		assert_eq!(draft.lng, "77.209000");
		let params = draft.params("USR001", ComplaintKind::Fire).unwrap();
		assert_eq!(
			params,
			Params::default()
				.with("userID", "USR001")
				.with("type", "fire")
				.with("description", "Burning garbage near the park")
				.with("lat", "28.613940")
				.with("lng", "77.209000")
		);
	}
}
