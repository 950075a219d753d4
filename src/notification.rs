use crate::config;
use gloo_timers::callback::Timeout;
use yewdux::{prelude::Dispatch, store::Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	Info,
	Success,
	Warning,
	Error,
}

impl Severity {
	pub fn icon(&self) -> &'static str {
		match self {
			Self::Success => "check-circle",
			Self::Error => "exclamation-circle",
			Self::Warning => "exclamation-triangle",
			Self::Info => "info-circle",
		}
	}

	pub fn class(&self) -> &'static str {
		match self {
			Self::Info => "notification-info",
			Self::Success => "notification-success",
			Self::Warning => "notification-warning",
			Self::Error => "notification-error",
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
	pub id: u64,
	pub message: String,
	pub severity: Severity,
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, PartialEq, Default, Store)]
pub struct Notifications {
	entries: Vec<Notification>,
	next_id: u64,
}

impl Notifications {
	pub fn entries(&self) -> &[Notification] {
		&self.entries
	}

	fn push(&mut self, message: String, severity: Severity) -> u64 {
		let id = self.next_id;
		self.next_id += 1;
		self.entries.push(Notification { id, message, severity });
		id
	}

	fn dismiss(&mut self, id: u64) {
		self.entries.retain(|entry| entry.id != id);
	}
}

// yewdux only exposes its global context on wasm32; mirror it with a thread-local elsewhere.
#[cfg(target_arch = "wasm32")]
fn global_dispatch() -> Dispatch<Notifications> {
	Dispatch::global()
}

#[cfg(not(target_arch = "wasm32"))]
fn global_dispatch() -> Dispatch<Notifications> {
	thread_local! {
		static CONTEXT: yewdux::Context = yewdux::Context::new();
	}
	CONTEXT.with(|cx| Dispatch::new(cx))
}

/// Shows a toast which removes itself after [`config::NOTIFICATION_DURATION_MS`].
pub fn notify(message: impl Into<String>, severity: Severity) {
	let message = message.into();
	log::debug!(target: "notification", "{severity:?}: {message}");
	let dispatch = global_dispatch();
	let mut id = 0;
	dispatch.reduce_mut(|toasts| id = toasts.push(message, severity));
	Timeout::new(config::NOTIFICATION_DURATION_MS, move || {
		dispatch.reduce_mut(|toasts| toasts.dismiss(id));
	})
	.forget();
}

pub fn success(message: impl Into<String>) {
	notify(message, Severity::Success);
}

pub fn error(message: impl Into<String>) {
	notify(message, Severity::Error);
}

pub fn info(message: impl Into<String>) {
	notify(message, Severity::Info);
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn icons_follow_severity() {
		assert_eq!(Severity::Success.icon(), "check-circle");
		assert_eq!(Severity::Error.icon(), "exclamation-circle");
		assert_eq!(Severity::Warning.icon(), "exclamation-triangle");
		assert_eq!(Severity::Info.icon(), "info-circle");
	}

	#[test]
	fn dismiss_removes_only_that_toast() {
		let mut toasts = Notifications::default();
		let first = toasts.push("one".into(), Severity::Info);
		let second = toasts.push("two".into(), Severity::Error);
		assert_ne!(first, second);
		toasts.dismiss(first);
		assert_eq!(toasts.entries().len(), 1);
		assert_eq!(toasts.entries()[0].message, "two");
	}
}
