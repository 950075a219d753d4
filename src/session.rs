use crate::{
	config,
	gamification::{self, BadgeBoard, GameEvent, PointAward},
};
use gloo_storage::{LocalStorage, Storage};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use std::rc::Rc;
use yew::prelude::*;

/// The signed-in user, as returned by the `login` action and cached in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
	#[serde(rename = "userID", deserialize_with = "id_from_any")]
	pub user_id: String,
	#[serde(rename = "fullName", default)]
	pub full_name: String,
	#[serde(default, deserialize_with = "points_from_any")]
	pub points: u64,
	// anything else the server sends along is carried through persistence untouched
	#[serde(flatten)]
	pub profile: serde_json::Map<String, serde_json::Value>,
}

fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	match serde_json::Value::deserialize(deserializer)? {
		serde_json::Value::String(id) => Ok(id),
		serde_json::Value::Number(id) => Ok(id.to_string()),
		other => Err(D::Error::custom(format!("invalid user id {other}"))),
	}
}

// spreadsheet cells come back as numbers, numeric strings, or blanks
fn points_from_any<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
	D: Deserializer<'de>,
{
	let points = match serde_json::Value::deserialize(deserializer)? {
		serde_json::Value::Null => return Ok(0),
		serde_json::Value::Number(points) => points.as_f64(),
		serde_json::Value::String(points) if points.trim().is_empty() => return Ok(0),
		serde_json::Value::String(points) => points.trim().parse::<f64>().ok(),
		_ => None,
	};
	match points {
		Some(points) if points >= 0.0 && points.fract() == 0.0 && points <= u64::MAX as f64 => Ok(points as u64),
		_ => Err(D::Error::custom("points must be a whole, non-negative number")),
	}
}

pub trait SessionValue {
	fn id() -> &'static str;

	fn load() -> Option<Self>
	where
		Self: for<'de> Deserialize<'de>,
	{
		LocalStorage::get::<Self>(Self::id()).ok()
	}

	fn save(&self) -> Result<(), StorageError>
	where
		Self: Serialize,
	{
		Ok(LocalStorage::set(Self::id(), self)?)
	}

	fn delete() {
		LocalStorage::delete(Self::id());
	}
}

impl SessionValue for User {
	fn id() -> &'static str {
		config::USER_STORAGE_KEY
	}
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
	#[error(transparent)]
	Browser(#[from] gloo_storage::errors::StorageError),
	#[error(transparent)]
	Serialize(#[from] serde_json::Error),
}

/// Where the user snapshot lives between page loads.
/// Every write replaces the whole record.
pub trait SnapshotStore {
	fn write(&self, user: &User) -> Result<(), StorageError>;
	fn read(&self) -> Option<User>;
	fn remove(&self);
}

/// The browser's `localStorage`, keyed by [`config::USER_STORAGE_KEY`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

impl SnapshotStore for BrowserStore {
	fn write(&self, user: &User) -> Result<(), StorageError> {
		user.save()
	}

	fn read(&self) -> Option<User> {
		User::load()
	}

	fn remove(&self) {
		User::delete();
	}
}

#[cfg(test)]
pub use memory::MemoryStore;

#[cfg(test)]
mod memory {
	use super::{SnapshotStore, StorageError, User};
	use std::cell::{Cell, RefCell};

	/// Keeps the serialized snapshot in memory, so tests see exactly what would reach storage.
	#[derive(Debug, Default)]
	pub struct MemoryStore {
		json: RefCell<Option<String>>,
		writes: Cell<usize>,
	}

	impl MemoryStore {
		pub fn with(user: &User) -> Self {
			let store = Self::default();
			store.write(user).unwrap();
			store.writes.set(0);
			store
		}

		pub fn raw(&self) -> Option<String> {
			self.json.borrow().clone()
		}

		pub fn writes(&self) -> usize {
			self.writes.get()
		}
	}

	impl SnapshotStore for MemoryStore {
		fn write(&self, user: &User) -> Result<(), StorageError> {
			*self.json.borrow_mut() = Some(serde_json::to_string(user)?);
			self.writes.set(self.writes.get() + 1);
			Ok(())
		}

		fn read(&self) -> Option<User> {
			let json = self.json.borrow();
			serde_json::from_str(json.as_deref()?).ok()
		}

		fn remove(&self) {
			*self.json.borrow_mut() = None;
		}
	}
}

#[derive(Debug, Clone)]
pub enum SessionAction {
	SignIn(User),
	SignOut,
	Award(PointAward),
	/// The root has shown every event up to this position.
	Acknowledge(u64),
}

/// Per-tab session owned by the app root and handed to views through context.
/// `events` queues what awards produced until the root acknowledges having shown them.
#[derive(Clone)]
pub struct Session {
	store: Rc<dyn SnapshotStore>,
	user: Option<User>,
	badges: BadgeBoard,
	events: Rc<Vec<GameEvent>>,
	events_produced: u64,
	generation: u64,
}

impl std::fmt::Debug for Session {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Session")
			.field("user", &self.user)
			.field("badges", &self.badges)
			.field("generation", &self.generation)
			.finish()
	}
}

impl PartialEq for Session {
	fn eq(&self, other: &Self) -> bool {
		self.generation == other.generation && self.user == other.user && self.badges == other.badges
	}
}

impl Session {
	/// Picks up the snapshot left by a previous visit, if any.
	pub fn restore(store: Rc<dyn SnapshotStore>, badge_slots: usize) -> Self {
		let user = store.read();
		let points = user.as_ref().map(|user| user.points).unwrap_or_default();
		if let Some(user) = &user {
			log::info!(target: "session", "restored session for {}", user.user_id);
		}
		Self {
			store,
			user,
			badges: BadgeBoard::restored(badge_slots, points),
			events: Rc::default(),
			events_produced: 0,
			generation: 0,
		}
	}

	pub fn user(&self) -> Option<&User> {
		self.user.as_ref()
	}

	pub fn is_active(&self) -> bool {
		self.user.is_some()
	}

	pub fn badges(&self) -> &BadgeBoard {
		&self.badges
	}

	/// Events not yet acknowledged, oldest first.
	pub fn events(&self) -> &[GameEvent] {
		&self.events
	}

	/// Total number of events produced since the session was restored.
	pub fn events_produced(&self) -> u64 {
		self.events_produced
	}

	/// Queued events at or after position `seen`.
	pub fn events_since(&self, seen: u64) -> &[GameEvent] {
		let first_queued = self.events_produced - self.events.len() as u64;
		let skip = seen.saturating_sub(first_queued).min(self.events.len() as u64) as usize;
		&self.events[skip..]
	}

	pub fn generation(&self) -> u64 {
		self.generation
	}
}

impl Reducible for Session {
	type Action = SessionAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut next = (*self).clone();
		match action {
			SessionAction::SignIn(user) => {
				if let Err(err) = next.store.write(&user) {
					log::error!(target: "session", "failed to persist signed-in user: {err:?}");
				}
				next.badges = BadgeBoard::restored(next.badges.len(), user.points);
				log::info!(target: "session", "signed in as {}", user.user_id);
				next.user = Some(user);
			}
			SessionAction::SignOut => {
				next.store.remove();
				next.badges = BadgeBoard::locked(next.badges.len());
				next.user = None;
				log::info!(target: "session", "signed out");
			}
			SessionAction::Award(award) => {
				let events = gamification::award_points(next.user.as_mut(), &*next.store, &mut next.badges, &award);
				if events.is_empty() {
					return self;
				}
				next.events_produced += events.len() as u64;
				Rc::make_mut(&mut next.events).extend(events);
			}
			SessionAction::Acknowledge(seen) => {
				let skip = self.events.len() - self.events_since(seen).len();
				if skip == 0 {
					return self;
				}
				Rc::make_mut(&mut next.events).drain(..skip);
				return Rc::new(next);
			}
		}
		next.generation += 1;
		Rc::new(next)
	}
}

#[derive(Clone, PartialEq)]
pub struct SessionHandle(pub UseReducerHandle<Session>);
impl std::ops::Deref for SessionHandle {
	type Target = UseReducerHandle<Session>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl SessionHandle {
	pub fn sign_in(&self, user: User) {
		self.dispatch(SessionAction::SignIn(user));
	}

	pub fn sign_out(&self) {
		self.dispatch(SessionAction::SignOut);
	}

	pub fn award(&self, amount: u64, reason: &'static str) {
		match PointAward::new(amount, reason) {
			Some(award) => self.dispatch(SessionAction::Award(award)),
			None => log::warn!(target: "gamification", "ignoring empty award for {reason:?}"),
		}
	}
}

#[hook]
pub fn use_session() -> SessionHandle {
	use_context::<SessionHandle>().expect("session context is provided by the app root")
}

#[cfg(test)]
mod test {
	use super::*;

	fn user(points: u64) -> User {
		serde_json::from_value(serde_json::json!({
			"userID": "u-7",
			"fullName": "Asha Verma",
			"points": points,
			"email": "asha@example.com",
		}))
		.unwrap()
	}

	#[test]
	fn snapshot_keeps_extra_profile_fields() {
		let store = MemoryStore::default();
		store.write(&user(40)).unwrap();
		let raw: serde_json::Value = serde_json::from_str(&store.raw().unwrap()).unwrap();
		assert_eq!(raw["userID"], "u-7");
		assert_eq!(raw["fullName"], "Asha Verma");
		assert_eq!(raw["points"], 40);
		assert_eq!(raw["email"], "asha@example.com");
		assert_eq!(store.read(), Some(user(40)));
	}

	#[test]
	fn numeric_user_id_is_accepted() {
		let user: User = serde_json::from_str(r#"{"userID": 12, "fullName": "R", "points": 3}"#).unwrap();
		assert_eq!(user.user_id, "12");
		assert_eq!(user.points, 3);
	}

	#[test]
	fn points_sent_as_text_are_accepted() {
		let user: User = serde_json::from_str(r#"{"userID": "U1", "fullName": "R", "points": "15"}"#).unwrap();
		assert_eq!(user.points, 15);
		let user: User = serde_json::from_str(r#"{"userID": "U1", "points": ""}"#).unwrap();
		assert_eq!(user.points, 0);
		let user: User = serde_json::from_str(r#"{"userID": "U1", "points": 40.0}"#).unwrap();
		assert_eq!(user.points, 40);
		assert!(serde_json::from_str::<User>(r#"{"userID": "U1", "points": "-3"}"#).is_err());
	}

	#[test]
	fn sign_in_reply_with_text_points_restores_badges() {
		let reply: crate::api::Reply<crate::api::payload::SignedIn> = serde_json::from_value(serde_json::json!({
			"success": true,
			"user": { "userID": "U1", "fullName": "R", "points": "55" },
		}))
		.unwrap();
		let user = reply.into_result().unwrap().user;
		let session = Rc::new(Session::restore(Rc::new(MemoryStore::default()), 6));
		let next = session.reduce(SessionAction::SignIn(user));
		assert_eq!(next.badges().unlocked_count(), 2);
	}

	#[test]
	fn events_queue_until_acknowledged() {
		let store = Rc::new(MemoryStore::with(&user(20)));
		let session = Rc::new(Session::restore(store, 6));
		let first = PointAward::new(10, "Complaint submitted").unwrap();
		let second = PointAward::new(1, "Breathing exercise").unwrap();
		let next = session.reduce(SessionAction::Award(first)).reduce(SessionAction::Award(second));
		assert_eq!(next.events_produced(), 3);
		assert_eq!(next.events().len(), 3);
		assert_eq!(next.events()[0].message(), "+10 points: Complaint submitted");
		assert_eq!(next.events_since(2), &next.events()[2..]);

		let next = next.reduce(SessionAction::Acknowledge(2));
		assert_eq!(next.events().len(), 1);
		assert_eq!(next.events()[0].message(), "+1 points: Breathing exercise");
		assert_eq!(next.events_since(2).len(), 1);
		assert!(next.events_since(3).is_empty());

		let next = next.reduce(SessionAction::Acknowledge(3));
		assert!(next.events().is_empty());
		assert_eq!(next.events_produced(), 3);
	}

	#[test]
	fn acknowledging_nothing_new_keeps_state() {
		let session = Rc::new(Session::restore(Rc::new(MemoryStore::default()), 6));
		let next = session.clone().reduce(SessionAction::Acknowledge(0));
		assert!(Rc::ptr_eq(&session, &next));
	}

	#[test]
	fn restore_without_snapshot_is_signed_out() {
		let session = Session::restore(Rc::new(MemoryStore::default()), 6);
		assert!(!session.is_active());
		assert_eq!(session.badges().unlocked_count(), 0);
	}

	#[test]
	fn restore_unlocks_earned_badges_silently() {
		let session = Session::restore(Rc::new(MemoryStore::with(&user(60))), 6);
		assert!(session.is_active());
		assert_eq!(session.badges().unlocked_count(), 2);
		assert!(session.events().is_empty());
	}

	#[test]
	fn award_flows_through_reducer() {
		let store = Rc::new(MemoryStore::with(&user(20)));
		let session = Rc::new(Session::restore(store.clone(), 6));
		let award = PointAward::new(10, "Complaint submitted").unwrap();
		let next = session.reduce(SessionAction::Award(award));
		assert_eq!(next.user().unwrap().points, 30);
		assert_eq!(next.events().len(), 2);
		assert_eq!(next.generation(), 1);
		assert_eq!(store.read().unwrap().points, 30);
	}

	#[test]
	fn award_when_signed_out_leaves_state_alone() {
		let store = Rc::new(MemoryStore::default());
		let session = Rc::new(Session::restore(store.clone(), 6));
		let award = PointAward::new(10, "Complaint submitted").unwrap();
		let next = session.clone().reduce(SessionAction::Award(award));
		assert!(Rc::ptr_eq(&session, &next));
		assert_eq!(store.writes(), 0);
		assert_eq!(store.raw(), None);
	}

	#[test]
	fn sign_out_clears_snapshot_and_badges() {
		let store = Rc::new(MemoryStore::with(&user(80)));
		let session = Rc::new(Session::restore(store.clone(), 6));
		let next = session.reduce(SessionAction::SignOut);
		assert!(!next.is_active());
		assert_eq!(next.badges().unlocked_count(), 0);
		assert_eq!(store.raw(), None);
	}

	#[test]
	fn sign_in_persists_user() {
		let store = Rc::new(MemoryStore::default());
		let session = Rc::new(Session::restore(store.clone(), 6));
		let next = session.reduce(SessionAction::SignIn(user(25)));
		assert_eq!(next.user().map(|user| user.points), Some(25));
		assert_eq!(next.badges().unlocked_count(), 1);
		assert!(next.events().is_empty());
		assert_eq!(store.read(), Some(user(25)));
	}
}
