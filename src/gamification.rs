//! Points and badges.
//!
//! The balance lives on the session [`User`]; badge state is never stored on its own and is
//! always derived from that balance. A badge at ordinal `i` unlocks once the balance reaches
//! `(i + 1) * 25`, and stays unlocked.
//!
//! Nothing here touches the page. Mutations hand back [`GameEvent`]s which the app root turns
//! into notifications.

use crate::{
	notification::Severity,
	session::{SnapshotStore, User},
};
use std::{borrow::Cow, num::NonZeroU64};

pub const BADGE_STEP: u64 = 25;

/// Points needed to unlock the badge at `ordinal`.
pub fn threshold(ordinal: usize) -> u64 {
	(ordinal as u64).saturating_add(1).saturating_mul(BADGE_STEP)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeState {
	Locked,
	Unlocked,
}

/// The badge slots the page declares, in unlock order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BadgeBoard {
	slots: Vec<BadgeState>,
}

impl BadgeBoard {
	pub fn locked(count: usize) -> Self {
		Self {
			slots: vec![BadgeState::Locked; count],
		}
	}

	/// A board matching an existing balance. Used when a session starts, so already-earned
	/// badges show up without being announced again.
	pub fn restored(count: usize, points: u64) -> Self {
		let mut board = Self::locked(count);
		let _ = evaluate_badges(points, &mut board);
		board
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	pub fn state(&self, ordinal: usize) -> Option<BadgeState> {
		self.slots.get(ordinal).copied()
	}

	pub fn is_unlocked(&self, ordinal: usize) -> bool {
		self.state(ordinal) == Some(BadgeState::Unlocked)
	}

	pub fn unlocked_count(&self) -> usize {
		self.slots.iter().filter(|state| **state == BadgeState::Unlocked).count()
	}

	pub fn iter(&self) -> impl Iterator<Item = (usize, BadgeState)> + '_ {
		self.slots.iter().copied().enumerate()
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointAward {
	amount: NonZeroU64,
	reason: Cow<'static, str>,
}

impl PointAward {
	/// `None` for a zero amount; awards are always positive.
	pub fn new(amount: u64, reason: impl Into<Cow<'static, str>>) -> Option<Self> {
		Some(Self {
			amount: NonZeroU64::new(amount)?,
			reason: reason.into(),
		})
	}

	pub fn amount(&self) -> u64 {
		self.amount.get()
	}

	pub fn reason(&self) -> &str {
		&self.reason
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
	PointsAwarded { amount: u64, reason: String, balance: u64 },
	BadgeUnlocked { ordinal: usize, threshold: u64 },
}

impl GameEvent {
	pub fn message(&self) -> String {
		match self {
			Self::PointsAwarded { amount, reason, .. } => format!("+{amount} points: {reason}"),
			Self::BadgeUnlocked { .. } => "New badge unlocked!".to_owned(),
		}
	}

	pub fn severity(&self) -> Severity {
		Severity::Success
	}
}

/// Credits `award` to the signed-in user.
///
/// The balance is bumped, the full user record is written back to `store`, and then the
/// badges are re-evaluated. Returns the award event followed by one event per newly unlocked
/// badge. Without a user this does nothing and returns no events.
pub fn award_points(
	user: Option<&mut User>,
	store: &dyn SnapshotStore,
	badges: &mut BadgeBoard,
	award: &PointAward,
) -> Vec<GameEvent> {
	let Some(user) = user else {
		return Vec::new();
	};
	user.points = user.points.saturating_add(award.amount());
	if let Err(err) = store.write(user) {
		log::error!(target: "gamification", "failed to persist balance of {}: {err:?}", user.points);
	}
	log::debug!(target: "gamification", "{} points for {:?}, balance {}", award.amount(), award.reason(), user.points);

	let mut events = vec![GameEvent::PointsAwarded {
		amount: award.amount(),
		reason: award.reason().to_owned(),
		balance: user.points,
	}];
	events.extend(evaluate_badges(user.points, badges));
	events
}

/// Unlocks every locked badge whose threshold `points` has reached, one event per unlock.
/// Badges are never locked again here, whatever the balance.
pub fn evaluate_badges(points: u64, badges: &mut BadgeBoard) -> Vec<GameEvent> {
	let mut events = Vec::new();
	for (ordinal, state) in badges.slots.iter_mut().enumerate() {
		let threshold = threshold(ordinal);
		if points >= threshold && *state == BadgeState::Locked {
			*state = BadgeState::Unlocked;
			events.push(GameEvent::BadgeUnlocked { ordinal, threshold });
		}
	}
	events
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::session::MemoryStore;

	fn user(points: u64) -> User {
		User {
			user_id: "u-1".to_owned(),
			full_name: "Test User".to_owned(),
			points,
			profile: Default::default(),
		}
	}

	fn award(amount: u64) -> PointAward {
		PointAward::new(amount, "test").unwrap()
	}

	fn unlocked_ordinals(events: &[GameEvent]) -> Vec<usize> {
		events
			.iter()
			.filter_map(|event| match event {
				GameEvent::BadgeUnlocked { ordinal, .. } => Some(*ordinal),
				_ => None,
			})
			.collect()
	}

	fn assert_board_matches(board: &BadgeBoard, points: u64) {
		for (ordinal, state) in board.iter() {
			let expected = match points >= threshold(ordinal) {
				true => BadgeState::Unlocked,
				false => BadgeState::Locked,
			};
			assert_eq!(state, expected, "badge {ordinal} at {points} points");
		}
	}

	#[test]
	fn thresholds_step_by_25() {
		assert_eq!(threshold(0), 25);
		assert_eq!(threshold(1), 50);
		assert_eq!(threshold(5), 150);
	}

	#[test]
	fn zero_award_is_rejected() {
		assert_eq!(PointAward::new(0, "nothing"), None);
	}

	#[test]
	fn award_adds_to_balance_and_persists() {
		for (start, amount) in [(0, 1), (7, 10), (24, 1), (149, 3), (1000, 250)] {
			let mut user = user(start);
			let store = MemoryStore::with(&user);
			let mut board = BadgeBoard::restored(6, start);
			award_points(Some(&mut user), &store, &mut board, &award(amount));
			assert_eq!(user.points, start + amount);
			assert_eq!(store.read().map(|user| user.points), Some(start + amount));
			assert_eq!(store.writes(), 1);
			assert_board_matches(&board, start + amount);
		}
	}

	#[test]
	fn small_award_unlocks_nothing() {
		let mut user = user(0);
		let store = MemoryStore::default();
		let mut board = BadgeBoard::locked(6);
		let events = award_points(Some(&mut user), &store, &mut board, &award(10));
		assert_eq!(
			events,
			vec![GameEvent::PointsAwarded {
				amount: 10,
				reason: "test".to_owned(),
				balance: 10,
			}]
		);
		assert_eq!(board.unlocked_count(), 0);
	}

	#[test]
	fn crossing_one_threshold_unlocks_first_badge() {
		let mut user = user(20);
		let store = MemoryStore::default();
		let mut board = BadgeBoard::restored(6, 20);
		let events = award_points(Some(&mut user), &store, &mut board, &award(10));
		assert_eq!(user.points, 30);
		assert_eq!(unlocked_ordinals(&events), vec![0]);
		assert_eq!(events[1].message(), "New badge unlocked!");
		assert!(board.is_unlocked(0));
		assert!(!board.is_unlocked(1));
	}

	#[test]
	fn crossing_many_thresholds_unlocks_each_once() {
		let mut user = user(0);
		let store = MemoryStore::default();
		let mut board = BadgeBoard::locked(6);
		let events = award_points(Some(&mut user), &store, &mut board, &award(100));
		assert_eq!(unlocked_ordinals(&events), vec![0, 1, 2, 3]);
		assert_eq!(events.len(), 5);
		assert_board_matches(&board, 100);
	}

	#[test]
	fn exact_threshold_unlocks() {
		let mut board = BadgeBoard::locked(3);
		let events = evaluate_badges(50, &mut board);
		assert_eq!(unlocked_ordinals(&events), vec![0, 1]);
		assert!(!board.is_unlocked(2));
	}

	#[test]
	fn evaluation_is_idempotent() {
		let mut board = BadgeBoard::locked(6);
		assert_eq!(evaluate_badges(80, &mut board).len(), 3);
		assert!(evaluate_badges(80, &mut board).is_empty());
		assert_board_matches(&board, 80);
	}

	#[test]
	fn badges_never_relock() {
		let mut board = BadgeBoard::locked(4);
		evaluate_badges(100, &mut board);
		assert!(evaluate_badges(0, &mut board).is_empty());
		assert_eq!(board.unlocked_count(), 4);
	}

	#[test]
	fn board_size_is_whatever_the_page_declares() {
		let mut board = BadgeBoard::locked(2);
		let events = evaluate_badges(500, &mut board);
		assert_eq!(unlocked_ordinals(&events), vec![0, 1]);
		assert!(BadgeBoard::locked(0).is_empty());
		assert!(evaluate_badges(500, &mut BadgeBoard::locked(0)).is_empty());
	}

	#[test]
	fn award_without_session_is_ignored() {
		let store = MemoryStore::default();
		let mut board = BadgeBoard::locked(6);
		let events = award_points(None, &store, &mut board, &award(100));
		assert!(events.is_empty());
		assert_eq!(store.writes(), 0);
		assert_eq!(store.raw(), None);
		assert_eq!(board, BadgeBoard::locked(6));
	}

	#[test]
	fn split_awards_match_single_award() {
		for (start, a, b) in [(0, 10, 20), (20, 4, 1), (48, 1, 1), (0, 25, 75), (99, 1, 200)] {
			let store = MemoryStore::default();

			let mut split_user = user(start);
			let mut split_board = BadgeBoard::restored(6, start);
			award_points(Some(&mut split_user), &store, &mut split_board, &award(a));
			award_points(Some(&mut split_user), &store, &mut split_board, &award(b));

			let mut whole_user = user(start);
			let mut whole_board = BadgeBoard::restored(6, start);
			award_points(Some(&mut whole_user), &store, &mut whole_board, &award(a + b));

			assert_eq!(split_user.points, whole_user.points);
			assert_eq!(split_board, whole_board);
		}
	}

	#[test]
	fn award_message_names_amount_and_reason() {
		let event = GameEvent::PointsAwarded {
			amount: 10,
			reason: "Complaint submitted".to_owned(),
			balance: 10,
		};
		assert_eq!(event.message(), "+10 points: Complaint submitted");
		assert_eq!(event.severity(), Severity::Success);
	}
}
