//! Guided breathing: the circle grows for ten ticks, shrinks for ten, and each full
//! in-and-out counts as one breath.

use wasm_timer::Instant;

/// Ticks spent on each half of a breath.
pub const HALF_CYCLE_TICKS: u8 = 10;
pub const SCALE_STEP: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	Inhale,
	Exhale,
}

impl Phase {
	pub fn prompt(&self) -> &'static str {
		match self {
			Self::Inhale => "Breathe In",
			Self::Exhale => "Breathe Out",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathEvent {
	PhaseChanged(Phase),
	/// A full breath finished; carries the running count.
	Completed(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breath {
	phase: Phase,
	step: u8,
	count: u32,
}

impl Default for Breath {
	fn default() -> Self {
		Self {
			phase: Phase::Inhale,
			step: 0,
			count: 0,
		}
	}
}

impl Breath {
	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn count(&self) -> u32 {
		self.count
	}

	/// Circle scale, from 1.0 fully exhaled to 1.2 fully inhaled.
	pub fn scale(&self) -> f64 {
		1.0 + f64::from(self.step) * SCALE_STEP
	}

	pub fn transform(&self) -> String {
		format!("transform: scale({:.2})", self.scale())
	}

	/// Back to a relaxed circle and an inhale prompt; completed breaths stay counted.
	pub fn settle(&mut self) {
		self.phase = Phase::Inhale;
		self.step = 0;
	}

	pub fn tick(&mut self) -> Option<BreathEvent> {
		match self.phase {
			Phase::Inhale => {
				self.step += 1;
				if self.step < HALF_CYCLE_TICKS {
					return None;
				}
				self.phase = Phase::Exhale;
				Some(BreathEvent::PhaseChanged(Phase::Exhale))
			}
			Phase::Exhale => {
				self.step = self.step.saturating_sub(1);
				if self.step > 0 {
					return None;
				}
				self.phase = Phase::Inhale;
				self.count += 1;
				Some(BreathEvent::Completed(self.count))
			}
		}
	}
}

/// Whole seconds since the exercise began.
pub fn elapsed_secs(started: Instant) -> u64 {
	started.elapsed().as_secs()
}
