use crate::{
	breathing::{self, Breath, BreathEvent},
	components::BadgeGrid,
	config,
	session::use_session,
};
use gloo_timers::callback::Interval;
use std::rc::Rc;
use wasm_timer::Instant;
use yew::prelude::*;

/// What the breathing panel shows. Stopping keeps the last count and time on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Exercise {
	breath: Breath,
	elapsed_secs: u64,
	running: bool,
}

enum ExerciseAction {
	Progress { breath: Breath, elapsed_secs: u64 },
	Stop,
}

impl Reducible for Exercise {
	type Action = ExerciseAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut exercise = *self;
		match action {
			ExerciseAction::Progress { breath, elapsed_secs } => {
				exercise.breath = breath;
				exercise.elapsed_secs = elapsed_secs;
				exercise.running = true;
			}
			ExerciseAction::Stop => {
				exercise.breath.settle();
				exercise.running = false;
			}
		}
		Rc::new(exercise)
	}
}

#[function_component]
pub fn Page() -> Html {
	let session = use_session();
	// the interval handle lives beside the panel state and stops when dropped
	let exercise = use_reducer(Exercise::default);
	let interval = use_mut_ref(|| None::<Interval>);

	{
		// entering or leaving the page always ends a running exercise
		let interval = interval.clone();
		use_effect_with((), move |_| {
			move || {
				interval.borrow_mut().take();
			}
		});
	}

	let start = {
		let exercise = exercise.clone();
		let interval = interval.clone();
		let session = session.clone();
		Callback::from(move |_: MouseEvent| {
			if interval.borrow().is_some() {
				return;
			}
			let started = Instant::now();
			let mut breath = Breath::default();
			exercise.dispatch(ExerciseAction::Progress { breath, elapsed_secs: 0 });
			let exercise = exercise.clone();
			let session = session.clone();
			let ticker = Interval::new(config::BREATHING_TICK_MS, move || {
				if let Some(BreathEvent::Completed(count)) = breath.tick() {
					log::debug!(target: "breathing", "breath {count} completed");
					session.award(config::BREATH_REWARD, "Breathing exercise");
				}
				let elapsed_secs = breathing::elapsed_secs(started);
				exercise.dispatch(ExerciseAction::Progress { breath, elapsed_secs });
			});
			*interval.borrow_mut() = Some(ticker);
		})
	};

	let stop = {
		let exercise = exercise.clone();
		let interval = interval.clone();
		Callback::from(move |_: MouseEvent| {
			interval.borrow_mut().take();
			exercise.dispatch(ExerciseAction::Stop);
		})
	};

	let running = exercise.running;
	let breath = exercise.breath;
	let elapsed = exercise.elapsed_secs;

	html! {
		<section class="view gamification-view active" id="gamificationView">
			<div class="breathing-container text-center">
				<div class="breathing-circle" id="breathingCircle" style={breath.transform()}>
					<span class="breathing-text">{breath.phase().prompt()}</span>
				</div>
				<div class="breathing-stats d-flex justify-content-center gap-4 my-3">
					<div>{"Breaths: "}<span id="breathCount">{breath.count()}</span></div>
					<div>{"Seconds: "}<span id="exerciseTime">{elapsed}</span></div>
				</div>
				<div class="d-flex justify-content-center gap-2">
					<button class="btn btn-success" id="startBreathingBtn" disabled={running} onclick={start}>
						{"Start"}
					</button>
					<button class="btn btn-outline-danger" id="stopBreathingBtn" disabled={!running} onclick={stop}>
						{"Stop"}
					</button>
				</div>
			</div>
			<h4 class="mt-4">{"Badges"}</h4>
			<BadgeGrid />
		</section>
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn stopping_keeps_count_and_time() {
		let mut breath = Breath::default();
		for _ in 0..25 {
			breath.tick();
		}
		let exercise = Rc::new(Exercise::default()).reduce(ExerciseAction::Progress { breath, elapsed_secs: 3 });
		assert!(exercise.running);
		let exercise = exercise.reduce(ExerciseAction::Stop);
		assert!(!exercise.running);
		assert_eq!(exercise.breath.count(), 1);
		assert_eq!(exercise.elapsed_secs, 3);
		assert_eq!(exercise.breath.scale(), 1.0);
	}
}
