use crate::{
	config,
	gamification::{self, BadgeState},
	session::use_session,
};
use yew::prelude::*;

#[function_component]
pub fn BadgeGrid() -> Html {
	let session = use_session();
	let badges = session.badges();
	html! {
		<div class="badges-grid" id="badgesGrid">
			{config::BADGE_SLOTS.iter().enumerate().map(|(ordinal, name)| {
				let state = match badges.state(ordinal) {
					Some(BadgeState::Unlocked) => "unlocked",
					_ => "locked",
				};
				html! {
					<div key={ordinal} class={classes!("badge-item", state)}>
						<i class="fas fa-medal" />
						<div class="badge-name">{*name}</div>
						<div class="badge-threshold">{format!("{} pts", gamification::threshold(ordinal))}</div>
					</div>
				}
			}).collect::<Html>()}
		</div>
	}
}
