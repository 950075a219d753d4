use crate::notification::Notifications;
use yew::prelude::*;
use yewdux::prelude::use_store_value;

#[function_component]
pub fn Toasts() -> Html {
	let toasts = use_store_value::<Notifications>();
	html! {
		<div class="notification-stack">
			{toasts.entries().iter().map(|toast| html! {
				<div key={toast.id} class={classes!("notification", toast.severity.class())}>
					<div class="notification-content">
						<i class={format!("fas fa-{}", toast.severity.icon())} />
						<span>{&toast.message}</span>
					</div>
				</div>
			}).collect::<Html>()}
		</div>
	}
}
