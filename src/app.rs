use crate::{
	components::{AuthOverlay, Navbar, Toasts},
	config, notification,
	page::Route,
	session::{BrowserStore, Session, SessionAction, SessionHandle},
};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::BrowserRouter;

/// Root of the app. Owns the session and shows either the sign-in overlay or the views.
#[function_component]
pub fn App() -> Html {
	let session = SessionHandle(use_reducer(|| {
		Session::restore(Rc::new(BrowserStore), config::BADGE_SLOTS.len())
	}));

	// points and badges report what changed; surface each change as a toast
	let shown = use_mut_ref(|| 0u64);
	use_effect_with(session.events_produced(), {
		let session = session.clone();
		move |produced| {
			for event in session.events_since(*shown.borrow()) {
				notification::notify(event.message(), event.severity());
			}
			*shown.borrow_mut() = *produced;
			session.dispatch(SessionAction::Acknowledge(*produced));
		}
	});

	let body = match session.is_active() {
		true => html! {<>
			<Navbar />
			<main class="container-fluid py-3" id="appContainer">
				{ <Route as crate::route::Route>::switch() }
			</main>
		</>},
		false => html! { <AuthOverlay /> },
	};

	html! {
		<ContextProvider<SessionHandle> context={session}>
			<BrowserRouter>
				{body}
				<Toasts />
			</BrowserRouter>
		</ContextProvider<SessionHandle>>
	}
}
