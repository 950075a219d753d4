use crate::{notification, page::Route, session::use_session};
use yew::prelude::*;
use yew_router::prelude::{use_route, Link};

#[function_component]
pub fn Navbar() -> Html {
	let session = use_session();
	let current = use_route::<Route>();
	let Some(user) = session.user() else {
		return html!();
	};

	let logout = {
		let session = session.clone();
		Callback::from(move |e: MouseEvent| {
			e.prevent_default();
			session.sign_out();
			notification::success("Logged out successfully");
		})
	};

	let links = |class: &'static str| {
		Route::NAV
			.iter()
			.map(|route| {
				let mut classes = classes!(class);
				if current == Some(*route) {
					classes.push("active");
				}
				html! {
					<Link<Route> classes={classes} to={*route}>
						<i class={format!("fas fa-{}", route.icon())} />
						<span>{route.label()}</span>
					</Link<Route>>
				}
			})
			.collect::<Html>()
	};

	html! {<>
		<nav class="navbar navbar-dark bg-dark px-3">
			<span class="navbar-brand">{"AQi NCR"}</span>
			<div class="nav-links d-none d-md-flex">{links("nav-link")}</div>
			<div class="user-area d-flex align-items-center gap-3">
				<span id="userInfo">{format!("Welcome, {}", user.full_name)}</span>
				<span class="points"><i class="fas fa-star" />{" "}<span id="userPoints">{user.points}</span></span>
				<button class="btn btn-outline-danger btn-sm" id="logoutBtn" onclick={logout}>
					{"Sign Out"}
				</button>
			</div>
		</nav>
		<nav class="bottom-nav d-md-none">{links("nav-item")}</nav>
	</>}
}
