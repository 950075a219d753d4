//! Sign-in and registration, shown in place of the app until a session exists.

use crate::{
	api::{self, payload, Action, Params},
	notification,
	session::use_session,
	util::{spawn_local, web_ext::target_value},
};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
	Login,
	Register,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Registration {
	username: String,
	password: String,
	full_name: String,
	email: String,
}

impl Registration {
	fn params(&self) -> Params {
		Params::default()
			.with("username", &self.username)
			.with("password", &self.password)
			.with("fullName", &self.full_name)
			.with("email", &self.email)
	}
}

fn bind<T: Clone + 'static>(state: &UseStateHandle<T>, apply: impl Fn(&mut T, String) + 'static) -> Callback<InputEvent> {
	let state = state.clone();
	Callback::from(move |e: InputEvent| {
		let mut value = (*state).clone();
		apply(&mut value, target_value(&e));
		state.set(value);
	})
}

#[function_component]
pub fn AuthOverlay() -> Html {
	let session = use_session();
	let tab = use_state_eq(|| Tab::Login);
	let credentials = use_state(|| (String::new(), String::new()));
	let registration = use_state(Registration::default);

	let select_tab = |target: Tab| {
		let tab = tab.clone();
		Callback::from(move |_: MouseEvent| tab.set(target))
	};

	let login = {
		let credentials = credentials.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			let (username, password) = (*credentials).clone();
			let session = session.clone();
			spawn_local("auth", async move {
				let params = Params::default().with("username", username).with("password", password);
				match api::call::<payload::SignedIn>(Action::Login, params).await.into_result() {
					Ok(signed_in) => {
						session.sign_in(signed_in.user);
						notification::success("Login successful!");
					}
					Err(message) => notification::error(message),
				}
				Ok(()) as anyhow::Result<()>
			});
		})
	};

	let register = {
		let registration = registration.clone();
		let tab = tab.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			let registration = registration.clone();
			let tab = tab.clone();
			spawn_local("auth", async move {
				let reply = api::call::<payload::Empty>(Action::Register, registration.params()).await;
				match reply.into_result() {
					Ok(_) => {
						notification::success("Registration successful! Please login.");
						registration.set(Registration::default());
						tab.set(Tab::Login);
					}
					Err(message) => notification::error(message),
				}
				Ok(()) as anyhow::Result<()>
			});
		})
	};

	let tab_class = |target: Tab| classes!("auth-tab", (*tab == target).then_some("active"));

	html! {
		<div class="auth-overlay active" id="authOverlay">
			<div class="auth-card">
				<h1 class="auth-title">{"AQi NCR"}</h1>
				<div class="auth-tabs">
					<button class={tab_class(Tab::Login)} onclick={select_tab(Tab::Login)}>{"Login"}</button>
					<button class={tab_class(Tab::Register)} onclick={select_tab(Tab::Register)}>{"Register"}</button>
				</div>
				{match *tab {
					Tab::Login => html! {
						<form class="auth-form active" id="loginForm" onsubmit={login}>
							<input class="form-control" placeholder="Username" required=true
								value={credentials.0.clone()}
								oninput={bind(&credentials, |(username, _), value| *username = value)} />
							<input class="form-control" type="password" placeholder="Password" required=true
								value={credentials.1.clone()}
								oninput={bind(&credentials, |(_, password), value| *password = value)} />
							<button class="btn btn-success w-100" type="submit">{"Sign In"}</button>
						</form>
					},
					Tab::Register => html! {
						<form class="auth-form active" id="registerForm" onsubmit={register}>
							<input class="form-control" placeholder="Full name" required=true
								value={registration.full_name.clone()}
								oninput={bind(&registration, |form, value| form.full_name = value)} />
							<input class="form-control" type="email" placeholder="Email" required=true
								value={registration.email.clone()}
								oninput={bind(&registration, |form, value| form.email = value)} />
							<input class="form-control" placeholder="Username" required=true
								value={registration.username.clone()}
								oninput={bind(&registration, |form, value| form.username = value)} />
							<input class="form-control" type="password" placeholder="Password" required=true
								value={registration.password.clone()}
								oninput={bind(&registration, |form, value| form.password = value)} />
							<button class="btn btn-primary w-100" type="submit">{"Create Account"}</button>
						</form>
					},
				}}
			</div>
		</div>
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn registration_sends_all_fields() {
		let form = Registration {
			username: "asha".into(),
			password: "hunter2".into(),
			full_name: "Asha Verma".into(),
			email: "asha@example.com".into(),
		};
		assert_eq!(
			form.params(),
			Params::default()
				.with("username", "asha")
				.with("password", "hunter2")
				.with("fullName", "Asha Verma")
				.with("email", "asha@example.com")
		);
	}
}
