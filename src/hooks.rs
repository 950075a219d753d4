use crate::api::{self, Action, Params, Reply};
use serde::de::DeserializeOwned;
use std::rc::Rc;
use yew::prelude::*;
use yew_hooks::use_mount;

#[derive(Debug)]
pub struct RemoteState<T> {
	pub loading: bool,
	pub reply: Option<Rc<Reply<T>>>,
}

impl<T> RemoteState<T> {
	/// Payload of the last reply, if it succeeded.
	pub fn data(&self) -> Option<&T> {
		let reply = self.reply.as_deref()?;
		match reply.success {
			true => reply.payload.as_ref(),
			false => None,
		}
	}
}

pub struct RemoteHandle<T> {
	state: UseStateHandle<RemoteState<T>>,
	run: Rc<dyn Fn()>,
}
impl<T> Clone for RemoteHandle<T> {
	fn clone(&self) -> Self {
		Self {
			state: self.state.clone(),
			run: self.run.clone(),
		}
	}
}
impl<T> RemoteHandle<T> {
	pub fn run(&self) {
		(*self.run)();
	}
}
impl<T> std::ops::Deref for RemoteHandle<T> {
	type Target = RemoteState<T>;

	fn deref(&self) -> &Self::Target {
		&self.state
	}
}

/// Fetches `action` from the endpoint, optionally as soon as the component mounts.
/// `on_reply` sees every reply, successful or not, before it is stored.
#[hook]
pub fn use_remote<T, F>(action: Action, run_first_mount: bool, on_reply: F) -> RemoteHandle<T>
where
	T: DeserializeOwned + 'static,
	F: Fn(&Reply<T>) + 'static,
{
	let state = use_state(|| RemoteState::<T> {
		loading: false,
		reply: None,
	});
	let on_reply = Rc::new(on_reply);
	let run = {
		let state = state.clone();
		Rc::new(move || {
			state.set(RemoteState {
				loading: true,
				reply: state.reply.clone(),
			});
			let async_state = state.clone();
			let on_reply = on_reply.clone();
			wasm_bindgen_futures::spawn_local(async move {
				let reply = api::call::<T>(action, Params::default()).await;
				on_reply(&reply);
				async_state.set(RemoteState {
					loading: false,
					reply: Some(Rc::new(reply)),
				});
			})
		})
	};
	let run_on_mount = run.clone();
	use_mount(move || {
		if run_first_mount {
			run_on_mount();
		}
	});
	RemoteHandle { state, run }
}
