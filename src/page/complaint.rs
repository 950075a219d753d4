use crate::{
	api::{self, payload, Action},
	complaint::{self, ChatScript, ComplaintDraft, ComplaintKind, DraftAction, ScriptAction, Sender},
	config,
	geolocation, notification,
	session::use_session,
	util::{spawn_local, web_ext::target_value},
};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[function_component]
pub fn Page() -> Html {
	let session = use_session();
	let script = use_reducer(ChatScript::default);
	let draft = use_reducer(ComplaintDraft::default);
	let chat_ref = use_node_ref();
	// keeps the pending bot reply alive; dropping it cancels the reply
	let reply_timer = use_mut_ref(|| None::<Timeout>);

	{
		let chat_ref = chat_ref.clone();
		use_effect_with(script.messages().len(), move |_| {
			if let Some(chat) = chat_ref.cast::<web_sys::Element>() {
				chat.set_scroll_top(chat.scroll_height());
			}
		});
	}

	let start = |kind: ComplaintKind| {
		let script = script.clone();
		let reply_timer = reply_timer.clone();
		Callback::from(move |_: MouseEvent| {
			script.dispatch(ScriptAction::Start(kind));
			let script = script.clone();
			*reply_timer.borrow_mut() = Some(Timeout::new(config::CHAT_REPLY_DELAY_MS, move || {
				script.dispatch(ScriptAction::Say(Sender::Bot, complaint::follow_up(kind)));
			}));
		})
	};

	let locate = {
		let draft = draft.clone();
		Callback::from(move |_: MouseEvent| {
			let draft = draft.clone();
			spawn_local("complaint", async move {
				match geolocation::current_position().await {
					Ok((lat, lng)) => {
						draft.dispatch(DraftAction::Located(lat, lng));
						notification::success("Location obtained successfully!");
					}
					Err(err) => notification::error(err.to_string()),
				}
				Ok(()) as anyhow::Result<()>
			});
		})
	};

	let submit = {
		let script = script.clone();
		let draft = draft.clone();
		let session = session.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			let (Some(kind), Some(user)) = (script.pending(), session.user()) else {
				return;
			};
			let params = match draft.params(&user.user_id, kind) {
				Ok(params) => params,
				Err(err) => {
					notification::error(err.to_string());
					return;
				}
			};
			let script = script.clone();
			let draft = draft.clone();
			let session = session.clone();
			spawn_local("complaint", async move {
				let reply = api::call::<payload::Empty>(Action::SubmitComplaint, params).await;
				if !reply.success {
					notification::error("Failed to submit complaint");
					return Ok(());
				}
				script.dispatch(ScriptAction::Submitted);
				draft.dispatch(DraftAction::Clear);
				session.award(config::COMPLAINT_REWARD, "Complaint submitted");
				Ok(()) as anyhow::Result<()>
			});
		})
	};

	let edit = |action: fn(String) -> DraftAction| {
		let draft = draft.clone();
		Callback::from(move |e: InputEvent| draft.dispatch(action(target_value(&e))))
	};

	html! {
		<section class="view complaint-view active" id="complaintView">
			<div class="chat-messages" id="chatMessages" ref={chat_ref}>
				{script.messages().iter().map(|message| html! {
					<div class={message.sender.class()}>{&message.text}</div>
				}).collect::<Html>()}
			</div>
			<div class="complaint-types d-flex gap-2 my-2">
				{ComplaintKind::ALL.iter().map(|kind| html! {
					<button class="btn btn-outline-light complaint-type" data-type={kind.id()} onclick={start(*kind)}>
						<i class={format!("fas fa-{}", kind.icon())} />{" "}{kind.display_name()}
					</button>
				}).collect::<Html>()}
			</div>
			<form
				id="complaintForm"
				class={classes!("complaint-form", (!script.form_visible()).then_some("hidden"))}
				data-type={script.pending().map(|kind| kind.id())}
				onsubmit={submit}
			>
				<textarea class="form-control" id="complaintDesc" placeholder="Describe the issue"
					value={draft.description.clone()}
					oninput={edit(DraftAction::Description)} />
				<div class="d-flex gap-2">
					<input class="form-control" id="complaintLat" placeholder="Latitude"
						value={draft.lat.clone()}
						oninput={edit(DraftAction::Lat)} />
					<input class="form-control" id="complaintLng" placeholder="Longitude"
						value={draft.lng.clone()}
						oninput={edit(DraftAction::Lng)} />
					<button type="button" class="btn btn-outline-info" id="getLocationBtn" onclick={locate}>
						<i class="fas fa-location-arrow" />
					</button>
				</div>
				<button type="submit" class="btn btn-success">{"Submit Complaint"}</button>
			</form>
		</section>
	}
}
