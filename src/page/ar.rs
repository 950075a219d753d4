use crate::{camera, notification, util::spawn_local};
use std::{cell::RefCell, rc::Rc};
use yew::prelude::*;

const DEFAULT_SMOG: u8 = 50;

#[function_component]
pub fn Page() -> Html {
	let smog = use_state_eq(|| DEFAULT_SMOG);
	let video_ref = use_node_ref();
	let stream = use_mut_ref(|| None::<web_sys::MediaStream>);

	{
		// leaving the page releases the camera
		let stream = stream.clone();
		use_effect_with((), move |_| {
			move || {
				if let Some(stream) = stream.borrow_mut().take() {
					camera::stop(&stream);
				}
			}
		});
	}

	let on_slide = {
		let smog = smog.clone();
		Callback::from(move |e: InputEvent| {
			let value = crate::util::web_ext::target_value(&e);
			if let Ok(level) = value.parse::<u8>() {
				smog.set(level.min(100));
			}
		})
	};

	let start = {
		let video_ref = video_ref.clone();
		let stream = stream.clone();
		Callback::from(move |_: MouseEvent| {
			let video_ref = video_ref.clone();
			let stream = stream.clone();
			spawn_local("ar", async move {
				match camera::open_rear_camera().await {
					Ok(opened) => {
						attach(&video_ref, &stream, opened);
						notification::success("Camera started successfully");
					}
					Err(err) => notification::error(format!("Failed to access camera: {err}")),
				}
				Ok(()) as anyhow::Result<()>
			});
		})
	};

	let stop = {
		let video_ref = video_ref.clone();
		Callback::from(move |_: MouseEvent| {
			let Some(active) = stream.borrow_mut().take() else {
				return;
			};
			camera::stop(&active);
			if let Some(video) = video_ref.cast::<web_sys::HtmlVideoElement>() {
				video.set_src_object(None);
			}
			notification::success("Camera stopped");
		})
	};

	html! {
		<section class="view ar-view active" id="arView">
			<div class="ar-container position-relative">
				<video id="arVideo" ref={video_ref} autoplay=true playsinline=true muted=true />
				<div id="smogOverlay" class="smog-overlay" style={format!("opacity: {}", camera::smog_opacity(*smog))} />
			</div>
			<div class="ar-controls">
				<label for="smogSlider">{"Smog level: "}<span id="smogLevel">{camera::smog_label(*smog)}</span></label>
				<input type="range" class="form-range" id="smogSlider" min="0" max="100"
					value={smog.to_string()} oninput={on_slide} />
				<div class="d-flex gap-2">
					<button class="btn btn-success" id="startCameraBtn" onclick={start}>{"Start Camera"}</button>
					<button class="btn btn-outline-danger" id="stopCameraBtn" onclick={stop}>{"Stop Camera"}</button>
				</div>
			</div>
		</section>
	}
}

fn attach(video_ref: &NodeRef, slot: &Rc<RefCell<Option<web_sys::MediaStream>>>, opened: web_sys::MediaStream) {
	if let Some(video) = video_ref.cast::<web_sys::HtmlVideoElement>() {
		video.set_src_object(Some(&opened));
	}
	if let Some(previous) = slot.borrow_mut().replace(opened) {
		camera::stop(&previous);
	}
}
