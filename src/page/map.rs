use crate::{
	api::{
		self,
		payload::{self, MapData},
		Action, Reply,
	},
	config,
	hooks::use_remote,
	map::{Hazard, LiveMap},
	notification,
	session::use_session,
	util::{spawn_local, web_ext::confirm},
};
use std::{cell::RefCell, rc::Rc};
use yew::prelude::*;

#[function_component]
pub fn Page() -> Html {
	let session = use_session();
	let live_map = use_mut_ref(|| None::<LiveMap>);

	let map_data = {
		let live_map = live_map.clone();
		use_remote::<MapData, _>(Action::GetMapData, false, move |reply: &Reply<MapData>| {
			if !reply.success {
				return;
			}
			let live_map = live_map.borrow();
			let (Some(map), Some(data)) = (live_map.as_ref(), reply.payload.as_ref()) else {
				return;
			};
			if let Err(err) = map.show(data) {
				log::error!(target: "map", "failed to draw markers: {err:?}");
			}
		})
	};

	// Leaflet needs the container in the DOM, so the map is built after the first render.
	{
		let live_map = live_map.clone();
		let map_data = map_data.clone();
		use_effect_with((), move |_| {
			match LiveMap::mount(config::MAP_ELEMENT_ID) {
				Ok(map) => {
					*live_map.borrow_mut() = Some(map);
					map_data.run();
				}
				Err(err) => log::error!(target: "map", "failed to create map: {err:?}"),
			}
			move || {
				live_map.borrow_mut().take();
			}
		});
	}

	let report = |hazard: Hazard| {
		let session = session.clone();
		let live_map = live_map.clone();
		let map_data = map_data.clone();
		Callback::from(move |_: MouseEvent| {
			report_hazard(hazard, &session, &live_map, map_data.clone());
		})
	};

	html! {
		<section class="view map-view active" id="mapView">
			<div class="map-actions d-flex gap-2 mb-2">
				<button class="btn btn-danger" id="reportFireBtn" onclick={report(Hazard::Fire)}>
					<i class="fas fa-fire" />{" Report Fire"}
				</button>
				<button class="btn btn-warning" id="reportDustBtn" onclick={report(Hazard::Dust)}>
					<i class="fas fa-smog" />{" Report Dust"}
				</button>
				if map_data.loading {
					<span class="spinner-border spinner-border-sm text-info align-self-center" />
				}
			</div>
			<div id={config::MAP_ELEMENT_ID} class="live-map" />
		</section>
	}
}

fn report_hazard(
	hazard: Hazard,
	session: &crate::session::SessionHandle,
	live_map: &Rc<RefCell<Option<LiveMap>>>,
	map_data: crate::hooks::RemoteHandle<MapData>,
) {
	let Some(center) = live_map.borrow().as_ref().map(LiveMap::center) else {
		return;
	};
	let Some(user_id) = session.user().map(|user| user.user_id.clone()) else {
		return;
	};
	if !confirm(&hazard.confirmation()) {
		return;
	}
	spawn_local("map", async move {
		let reply = api::call::<payload::Empty>(Action::ReportSpot, hazard.report_params(center, &user_id)).await;
		match reply.success {
			true => {
				notification::success(format!("{} reported successfully!", hazard.id()));
				map_data.run();
			}
			false => notification::error("Failed to report issue"),
		}
		Ok(()) as anyhow::Result<()>
	});
}
