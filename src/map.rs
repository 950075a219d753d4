//! The live hazard map: community-reported spots and shelters drawn over OpenStreetMap tiles.

use crate::{
	api::{
		payload::{CommunitySpot, MapData, Shelter},
		Params,
	},
	bindings::leaflet,
	config,
	util::error::BrowserError,
};
use serde::Serialize;
use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

static DATE_FORMAT: &[FormatItem<'static>] = format_description!("[day]/[month]/[year]");

/// Hazards a user can drop on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hazard {
	Fire,
	Dust,
}

impl Hazard {
	pub fn id(&self) -> &'static str {
		match self {
			Self::Fire => "fire",
			Self::Dust => "dust",
		}
	}

	pub fn confirmation(&self) -> String {
		format!("Report {} at this location?", self.id())
	}

	pub fn report_params(&self, (lat, lng): (f64, f64), user_id: &str) -> Params {
		Params::default()
			.with("type", self.id())
			.with("lat", lat)
			.with("lng", lng)
			.with("reportedBy", user_id)
	}
}

pub fn spot_color(kind: &str) -> &'static str {
	match kind {
		"fire" => "red",
		_ => "orange",
	}
}

pub fn shelter_color(status: &str) -> &'static str {
	match status {
		"Open" => "green",
		_ => "red",
	}
}

/// Calendar date of a report; the endpoint sends either an ISO string or epoch millis.
pub fn reported_on(timestamp: &serde_json::Value) -> String {
	let parsed = match timestamp {
		serde_json::Value::String(text) => {
			match OffsetDateTime::parse(text, &time::format_description::well_known::Rfc3339) {
				Ok(when) => Some(when),
				Err(_) => return text.clone(),
			}
		}
		serde_json::Value::Number(millis) => millis
			.as_i64()
			.and_then(|millis| OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()),
		_ => None,
	};
	parsed
		.and_then(|when| when.format(DATE_FORMAT).ok())
		.unwrap_or_else(|| "unknown".to_owned())
}

fn escape(text: &str) -> String {
	text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

pub fn spot_popup(spot: &CommunitySpot) -> String {
	format!(
		"<strong>{}</strong><br>Reported: {}",
		escape(&spot.kind.to_uppercase()),
		escape(&reported_on(&spot.timestamp))
	)
}

pub fn shelter_popup(shelter: &Shelter) -> String {
	format!(
		"<strong>{}</strong><br>Type: {}<br>Status: {}<br>Phone: {}",
		escape(&shelter.name),
		escape(&shelter.kind),
		escape(&shelter.status),
		escape(&shelter.phone)
	)
}

#[derive(Serialize)]
struct TileOptions {
	attribution: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CircleOptions {
	color: &'static str,
	fill_color: &'static str,
	fill_opacity: f64,
	radius: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DivIconOptions {
	class_name: &'static str,
	html: String,
	icon_size: [u32; 2],
}

#[derive(Serialize)]
struct MarkerOptions {
	#[serde(with = "serde_wasm_bindgen::preserve")]
	icon: wasm_bindgen::JsValue,
}

#[derive(thiserror::Error, Debug)]
pub enum MapError {
	#[error(transparent)]
	Browser(#[from] BrowserError),
	#[error(transparent)]
	Options(#[from] serde_wasm_bindgen::Error),
}

impl From<wasm_bindgen::JsValue> for MapError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		Self::Browser(value.into())
	}
}

/// A Leaflet map mounted on the page. Removed from the page when dropped.
pub struct LiveMap {
	map: leaflet::Map,
	markers: leaflet::Layer,
}

impl LiveMap {
	pub fn mount(element_id: &str) -> Result<Self, MapError> {
		let map = leaflet::map(element_id)?;
		let (lat, lng) = config::MAP_CENTER;
		map.set_view(&serde_wasm_bindgen::to_value(&[lat, lng])?, config::MAP_ZOOM);
		let tiles = TileOptions {
			attribution: config::TILE_ATTRIBUTION,
		};
		leaflet::tile_layer(config::TILE_URL, &serde_wasm_bindgen::to_value(&tiles)?).add_to(&map);
		let markers = leaflet::layer_group().add_to(&map);
		Ok(Self { map, markers })
	}

	pub fn center(&self) -> (f64, f64) {
		let center = self.map.get_center();
		(center.lat(), center.lng())
	}

	/// Replaces every marker with the ones in `data`.
	pub fn show(&self, data: &MapData) -> Result<(), MapError> {
		self.markers.clear_layers();
		for spot in &data.community_spots {
			let color = spot_color(&spot.kind);
			let options = CircleOptions {
				color,
				fill_color: color,
				fill_opacity: 0.7,
				radius: 8,
			};
			leaflet::circle_marker(
				&serde_wasm_bindgen::to_value(&[spot.lat, spot.lng])?,
				&serde_wasm_bindgen::to_value(&options)?,
			)
			.add_to_group(&self.markers)
			.bind_popup(&spot_popup(spot));
		}
		for shelter in &data.shelters {
			let icon = DivIconOptions {
				class_name: "shelter-marker",
				html: format!(
					"<i class=\"fas fa-hospital\" style=\"color: {}; font-size: 20px;\"></i>",
					shelter_color(&shelter.status)
				),
				icon_size: [20, 20],
			};
			let options = MarkerOptions {
				icon: leaflet::div_icon(&serde_wasm_bindgen::to_value(&icon)?),
			};
			leaflet::marker(
				&serde_wasm_bindgen::to_value(&[shelter.lat, shelter.lng])?,
				&serde_wasm_bindgen::to_value(&options)?,
			)
			.add_to_group(&self.markers)
			.bind_popup(&shelter_popup(shelter));
		}
		log::debug!(
			target: "map",
			"showing {} spots and {} shelters",
			data.community_spots.len(),
			data.shelters.len()
		);
		Ok(())
	}
}

impl Drop for LiveMap {
	fn drop(&mut self) {
		self.map.remove();
	}
}
