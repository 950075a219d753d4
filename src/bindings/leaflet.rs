use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
	pub type Map;

	#[wasm_bindgen(js_namespace = L, js_name = map, catch)]
	pub fn map(element_id: &str) -> Result<Map, JsValue>;

	#[wasm_bindgen(method, js_name = setView)]
	pub fn set_view(this: &Map, center: &JsValue, zoom: u8) -> Map;

	#[wasm_bindgen(method, js_name = getCenter)]
	pub fn get_center(this: &Map) -> LatLng;

	#[wasm_bindgen(method)]
	pub fn remove(this: &Map);

	pub type LatLng;

	#[wasm_bindgen(method, getter)]
	pub fn lat(this: &LatLng) -> f64;

	#[wasm_bindgen(method, getter)]
	pub fn lng(this: &LatLng) -> f64;

	pub type Layer;

	#[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
	pub fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

	#[wasm_bindgen(js_namespace = L, js_name = circleMarker)]
	pub fn circle_marker(lat_lng: &JsValue, options: &JsValue) -> Layer;

	#[wasm_bindgen(js_namespace = L, js_name = marker)]
	pub fn marker(lat_lng: &JsValue, options: &JsValue) -> Layer;

	#[wasm_bindgen(js_namespace = L, js_name = divIcon)]
	pub fn div_icon(options: &JsValue) -> JsValue;

	#[wasm_bindgen(method, js_name = addTo)]
	pub fn add_to(this: &Layer, map: &Map) -> Layer;

	#[wasm_bindgen(method, js_name = addTo)]
	pub fn add_to_group(this: &Layer, group: &Layer) -> Layer;

	#[wasm_bindgen(method, js_name = bindPopup)]
	pub fn bind_popup(this: &Layer, html: &str) -> Layer;

	#[wasm_bindgen(method, js_name = clearLayers)]
	pub fn clear_layers(this: &Layer);

	#[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
	pub fn layer_group() -> Layer;
}
