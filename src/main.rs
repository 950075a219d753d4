#[cfg(target_family = "wasm")]
fn main() {
	aqi_ncr::start();
}

#[cfg(not(target_family = "wasm"))]
fn main() {
	aqi_ncr::logging::init();
	log::error!(target: env!("CARGO_PKG_NAME"), "this client only runs in the browser; build it for wasm32 (e.g. `trunk serve`)");
}
