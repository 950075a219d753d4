pub mod api;
pub mod app;
pub mod aqi;
pub mod bindings;
pub mod breathing;
pub mod camera;
pub mod complaint;
pub mod components;
pub mod config;
pub mod gamification;
pub mod geolocation;
pub mod hooks;
pub mod logging;
pub mod map;
pub mod notification;
pub mod page;
pub mod route;
pub mod session;
pub mod util;
pub mod voice;

/// Mounts the app on the document body.
pub fn start() {
	logging::init();
	log::info!(target: env!("CARGO_PKG_NAME"), "starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
	yew::Renderer::<app::App>::new().render();
}
