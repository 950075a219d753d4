use log::Level;

#[cfg(debug_assertions)]
const DEFAULT_LEVEL: Level = Level::Debug;
#[cfg(not(debug_assertions))]
const DEFAULT_LEVEL: Level = Level::Info;

/// Installs the global logger for the current target.
/// In the browser everything goes to the devtools console, elsewhere to the terminal.
pub fn init() {
	#[cfg(target_family = "wasm")]
	wasm_logger::init(wasm_logger::Config::new(DEFAULT_LEVEL));
	#[cfg(not(target_family = "wasm"))]
	{
		let _ = simplelog::SimpleLogger::init(DEFAULT_LEVEL.to_level_filter(), simplelog::Config::default());
	}
}
