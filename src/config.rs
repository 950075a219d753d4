//! Compile-time settings for the client.

/// The deployed web-app endpoint every remote action is posted to.
/// Set `AQI_API_URL` when building to point the client at another deployment.
pub static API_URL: &str = match option_env!("AQI_API_URL") {
	Some(url) => url,
	None => "https://script.google.com/macros/s/AKfycbzprth63_vZBERCGxip7r3VQASDvHcuHbcxECVJWycsOpp2OJZ6T3EA2Zynd8IVCXbVhQ/exec",
};

/// Local storage key holding the serialized signed-in user.
pub static USER_STORAGE_KEY: &str = "aqiNCR_user";

pub const NOTIFICATION_DURATION_MS: u32 = 3_000;
pub const CHAT_REPLY_DELAY_MS: u32 = 500;
pub const BREATHING_TICK_MS: u32 = 100;

pub const MAP_CENTER: (f64, f64) = (28.6139, 77.2090);
pub const MAP_ZOOM: u8 = 11;
pub static MAP_ELEMENT_ID: &str = "liveMap";
pub static TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub static TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Badge slots shown on the gamification page, in unlock order.
pub static BADGE_SLOTS: [&str; 6] = [
	"First Breath",
	"Clean Air Ally",
	"Smog Spotter",
	"Green Guardian",
	"Air Advocate",
	"Climate Champion",
];

pub const COMPLAINT_REWARD: u64 = 10;
pub const BREATH_REWARD: u64 = 1;
