//! Payloads carried next to `success`/`message` in endpoint replies.
//! The endpoint is spreadsheet-backed, so numbers may arrive as strings.

use crate::session::User;
use serde::{Deserialize, Deserializer};

/// For actions whose reply carries nothing beyond `success` and `message`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Empty {}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignedIn {
	pub user: User,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dashboard {
	#[serde(rename = "currentAQI", deserialize_with = "lenient::number")]
	pub current_aqi: f64,
	pub weather: Weather,
	#[serde(default)]
	pub tips: Vec<String>,
	#[serde(rename = "aqiData", default)]
	pub aqi_data: Vec<AreaAqi>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Weather {
	#[serde(deserialize_with = "lenient::number")]
	pub temp: f64,
	#[serde(deserialize_with = "lenient::number")]
	pub wind: f64,
	#[serde(deserialize_with = "lenient::number")]
	pub humidity: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AreaAqi {
	pub area: String,
	#[serde(deserialize_with = "lenient::number")]
	pub aqi: f64,
	#[serde(default)]
	pub level: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapData {
	#[serde(rename = "communitySpots", default)]
	pub community_spots: Vec<CommunitySpot>,
	#[serde(default)]
	pub shelters: Vec<Shelter>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommunitySpot {
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(deserialize_with = "lenient::number")]
	pub lat: f64,
	#[serde(deserialize_with = "lenient::number")]
	pub lng: f64,
	#[serde(default)]
	pub timestamp: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Shelter {
	pub name: String,
	#[serde(rename = "type", default)]
	pub kind: String,
	#[serde(default)]
	pub status: String,
	#[serde(default, deserialize_with = "lenient::text")]
	pub phone: String,
	#[serde(deserialize_with = "lenient::number")]
	pub lat: f64,
	#[serde(deserialize_with = "lenient::number")]
	pub lng: f64,
}

mod lenient {
	use super::*;
	use serde::de::Error;
	use serde_json::Value;

	pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
	where
		D: Deserializer<'de>,
	{
		match Value::deserialize(deserializer)? {
			Value::Number(value) => value.as_f64().ok_or_else(|| D::Error::custom("number out of range")),
			Value::String(value) => value.trim().parse().map_err(D::Error::custom),
			other => Err(D::Error::custom(format!("expected a number, found {other}"))),
		}
	}

	pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
	where
		D: Deserializer<'de>,
	{
		match Value::deserialize(deserializer)? {
			Value::String(value) => Ok(value),
			Value::Null => Ok(String::new()),
			other => Ok(other.to_string()),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::api::Reply;

	#[test]
	fn dashboard_reply() {
		let reply: Reply<Dashboard> = serde_json::from_value(serde_json::json!({
			"success": true,
			"currentAQI": 182,
			"weather": { "temp": 24, "wind": "11", "humidity": 63 },
			"tips": ["Wear an N95 mask outdoors"],
			"aqiData": [
				{ "area": "Anand Vihar", "aqi": 301, "level": "Very Poor" },
				{ "area": "Dwarka", "aqi": "144", "level": "Moderate" },
			],
		}))
		.unwrap();
		let dashboard = reply.into_result().unwrap();
		assert_eq!(dashboard.current_aqi, 182.0);
		assert_eq!(dashboard.weather.wind, 11.0);
		assert_eq!(dashboard.tips.len(), 1);
		assert_eq!(dashboard.aqi_data[1].aqi, 144.0);
	}

	#[test]
	fn map_reply() {
		let reply: Reply<MapData> = serde_json::from_value(serde_json::json!({
			"success": true,
			"communitySpots": [
				{ "type": "fire", "lat": "28.61", "lng": 77.2, "timestamp": "2024-11-02T10:00:00.000Z" },
			],
			"shelters": [
				{ "name": "AIIMS", "type": "Hospital", "status": "Open", "phone": 1126588500u64, "lat": 28.56, "lng": 77.21 },
			],
		}))
		.unwrap();
		let data = reply.into_result().unwrap();
		assert_eq!(data.community_spots[0].kind, "fire");
		assert_eq!(data.community_spots[0].lat, 28.61);
		assert_eq!(data.shelters[0].phone, "1126588500");
	}

	#[test]
	fn login_reply_carries_user() {
		let reply: Reply<SignedIn> = serde_json::from_value(serde_json::json!({
			"success": true,
			"user": { "userID": "USR001", "fullName": "Asha Verma", "points": 15, "email": "a@b.c" },
		}))
		.unwrap();
		let user = reply.into_result().unwrap().user;
		assert_eq!(user.user_id, "USR001");
		assert_eq!(user.points, 15);
		assert_eq!(user.profile.get("email"), Some(&serde_json::json!("a@b.c")));
	}
}
