/// CPCB severity bands for an AQI reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AqiLevel {
	Good,
	Satisfactory,
	Moderate,
	Poor,
	VeryPoor,
	Severe,
}

impl AqiLevel {
	pub fn from_value(aqi: f64) -> Self {
		match aqi {
			aqi if aqi <= 50.0 => Self::Good,
			aqi if aqi <= 100.0 => Self::Satisfactory,
			aqi if aqi <= 200.0 => Self::Moderate,
			aqi if aqi <= 300.0 => Self::Poor,
			aqi if aqi <= 400.0 => Self::VeryPoor,
			_ => Self::Severe,
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Good => "Good",
			Self::Satisfactory => "Satisfactory",
			Self::Moderate => "Moderate",
			Self::Poor => "Poor",
			Self::VeryPoor => "Very Poor",
			Self::Severe => "Severe",
		}
	}

	pub fn color(&self) -> &'static str {
		match self {
			Self::Good => "#00e400",
			Self::Satisfactory => "#ffff00",
			Self::Moderate => "#ff7e00",
			Self::Poor => "#ff0000",
			Self::VeryPoor => "#8f3f97",
			Self::Severe => "#7e0023",
		}
	}

	pub fn gradient(&self) -> String {
		let color = self.color();
		format!("linear-gradient(135deg, {color} 0%, {color}80 100%)")
	}
}

impl std::fmt::Display for AqiLevel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.label())
	}
}
