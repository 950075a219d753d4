use crate::{
	api::{
		payload::{AreaAqi, Dashboard},
		Action,
	},
	aqi::AqiLevel,
	hooks::use_remote,
	notification,
	voice::{self, Listener, Readings, VoiceCommand},
};
use yew::prelude::*;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 200.0;

fn readings(dashboard: &Dashboard) -> Readings {
	Readings {
		aqi: format!("{:.0}", dashboard.current_aqi),
		level: AqiLevel::from_value(dashboard.current_aqi).to_string(),
		temp: format!("{}°C", dashboard.weather.temp),
		wind: format!("{} km/h", dashboard.weather.wind),
	}
}

/// SVG polyline coordinates for AQI per area, scaled so the y axis starts at zero.
fn chart_points(values: &[f64], width: f64, height: f64) -> String {
	let max = values.iter().copied().fold(0.0_f64, f64::max);
	let x_step = match values.len() {
		0 | 1 => 0.0,
		len => width / (len - 1) as f64,
	};
	values
		.iter()
		.enumerate()
		.map(|(idx, value)| {
			let y = match max > 0.0 {
				true => height - (value.max(0.0) / max) * height,
				false => height,
			};
			format!("{:.1},{:.1}", idx as f64 * x_step, y)
		})
		.collect::<Vec<_>>()
		.join(" ")
}

#[function_component]
pub fn Page() -> Html {
	let dashboard = use_remote::<Dashboard, _>(Action::GetDashboard, true, |reply| {
		if !reply.success {
			notification::error("Failed to load dashboard data");
		}
	});
	let readings_ref = use_mut_ref(Readings::default);
	let listener = use_mut_ref({
		let readings = readings_ref.clone();
		move || {
			Listener::new(move |transcript| {
				let reply = voice::respond(VoiceCommand::parse(&transcript), &readings.borrow());
				voice::speak(&reply.speech);
				if let Some(message) = reply.notification {
					notification::info(message);
				}
			})
		}
	});
	let on_voice = Callback::from(move |_: MouseEvent| match &*listener.borrow() {
		Some(listener) => listener.listen(),
		None => notification::error("Voice recognition not supported in this browser"),
	});

	let Some(data) = dashboard.data() else {
		return html! {
			<section class="view dashboard-view active">
				<div class="spinner-border text-info" role="status" />
			</section>
		};
	};
	*readings_ref.borrow_mut() = readings(data);
	let level = AqiLevel::from_value(data.current_aqi);

	html! {
		<section class="view dashboard-view active" id="dashboardView">
			<div class="row g-3">
				<div class="col-md-4">
					<div class="card aqi-card">
						<div class="current-aqi" id="currentAQI" style={format!("background: {}", level.gradient())}>
							{format!("{:.0}", data.current_aqi)}
						</div>
						<div class="aqi-level" id="aqiLevel">{level.label()}</div>
						<button class="btn btn-outline-info btn-sm" id="voiceCommandBtn" onclick={on_voice}>
							<i class="fas fa-microphone" />{" Ask"}
						</button>
					</div>
				</div>
				<div class="col-md-4">
					<div class="card weather-card">
						<h5>{"Weather"}</h5>
						<div id="weatherTemp">{format!("{}°C", data.weather.temp)}</div>
						<div id="weatherWind">{format!("{} km/h", data.weather.wind)}</div>
						<div id="weatherHumidity">{format!("{}%", data.weather.humidity)}</div>
					</div>
				</div>
				<div class="col-md-4">
					<div class="card tips-card">
						<h5>{"Health Tips"}</h5>
						<div id="tipsContainer">
							{data.tips.iter().map(|tip| html! { <div class="tip-item">{tip}</div> }).collect::<Html>()}
						</div>
					</div>
				</div>
			</div>
			<div class="area-aqi-grid" id="areaAqiGrid">
				{data.aqi_data.iter().map(area_card).collect::<Html>()}
			</div>
			<AqiChart areas={data.aqi_data.clone()} />
		</section>
	}
}

fn area_card(area: &AreaAqi) -> Html {
	let color = AqiLevel::from_value(area.aqi).color();
	html! {
		<div class="area-aqi-card">
			<div class="area-name">{&area.area}</div>
			<div class="area-aqi-value" style={format!("color: {color}")}>{format!("{:.0}", area.aqi)}</div>
			<div class="area-aqi-level">{&area.level}</div>
		</div>
	}
}

#[derive(Properties, PartialEq)]
struct AqiChartProps {
	areas: Vec<AreaAqi>,
}

#[function_component]
fn AqiChart(AqiChartProps { areas }: &AqiChartProps) -> Html {
	let values = areas.iter().map(|area| area.aqi).collect::<Vec<_>>();
	let points = chart_points(&values, CHART_WIDTH, CHART_HEIGHT);
	html! {
		<div class="card chart-card">
			<svg id="aqiChart" viewBox={format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")} preserveAspectRatio="none">
				<polyline points={points} fill="none" stroke="#00b4d8" stroke-width="2" />
			</svg>
			<div class="chart-labels d-flex justify-content-between">
				{areas.iter().map(|area| html! { <small>{&area.area}</small> }).collect::<Html>()}
			</div>
		</div>
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::api::payload::Weather;

	#[test]
	fn chart_scales_to_tallest_area() {
		assert_eq!(chart_points(&[100.0, 200.0, 0.0], 600.0, 200.0), "0.0,100.0 300.0,0.0 600.0,200.0");
	}

	#[test]
	fn chart_handles_degenerate_input() {
		assert_eq!(chart_points(&[], 600.0, 200.0), "");
		assert_eq!(chart_points(&[0.0], 600.0, 200.0), "0.0,200.0");
	}

	#[test]
	fn readings_are_display_text() {
		let dashboard = Dashboard {
			current_aqi: 182.0,
			weather: Weather {
				temp: 24.0,
				wind: 11.5,
				humidity: 63.0,
			},
			tips: vec![],
			aqi_data: vec![],
		};
		assert_eq!(
			readings(&dashboard),
			Readings {
				aqi: "182".into(),
				level: "Moderate".into(),
				temp: "24°C".into(),
				wind: "11.5 km/h".into(),
			}
		);
	}
}
