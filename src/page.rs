use yew::prelude::*;
use yew_router::Routable;

pub mod ar;
pub mod complaint;
pub mod dashboard;
pub mod gamification;
pub mod map;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
	#[at("/")]
	Dashboard,
	#[at("/map")]
	Map,
	#[at("/complaint")]
	Complaint,
	#[at("/ar")]
	Ar,
	#[at("/gamification")]
	Gamification,
	#[not_found]
	#[at("/404")]
	NotFound,
}

impl Route {
	/// Views listed in the navigation bars, in display order.
	pub const NAV: [Self; 5] = [Self::Dashboard, Self::Map, Self::Complaint, Self::Ar, Self::Gamification];

	pub fn label(&self) -> &'static str {
		match self {
			Self::Dashboard => "Dashboard",
			Self::Map => "Live Map",
			Self::Complaint => "Report",
			Self::Ar => "AR Scope",
			Self::Gamification => "Breathe",
			Self::NotFound => "Not Found",
		}
	}

	pub fn icon(&self) -> &'static str {
		match self {
			Self::Dashboard => "chart-line",
			Self::Map => "map-marked-alt",
			Self::Complaint => "comment-dots",
			Self::Ar => "camera",
			Self::Gamification => "lungs",
			Self::NotFound => "question",
		}
	}
}

impl crate::route::Route for Route {
	fn html(self) -> Html {
		match self {
			Self::Dashboard => html! { <dashboard::Page /> },
			Self::Map => html! { <map::Page /> },
			Self::Complaint => html! { <complaint::Page /> },
			Self::Ar => html! { <ar::Page /> },
			Self::Gamification => html! { <gamification::Page /> },
			Self::NotFound => html! {
				<h1>{"404: Page not found"}</h1>
			},
		}
	}
}
