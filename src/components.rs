pub mod auth;
pub mod badges;
pub mod navbar;
pub mod toasts;

pub use auth::AuthOverlay;
pub use badges::BadgeGrid;
pub use navbar::Navbar;
pub use toasts::Toasts;
