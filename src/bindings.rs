//! Imports for browser globals that `web-sys` does not cover.

pub mod leaflet;
pub mod speech;
