//! fxbridge server: a thin axum façade over the rate service.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;
pub mod models;

pub use main_lib::{build_state, init_tracing, AppState};
