//! HTTP API for GameCash email verification and registration
//!
//! Routes live under `/api` behind an API key, with `/health` left open.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState, LiveAppState};
