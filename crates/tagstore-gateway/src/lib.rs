//! HTTP front end for the Tagstore query service.
//!
//! The router is built by [`App::router`] from an [`AppState`] that carries
//! the query service, so handlers never reach for global state.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use state::AppState;
