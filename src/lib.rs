//! # Scout TUI
//!
//! A terminal OpenAPI explorer: fetches an OpenAPI/Swagger document,
//! lists the described endpoints, and lets you fill in path parameters
//! and fire live requests against a configured base URL, with each
//! endpoint's result displayed inline.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod constants;
pub mod docs;
pub mod messages;
pub mod models;
pub mod network;
pub mod session;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, DocsStatus, EndpointUnit};
pub use docs::parse_endpoints;
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{EndpointDescriptor, InvocationOutcome, InvocationStatus};
pub use network::NetworkActor;
pub use session::Session;
