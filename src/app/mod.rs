//! App layer - central state machine processing events
//!
//! Split into pure state (`state`), event handlers (`commands`), and the
//! async message loop (`actor`).

pub mod actor;
pub mod commands;
pub mod state;

pub use actor::AppActor;
pub use state::{AppState, DocsStatus, EndpointUnit};
