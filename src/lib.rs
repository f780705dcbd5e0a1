//! grid-rs: data-grid state engine.
//!
//! The engine owns column definitions plus visibility, order, pinning and
//! width state, and derives the views a rendering layer draws from
//! (ordered visible leaf columns, header rows, visible row cells).

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{GridEngine, GridEngineConfig};
pub use error::{GridError, GridResult};
