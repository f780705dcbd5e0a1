//! Observer hooks for host applications.

pub mod plugins;

pub use plugins::{GridContext, GridEvent, GridPlugin};
