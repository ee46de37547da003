//! Core types for finni.
//!
//! Terminal events and the handler that polls them.

pub mod event;

pub use event::{Event, EventHandler};
