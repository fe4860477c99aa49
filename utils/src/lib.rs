//! Shared utilities for the IOU workspace.

pub mod logging;

pub use logging::init_tracing;
