//! Platform abstraction layer
//!
//! Handles browser specifics:
//! - Keyboard mapping
//! - Canvas sizing and readout element (web only)

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod input;

pub use input::direction_for_key;
