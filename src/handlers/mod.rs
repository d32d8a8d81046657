//! Event Handlers
//!
//! - keyboard: scrolling and section jumps
//! - mouse: navigator gestures and wheel scrolling, delegated to the list view

pub mod keyboard;
pub mod mouse;

// Re-export for convenience
pub use keyboard::handle_key;
pub use mouse::handle_mouse;
