//! Business Logic
//!
//! This module contains pure functions that can be unit tested:
//! - gesture: Pointer row to section index mapping
//! - item_layout: Row heights and precomputed scroll offsets
//! - layout: Navigator strip placement
//! - navigation: Stepping between active sections
//! - scroll: Scroll offset clamping and animation easing

pub mod gesture;
pub mod item_layout;
pub mod layout;
pub mod navigation;
pub mod scroll;
