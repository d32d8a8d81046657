//! Alphalist: sectioned terminal list with an alphabetical jump navigator
//!
//! Exposes the widget and its pure logic so the demo binary and the
//! integration tests share one implementation.

pub mod config;
pub mod logic;
pub mod model;
pub mod sample;
pub mod ui;
pub mod utils;
