//! Widget Model
//!
//! Plain data shared by the list, the navigator and the logic functions:
//!
//! - **section**: Section map, borrowed section views, normalized nav sections
//! - **list**: Height configuration and scroll command types
//! - **navigator**: Navigator entries, reference measurement, gesture tracker

pub mod list;
pub mod navigator;
pub mod section;

pub use list::{ListConfig, ScrollOutcome, ScrollToLocation};
pub use navigator::{
    GestureState, LayoutMeasurement, NavSelection, NavigatorEntry, PendingMeasure, SelectSource,
};
pub use section::{NavSection, Section, SectionMap, TitledSection};
