// UI module - widgets rendered with Ratatui
//
// Architecture:
// - section_list: Host list that scrolls over precomputed row offsets
// - navigator: Side strip of section labels with drag-to-section mapping
// - nav_item: Label renderer capability and its default implementation
// - sectioned_list_view: Composition of the two, owns the section data
// - styles: Default styles and caller overrides
// - status_bar: One-line status and hotkey hints for the demo app

pub mod nav_item;
pub mod navigator;
pub mod section_list;
pub mod sectioned_list_view;
pub mod status_bar;
pub mod styles;

pub use nav_item::{DefaultNavItem, NavItemRenderer};
pub use navigator::{MouseResponse, SectionIndexNavigator};
pub use section_list::{RowContent, SectionList};
pub use sectioned_list_view::SectionedListView;
pub use styles::ListStyles;
