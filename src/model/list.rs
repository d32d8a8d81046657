//! List Model
//!
//! Height configuration for the sectioned list and the parameters of the
//! host list's scroll command.

use serde::Deserialize;

/// Row height of every item outside the first section
pub const FALLBACK_ITEM_HEIGHT: u16 = 1;

/// Section header height when the config leaves it out
pub const DEFAULT_SECTION_HEADER_HEIGHT: u16 = 1;

/// Section footer height when the config leaves it out
pub const DEFAULT_SECTION_FOOTER_HEIGHT: u16 = 0;

/// Separator height when the config leaves it out
pub const DEFAULT_SEPARATOR_HEIGHT: u16 = 0;

/// Row heights used to precompute scroll offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ListConfig {
    /// Height of each item in the first section
    pub item_height: u16,
    #[serde(default = "default_section_header_height")]
    pub section_header_height: u16,
    #[serde(default = "default_section_footer_height")]
    pub section_footer_height: u16,
    #[serde(default = "default_separator_height")]
    pub separator_height: u16,
    /// Pin the current section's header to the top row
    #[serde(default = "default_sticky_section_headers")]
    pub sticky_section_headers: bool,
}

fn default_section_header_height() -> u16 {
    DEFAULT_SECTION_HEADER_HEIGHT
}

fn default_section_footer_height() -> u16 {
    DEFAULT_SECTION_FOOTER_HEIGHT
}

fn default_separator_height() -> u16 {
    DEFAULT_SEPARATOR_HEIGHT
}

fn default_sticky_section_headers() -> bool {
    true
}

impl ListConfig {
    pub fn new(item_height: u16) -> Self {
        Self {
            item_height,
            section_header_height: DEFAULT_SECTION_HEADER_HEIGHT,
            section_footer_height: DEFAULT_SECTION_FOOTER_HEIGHT,
            separator_height: DEFAULT_SEPARATOR_HEIGHT,
            sticky_section_headers: true,
        }
    }

    pub fn with_section_header_height(mut self, height: u16) -> Self {
        self.section_header_height = height;
        self
    }

    pub fn with_section_footer_height(mut self, height: u16) -> Self {
        self.section_footer_height = height;
        self
    }

    pub fn with_separator_height(mut self, height: u16) -> Self {
        self.separator_height = height;
        self
    }

    pub fn with_sticky_section_headers(mut self, sticky: bool) -> Self {
        self.sticky_section_headers = sticky;
        self
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new(FALLBACK_ITEM_HEIGHT)
    }
}

/// Target of a host-list scroll command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollToLocation {
    pub section_index: usize,
    pub item_index: usize,
    pub animated: bool,
    /// Rows to leave above the item (e.g. for a pinned header)
    pub view_offset: usize,
}

/// What a scroll-to-section request ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The host list accepted the command and is heading to `offset`
    Scrolled { section_index: usize, offset: usize },
    /// The host list has not been rendered yet
    Detached,
    /// The key is not among the current sections
    UnknownSection,
}
