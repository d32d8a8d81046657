//! Default styles
//!
//! Caller overrides are layered on top with `Style::patch`, so a later style
//! wins for every property it sets.

use ratatui::style::{Color, Modifier, Style};

/// Label color of a section that has items
pub const NAV_ACTIVE_COLOR: Color = Color::Rgb(0x00, 0x8f, 0xff);

/// Label color of an empty section
pub const NAV_INACTIVE_COLOR: Color = Color::Rgb(0xcc, 0xcc, 0xcc);

pub fn nav_text() -> Style {
    Style::default()
        .fg(NAV_ACTIVE_COLOR)
        .add_modifier(Modifier::BOLD)
}

pub fn nav_text_inactive() -> Style {
    Style::default()
        .fg(NAV_INACTIVE_COLOR)
        .add_modifier(Modifier::BOLD)
}

pub fn nav_container() -> Style {
    Style::default()
}

pub fn section_header() -> Style {
    Style::default().bg(Color::DarkGray)
}

pub fn section_header_text() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn separator() -> Style {
    Style::default().fg(Color::Rgb(80, 80, 80))
}

/// Caller overrides for the list and navigator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListStyles {
    /// Navigator strip container
    pub nav_item_style: Style,
    /// Navigator label text
    pub nav_item_text_style: Style,
    /// Section header row
    pub section_header_style: Style,
    /// Section header text
    pub section_header_text_style: Style,
}

impl ListStyles {
    pub fn nav_container(&self) -> Style {
        nav_container().patch(self.nav_item_style)
    }

    pub fn nav_text(&self, active: bool) -> Style {
        let base = if active { nav_text() } else { nav_text_inactive() };
        base.patch(self.nav_item_text_style)
    }

    pub fn section_header(&self) -> Style {
        section_header().patch(self.section_header_style)
    }

    pub fn section_header_text(&self) -> Style {
        section_header_text().patch(self.section_header_text_style)
    }
}
