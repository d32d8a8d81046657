//! Navigator label rendering
//!
//! A label is produced by a [`NavItemRenderer`]. Callers may pass any closure
//! taking a [`NavigatorEntry`]; without one, [`DefaultNavItem`] draws the title
//! in the active or inactive text style.

use ratatui::text::{Line, Span};

use super::styles::ListStyles;
use crate::model::NavigatorEntry;

/// Produces the label for one navigator entry
pub trait NavItemRenderer {
    fn render(&self, entry: &NavigatorEntry) -> Line<'static>;
}

impl<F> NavItemRenderer for F
where
    F: Fn(&NavigatorEntry) -> Line<'static>,
{
    fn render(&self, entry: &NavigatorEntry) -> Line<'static> {
        self(entry)
    }
}

/// Title text, highlighted when the section has items and muted when it doesn't
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNavItem {
    pub styles: ListStyles,
}

impl DefaultNavItem {
    pub fn new(styles: ListStyles) -> Self {
        Self { styles }
    }
}

impl NavItemRenderer for DefaultNavItem {
    fn render(&self, entry: &NavigatorEntry) -> Line<'static> {
        Line::from(Span::styled(
            entry.title.clone(),
            self.styles.nav_text(entry.active),
        ))
    }
}
