//! Sectioned list with a jump-to-section navigator
//!
//! Owns the section map and hands it to the host [`SectionList`] for drawing
//! and to the [`SectionIndexNavigator`] for its labels. Navigator selections
//! come back as values and are turned into `scroll_to_section` calls here.

use std::fmt::{self, Display};

use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    Frame,
};

use super::nav_item::{DefaultNavItem, NavItemRenderer};
use super::navigator::{MouseResponse, SectionIndexNavigator};
use super::section_list::{RowContent, SectionList};
use super::styles::ListStyles;
use crate::logic::item_layout::{self, RowKind};
use crate::logic::navigation;
use crate::model::{
    ListConfig, NavSelection, NavigatorEntry, ScrollOutcome, ScrollToLocation, Section, SectionMap,
};

pub type TitleFormatter = Box<dyn Fn(&str) -> String>;
pub type ScrollCallback = Box<dyn FnMut(&str)>;
pub type KeyExtractor<T> = Box<dyn Fn(&T, usize) -> String>;
pub type ItemRenderer<T> = Box<dyn Fn(&T) -> Line<'static>>;

pub struct SectionedListView<T> {
    config: ListConfig,
    data: SectionMap<T>,
    hide_nav: bool,
    get_nav_item_title: Option<TitleFormatter>,
    nav_item: Option<Box<dyn NavItemRenderer>>,
    on_scroll_to_section: Option<ScrollCallback>,
    key_extractor: Option<KeyExtractor<T>>,
    render_item: Option<ItemRenderer<T>>,
    styles: ListStyles,
    /// Host list; attached by the first render
    list: Option<SectionList>,
    navigator: SectionIndexNavigator,
}

impl<T> fmt::Debug for SectionedListView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionedListView")
            .field("config", &self.config)
            .field("sections", &self.data.len())
            .field("hide_nav", &self.hide_nav)
            .field("list", &self.list)
            .field("navigator", &self.navigator)
            .finish_non_exhaustive()
    }
}

impl<T: Display> SectionedListView<T> {
    pub fn new(config: ListConfig, data: SectionMap<T>) -> Self {
        Self {
            config,
            data,
            hide_nav: false,
            get_nav_item_title: None,
            nav_item: None,
            on_scroll_to_section: None,
            key_extractor: None,
            render_item: None,
            styles: ListStyles::default(),
            list: None,
            navigator: SectionIndexNavigator::new(),
        }
    }

    pub fn hide_nav(mut self, hide: bool) -> Self {
        self.hide_nav = hide;
        self
    }

    /// Title shown in the navigator for a section key
    pub fn nav_item_title(mut self, format: impl Fn(&str) -> String + 'static) -> Self {
        self.get_nav_item_title = Some(Box::new(format));
        self
    }

    /// Custom navigator label renderer
    pub fn nav_item(mut self, renderer: impl NavItemRenderer + 'static) -> Self {
        self.nav_item = Some(Box::new(renderer));
        self
    }

    /// Called with the section key after every navigation to a section
    pub fn on_scroll_to_section(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_scroll_to_section = Some(Box::new(callback));
        self
    }

    pub fn key_extractor(mut self, extract: impl Fn(&T, usize) -> String + 'static) -> Self {
        self.key_extractor = Some(Box::new(extract));
        self
    }

    pub fn render_item(mut self, render: impl Fn(&T) -> Line<'static> + 'static) -> Self {
        self.render_item = Some(Box::new(render));
        self
    }

    pub fn styles(mut self, styles: ListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Replace the section data; takes effect on the next render
    pub fn set_data(&mut self, data: SectionMap<T>) {
        self.data = data;
    }

    pub fn data(&self) -> &SectionMap<T> {
        &self.data
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn is_nav_hidden(&self) -> bool {
        self.hide_nav
    }

    /// Ordered sections, one per key in insertion order
    pub fn sections(&self) -> Vec<Section<'_, T>> {
        self.data.sections().collect()
    }

    /// Item row height used for offset precomputation
    pub fn item_height(&self, section_index: usize, row_index: usize) -> u16 {
        item_layout::item_height(&self.config, section_index, row_index)
    }

    pub fn section_header_height(&self, section_index: usize) -> u16 {
        item_layout::section_header_height(&self.config, section_index)
    }

    pub fn navigator_entries(&self) -> Vec<NavigatorEntry> {
        NavigatorEntry::build(&self.data.nav_sections(), self.get_nav_item_title.as_deref())
    }

    pub fn list(&self) -> Option<&SectionList> {
        self.list.as_ref()
    }

    pub fn navigator(&self) -> &SectionIndexNavigator {
        &self.navigator
    }

    /// Key of a row: the extractor's result, or the item text followed by its index
    pub fn item_key(&self, item: &T, index: usize) -> String {
        match &self.key_extractor {
            Some(extract) => extract(item, index),
            None => format!("{item}{index}"),
        }
    }

    /// Keys of the items with at least one line on screen
    pub fn visible_item_keys(&self) -> Vec<String> {
        let Some(list) = &self.list else {
            return Vec::new();
        };
        list.visible_rows()
            .filter_map(|row| match row.kind {
                RowKind::Item { section, row } => self
                    .data
                    .section(section)
                    .and_then(|s| s.data.get(row))
                    .map(|item| self.item_key(item, row)),
                _ => None,
            })
            .collect()
    }

    /// Key of the section under the top line of the list
    pub fn current_section(&self) -> Option<&str> {
        let top = self.list.as_ref()?.top_row()?;
        self.data.section(top.kind.section()).map(|s| s.key)
    }

    /// Draw the list into `area`, and the navigator over it unless hidden
    ///
    /// The first render attaches the host list.
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let rows = item_layout::compute_layout(&self.config, &self.data.section_lens());
        let list = self.list.get_or_insert_with(SectionList::new);
        list.set_layout(rows, area);

        let header_style = self.styles.section_header();
        let header_text_style = self.styles.section_header_text();
        let data = &self.data;
        let render_item = self.render_item.as_deref();
        list.render(f.buffer_mut(), self.config.sticky_section_headers, |kind| match kind {
            RowKind::Header { section } => RowContent {
                line: Line::from(Span::styled(
                    data.section(section).map(|s| s.key).unwrap_or_default().to_string(),
                    header_text_style,
                )),
                style: header_style,
            },
            RowKind::Item { section, row } => {
                let line = data
                    .section(section)
                    .and_then(|s| s.data.get(row))
                    .map(|item| match render_item {
                        Some(render) => render(item),
                        None => Line::from(item.to_string()),
                    })
                    .unwrap_or_default();
                RowContent {
                    line,
                    style: Default::default(),
                }
            }
            RowKind::Footer { .. } => RowContent::default(),
        });

        if self.hide_nav {
            return;
        }

        let entries = self.navigator_entries();
        let default_item = DefaultNavItem::new(self.styles);
        let renderer: &dyn NavItemRenderer = match &self.nav_item {
            Some(renderer) => renderer.as_ref(),
            None => &default_item,
        };
        self.navigator.render(
            f.buffer_mut(),
            area,
            &entries,
            renderer,
            self.styles.nav_container(),
        );
    }

    /// Run the work deferred to this event-loop turn; returns true if a redraw is due
    pub fn tick(&mut self) -> bool {
        let measured = self.navigator.tick();
        let scrolled = self.list.as_mut().is_some_and(SectionList::tick);
        measured || scrolled
    }

    /// Detach the host list and cancel pending navigator work
    pub fn unmount(&mut self) {
        self.navigator.unmount();
        self.list = None;
    }

    /// Scroll the list to a section's first item and notify the caller
    ///
    /// Before the first render this does nothing. A key that isn't among the
    /// current sections doesn't move the list and doesn't notify.
    pub fn scroll_to_section(&mut self, section_key: &str) -> ScrollOutcome {
        let Some(list) = self.list.as_mut() else {
            tracing::debug!(section = section_key, "scroll requested before list attached");
            return ScrollOutcome::Detached;
        };

        let Some(section_index) = self.data.index_of(section_key) else {
            tracing::debug!(section = section_key, "scroll requested for unknown section");
            return ScrollOutcome::UnknownSection;
        };

        let view_offset = if self.config.sticky_section_headers {
            item_layout::section_header_height(&self.config, section_index) as usize
        } else {
            0
        };
        let Some(offset) = list.scroll_to_location(ScrollToLocation {
            section_index,
            item_index: 0,
            animated: true,
            view_offset,
        }) else {
            return ScrollOutcome::UnknownSection;
        };

        tracing::debug!(section = section_key, section_index, offset, "scrolling to section");
        if let Some(callback) = self.on_scroll_to_section.as_mut() {
            callback(section_key);
        }
        ScrollOutcome::Scrolled { section_index, offset }
    }

    /// Select a section without a gesture
    pub fn select_section(&mut self, section_key: &str) -> ScrollOutcome {
        let selection = self.navigator.select(section_key);
        self.apply_selection(selection)
    }

    fn apply_selection(&mut self, selection: NavSelection) -> ScrollOutcome {
        self.scroll_to_section(&selection.key)
    }

    /// Route a mouse event; returns true if it was consumed
    ///
    /// The navigator sees the event first. Wheel events over the list scroll
    /// it by one row.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if !self.hide_nav {
            if let MouseResponse::Claimed(selection) = self.navigator.handle_mouse(mouse) {
                if let Some(selection) = selection {
                    self.apply_selection(selection);
                }
                return true;
            }
        }

        let Some(list) = self.list.as_mut() else {
            return false;
        };
        if !list.viewport().contains(Position::new(mouse.column, mouse.row)) {
            return false;
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => list.scroll_by(1),
            MouseEventKind::ScrollUp => list.scroll_by(-1),
            _ => return false,
        }
        true
    }

    /// Scroll by a signed number of rows; no-op before the first render
    pub fn scroll_by(&mut self, delta: isize) {
        if let Some(list) = self.list.as_mut() {
            list.scroll_by(delta);
        }
    }

    /// Scroll by one viewport height, keeping one row of context
    pub fn page(&mut self, forward: bool) {
        let Some(list) = self.list.as_mut() else {
            return;
        };
        let page = (list.viewport().height as isize - 1).max(1);
        list.scroll_by(if forward { page } else { -page });
    }

    /// Jump to the next or previous section that has items, wrapping around
    pub fn step_section(&mut self, forward: bool) -> Option<ScrollOutcome> {
        let active: Vec<bool> = self.data.sections().map(|s| s.is_active()).collect();
        let current = self.current_section().and_then(|key| self.data.index_of(key));
        let next = if forward {
            navigation::next_active_section(current, &active)
        } else {
            navigation::prev_active_section(current, &active)
        }?;
        let key = self.data.section(next)?.key.to_string();
        Some(self.select_section(&key))
    }
}
