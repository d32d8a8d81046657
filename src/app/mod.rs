//! Demo application state
//!
//! Holds the list view plus the bits of UI state shown in the status bar.

use std::cell::RefCell;
use std::rc::Rc;

use alphalist::config::Config;
use alphalist::model::SectionMap;
use alphalist::ui::SectionedListView;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub struct App {
    pub view: SectionedListView<String>,
    pub should_quit: bool,
    pub vim_mode: bool,
    /// First half of a `gg` sequence seen
    pub last_key_was_g: bool,
    /// Last section the list scrolled to, written by the view's callback
    last_jump: Rc<RefCell<Option<String>>>,
}

impl App {
    pub fn new(config: &Config, data: SectionMap<String>) -> Self {
        let last_jump = Rc::new(RefCell::new(None));
        let jump_sink = Rc::clone(&last_jump);

        let mut view = SectionedListView::new(config.list, data)
            .hide_nav(config.hide_nav)
            .on_scroll_to_section(move |key| {
                *jump_sink.borrow_mut() = Some(key.to_string());
            });
        if config.uppercase_titles {
            view = view.nav_item_title(|key| key.to_uppercase());
        }

        Self {
            view,
            should_quit: false,
            vim_mode: config.vim_mode,
            last_key_was_g: false,
            last_jump,
        }
    }

    pub fn last_jump(&self) -> Option<String> {
        self.last_jump.borrow().clone()
    }

    pub fn total_items(&self) -> usize {
        self.view.data().section_lens().iter().sum()
    }

    /// Draw the list and the status bar below it
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(f.area());

        self.view.render(f, chunks[0]);

        let last_jump = self.last_jump();
        let current = self.view.current_section().map(str::to_string);
        alphalist::ui::status_bar::render_status_bar(
            f,
            chunks[1],
            current.as_deref(),
            last_jump.as_deref(),
            self.total_items(),
            self.vim_mode,
            self.view.is_nav_hidden(),
        );
    }
}
