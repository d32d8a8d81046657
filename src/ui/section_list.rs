//! Virtualized section list
//!
//! Scrolls over rows whose offsets were precomputed by
//! [`crate::logic::item_layout::compute_layout`] and draws only the rows that
//! intersect the viewport. Row contents come from the owner through a closure,
//! so the list never sees the items themselves.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Line};

use super::styles;
use crate::logic::item_layout::{self, LocationOffset, RowKind, RowLayout};
use crate::logic::scroll;
use crate::model::ScrollToLocation;

/// What to draw on the first line of a row, and the style that fills the row
#[derive(Debug, Clone, Default)]
pub struct RowContent<'a> {
    pub line: Line<'a>,
    pub style: Style,
}

#[derive(Debug, Clone, Default)]
pub struct SectionList {
    rows: Vec<RowLayout>,
    viewport: Rect,
    offset: usize,
    /// Destination of an animated scroll still in flight
    target: Option<usize>,
}

impl SectionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the row layout and viewport, keeping offsets in range
    pub fn set_layout(&mut self, rows: Vec<RowLayout>, viewport: Rect) {
        self.rows = rows;
        self.viewport = viewport;
        let max_offset = self.max_offset();
        self.offset = self.offset.min(max_offset);
        self.target = self
            .target
            .map(|target| target.min(max_offset))
            .filter(|&target| target != self.offset);
    }

    pub fn rows(&self) -> &[RowLayout] {
        &self.rows
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Where the list will come to rest
    pub fn target_offset(&self) -> usize {
        self.target.unwrap_or(self.offset)
    }

    pub fn content_height(&self) -> usize {
        item_layout::content_height(&self.rows)
    }

    pub fn max_offset(&self) -> usize {
        scroll::max_scroll_offset(self.content_height(), self.viewport.height as usize)
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Scroll so the requested item sits `view_offset` rows below the top
    ///
    /// An item index past the end of the section scrolls to the section
    /// header instead. Returns the resting offset, or `None` when the section
    /// index is out of range, in which case nothing moves.
    pub fn scroll_to_location(&mut self, params: ScrollToLocation) -> Option<usize> {
        let location = item_layout::location_offset(&self.rows, params.section_index, params.item_index)?;
        let target = match location {
            LocationOffset::Item(offset) => offset.saturating_sub(params.view_offset),
            LocationOffset::Header(offset) => offset,
        }
        .min(self.max_offset());

        if params.animated && target != self.offset {
            self.target = Some(target);
        } else {
            self.offset = target;
            self.target = None;
        }
        Some(target)
    }

    /// Move by a signed number of rows; cancels any running animation
    pub fn scroll_by(&mut self, delta: isize) {
        self.target = None;
        self.offset = scroll::scroll_by(self.offset, delta, self.max_offset());
    }

    /// Advance the running animation by one step; returns true if it moved
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        self.offset = scroll::animation_step(self.offset, target);
        if self.offset == target {
            self.target = None;
        }
        true
    }

    /// Row covering the top line of the viewport
    pub fn top_row(&self) -> Option<&RowLayout> {
        item_layout::row_at_offset(&self.rows, self.offset).and_then(|index| self.rows.get(index))
    }

    /// Rows with at least one line inside the viewport
    pub fn visible_rows(&self) -> impl Iterator<Item = &RowLayout> {
        let start = self.offset;
        let end = self.offset + self.viewport.height as usize;
        let first = self.rows.partition_point(|row| row.end() <= start);
        self.rows[first..]
            .iter()
            .take_while(move |row| row.offset < end)
            .filter(|row| row.length > 0)
    }

    /// Draw the visible rows into `buf`
    ///
    /// With `sticky_headers`, the header of the section under the top line is
    /// redrawn on the top line.
    pub fn render<'a>(
        &self,
        buf: &mut Buffer,
        sticky_headers: bool,
        mut content: impl FnMut(RowKind) -> RowContent<'a>,
    ) {
        let area = self.viewport;
        if area.is_empty() {
            return;
        }

        let end = self.offset + area.height as usize;
        for row in self.visible_rows() {
            let RowContent { line, style } = content(row.kind);
            let rule_from = row.length - row.separator;

            for line_index in 0..row.length {
                let absolute = row.offset + line_index;
                if absolute < self.offset || absolute >= end {
                    continue;
                }
                let y = area.y + (absolute - self.offset) as u16;

                if line_index >= rule_from {
                    draw_rule(buf, area.x, y, area.width);
                    continue;
                }
                fill_line(buf, area.x, y, area.width, style);
                if line_index == 0 {
                    buf.set_line(area.x, y, &line, area.width);
                }
            }
        }

        if sticky_headers {
            self.render_sticky_header(buf, &mut content);
        }
    }

    fn render_sticky_header<'a>(&self, buf: &mut Buffer, content: &mut impl FnMut(RowKind) -> RowContent<'a>) {
        let Some(top) = self.top_row() else {
            return;
        };
        if matches!(top.kind, RowKind::Header { .. }) && top.offset == self.offset {
            return;
        }

        let section = top.kind.section();
        let has_header = self
            .rows
            .iter()
            .any(|row| row.kind == RowKind::Header { section } && row.length > 0);
        if !has_header {
            return;
        }

        let area = self.viewport;
        let RowContent { line, style } = content(RowKind::Header { section });
        fill_line(buf, area.x, area.y, area.width, style);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

fn fill_line(buf: &mut Buffer, x: u16, y: u16, width: u16, style: Style) {
    buf.set_string(x, y, " ".repeat(width as usize), style);
}

fn draw_rule(buf: &mut Buffer, x: u16, y: u16, width: u16) {
    buf.set_string(x, y, "─".repeat(width as usize), styles::separator());
}
