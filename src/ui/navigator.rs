//! Section index navigator
//!
//! A vertical strip of section labels. Pressing or dragging over the strip
//! resolves the pointer row to a section and reports it once per newly entered
//! active section, until the button is released.
//!
//! The pointer mapping relies on the reference measurement of the first row,
//! which is scheduled by every render and only takes effect on the next
//! [`SectionIndexNavigator::tick`]. Until then pointer input is ignored.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use super::nav_item::NavItemRenderer;
use crate::logic::{gesture, layout};
use crate::model::{
    GestureState, LayoutMeasurement, NavSection, NavSelection, NavigatorEntry, PendingMeasure, SelectSource,
};

/// Whether the navigator took a mouse event, and what it selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MouseResponse {
    Unclaimed,
    Claimed(Option<NavSelection>),
}

#[derive(Debug, Clone, Default)]
pub struct SectionIndexNavigator {
    sections: Vec<NavSection>,
    gesture: GestureState,
    measure: Option<LayoutMeasurement>,
    pending_measure: PendingMeasure,
    /// Strip bounds from the last render
    bounds: Option<Rect>,
    /// Label rows drawn by the last render
    rows: Option<usize>,
}

impl SectionIndexNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_sections(&mut self, sections: Vec<NavSection>) {
        self.sections = sections;
    }

    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn measurement(&self) -> Option<LayoutMeasurement> {
        self.measure
    }

    pub fn has_pending_measurement(&self) -> bool {
        self.pending_measure.is_scheduled()
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Draw the entry labels over the right edge of `area`
    ///
    /// When the strip has fewer rows than entries, an evenly spread subset of
    /// labels is drawn and the rows map onto all sections. Also refreshes the section list used for pointer mapping and schedules
    /// a measurement of the first row.
    pub fn render(
        &mut self,
        buf: &mut Buffer,
        area: Rect,
        entries: &[NavigatorEntry],
        renderer: &dyn NavItemRenderer,
        container_style: Style,
    ) {
        self.sections = entries
            .iter()
            .map(|entry| NavSection {
                key: entry.section_key.clone(),
                active: entry.active,
            })
            .collect();

        let labels: Vec<_> = entries.iter().map(|entry| renderer.render(entry)).collect();
        let label_width = labels
            .iter()
            .map(|label| label.width())
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16;

        let strip = layout::navigator_strip(area, label_width, entries.len());
        buf.set_style(strip.strip, container_style);

        for (row, &section) in strip.rows.iter().zip(&strip.sections) {
            let Some(label) = labels.get(section).cloned() else {
                continue;
            };
            let label_area = Rect::new(row.x, row.y + row.height / 2, row.width, 1);
            Paragraph::new(label)
                .alignment(Alignment::Center)
                .render(label_area, buf);
        }

        if let Some(first) = strip.rows.first() {
            self.schedule_measurement(LayoutMeasurement {
                y: first.y,
                width: first.width,
                height: first.height,
            });
        }
        self.rows = Some(strip.rows.len());
        self.bounds = Some(strip.strip);
    }

    /// Queue a measurement of the first row for the next event-loop turn
    pub fn schedule_measurement(&mut self, measurement: LayoutMeasurement) {
        self.pending_measure.schedule(measurement);
    }

    /// Resolve the pending measurement; returns true if one was taken
    pub fn tick(&mut self) -> bool {
        let Some(measurement) = self.pending_measure.resolve() else {
            return false;
        };
        if self.measure != Some(measurement) {
            tracing::debug!(
                y = measurement.y,
                width = measurement.width,
                height = measurement.height,
                "navigator row measured"
            );
        }
        self.measure = Some(measurement);
        true
    }

    /// Tear down: cancel the pending measurement and drop any gesture
    pub fn unmount(&mut self) {
        self.pending_measure.cancel();
        self.gesture.release();
        self.bounds = None;
        self.rows = None;
    }

    fn contains(&self, mouse: &MouseEvent) -> bool {
        self.bounds
            .is_some_and(|bounds| bounds.contains(Position::new(mouse.column, mouse.row)))
    }

    /// Route a mouse event through the navigator
    ///
    /// Presses and drags inside the strip are always claimed. Once a gesture
    /// is tracked, drags and the release are claimed wherever they happen. A
    /// press outside the strip ends any gesture whose release was lost.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> MouseResponse {
        let inside = self.contains(&mouse);
        let tracking = self.gesture.is_tracking();

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => {
                MouseResponse::Claimed(self.on_grant(mouse.row))
            }
            MouseEventKind::Down(_) if tracking => {
                tracing::debug!("press outside navigator ends stale gesture");
                self.on_release();
                MouseResponse::Unclaimed
            }
            MouseEventKind::Drag(MouseButton::Left) if tracking => {
                MouseResponse::Claimed(self.on_move(mouse.row))
            }
            MouseEventKind::Drag(MouseButton::Left) if inside => {
                MouseResponse::Claimed(self.on_grant(mouse.row))
            }
            MouseEventKind::Up(MouseButton::Left) if tracking => {
                self.on_release();
                MouseResponse::Claimed(None)
            }
            _ => MouseResponse::Unclaimed,
        }
    }

    /// Gesture start at pointer row `y`; drops whatever an earlier gesture tracked
    pub fn on_grant(&mut self, y: u16) -> Option<NavSelection> {
        self.gesture.grant();
        self.detect_section(y)
    }

    /// Gesture move to pointer row `y`
    pub fn on_move(&mut self, y: u16) -> Option<NavSelection> {
        self.gesture.track();
        self.detect_section(y)
    }

    /// Gesture end; the next gesture starts with no last index
    pub fn on_release(&mut self) {
        self.gesture.release();
    }

    /// Select a section by key without a gesture
    ///
    /// Resets the last-index tracker right away, so a touch over the same
    /// section fires again.
    pub fn select(&mut self, key: &str) -> NavSelection {
        self.gesture.reset_tracker();
        tracing::debug!(section = key, "navigator direct select");
        NavSelection {
            key: key.to_string(),
            source: SelectSource::Direct,
        }
    }

    fn detect_section(&mut self, y: u16) -> Option<NavSelection> {
        let count = self.sections.len();
        let rows = self.rows.unwrap_or(count).min(count);
        let Some(row) = gesture::section_index_at(y, self.measure.as_ref(), rows) else {
            tracing::trace!(y, measured = self.measure.is_some(), "pointer ignored");
            return None;
        };
        let index = layout::row_section(row, rows, count);

        let section = &self.sections[index];
        if !section.active {
            return None;
        }
        if !self.gesture.enter(index) {
            return None;
        }

        tracing::debug!(section = %section.key, index, "navigator touch select");
        Some(NavSelection {
            key: section.key.clone(),
            source: SelectSource::Touch,
        })
    }
}
