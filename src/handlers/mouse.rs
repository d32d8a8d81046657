//! Mouse Input Handler

use crossterm::event::MouseEvent;

use crate::app::App;

/// Route a mouse event to the list view; returns true when a redraw is due
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) -> bool {
    let consumed = app.view.handle_mouse(mouse);
    if !consumed {
        tracing::trace!(kind = ?mouse.kind, column = mouse.column, row = mouse.row, "mouse event ignored");
    }
    consumed
}
