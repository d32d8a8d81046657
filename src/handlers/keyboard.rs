//! Keyboard Input Handler
//!
//! Scrolling, paging and section jumps for the demo list.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if ctrl => app.should_quit = true,
        // Vim keybindings with Ctrl modifiers (check before plain letters)
        KeyCode::Char('d') if app.vim_mode && ctrl => {
            let half = half_page(app);
            app.view.scroll_by(half);
        }
        KeyCode::Char('u') if app.vim_mode && ctrl => {
            let half = half_page(app);
            app.view.scroll_by(-half);
        }
        KeyCode::Char('f') if app.vim_mode && ctrl => app.view.page(true),
        KeyCode::Char('b') if app.vim_mode && ctrl => app.view.page(false),
        KeyCode::Char('g') if app.vim_mode => {
            if app.last_key_was_g {
                app.view.scroll_by(isize::MIN);
                app.last_key_was_g = false;
            } else {
                app.last_key_was_g = true;
            }
            return Ok(());
        }
        // Vim bottom; takes precedence over the letter jump to section G
        KeyCode::Char('G') if app.vim_mode => app.view.scroll_by(isize::MAX),
        KeyCode::Down | KeyCode::Char('j') => app.view.scroll_by(1),
        KeyCode::Up | KeyCode::Char('k') => app.view.scroll_by(-1),
        KeyCode::PageDown => app.view.page(true),
        KeyCode::PageUp => app.view.page(false),
        KeyCode::Home => app.view.scroll_by(isize::MIN),
        KeyCode::End => app.view.scroll_by(isize::MAX),
        KeyCode::Char('n') => {
            app.view.step_section(true);
        }
        KeyCode::Char('p') => {
            app.view.step_section(false);
        }
        KeyCode::Char(c) if c.is_ascii_uppercase() => jump_to_letter(app, c),
        _ => {}
    }

    app.last_key_was_g = false;
    Ok(())
}

fn half_page(app: &App) -> isize {
    let height = app.view.list().map_or(0, |list| list.viewport().height);
    (height as isize / 2).max(1)
}

/// Jump to the section whose key matches the letter, ignoring case
fn jump_to_letter(app: &mut App, letter: char) {
    let wanted = letter.to_string();
    let key = app
        .view
        .data()
        .keys()
        .find(|key| key.eq_ignore_ascii_case(&wanted))
        .map(str::to_string)
        .unwrap_or(wanted);
    let outcome = app.view.select_section(&key);
    tracing::debug!(key, ?outcome, "letter jump");
}
