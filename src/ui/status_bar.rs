use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, nav_hidden: bool) -> Vec<Span<'static>> {
    let key = Style::default().fg(Color::Yellow);
    let mut hotkey_spans = vec![];

    if vim_mode {
        hotkey_spans.extend(vec![
            Span::styled("j/k", key),
            Span::raw(":Scroll  "),
            Span::styled("gg/G", key),
            Span::raw(":Top/Bottom  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            Span::styled("↑/↓", key),
            Span::raw(":Scroll  "),
        ]);
    }

    hotkey_spans.extend(vec![
        Span::styled("PgUp/PgDn", key),
        Span::raw(":Page  "),
        Span::styled("n/p", key),
        Span::raw(":Next/Prev section  "),
        Span::styled("A-Z", key),
        Span::raw(":Jump  "),
    ]);

    if !nav_hidden {
        hotkey_spans.extend(vec![
            Span::styled("Drag index", key),
            Span::raw(":Jump  "),
        ]);
    }

    hotkey_spans.extend(vec![Span::styled("q", key), Span::raw(":Quit")]);
    hotkey_spans
}

/// Summary text: section under the top line and the last section jumped to
fn build_status_text(current_section: Option<&str>, last_jump: Option<&str>, total_items: usize) -> String {
    let current = current_section.unwrap_or("-");
    match last_jump {
        Some(jump) => format!("Section: {current} │ Items: {total_items} │ Jumped to: {jump}"),
        None => format!("Section: {current} │ Items: {total_items}"),
    }
}

/// Render the bottom status bar (summary line + hotkey line)
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    current_section: Option<&str>,
    last_jump: Option<&str>,
    total_items: usize,
    vim_mode: bool,
    nav_hidden: bool,
) {
    let lines = vec![
        Line::from(build_status_text(current_section, last_jump, total_items)),
        Line::from(build_hotkey_spans(vim_mode, nav_hidden)),
    ];

    let status = Paragraph::new(lines)
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status, area);
}
