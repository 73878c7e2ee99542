use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{App, Speaker};

pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // header
                Constraint::Min(1),    // transcript
                Constraint::Length(3), // input
            ]
            .as_ref(),
        )
        .split(size);

    // Header (keys + counts)
    let list = app.executor.list();
    let help = Line::from("Enter send  Ctrl+L clear  Up/Down/PgUp/PgDn scroll  Esc quit  (type 'help' for commands)");
    let stats = Line::from(format!(
        "Tasks: {}   Done: {}   Pending: {}",
        list.len(),
        list.done_count(),
        list.pending_count()
    ));
    let header = Paragraph::new(vec![help, stats])
        .block(Block::default().borders(Borders::ALL).title("Zen"));
    frame.render_widget(header, chunks[0]);

    // Transcript
    let mut lines: Vec<Line> = Vec::new();
    for msg in &app.transcript {
        let (label, label_style) = match msg.from {
            Speaker::User => ("You", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Speaker::Zen => ("Zen", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        };
        let text_style = if msg.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(label, label_style)));
        for text in msg.text.lines() {
            lines.push(Line::from(Span::styled(format!("  {text}"), text_style)));
        }
        lines.push(Line::default());
    }

    let body = chunks[1];
    let visible = body.height.saturating_sub(2);
    let offset = scroll_offset(lines.len(), visible, app.scroll);

    let transcript = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0))
        .block(Block::default().borders(Borders::ALL).title("Dialog"));
    frame.render_widget(transcript, body);

    // Input
    let input = Paragraph::new(app.draft.as_str())
        .block(Block::default().borders(Borders::ALL).title("Command"));
    frame.render_widget(input, chunks[2]);
    let cursor_x = chunks[2].x + 1 + app.draft.chars().count() as u16;
    frame.set_cursor_position((cursor_x.min(chunks[2].right().saturating_sub(2)), chunks[2].y + 1));
}

/// Rough bottom anchor; wrapped lines can push the newest text out of view
/// until the user scrolls. Saturates at `u16::MAX` for very long transcripts.
fn scroll_offset(total_lines: usize, visible: u16, scroll: u16) -> u16 {
    let total = u16::try_from(total_lines).unwrap_or(u16::MAX);
    total.saturating_sub(visible).saturating_sub(scroll)
}
