use crate::app::App;
use crate::transcript::Sender;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

pub fn render_transcript(app: &App, area: Rect, buf: &mut Buffer) {
    let entries = app.widget.transcript().entries();

    let content = if entries.is_empty() {
        Text::from(vec![
            Line::from("Ask me anything!"),
            Line::from(""),
            Line::from("Type your question below and press Enter."),
            Line::from("Tab switches the answer language."),
        ])
    } else {
        let mut lines = Vec::new();
        for entry in entries {
            let (prefix, style) = match entry.sender {
                Sender::User => ("You: ", Style::default().fg(Color::Cyan)),
                Sender::Bot => ("Bot: ", Style::default().fg(Color::Green)),
            };

            let mut content_lines = entry.text.lines();
            let first_line = content_lines.next().unwrap_or_default().to_string();

            lines.push(Line::from(vec![
                Span::styled(prefix, style.add_modifier(Modifier::BOLD)),
                Span::styled(first_line, Style::default().fg(Color::White)),
            ]));
            for line in content_lines {
                lines.push(Line::from(vec![
                    Span::raw("     "),
                    Span::styled(line.to_string(), Style::default().fg(Color::White)),
                ]));
            }
            lines.push(Line::from(""));
        }
        Text::from(lines)
    };

    // Pin the view to the newest entry unless the user scrolled up.
    let inner_height = area.height.saturating_sub(2);
    let total_lines = content.lines.len() as u16;
    let offset = total_lines
        .saturating_sub(inner_height)
        .saturating_sub(app.scroll_up);

    let transcript_widget = Paragraph::new(content)
        .block(
            Block::bordered()
                .title("Chat (↑↓ to scroll)")
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true })
        .scroll((offset, 0));

    transcript_widget.render(area, buf);
}

pub fn render_input(app: &App, area: Rect, buf: &mut Buffer) {
    let input_text = format!("> {}", app.widget.input());
    let input_widget = Paragraph::new(input_text)
        .block(
            Block::bordered()
                .title("Type your message")
                .border_type(BorderType::Rounded),
        )
        .fg(Color::Yellow);
    input_widget.render(area, buf);
}

pub fn render_send_button(area: Rect, buf: &mut Buffer) {
    let button = Paragraph::new("Send")
        .block(Block::bordered().border_type(BorderType::Rounded))
        .fg(Color::Green)
        .alignment(Alignment::Center);
    button.render(area, buf);
}

pub fn render_controls(app: &App, area: Rect, buf: &mut Buffer) {
    let help = Paragraph::new(format!(
        "Enter: send • Tab: language [{}] • Esc: quit",
        app.widget.language()
    ))
    .block(
        Block::bordered()
            .title("Controls")
            .border_type(BorderType::Rounded),
    )
    .fg(Color::Yellow)
    .alignment(Alignment::Center);
    help.render(area, buf);
}
