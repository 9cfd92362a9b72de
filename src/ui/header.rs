use crate::tasks::Session;
use crate::ui::theme::{ACCENT_BLUE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, session: &Session) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Task Manager with AI Assistant",
                Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
        ];
        if session.authenticated {
            spans.push(Span::styled("🟢 ", Style::default().fg(STATUS_OK)));
            spans.push(Span::styled("Welcome, ", text_style));
            spans.push(Span::styled(
                session.username.clone(),
                text_style.add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled("!", text_style));
        } else {
            spans.push(Span::styled("Not logged in", Style::default().fg(MUTED_TEXT)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
