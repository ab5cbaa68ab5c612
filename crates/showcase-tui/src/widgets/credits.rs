use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::{centered_rect, PageContext};

pub struct CreditsPage;

impl CreditsPage {
    pub fn render(buf: &mut Buffer, area: Rect, context: &PageContext) {
        let theme = context.theme;
        Block::default()
            .style(Style::default().bg(theme.bg0))
            .render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                "Credits",
                Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("{} characters on the roster", context.roster.len()),
                Style::default().fg(theme.fg0),
            )),
            Line::from(Span::styled(
                "Characters and artwork belong to their respective owners.",
                Style::default().fg(theme.grey1),
            )),
        ];
        if context.is_current {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "scroll up ↑",
                Style::default().fg(theme.grey1),
            )));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.grey0));
        let height = lines.len() as u16 + 2;
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(centered_rect(64, height, area), buf);
    }
}
