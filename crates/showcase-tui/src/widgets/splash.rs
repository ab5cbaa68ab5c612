use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use super::{centered_rect, PageContext};

const BANNER: [&str; 5] = [
    r" ___  _   _  ___  ___  ___ ",
    r"/ __|| | | || _ \| __|| _ \",
    r"\__ \| |_| ||  _/| _| |   /",
    r"|___/ \___/ |_|  |___||_|_\",
    r"        S A I Y A N        ",
];

pub struct SplashPage;

impl SplashPage {
    pub fn render(buf: &mut Buffer, area: Rect, context: &PageContext) {
        let theme = context.theme;
        Block::default()
            .style(Style::default().bg(theme.bg0))
            .render(area, buf);

        let mut lines: Vec<Line> = BANNER
            .iter()
            .map(|row| {
                Line::from(Span::styled(
                    *row,
                    Style::default().fg(theme.orange).add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Character Showcase",
            Style::default().fg(theme.fg0),
        )));
        if context.is_current {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "scroll down ↓",
                Style::default().fg(theme.grey1),
            )));
        }

        let height = lines.len() as u16;
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(centered_rect(area.width, height, area), buf);
    }
}
