use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use super::display_width;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let page = app.pager.current_page();
        let page_name = app
            .current_page_kind()
            .map(|kind| kind.title())
            .unwrap_or("?");
        let state = if app.pager.is_locked() { "SCROLLING" } else { "IDLE" };

        let status_text = match &app.status_message {
            Some(msg) => format!(" {}", msg),
            None => format!(
                " PAGE {}/{} | {} | {}",
                page + 1,
                app.pager.page_count(),
                page_name,
                state
            ),
        };

        let help_hint = " wheel:page click:select q:quit ";
        let padding_len = area
            .width
            .saturating_sub(display_width(&status_text) + display_width(help_hint))
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};
    use showcase_core::{AppConfig, PageSet, Roster};

    use super::*;
    use crate::theme::Theme;

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_renders_page_and_state() {
        let config = AppConfig::default();
        let pages = PageSet::new(config.ui.pages.clone()).unwrap();
        let mut app = App::new(Arc::new(config), Theme::default(), Roster::default(), pages);
        app.mount(21);

        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| StatusBarWidget::render(frame, frame.area(), &app))
            .unwrap();
        let text = row_text(&terminal, 0);
        assert!(text.contains("PAGE 1/3"));
        assert!(text.contains("Intro"));
        assert!(text.contains("IDLE"));

        app.set_status("hello");
        terminal
            .draw(|frame| StatusBarWidget::render(frame, frame.area(), &app))
            .unwrap();
        assert!(row_text(&terminal, 0).contains("hello"));
    }
}
