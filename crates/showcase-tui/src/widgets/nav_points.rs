use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    Frame,
};

use crate::app::App;
use crate::input::HitTarget;

/// Width of one clickable dot, including padding
const DOT_WIDTH: u16 = 3;
/// Rows between consecutive dots
const DOT_SPACING: u16 = 2;
/// Gap between the dots and the right edge
const RIGHT_MARGIN: u16 = 2;

/// One dot per page down the right edge; the current page's dot is filled
pub struct NavPointsWidget;

impl NavPointsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        for (index, dot) in Self::layout(area, app.pager.page_count())
            .into_iter()
            .enumerate()
        {
            let active = app.pager.is_current(index);
            let (symbol, style) = if active {
                (
                    " ● ",
                    Style::default()
                        .fg(app.theme.accent)
                        .bg(app.theme.bg2)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ○ ", Style::default().fg(app.theme.grey1))
            };
            frame.render_widget(Span::styled(symbol, style), dot);
            app.hits.push(dot, HitTarget::NavPoint(index));
        }
    }

    /// Dot cells for `count` pages, vertically centered along the right
    /// edge. Dots that do not fit are left out.
    pub fn layout(area: Rect, count: usize) -> Vec<Rect> {
        if area.width < DOT_WIDTH + RIGHT_MARGIN || count == 0 {
            return Vec::new();
        }
        let span = (count as u16).saturating_sub(1).saturating_mul(DOT_SPACING) + 1;
        let first_y = area.y + area.height.saturating_sub(span) / 2;
        let x = area.right() - DOT_WIDTH - RIGHT_MARGIN;

        (0..count as u16)
            .map(|i| first_y.saturating_add(i.saturating_mul(DOT_SPACING)))
            .take_while(|&y| y < area.bottom())
            .map(|y| Rect::new(x, y, DOT_WIDTH, 1))
            .collect()
    }
}
