use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::{display_width, PageContext};
use crate::input::HitTarget;

const SIDEBAR_WIDTH: u16 = 20;
const HEADER_HEIGHT: u16 = 3;
/// Gap between transformation labels
const LABEL_GAP: u16 = 2;

/// Roster sidebar, transformation picker and artwork frame
///
/// Draws only the backdrop unless the page is active and a browser state
/// exists; inactive pages expose no click targets.
pub struct CharacterBrowserPage;

impl CharacterBrowserPage {
    pub fn render(buf: &mut Buffer, area: Rect, context: &PageContext) -> Vec<(Rect, HitTarget)> {
        let theme = context.theme;
        Block::default()
            .style(Style::default().bg(theme.bg1))
            .render(area, buf);

        let Some(browser) = context.browser.filter(|_| context.is_current) else {
            return Vec::new();
        };
        let Some((character, transformation)) = browser.current(context.roster) else {
            return Vec::new();
        };

        let mut hits = Vec::new();
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(area);

        // Sidebar
        let sidebar_block = Block::default()
            .title(" CHARACTERS ")
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(theme.grey0));
        let list_area = sidebar_block.inner(sidebar);
        sidebar_block.render(sidebar, buf);

        for (i, entry) in context.roster.characters.iter().enumerate() {
            let y = list_area.y + 1 + i as u16;
            if y >= list_area.bottom() {
                break;
            }
            let row = Rect::new(list_area.x, y, list_area.width, 1);
            let style = if i == browser.selected_character() {
                Style::default()
                    .fg(theme.fg0)
                    .bg(theme.selection)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg1)
            };
            Paragraph::new(format!(" {} {}", entry.icon, entry.name))
                .style(style)
                .render(row, buf);
            hits.push((row, HitTarget::Character(i)));
        }

        // Header and transformation picker
        let [header, picker, artwork] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(main.inner(ratatui::layout::Margin::new(2, 1)));

        let title = vec![
            Line::from(vec![
                Span::styled(
                    character.name.as_str(),
                    Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", character.eng_name),
                    Style::default().fg(theme.grey1),
                ),
            ]),
            Line::from(Span::styled(
                transformation.name.as_str(),
                Style::default().fg(theme.yellow),
            )),
        ];
        Paragraph::new(title).render(header, buf);

        let mut x = picker.x;
        for (i, form) in character.transformations.iter().enumerate() {
            let label = format!(" {} {} ", form.icon, form.name);
            let width = display_width(&label);
            if x + width > picker.right() {
                break;
            }
            let rect = Rect::new(x, picker.y, width, 1);
            let style = if i == browser.selected_transformation() {
                Style::default().fg(theme.bg0).bg(theme.accent)
            } else {
                Style::default().fg(theme.fg1).bg(theme.bg2)
            };
            Paragraph::new(label).style(style).render(rect, buf);
            hits.push((rect, HitTarget::Transformation(i)));
            x += width + LABEL_GAP;
        }

        // Artwork frame, scaled against the widest artwork in the roster
        let frame_width = artwork_width(
            transformation.width,
            context.roster.max_artwork_width(),
            artwork.width,
        );
        let frame = Rect::new(artwork.x, artwork.y, frame_width, artwork.height);
        Paragraph::new(transformation.quote.as_str())
            .block(
                Block::default()
                    .title(format!(" {} ", transformation.artwork))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.orange)),
            )
            .style(Style::default().fg(theme.fg0))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(frame, buf);

        hits
    }
}

/// Frame width for an artwork of `width` relative to the widest one
fn artwork_width(width: u16, widest: u16, available: u16) -> u16 {
    let scaled = u32::from(available) * u32::from(width) / u32::from(widest.max(1));
    (scaled as u16).clamp(available.min(4), available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use showcase_core::{BrowserState, Roster};

    #[test]
    fn test_artwork_width_scales() {
        assert_eq!(artwork_width(900, 900, 60), 60);
        assert_eq!(artwork_width(450, 900, 60), 30);
        assert_eq!(artwork_width(1, 900, 60), 4);
        assert_eq!(artwork_width(900, 900, 2), 2);
    }

    #[test]
    fn test_active_page_exposes_targets() {
        let theme = Theme::default();
        let roster = Roster::default();
        let browser = BrowserState::new(&roster);
        let context = PageContext {
            is_current: true,
            theme: &theme,
            roster: &roster,
            browser: Some(&browser),
        };
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 30));
        let area = buf.area;
        let hits = CharacterBrowserPage::render(&mut buf, area, &context);

        let characters = hits
            .iter()
            .filter(|(_, t)| matches!(t, HitTarget::Character(_)))
            .count();
        assert_eq!(characters, roster.len());
        assert!(hits.iter().any(|(_, t)| *t == HitTarget::Transformation(0)));
    }

    #[test]
    fn test_inactive_page_has_no_targets() {
        let theme = Theme::default();
        let roster = Roster::default();
        let browser = BrowserState::new(&roster);
        let context = PageContext {
            is_current: false,
            theme: &theme,
            roster: &roster,
            browser: Some(&browser),
        };
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 30));
        let area = buf.area;
        assert!(CharacterBrowserPage::render(&mut buf, area, &context).is_empty());
    }
}
