use ratatui::{
    buffer::Buffer,
    layout::Rect,
    Frame,
};
use showcase_core::{BrowserState, PageKind, Roster};

use super::{CharacterBrowserPage, CreditsPage, SplashPage};
use crate::app::App;
use crate::input::HitTarget;
use crate::theme::Theme;

/// What a page is told when it is drawn
pub struct PageContext<'a> {
    /// Whether this page is the controller's current page
    pub is_current: bool,
    pub theme: &'a Theme,
    pub roster: &'a Roster,
    pub browser: Option<&'a BrowserState>,
}

/// Draws the stacked pages at the viewport's live scroll offset
///
/// Each visible page is rendered into its own one-page buffer and the rows
/// inside the viewport are copied into the frame. Click targets are only
/// collected from a page that fills the viewport exactly.
pub struct PageStackWidget;

impl PageStackWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        if area.is_empty() {
            return;
        }
        let scroll = i32::from(app.scroll_top());
        let height = i32::from(area.height);

        for (index, kind) in app.pages.iter().enumerate() {
            let Some(offset) = app.pager.registry().offset(index) else {
                continue;
            };
            let top = i32::from(offset) - scroll;
            if top >= height || top + height <= 0 {
                continue;
            }

            let mut page = Buffer::empty(Rect::new(0, 0, area.width, area.height));
            let context = PageContext {
                is_current: app.pager.is_current(index),
                theme: &app.theme,
                roster: &app.roster,
                browser: app.browser.as_ref(),
            };
            let regions = render_page(kind, &mut page, &context);

            blit(&page, frame.buffer_mut(), area, top);

            if top == 0 {
                app.hits.extend(regions.into_iter().map(|(r, target)| {
                    (Rect::new(r.x + area.x, r.y + area.y, r.width, r.height), target)
                }));
            }
        }
    }
}

fn render_page(kind: PageKind, buf: &mut Buffer, context: &PageContext) -> Vec<(Rect, HitTarget)> {
    let area = buf.area;
    match kind {
        PageKind::Splash => {
            SplashPage::render(buf, area, context);
            Vec::new()
        }
        PageKind::Characters => CharacterBrowserPage::render(buf, area, context),
        PageKind::Credits => {
            CreditsPage::render(buf, area, context);
            Vec::new()
        }
    }
}

/// Copy a page buffer into `dest`, shifted `top` rows relative to `area`
fn blit(page: &Buffer, dest: &mut Buffer, area: Rect, top: i32) {
    for y in 0..page.area.height {
        let row = top + i32::from(y);
        if row < 0 || row >= i32::from(area.height) {
            continue;
        }
        let dest_y = area.y + row as u16;
        for x in 0..page.area.width.min(area.width) {
            if let (Some(src), Some(dst)) = (page.cell((x, y)), dest.cell_mut((area.x + x, dest_y))) {
                *dst = src.clone();
            }
        }
    }
}
