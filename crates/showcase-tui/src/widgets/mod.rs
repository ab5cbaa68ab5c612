mod character_browser;
mod credits;
mod nav_points;
mod page_stack;
mod splash;
mod status_bar;

pub use character_browser::CharacterBrowserPage;
pub use credits::CreditsPage;
pub use nav_points::NavPointsWidget;
pub use page_stack::{PageContext, PageStackWidget};
pub use splash::SplashPage;
pub use status_bar::StatusBarWidget;

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Center a rect of the given size inside `area`, clipped to it
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Display width of a string in terminal cells
fn display_width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}
