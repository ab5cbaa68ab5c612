use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Position, Rect};

/// Clickable element drawn in the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Navigation dot for a page index
    NavPoint(usize),
    /// Roster entry in the character browser
    Character(usize),
    /// Transformation icon of the selected character
    Transformation(usize),
}

/// Screen regions of clickable elements, rebuilt every frame
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    pub fn extend(&mut self, regions: impl IntoIterator<Item = (Rect, HitTarget)>) {
        for (area, target) in regions {
            self.push(area, target);
        }
    }

    /// Topmost target under the cell; later regions are drawn on top
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(Position::new(column, row)))
            .map(|(_, target)| *target)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Wheel notch with its delta
    Wheel(i32),
    SelectPage(usize),
    SelectCharacter(usize),
    SelectTransformation(usize),
    None,
}

/// Keys only quit; pages are driven by the mouse
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        _ => Action::None,
    }
}

/// Resolve a left click through the hit map
pub fn handle_click(column: u16, row: u16, hits: &HitMap) -> Action {
    match hits.target_at(column, row) {
        Some(HitTarget::NavPoint(index)) => Action::SelectPage(index),
        Some(HitTarget::Character(index)) => Action::SelectCharacter(index),
        Some(HitTarget::Transformation(index)) => Action::SelectTransformation(index),
        None => Action::None,
    }
}
