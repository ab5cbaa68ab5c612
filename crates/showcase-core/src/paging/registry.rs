use tracing::trace;

use super::viewport::ScrollViewport;

/// Page index → scroll offset
///
/// Holds exactly one slot per page, so registering a page twice refreshes
/// its offset instead of adding an entry. Pages that cannot be measured
/// yet stay unregistered until a later refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRegistry {
    offsets: Vec<Option<u16>>,
}

impl PageRegistry {
    pub fn new(page_count: usize) -> Self {
        Self {
            offsets: vec![None; page_count],
        }
    }

    /// Number of page slots
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Record the offset of a page. Returns false for indices outside the
    /// page set.
    pub fn register(&mut self, index: usize, offset: u16) -> bool {
        match self.offsets.get_mut(index) {
            Some(slot) => {
                *slot = Some(offset);
                true
            }
            None => false,
        }
    }

    pub fn offset(&self, index: usize) -> Option<u16> {
        self.offsets.get(index).copied().flatten()
    }

    pub fn registered_count(&self) -> usize {
        self.offsets.iter().filter(|o| o.is_some()).count()
    }

    /// Re-measure every page from the viewport. Pages the viewport cannot
    /// measure keep their previous entry, even when they were measurable
    /// before (a collapsed viewport), so the next resize snaps back to
    /// them. Returns the registered count.
    pub fn refresh<V: ScrollViewport + ?Sized>(&mut self, viewport: &V) -> usize {
        let mut deferred = 0usize;
        for index in 0..self.offsets.len() {
            match viewport.page_offset(index) {
                Some(offset) => {
                    self.register(index, offset);
                }
                None => deferred += 1,
            }
        }
        if deferred > 0 {
            trace!(deferred, "Page registration deferred until measurable");
        }
        self.registered_count()
    }
}
