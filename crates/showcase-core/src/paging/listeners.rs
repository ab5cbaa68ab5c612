//! Scoped event subscriptions
//!
//! Every attach hands out a [`ListenerGuard`]; the subscription lives
//! exactly as long as the guard. The front end consults the registry
//! before routing an event, so a dropped guard stops delivery.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::trace;

/// Where a listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The scroll viewport itself
    Viewport,
    /// The whole terminal window
    Window,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Wheel,
    Resize,
    Scroll,
}

#[derive(Debug)]
struct Entry {
    id: u64,
    target: ListenerTarget,
    kind: ListenerKind,
}

#[derive(Debug, Default)]
struct Table {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Shared table of attached listeners
///
/// Cloning yields another handle to the same table.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    table: Rc<RefCell<Table>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener; it stays attached until the guard is dropped
    #[must_use = "dropping the guard detaches the listener immediately"]
    pub fn attach(&self, target: ListenerTarget, kind: ListenerKind) -> ListenerGuard {
        let mut table = self.table.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.entries.push(Entry { id, target, kind });
        trace!(on = ?target, ?kind, id, "Listener attached");

        ListenerGuard {
            table: Rc::downgrade(&self.table),
            id,
            target,
            kind,
        }
    }

    /// Total attached listeners
    pub fn count(&self) -> usize {
        self.table.borrow().entries.len()
    }

    pub fn count_of(&self, target: ListenerTarget, kind: ListenerKind) -> usize {
        self.table
            .borrow()
            .entries
            .iter()
            .filter(|e| e.target == target && e.kind == kind)
            .count()
    }

    pub fn is_attached(&self, target: ListenerTarget, kind: ListenerKind) -> bool {
        self.count_of(target, kind) > 0
    }
}

/// Detaches its listener on drop
#[derive(Debug)]
pub struct ListenerGuard {
    table: Weak<RefCell<Table>>,
    id: u64,
    target: ListenerTarget,
    kind: ListenerKind,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        // The registry may already be gone; nothing to detach then
        if let Some(table) = self.table.upgrade() {
            table.borrow_mut().entries.retain(|e| e.id != self.id);
            trace!(on = ?self.target, kind = ?self.kind, id = self.id, "Listener detached");
        }
    }
}
