//! Navigation history with back/forward traversal.
//!
//! Browser-style model: a list of visited entries plus a cursor. Pushing a
//! new entry discards anything ahead of the cursor, so `forward()` only
//! works along a path that was actually walked back over.

/// History of visited routes, stored as indexes into the route table.
///
/// Owned exclusively by the router; nothing else mutates it.
#[derive(Debug, Clone)]
pub struct NavigationState {
    entries: Vec<usize>,
    index: usize,
}

impl NavigationState {
    /// Start a history at the given entry.
    pub fn new(initial: usize) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// The entry under the cursor.
    pub fn current(&self) -> usize {
        self.entries[self.index]
    }

    /// Record a new entry, truncating any forward history.
    pub fn push(&mut self, entry: usize) {
        self.entries.truncate(self.index + 1);
        self.entries.push(entry);
        self.index += 1;
    }

    /// Move one entry back. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Move one entry forward. Returns false at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Total number of recorded entries, current one included. Always at
    /// least one, the history starts populated with the initial route.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_populated_with_initial_entry() {
        let nav = NavigationState::new(0);
        assert_eq!(nav.len(), 1);
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn back_and_forward_traversal() {
        let mut nav = NavigationState::new(0);
        assert_eq!(nav.current(), 0);
        assert!(!nav.can_go_back());
        assert!(!nav.can_go_forward());

        nav.push(1);
        nav.push(2);
        assert_eq!(nav.current(), 2);
        assert_eq!(nav.len(), 3);

        assert!(nav.back());
        assert_eq!(nav.current(), 1);
        assert!(nav.can_go_forward());

        assert!(nav.back());
        assert_eq!(nav.current(), 0);

        // Boundary: no-op, reported via the return value.
        assert!(!nav.back());
        assert_eq!(nav.current(), 0);

        assert!(nav.forward());
        assert!(nav.forward());
        assert_eq!(nav.current(), 2);
        assert!(!nav.forward());
    }

    #[test]
    fn push_truncates_forward_entries() {
        let mut nav = NavigationState::new(0);
        nav.push(1);
        nav.push(2);
        nav.back();
        nav.back();
        assert_eq!(nav.current(), 0);

        nav.push(3);
        assert_eq!(nav.current(), 3);
        assert_eq!(nav.len(), 2);
        assert!(!nav.can_go_forward());
    }
}
