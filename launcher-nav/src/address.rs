//! Host address abstraction.
//!
//! Stands in for the browser location bar: the host owns one, the router
//! mirrors navigations into it, and subscribers observe changes made from
//! either side. Backed by a `watch` channel so the path is readable at any
//! time and change notifications coalesce.

use tokio::sync::watch;

/// A shared, observable current-path slot.
///
/// Cloning yields another handle to the same address; the router and the
/// host can both hold one.
#[derive(Debug, Clone)]
pub struct AddressBar {
    tx: watch::Sender<String>,
}

impl AddressBar {
    pub fn new(initial: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(initial.into());
        Self { tx }
    }

    /// The path currently shown.
    pub fn path(&self) -> String {
        self.tx.borrow().clone()
    }

    /// Replace the shown path and notify subscribers.
    pub fn set(&self, path: impl Into<String>) {
        self.tx.send_replace(path.into());
    }

    /// Subscribe to path changes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }
}

impl Default for AddressBar {
    fn default() -> Self {
        Self::new(crate::route::ROOT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_updates_all_handles() {
        let bar = AddressBar::new("/");
        let other = bar.clone();

        bar.set("/jobs");
        assert_eq!(other.path(), "/jobs");
    }

    #[tokio::test]
    async fn subscribers_observe_changes() {
        let bar = AddressBar::new("/");
        let mut rx = bar.subscribe();

        bar.set("/batch-setup");
        assert!(rx.changed().await.is_ok());
        assert_eq!(rx.borrow_and_update().as_str(), "/batch-setup");
    }
}
