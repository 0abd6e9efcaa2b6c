//! The router: resolves paths against the route table and activates views.
//!
//! Built once at startup from static route bindings, then driven
//! synchronously by the application event loop. All navigation state is
//! owned here; views only see lifecycle calls and the read accessors.

use snafu::{OptionExt, ensure};
use tracing::{debug, info, warn};

use crate::address::AddressBar;
use crate::application::{Context, EventContext};
use crate::config::{HistoryMode, NotFoundPolicy, RouterConfig};
use crate::error::{self, Result};
use crate::history::NavigationState;
use crate::route::{ROOT_PATH, Route, RouteTable};
use crate::view::{Action, Event, View};

/// Holds the route table, the views bound to it, and the navigation
/// history. Constructed explicitly and handed to the application, never a
/// process-wide singleton.
pub struct Router {
    table: RouteTable,
    views: Vec<Box<dyn View>>,
    nav: NavigationState,
    not_found: NotFoundPolicy,
    address: Option<AddressBar>,
}

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::default()
    }

    /// The route that matches the current path. At startup this is the
    /// deep-linked address (or `/` when the address matches nothing),
    /// afterwards whatever the last navigation landed on.
    pub fn resolve_current(&self) -> &Route {
        self.table.get(self.nav.current())
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn address_bar(&self) -> Option<&AddressBar> {
        self.address.as_ref()
    }

    pub fn can_go_back(&self) -> bool {
        self.nav.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.nav.can_go_forward()
    }

    /// Run the activation lifecycle for the initial route. Called once by
    /// the application before the first render.
    pub fn activate_initial(&mut self, cx: &mut Context) {
        let index = self.nav.current();
        info!(route = %self.table.get(index).name(), path = %self.table.get(index).path(), "router initialized");
        self.views[index].on_activate(cx);
    }

    /// Resolve `path` and switch to the matching route.
    ///
    /// On a miss the configured policy applies: `Fallback` re-routes to
    /// the named route, `Ignore` returns `RouteNotFound` and leaves every
    /// piece of state untouched. Either way the condition is recoverable.
    pub fn navigate(&mut self, path: &str, cx: &mut Context) -> Result<()> {
        if let Some(index) = self.table.find(path) {
            self.switch_to(index, cx);
            return Ok(());
        }
        match self.not_found.clone() {
            NotFoundPolicy::Fallback(name) => {
                warn!(path, fallback = %name, "route not found, using fallback");
                let index = self
                    .table
                    .by_name(&name)
                    .context(error::UnknownFallbackSnafu { name })?;
                self.switch_to(index, cx);
                Ok(())
            }
            NotFoundPolicy::Ignore => {
                warn!(path, "route not found, keeping current view");
                error::RouteNotFoundSnafu { path }.fail()
            }
        }
    }

    /// Apply a path change observed on the address bar (the host's
    /// back/forward or a deep link while running).
    pub fn sync_from_address(&mut self, path: &str, cx: &mut Context) -> Result<()> {
        self.navigate(path, cx)
    }

    /// Move one entry back in history. Boundary is a reported no-op.
    pub fn back(&mut self, cx: &mut Context) -> bool {
        if !self.nav.can_go_back() {
            debug!("back: already at start of history");
            return false;
        }
        self.views[self.nav.current()].on_deactivate(cx);
        self.nav.back();
        self.enter_current(cx);
        true
    }

    /// Move one entry forward in history. Boundary is a reported no-op.
    pub fn forward(&mut self, cx: &mut Context) -> bool {
        if !self.nav.can_go_forward() {
            debug!("forward: already at end of history");
            return false;
        }
        self.views[self.nav.current()].on_deactivate(cx);
        self.nav.forward();
        self.enter_current(cx);
        true
    }

    /// Render the active view.
    pub fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        self.views[self.nav.current()].render(frame, cx);
    }

    /// Forward an event to the active view and interpret any navigation
    /// action it returns. Only `Quit` propagates to the caller.
    pub fn handle_event(&mut self, event: Event, cx: &mut EventContext) -> Option<Action> {
        let action = self.views[self.nav.current()].handle_event(event, cx)?;
        match action {
            Action::Navigate(path) => {
                if let Err(err) = self.navigate(&path, cx) {
                    debug!(%err, "navigation request rejected");
                }
                None
            }
            Action::Back => {
                self.back(cx);
                None
            }
            Action::Forward => {
                self.forward(cx);
                None
            }
            Action::Quit => Some(Action::Quit),
            Action::Noop => None,
        }
    }

    /// Run the shutdown lifecycle on every view.
    pub fn shutdown(&mut self, cx: &mut Context) {
        for view in &mut self.views {
            view.on_shutdown(cx);
        }
    }

    fn switch_to(&mut self, index: usize, cx: &mut Context) {
        // Navigating to the current route is a no-op, no history entry.
        if index == self.nav.current() {
            return;
        }
        self.views[self.nav.current()].on_deactivate(cx);
        self.nav.push(index);
        self.enter_current(cx);
        let route = self.table.get(index);
        info!(route = %route.name(), path = %route.path(), "navigated");
    }

    fn enter_current(&mut self, cx: &mut Context) {
        let index = self.nav.current();
        self.views[index].on_activate(cx);
        if let Some(bar) = &self.address {
            let path = self.table.get(index).path();
            // Skip the echo when the change came from the bar itself.
            if bar.path() != path {
                bar.set(path);
            }
        }
    }
}

/// Builder for [`Router`]. Collects the route bindings, validates the
/// table, and resolves the initial route.
#[derive(Default)]
pub struct RouterBuilder {
    routes: Vec<Route>,
    views: Vec<Box<dyn View>>,
    config: RouterConfig,
    address: Option<AddressBar>,
}

impl RouterBuilder {
    /// Bind a path and view name to a view.
    pub fn route(
        mut self,
        path: impl Into<String>,
        name: impl Into<String>,
        view: impl View,
    ) -> Self {
        self.routes.push(Route::new(path, name));
        self.views.push(Box::new(view));
        self
    }

    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach the host's address bar. Only used in address-integrated
    /// history mode.
    pub fn address_bar(mut self, bar: AddressBar) -> Self {
        self.address = Some(bar);
        self
    }

    /// Validate the table and produce a router positioned on the initial
    /// route. Configuration errors here are fatal, the application must
    /// not start with an invalid table.
    pub fn build(self) -> Result<Router> {
        let table = RouteTable::new(self.routes)?;
        if let NotFoundPolicy::Fallback(name) = &self.config.not_found {
            ensure!(
                table.by_name(name).is_some(),
                error::UnknownFallbackSnafu { name: name.clone() }
            );
        }

        let address = match self.config.history {
            HistoryMode::Address => Some(self.address.unwrap_or_default()),
            HistoryMode::Memory => None,
        };

        // Deep link: start on the route the address bar points at. An
        // address that matches nothing falls back to the root route.
        let root = table.find(ROOT_PATH).context(error::MissingRootRouteSnafu)?;
        let initial = address
            .as_ref()
            .and_then(|bar| table.find(&bar.path()))
            .unwrap_or(root);
        if let Some(bar) = &address {
            bar.set(table.get(initial).path());
        }

        Ok(Router {
            table,
            views: self.views,
            nav: NavigationState::new(initial),
            not_found: self.config.not_found,
            address,
        })
    }
}
