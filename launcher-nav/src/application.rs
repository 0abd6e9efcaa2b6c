//! Terminal application shell.
//!
//! Hosts a [`Router`] on a single-threaded event loop: re-render requests,
//! terminal events, and external address changes are multiplexed with
//! `select!` and handled to completion one at a time, so navigations are
//! processed strictly in arrival order and never interleave.

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tokio::runtime::Runtime;
use tokio::sync::{mpsc, watch};

use crate::router::Router;
use crate::view::{Action, Event};

/// Application context providing access to global services.
#[derive(Clone)]
pub struct AppContext {
    re_render_tx: mpsc::UnboundedSender<()>,
}

impl AppContext {
    pub(crate) fn new(re_render_tx: mpsc::UnboundedSender<()>) -> Self {
        Self { re_render_tx }
    }

    /// Trigger a re-render.
    pub fn refresh(&self) {
        let _ = self.re_render_tx.send(());
    }
}

/// Context passed to view methods.
pub struct Context {
    pub app: AppContext,
    pub area: Rect,
}

impl Context {
    pub fn new(app: AppContext, area: Rect) -> Self {
        Self { app, area }
    }

    pub fn app(&self) -> &AppContext {
        &self.app
    }

    /// Explicitly trigger a re-render.
    pub fn notify(&self) {
        self.app.refresh();
    }
}

/// Context for event handling, currently identical to [`Context`].
pub type EventContext = Context;

/// Main application handle.
pub struct Application;

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

impl Application {
    pub fn new() -> Self {
        Self
    }

    /// Take over the terminal and run the router until it quits.
    pub fn run(self, router: Router) -> anyhow::Result<()> {
        let rt = Runtime::new()?;
        rt.block_on(async move { self.run_loop(router).await })
    }

    async fn run_loop(&self, mut router: Router) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut out = stdout();
        execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            event::EnableFocusChange
        )?;
        let backend = CrosstermBackend::new(out);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, &mut router).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            event::DisableFocusChange
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        router: &mut Router,
    ) -> anyhow::Result<()> {
        let (re_render_tx, mut re_render_rx) = mpsc::unbounded_channel();
        let app = AppContext::new(re_render_tx);
        let mut address_rx = router.address_bar().map(|bar| bar.subscribe());

        // Lifecycle: activate the initial route before the first render.
        {
            let area = terminal_area(terminal)?;
            let mut cx = Context::new(app.clone(), area);
            router.activate_initial(&mut cx);
        }
        app.refresh();

        loop {
            tokio::select! {
                _ = re_render_rx.recv() => {
                    terminal.draw(|frame| {
                        let mut cx = Context::new(app.clone(), frame.area());
                        router.render(frame, &mut cx);
                    })?;
                }
                changed = address_changed(&mut address_rx) => {
                    if changed {
                        let path = address_rx
                            .as_mut()
                            .map(|rx| rx.borrow_and_update().clone())
                            .unwrap_or_default();
                        let area = terminal_area(terminal)?;
                        let mut cx = Context::new(app.clone(), area);
                        if let Err(err) = router.sync_from_address(&path, &mut cx) {
                            tracing::warn!(%err, "external address change rejected");
                        }
                        app.refresh();
                    } else {
                        // Sender gone; stop watching instead of spinning.
                        address_rx = None;
                    }
                }
                event_ready = async { event::poll(Duration::from_millis(100)) } => {
                    if let Ok(true) = event_ready {
                        let crossterm_event = event::read()?;
                        let internal_event = match crossterm_event {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            CrosstermEvent::FocusGained => Some(Event::FocusGained),
                            CrosstermEvent::FocusLost => Some(Event::FocusLost),
                            CrosstermEvent::Paste(s) => Some(Event::Paste(s)),
                            _ => None,
                        };

                        if let Some(event) = internal_event {
                            let area = terminal_area(terminal)?;
                            let mut cx = Context::new(app.clone(), area);
                            let action = router.handle_event(event, &mut cx);
                            app.refresh();

                            if let Some(Action::Quit) = action {
                                router.shutdown(&mut cx);
                                return Ok(());
                            }
                        }
                    }
                }
            }
        }
    }
}

fn terminal_area(terminal: &Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<Rect> {
    let size = terminal.size()?;
    Ok(Rect::new(0, 0, size.width, size.height))
}

async fn address_changed(rx: &mut Option<watch::Receiver<String>>) -> bool {
    match rx.as_mut() {
        Some(rx) => rx.changed().await.is_ok(),
        None => std::future::pending().await,
    }
}
