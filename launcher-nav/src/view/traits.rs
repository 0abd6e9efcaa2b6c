use crate::application::{Context, EventContext};

/// Event type for view interactions.
#[derive(Debug, Clone)]
pub enum Event {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Paste(String),
}

/// Action a view can return after handling an event.
#[derive(Debug)]
pub enum Action {
    /// Request a navigation to the given path.
    Navigate(String),
    /// Move one entry back in history.
    Back,
    /// Move one entry forward in history.
    Forward,
    Quit,
    Noop,
}

/// A page the router can activate.
///
/// The router calls `on_activate` when a view becomes current and
/// `on_deactivate` when it stops being current; rendering and event
/// handling only ever reach the active view. All business logic lives
/// behind this trait, the router knows nothing beyond it.
pub trait View: Send + 'static {
    /// Called when this view becomes the active one.
    fn on_activate(&mut self, cx: &mut Context) {
        let _ = cx;
    }

    /// Called when another view takes over.
    fn on_deactivate(&mut self, cx: &mut Context) {
        let _ = cx;
    }

    /// Called once when the application is about to shut down.
    fn on_shutdown(&mut self, cx: &mut Context) {
        let _ = cx;
    }

    /// Render the view into the frame.
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context);

    /// Handle an event, returning an optional action.
    fn handle_event(&mut self, event: Event, cx: &mut EventContext) -> Option<Action> {
        let _ = event;
        let _ = cx;
        None
    }
}
