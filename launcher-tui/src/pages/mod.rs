pub mod batch_setup;
pub mod create_job;
pub mod list_jobs;

pub use batch_setup::BatchSetupPage;
pub use create_job::CreateJobPage;
pub use list_jobs::ListJobsPage;

use crossterm::event::KeyCode;
use launcher_nav::{Action, Event};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// The three launcher routes, shown in the nav bar in table order.
const NAV_ENTRIES: [(&str, &str); 3] = [
    ("Create Job", "/"),
    ("Jobs", "/jobs"),
    ("Batch Setup", "/batch-setup"),
];

/// Render the shared navigation bar with the active route highlighted.
pub fn render_nav_bar(frame: &mut ratatui::Frame, area: Rect, active_path: &str) {
    let mut spans = vec![Span::raw(" ")];
    for (i, (label, path)) in NAV_ENTRIES.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *path == active_path {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(*label, style));
    }
    let bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
    frame.render_widget(bar, area);
}

/// Render the shared key-hint footer.
pub fn render_footer(frame: &mut ratatui::Frame, area: Rect) {
    let footer = Paragraph::new(" C Create Job | J Jobs | B Batch Setup | \u{2190} Back | \u{2192} Forward | Q Quit ")
        .style(Style::default().bg(Color::Cyan).fg(Color::Black))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Key bindings shared by every page: route switching, history traversal,
/// quit. Pages try their own keys first and fall through to this.
pub fn global_keys(event: &Event) -> Option<Action> {
    let Event::Key(key) = event else {
        return None;
    };
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::Navigate("/".to_string())),
        KeyCode::Char('j') | KeyCode::Char('J') => Some(Action::Navigate("/jobs".to_string())),
        KeyCode::Char('b') | KeyCode::Char('B') => {
            Some(Action::Navigate("/batch-setup".to_string()))
        }
        KeyCode::Left | KeyCode::Backspace => Some(Action::Back),
        KeyCode::Right => Some(Action::Forward),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn route_keys_map_to_configured_paths() {
        assert!(matches!(
            global_keys(&key(KeyCode::Char('j'))),
            Some(Action::Navigate(path)) if path == "/jobs"
        ));
        assert!(matches!(
            global_keys(&key(KeyCode::Char('b'))),
            Some(Action::Navigate(path)) if path == "/batch-setup"
        ));
        assert!(matches!(
            global_keys(&key(KeyCode::Char('c'))),
            Some(Action::Navigate(path)) if path == "/"
        ));
    }

    #[test]
    fn history_and_quit_keys() {
        assert!(matches!(global_keys(&key(KeyCode::Left)), Some(Action::Back)));
        assert!(matches!(
            global_keys(&key(KeyCode::Right)),
            Some(Action::Forward)
        ));
        assert!(matches!(global_keys(&key(KeyCode::Char('q'))), Some(Action::Quit)));
        assert!(global_keys(&key(KeyCode::Enter)).is_none());
    }
}
