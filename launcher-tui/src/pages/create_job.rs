use launcher_nav::{Action, Context, Event, EventContext, View};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::{global_keys, render_footer, render_nav_bar};

/// The job submission form. Display-only: what the launcher submits and
/// how is the backend's business, this view just shows the surface.
#[derive(Default)]
pub struct CreateJobPage;

const FORM_FIELDS: [(&str, &str); 9] = [
    ("Job name", "job-1234"),
    ("Pipeline", "hello"),
    ("Head node queue", "spot-xs"),
    ("Task queue", "spot-xs"),
    ("Work dir", "s3://nextflow-workbucket"),
    ("Result dir", "s3://nextflow-results"),
    ("Log bucket", "nextflow-logs"),
    ("Memory", "20G"),
    ("Max retries", "5"),
];

impl View for CreateJobPage {
    fn on_activate(&mut self, _cx: &mut Context) {
        tracing::debug!("create-job view active");
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(cx.area);

        render_nav_bar(frame, chunks[0], "/");

        let mut lines = vec![Line::from("")];
        for (label, example) in FORM_FIELDS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {label:>16}  "),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    example,
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]));
        }

        let form = Paragraph::new(lines).block(
            Block::default()
                .title(" Create Job ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(form, chunks[1]);

        render_footer(frame, chunks[2]);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext) -> Option<Action> {
        global_keys(&event)
    }
}
