use launcher_nav::{Action, Context, Event, EventContext, View};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Row, Table};

use super::{global_keys, render_footer, render_nav_bar};

/// The job listing. Display-only: fetching and managing jobs belongs to
/// the backend, this view only presents the table surface.
#[derive(Default)]
pub struct ListJobsPage;

impl View for ListJobsPage {
    fn on_activate(&mut self, _cx: &mut Context) {
        tracing::debug!("list-jobs view active");
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

        render_nav_bar(frame, chunks[0], "/jobs");

        let block = Block::default()
            .title(" Jobs ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));

        let header = Row::new(["Name", "Pipeline", "Status", "Created"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let table = Table::new(
            Vec::<Row>::new(),
            [
                Constraint::Percentage(30),
                Constraint::Percentage(25),
                Constraint::Percentage(20),
                Constraint::Percentage(25),
            ],
        )
        .header(header)
        .block(block);
        frame.render_widget(table, chunks[1]);

        // Empty-state hint inside the table body.
        let inner = chunks[1].inner(ratatui::layout::Margin::new(1, 2));
        let empty = Paragraph::new(Line::styled(
            "No jobs yet. Press C to create one.",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(empty, inner);

        render_footer(frame, chunks[2]);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext) -> Option<Action> {
        global_keys(&event)
    }
}
