use launcher_nav::{Action, Context, Event, EventContext, View};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem};

use super::{global_keys, render_footer, render_nav_bar};

/// The AWS Batch environment checklist. Display-only: provisioning is the
/// backend's business, this view only presents what a setup consists of.
#[derive(Default)]
pub struct BatchSetupPage;

const CHECKLIST: [(&str, &str); 5] = [
    ("Compute environment", "managed, spot instances"),
    ("Job queues", "head node and task queues, e.g. spot-xs"),
    ("Job definition", "container image and vCPU/memory defaults"),
    ("S3 buckets", "work, result, and log buckets"),
    ("IAM roles", "batch service and instance roles"),
];

impl View for BatchSetupPage {
    fn on_activate(&mut self, _cx: &mut Context) {
        tracing::debug!("batch-setup view active");
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

        render_nav_bar(frame, chunks[0], "/batch-setup");

        let items: Vec<ListItem> = CHECKLIST
            .iter()
            .map(|(label, desc)| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        format!(" {label}"),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("   {desc}"),
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    )),
                ])
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" AWS Batch Setup ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(list, chunks[1]);

        render_footer(frame, chunks[2]);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext) -> Option<Action> {
        global_keys(&event)
    }
}
