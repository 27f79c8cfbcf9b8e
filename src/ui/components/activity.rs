use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row, Table};

use super::atoms::{panel_block, spinner_char};
use crate::app::database_list::LoadStatus;
use crate::app::state::AppState;
use crate::domain::{ActiveTask, database_label};
use crate::theme::Theme;

pub struct ActivityPane;

impl ActivityPane {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState, time_ms: u128) {
        let block = panel_block("Active replications", true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let activity = &state.activity;
        let tasks = activity.replications();
        if let Some(line) = Self::placeholder(activity.status, tasks.is_empty(), time_ms) {
            frame.render_widget(Paragraph::new(line), inner);
            return;
        }

        let header = Row::new(["Source", "Target", "Mode", "Read", "Written", "Failed", "Running"])
            .style(
                Style::default()
                    .fg(Theme::TEXT_ACCENT)
                    .bg(Theme::TABLE_HEADER_BG)
                    .add_modifier(Modifier::BOLD),
            );
        let rows = tasks.iter().enumerate().map(|(i, task)| {
            let style = if i == activity.selected {
                Style::default().bg(Theme::SELECTED_BG)
            } else {
                Style::default()
            };
            Row::new(Self::cells(task)).style(style)
        });
        let table = Table::new(
            rows,
            [
                Constraint::Fill(2),
                Constraint::Fill(2),
                Constraint::Length(10),
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(7),
                Constraint::Length(9),
            ],
        )
        .header(header);
        frame.render_widget(table, inner);
    }

    fn placeholder(status: LoadStatus, empty: bool, time_ms: u128) -> Option<Line<'static>> {
        let muted = Style::default().fg(Theme::TEXT_MUTED);
        match status {
            LoadStatus::Loading if empty => Some(Line::from(Span::styled(
                format!("{} Loading active tasks...", spinner_char(time_ms)),
                Style::default().fg(Theme::STATUS_PENDING),
            ))),
            LoadStatus::Failed if empty => Some(Line::from(Span::styled(
                "Active tasks unavailable (press r to retry)",
                Style::default().fg(Theme::STATUS_ERROR),
            ))),
            _ if empty => Some(Line::from(Span::styled("No replications running", muted))),
            _ => None,
        }
    }

    fn cells(task: &ActiveTask) -> Vec<String> {
        let mode = if task.continuous {
            "continuous"
        } else {
            "one-time"
        };
        vec![
            database_label(&task.source).to_string(),
            database_label(&task.target).to_string(),
            mode.to_string(),
            task.docs_read.to_string(),
            task.docs_written.to_string(),
            task.doc_write_failures.to_string(),
            running_time(task),
        ]
    }
}

/// Time between start and last update, e.g. "1h 02m" or "45s".
fn running_time(task: &ActiveTask) -> String {
    let secs = task.updated_on.saturating_sub(task.started_on);
    match secs {
        0..60 => format!("{}s", secs),
        60..3600 => format!("{}m {:02}s", secs / 60, secs % 60),
        _ => format!("{}h {:02}m", secs / 3600, (secs % 3600) / 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn task(started_on: u64, updated_on: u64) -> ActiveTask {
        ActiveTask {
            task_type: "replication".to_string(),
            source: "http://a:5984/orders/".to_string(),
            target: "backup".to_string(),
            docs_read: 10,
            docs_written: 9,
            doc_write_failures: 1,
            started_on,
            updated_on,
            ..Default::default()
        }
    }

    #[rstest]
    #[case(100, 145, "45s")]
    #[case(100, 220, "2m 00s")]
    #[case(0, 3725, "1h 02m")]
    #[case(200, 100, "0s")]
    fn running_time_formats(#[case] start: u64, #[case] update: u64, #[case] expected: &str) {
        assert_eq!(running_time(&task(start, update)), expected);
    }

    #[test]
    fn cells_use_database_names() {
        let cells = ActivityPane::cells(&task(0, 0));

        assert_eq!(cells[..3], ["orders", "backup", "one-time"]);
        assert_eq!(cells[5], "1");
    }

    #[test]
    fn placeholder_only_without_tasks() {
        assert!(ActivityPane::placeholder(LoadStatus::Loading, false, 0).is_none());
        assert!(ActivityPane::placeholder(LoadStatus::Loaded, true, 0).is_some());
    }
}
