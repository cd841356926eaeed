use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

mod categories_view;
mod entry_view;
mod login_view;
mod progress_view;
pub(super) mod utils;
pub(super) mod widgets;

pub fn render(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Login => login_view::render_login_view(frame, app, body),
        View::Categories => categories_view::render_categories_view(frame, app, body),
        View::TimesheetEntry => entry_view::render_entry_view(frame, app, body),
        View::Progress => progress_view::render_progress_view(frame, app, body),
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " Timesheet ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(user) = &app.logged_in_user {
        spans.push(Span::styled(
            format!("· {} ", user),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(
            format!(
                "· {} categories · {} entries ",
                app.store.categories().len(),
                app.store.entry_count()
            ),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some(status) = &app.status_message {
        spans.push(Span::styled(
            format!("· {}", status),
            Style::default().fg(Color::Green),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}
