use super::widgets::{controls_bar, goal_color, input_box};
use super::*;
use crate::app::GoalField;
use crate::time_utils::format_hours;

pub fn render_progress_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Goal inputs
            Constraint::Length(1), // Summary
            Constraint::Min(3),    // Daily totals
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Length(20), Constraint::Min(0)])
        .split(chunks[0]);

    let form = &app.goal_form;
    frame.render_widget(
        input_box("Min goal", &form.min, form.focused_field == GoalField::Min, false),
        row[0],
    );
    frame.render_widget(
        input_box("Max goal", &form.max, form.focused_field == GoalField::Max, false),
        row[1],
    );
    if app.goal.is_swapped() {
        let hint = Paragraph::new(Span::styled(
            "(swapped: min > max)",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(hint, row[2].inner(ratatui::layout::Margin::new(1, 1)));
    }

    let progress = app.daily_progress();
    let summary = Paragraph::new(Line::from(vec![
        Span::raw("Total: "),
        Span::styled(
            format_hours(app.total_hours()),
            Style::default().fg(Color::Magenta),
        ),
        Span::raw(format!(
            "   Days within goal: {}/{}",
            app.days_within_goal(),
            progress.len()
        )),
    ]));
    frame.render_widget(summary, chunks[1]);

    if progress.is_empty() {
        let empty = Paragraph::new("No entries yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Progress "),
            );
        frame.render_widget(empty, chunks[2]);
    } else {
        let items: Vec<ListItem> = progress
            .iter()
            .map(|day| {
                ListItem::new(Span::styled(
                    format!("{}: {:?}h", day.date, day.hours),
                    Style::default().fg(goal_color(day.status)),
                ))
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Progress ")
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(list, chunks[2]);
    }

    frame.render_widget(
        controls_bar(&[("Tab", "Switch goal"), ("0-9", "Edit"), ("Esc", "Back")]),
        chunks[3],
    );
}
