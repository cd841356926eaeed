use super::widgets::{controls_bar, input_box};
use super::*;
use crate::app::EntryField;
use crate::time_utils::format_hours;

pub fn render_entry_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Date / start / end
            Constraint::Length(3), // Description
            Constraint::Length(1), // Duration preview
            Constraint::Min(3),    // Saved entries
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let category = app.selected_category.as_deref().unwrap_or("");
    let title = Paragraph::new(Line::from(vec![
        Span::raw("Add timesheet entry for "),
        Span::styled(
            category.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(title, chunks[0]);

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(chunks[1]);

    let form = &app.entry_form;
    let focused = form.focused_field;
    frame.render_widget(
        input_box("Date (yyyy-MM-dd)", &form.date, focused == EntryField::Date, false),
        row[0],
    );
    frame.render_widget(
        input_box(
            "Start (HH:mm)",
            &form.start_time,
            focused == EntryField::StartTime,
            false,
        ),
        row[1],
    );
    frame.render_widget(
        input_box(
            "End (HH:mm)",
            &form.end_time,
            focused == EntryField::EndTime,
            false,
        ),
        row[2],
    );
    frame.render_widget(
        input_box(
            "Description",
            &form.description,
            focused == EntryField::Description,
            false,
        ),
        chunks[2],
    );

    let preview = match app.entry_preview_hours() {
        Some(hours) if hours > 0.0 => Span::styled(
            format!("Duration: {}", format_hours(hours)),
            Style::default().fg(Color::Green),
        ),
        Some(hours) => Span::styled(
            format!("Duration: {}", format_hours(hours)),
            Style::default().fg(Color::DarkGray),
        ),
        None => Span::styled("Duration: --", Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(Paragraph::new(preview), chunks[3]);

    let entries = app.store.entries_for(category);
    let items: Vec<ListItem> = entries
        .iter()
        .map(|e| {
            ListItem::new(Line::from(vec![
                Span::styled(e.date().to_string(), Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled(
                    format!("{}–{}", e.start_time(), e.end_time()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", format_hours(e.hours_worked())),
                    Style::default().fg(Color::Magenta),
                ),
                Span::raw("  "),
                Span::styled(e.description().to_string(), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Saved entries ({}) ", entries.len()))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, chunks[4]);

    frame.render_widget(
        controls_bar(&[
            ("Tab/↑↓", "Next field"),
            ("Enter/Ctrl+S", "Save"),
            ("Esc", "Back"),
        ]),
        chunks[5],
    );
}
