use super::widgets::{controls_bar, input_box};
use super::*;
use crate::app::CategoriesFocus;

pub fn render_categories_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // New category input
            Constraint::Min(0),    // Category list
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let input_focused = app.categories_focus == CategoriesFocus::Input;
    frame.render_widget(
        input_box("New category", &app.category_input, input_focused, false),
        chunks[0],
    );

    let list_focused = app.categories_focus == CategoriesFocus::List;
    let items: Vec<ListItem> = app
        .store
        .categories()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let count = app.store.entries_for(name).len();
            let style = if list_focused && i == app.category_index {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(name.clone(), style),
                Span::styled(
                    format!("  ({} entries)", count),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list_border = if list_focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = format!(" Categories ({}) ", app.store.categories().len());

    if items.is_empty() {
        let empty = Paragraph::new("No categories yet. Type a name above and press Enter.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(list_border)
                    .title(title),
            );
        frame.render_widget(empty, chunks[1]);
    } else {
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(list_border)
                .title(title)
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(list, chunks[1]);
    }

    let controls = if list_focused {
        controls_bar(&[
            ("↑↓/j/k", "Navigate"),
            ("Enter", "Log time"),
            ("Tab/a", "New category"),
            ("P", "Progress"),
            ("Q", "Quit"),
        ])
    } else {
        controls_bar(&[
            ("Enter", "Add"),
            ("Tab", "Focus list"),
            ("Ctrl+P", "Progress"),
            ("Ctrl+Q", "Quit"),
        ])
    };
    frame.render_widget(controls, chunks[2]);
}
