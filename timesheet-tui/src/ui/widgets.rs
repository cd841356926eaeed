use crate::app::TextInput;
use crate::goal::GoalStatus;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

/// A bordered single-line input. The focused one shows a block cursor.
pub fn input_box(title: &str, input: &TextInput, focused: bool, masked: bool) -> Paragraph<'static> {
    let (before, after) = input.split_at_cursor();
    let (before, after) = if masked {
        (
            "•".repeat(before.chars().count()),
            "•".repeat(after.chars().count()),
        )
    } else {
        (before.to_string(), after.to_string())
    };
    let text = if focused {
        format!("{}█{}", before, after)
    } else {
        format!("{}{}", before, after)
    };

    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(format!(" {} ", title), border))
                .padding(Padding::horizontal(1)),
        )
}

/// Bottom controls bar from `(key, description)` pairs.
pub fn controls_bar(controls: &[(&'static str, &'static str)]) -> Paragraph<'static> {
    let spans: Vec<Span> = controls
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(*key, Style::default().fg(Color::Yellow)),
                Span::raw(format!(": {}  ", desc)),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        )
}

pub fn goal_color(status: GoalStatus) -> Color {
    match status {
        GoalStatus::Within => Color::Green,
        GoalStatus::Below => Color::Red,
        GoalStatus::Above => Color::Yellow,
    }
}
