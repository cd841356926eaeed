use super::utils::centered_rect;
use super::widgets::{controls_bar, input_box};
use super::*;
use crate::app::LoginField;

pub fn render_login_view(frame: &mut Frame, app: &App, body: Rect) {
    let area = centered_rect(50, 15, body);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(2), // Error
            Constraint::Min(0),
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let form = &app.login_form;
    frame.render_widget(
        input_box(
            "Username",
            &form.username,
            form.focused_field == LoginField::Username,
            false,
        ),
        chunks[0],
    );
    frame.render_widget(
        input_box(
            "Password",
            &form.password,
            form.focused_field == LoginField::Password,
            true,
        ),
        chunks[1],
    );

    if let Some(err) = &form.error {
        let error = Paragraph::new(Span::styled(err.clone(), Style::default().fg(Color::Red)))
            .alignment(Alignment::Center);
        frame.render_widget(error, chunks[2]);
    }

    frame.render_widget(
        controls_bar(&[("Tab", "Switch field"), ("Enter", "Login"), ("Esc", "Quit")]),
        chunks[4],
    );
}
