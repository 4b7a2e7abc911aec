use crate::app::route::Route;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

fn format_age(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let status_style = if state.status_message.is_some() {
        Style::default().fg(Theme::ERROR_RED).bg(Theme::BG_ELEVATED)
    } else {
        Theme::status_bar()
    };
    parts.push(Span::styled(format!(" {} ", state.status_line()), status_style));

    // Session clock
    if matches!(state.route, Route::Study { .. }) {
        parts.push(Span::styled(
            format!(" ⏱ {} ", format_age(state.wizard.session().age)),
            Style::default().fg(Theme::ACCENT_AMBER).bg(Theme::BG_ELEVATED),
        ));
    }

    let clock = Local::now().format(&state.config.ui.timestamp_format).to_string();
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + clock.width() + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" {} ", clock),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(0), "00:00");
        assert_eq!(format_age(75), "01:15");
    }
}
