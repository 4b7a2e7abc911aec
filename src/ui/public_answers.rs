use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Where to browse other learners' answers for `topic_id`, if configured.
pub fn answers_link(template: Option<&str>, topic_id: &str) -> Option<String> {
    template.map(|t| t.replace("{topic}", topic_id))
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.height == 0 {
        return;
    }

    let block = Block::default()
        .title(" みんなの回答 ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_LAVENDER));

    let topic_id = state
        .wizard
        .session()
        .active_question
        .as_ref()
        .map(|q| q.topic_id.as_str());

    let template = state.config.study.public_answers_url.as_deref();
    let lines = match topic_id.and_then(|id| answers_link(template, id)) {
        Some(link) => vec![
            Line::from(Span::styled("このお題への他の学習者の回答:", Theme::hint_text())),
            Line::from(Span::styled(link, Style::default().fg(Theme::ACCENT_TEAL))),
        ],
        None => vec![Line::from(Span::styled(
            "他の学習者の回答は Web 版で閲覧できます",
            Theme::muted(),
        ))],
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}
