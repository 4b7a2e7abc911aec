//! The category start screen and the post-session results screen.

use crate::app::route::Route;
use crate::app::state::AppState;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let column = layout::centered_column(area);
    let slug = state.route.slug().unwrap_or_default();

    let (heading, body) = match state.route {
        Route::Record { .. } => (
            "お疲れさまでした",
            format!("カテゴリー「{}」の学習が終わりました。", slug),
        ),
        _ => (
            "英作文トレーニング",
            format!("カテゴリー「{}」のお題で学習を始めます。", slug),
        ),
    };

    let lines = vec![
        Line::from(Span::styled(heading, Theme::title())),
        Line::default(),
        Line::from(Span::styled(body, Theme::text())),
        Line::default(),
        Line::from(vec![
            Span::styled("Enter", Theme::key_hint()),
            Span::styled(" 学習を始める  ", Theme::hint_text()),
            Span::styled("t", Theme::key_hint()),
            Span::styled(" トークン交換履歴  ", Theme::hint_text()),
            Span::styled("q", Theme::key_hint()),
            Span::styled(" 終了", Theme::hint_text()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());

    let height = (lines.len() as u16 + 2).min(column.height);
    let y = column.y + column.height.saturating_sub(height) / 3;
    let panel = Rect::new(column.x, y, column.width, height);

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        panel,
    );
}
