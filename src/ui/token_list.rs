use crate::app::state::AppState;
use crate::token::RedemptionCard;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Rows a single card occupies, borders included.
const CARD_HEIGHT: u16 = 7;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let column = layout::centered_column(area);
    let tokens = &state.tokens;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(3),    // Cards
            Constraint::Length(1), // Help
        ])
        .split(column);

    let header = Paragraph::new(Line::from(Span::styled("トークン交換履歴", Theme::title())))
        .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let list_area = chunks[1];
    if let Some(ref err) = tokens.error {
        let msg = Paragraph::new(Span::styled(format!("  {}", err), Theme::error()));
        frame.render_widget(msg, list_area);
    } else if !tokens.loaded {
        let msg = Paragraph::new(Span::styled("  読み込み中...", Theme::muted()));
        frame.render_widget(msg, list_area);
    } else if tokens.cards.is_empty() {
        let msg = Paragraph::new(Span::styled("  交換履歴はありません", Theme::muted()));
        frame.render_widget(msg, list_area);
    } else {
        let visible = (list_area.height / CARD_HEIGHT).max(1) as usize;
        let start = tokens.selected.saturating_sub(visible - 1);
        for (row, idx) in (start..tokens.cards.len()).take(visible).enumerate() {
            let y = list_area.y + row as u16 * CARD_HEIGHT;
            let h = CARD_HEIGHT.min(list_area.bottom().saturating_sub(y));
            if h == 0 {
                break;
            }
            let card_area = Rect::new(list_area.x, y, list_area.width, h);
            render_card(frame, card_area, &tokens.cards[idx], idx == tokens.selected);
        }
    }

    let help = Line::from(vec![
        Span::styled(" ↑↓", Theme::key_hint()),
        Span::styled(" Select  ", Theme::hint_text()),
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" ギフトコードを表示する  ", Theme::hint_text()),
        Span::styled("Ctrl+R", Theme::key_hint()),
        Span::styled(" Refresh  ", Theme::hint_text()),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" Back", Theme::hint_text()),
    ]);
    frame.render_widget(Paragraph::new(help), chunks[2]);
}

pub fn render_card(frame: &mut Frame, area: Rect, card: &RedemptionCard, selected: bool) {
    let border_style = if selected {
        Theme::selected()
    } else {
        Theme::border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(border_style);

    let mut lines = vec![
        Line::from(Span::styled(card.title(), Theme::title())),
        Line::from(Span::styled(card.created_at_text(), Theme::hint_text())),
        Line::from(Span::styled(card.status_text(), Theme::text())),
    ];
    if let Some(price) = card.price_line() {
        lines.push(Line::from(Span::styled(price, Theme::text())));
    }

    let action = match card.visible_gift_code() {
        Some(code) => Span::styled(
            code.to_string(),
            Style::default()
                .fg(Theme::ACCENT_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        None if card.can_reveal() => Span::styled("[ギフトコードを表示する]", Theme::key_hint()),
        None => Span::styled("[ギフトコードを表示する]", Theme::muted()),
    };
    lines.push(Line::from(action));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
