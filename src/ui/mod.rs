mod editor;
mod layout;
mod menu;
mod public_answers;
mod status_bar;
mod stepper;
mod study_view;
mod theme;
mod token_list;

use crate::app::route::Route;
use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme::Theme::BG_DARK)), area);

    let (content, status) = layout::split_status(area);
    match state.route {
        Route::Study { .. } => study_view::render(frame, content, state),
        Route::Tokens => token_list::render(frame, content, state),
        Route::Start { .. } | Route::Record { .. } => menu::render(frame, content, state),
    }
    status_bar::render(frame, status, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::study::Step;
    use crate::token::card::RedemptionStatus;
    use crate::token::RedemptionRequest;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use unicode_width::UnicodeWidthStr;

    /// Screen contents row by row, without the filler cell after each wide glyph.
    fn screen_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            let mut x = area.left();
            while x < area.right() {
                let symbol = buffer[(x, y)].symbol();
                text.push_str(symbol);
                x += (symbol.width() as u16).max(1);
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_study_screen_shows_first_step() {
        let state = AppState::new(AppConfig::default(), None, Route::Study { slug: None });
        let text = screen_text(&state);
        assert!(text.contains("Japanese"));
        assert!(text.contains("skip"));
    }

    #[test]
    fn test_start_and_tokens_screens_render() {
        let state = AppState::new(AppConfig::default(), None, Route::start(None));
        assert!(screen_text(&state).contains("Enter"));

        let state = AppState::new(AppConfig::default(), None, Route::Tokens);
        assert!(screen_text(&state).contains("Refresh"));
    }

    #[test]
    fn test_public_answers_only_at_review() {
        let mut state = AppState::new(AppConfig::default(), None, Route::Study { slug: None });
        for step in [Step::JapaneseInput, Step::EnglishInput] {
            state.wizard.set_step(step);
            assert!(!screen_text(&state).contains("みんなの回答"));
        }

        state.wizard.set_step(Step::Review);
        assert!(screen_text(&state).contains("みんなの回答"));
    }

    #[test]
    fn test_issued_card_shows_status_and_price() {
        let mut state = AppState::new(AppConfig::default(), None, Route::Tokens);
        state.tokens.replace(vec![RedemptionRequest {
            user_id: "u1".into(),
            token_count: 10.0,
            token_rate: 0.9,
            price_after_fee: 8.0,
            created_at: 1_700_000_000_000,
            status: RedemptionStatus::Issued,
            gift_code: Some("GIFT".into()),
        }]);
        let text = screen_text(&state);
        assert!(text.contains("発行済み"));
        assert!(text.contains("10 × 0.9円 - 手数料 = 8円"));
    }
}
