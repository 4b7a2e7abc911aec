use crate::app::route::Route;
use crate::config::AppConfig;
use crate::study::{Step, StudyWizard};
use crate::token::{RedemptionCard, RedemptionRequest};
use unicode_width::UnicodeWidthStr;

/// Multi-line text editor backing the Japanese and English steps.
///
/// `cursor` is a byte offset into `text` and always sits on a char boundary.
#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    /// Start of the current line.
    pub fn move_home(&mut self) {
        self.cursor = self.text[..self.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    /// End of the current line.
    pub fn move_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.text.len());
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let is_space = |c: char| c == ' ' || c == '\u{3000}';
        let before = &self.text[..self.cursor];
        let mut chars = before.char_indices().rev().peekable();
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while let Some(&(i, c)) = chars.peek() {
            if !is_space(c) {
                break;
            }
            pos = i;
            chars.next();
        }
        // Skip word characters
        while let Some(&(i, c)) = chars.peek() {
            if is_space(c) || c == '\n' {
                break;
            }
            pos = i;
            chars.next();
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Cursor as (line, display column). Wide characters count as two columns.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        (line, before[line_start..].width())
    }
}

/// Redemption requests shown on the token screen.
#[derive(Debug, Default)]
pub struct TokenList {
    pub cards: Vec<RedemptionCard>,
    pub selected: usize,
    pub loaded: bool,
    pub error: Option<String>,
}

impl TokenList {
    pub fn replace(&mut self, requests: Vec<RedemptionRequest>) {
        self.cards = requests.into_iter().map(RedemptionCard::new).collect();
        self.selected = 0;
        self.loaded = true;
        self.error = None;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.cards.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn reveal_selected(&mut self) {
        if let Some(card) = self.cards.get_mut(self.selected) {
            card.reveal();
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub route: Route,
    pub category: Option<String>,
    pub wizard: StudyWizard,
    pub editor: InputState,
    pub tokens: TokenList,
    /// A remote call is in flight; input is ignored until it settles.
    pub busy: bool,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    tick_ms: u64,
}

impl AppState {
    pub fn new(config: AppConfig, category: Option<String>, route: Route) -> Self {
        let wizard = StudyWizard::new(category.clone());
        Self {
            config,
            route,
            category,
            wizard,
            editor: InputState::new(),
            tokens: TokenList::default(),
            busy: false,
            should_quit: false,
            dirty: true,
            status_message: None,
            tick_ms: 0,
        }
    }

    /// Replace the wizard with a fresh one for the current category.
    pub fn reset_wizard(&mut self) {
        self.wizard = StudyWizard::new(self.category.clone());
        self.editor = InputState::new();
    }

    pub fn set_route(&mut self, route: Route) {
        self.route = route;
        self.dirty = true;
    }

    /// Load the editor from the session field of the current step.
    pub fn load_editor(&mut self) {
        let session = self.wizard.session();
        match self.wizard.step() {
            Step::JapaneseInput => self.editor.set_text(&session.japanese),
            Step::EnglishInput => self.editor.set_text(&session.english),
            Step::Review => self.editor.set_text(""),
        }
    }

    /// Push the editor contents into the wizard for the current step.
    pub fn sync_editor(&mut self) {
        let text = self.editor.text.clone();
        match self.wizard.step() {
            Step::JapaneseInput => self.wizard.set_japanese(text),
            Step::EnglishInput => self.wizard.set_english(text),
            Step::Review => {}
        }
    }

    /// Account for one tick of `tick_rate_ms`; the session clock only runs
    /// on the study screen.
    pub fn on_tick(&mut self) {
        let rate = self.config.ui.tick_rate_ms.max(1);
        if !matches!(self.route, Route::Study { .. }) || self.busy {
            return;
        }
        self.tick_ms += rate;
        while self.tick_ms >= 1000 {
            self.tick_ms -= 1000;
            self.wizard.tick();
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        if self.busy {
            return "送信中...".to_string();
        }
        format!("{}  {}", self.route.path(), self.category.as_deref().unwrap_or(""))
            .trim_end()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_multibyte_editing() {
        let mut input = InputState::new();
        for c in "猫が好き".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "猫がき");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "がき");
        input.move_end();
        assert_eq!(input.cursor, input.text.len());
    }

    #[test]
    fn test_cursor_position_counts_wide_chars() {
        let mut input = InputState::new();
        input.set_text("ab\n猫a");
        assert_eq!(input.cursor_position(), (1, 3));
        input.move_home();
        assert_eq!(input.cursor_position(), (1, 0));
        input.move_left();
        assert_eq!(input.cursor_position(), (0, 2));
    }

    #[test]
    fn test_delete_word_back() {
        let mut input = InputState::new();
        input.set_text("I like  cats  ");
        input.delete_word_back();
        assert_eq!(input.text, "I like  ");
        input.delete_word_back();
        assert_eq!(input.text, "I ");
    }

    #[test]
    fn test_editor_syncs_to_current_step() {
        let mut state = AppState::new(AppConfig::default(), None, Route::Study { slug: None });
        state.editor.insert_char('あ');
        state.sync_editor();
        assert_eq!(state.wizard.session().japanese, "あ");
        assert!(state.wizard.can_advance());

        state.editor.delete_back();
        state.sync_editor();
        assert!(!state.wizard.can_advance());
    }

    #[test]
    fn test_tick_counts_seconds_on_study_screen() {
        let mut config = AppConfig::default();
        config.ui.tick_rate_ms = 250;
        let mut state = AppState::new(config, None, Route::Study { slug: None });
        for _ in 0..9 {
            state.on_tick();
        }
        assert_eq!(state.wizard.session().age, 2);

        state.set_route(Route::Tokens);
        for _ in 0..8 {
            state.on_tick();
        }
        assert_eq!(state.wizard.session().age, 2);
    }

    #[test]
    fn test_token_selection_bounds() {
        let mut list = TokenList::default();
        list.select_next();
        list.reveal_selected();
        assert_eq!(list.selected, 0);
        list.select_prev();
        assert_eq!(list.selected, 0);
    }
}
