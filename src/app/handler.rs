use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::route::Route;
use crate::app::state::*;
use crate::study::Step;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => {
            state.on_tick();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Paste(text) => {
            if editable(state) {
                for c in text.chars().filter(|c| *c != '\r') {
                    state.editor.insert_char(c);
                }
                state.sync_editor();
            }
            vec![]
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Handlers run one at a time
    if state.busy {
        return vec![];
    }

    // Any key dismisses a transient notice
    state.status_message = None;

    match state.route.clone() {
        Route::Study { .. } => handle_study_key(state, key),
        Route::Start { .. } | Route::Record { .. } => handle_menu_key(state, key),
        Route::Tokens => handle_tokens_key(state, key),
    }
}

fn editable(state: &AppState) -> bool {
    matches!(state.route, Route::Study { .. }) && state.wizard.step() != Step::Review
}

fn handle_study_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('n') if ctrl => {
            if state.wizard.can_advance() {
                return vec![Action::Advance];
            }
            vec![]
        }
        KeyCode::Char('s') if ctrl => vec![Action::Skip],
        KeyCode::Esc => {
            if state.wizard.step() != Step::JapaneseInput {
                state.wizard.back();
                state.load_editor();
            }
            vec![]
        }
        KeyCode::Enter if state.wizard.step() == Step::Review => vec![Action::Advance],
        _ if state.wizard.step() == Step::Review => vec![],
        _ => {
            handle_editor_key(state, key);
            vec![]
        }
    }
}

fn handle_editor_key(state: &mut AppState, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('w') if ctrl => state.editor.delete_word_back(),
        KeyCode::Char('a') if ctrl => state.editor.move_home(),
        KeyCode::Char('e') if ctrl => state.editor.move_end(),
        KeyCode::Char(_) if ctrl => return,
        KeyCode::Char(c) => state.editor.insert_char(c),
        KeyCode::Enter => state.editor.insert_newline(),
        KeyCode::Backspace => state.editor.delete_back(),
        KeyCode::Delete => state.editor.delete_forward(),
        KeyCode::Left => state.editor.move_left(),
        KeyCode::Right => state.editor.move_right(),
        KeyCode::Home => state.editor.move_home(),
        KeyCode::End => state.editor.move_end(),
        _ => return,
    }
    state.sync_editor();
}

fn handle_menu_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => vec![Action::Navigate(Route::Study {
            slug: state.category.clone(),
        })],
        KeyCode::Char('t') => vec![Action::Navigate(Route::Tokens)],
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_tokens_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.tokens.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.tokens.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => state.tokens.reveal_selected(),
        KeyCode::Char('r') if ctrl => return vec![Action::LoadTokens],
        KeyCode::Esc => {
            return vec![Action::Navigate(Route::start(state.category.as_deref()))];
        }
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}
