use crate::app::state::AppState;
use crate::study::wizard::StudySession;
use crate::study::Step;
use crate::ui::theme::Theme;
use crate::ui::{editor, layout, public_answers, stepper};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let wizard = &state.wizard;
    let step = wizard.step();
    let session = wizard.session();
    let l = layout::compute_study_layout(area, step == Step::Review);

    stepper::render_title(frame, l.title, step);
    stepper::render(frame, l.stepper, step);

    match step {
        Step::JapaneseInput => render_japanese(frame, l.body, state),
        Step::EnglishInput => render_english(frame, l.body, state),
        Step::Review => render_review(frame, l.body, session),
    }

    let error = Paragraph::new(Span::styled(session.error_message.as_str(), Theme::error()));
    frame.render_widget(error, l.error);

    render_buttons(frame, l.buttons, step, wizard.can_advance());

    if step == Step::Review {
        public_answers::render(frame, l.public_answers, state);
    }

    render_skip(frame, l.skip);
}

fn render_topic(frame: &mut Frame, area: Rect, session: &StudySession) {
    let lines = match &session.active_question {
        Some(q) => vec![
            Line::from(Span::styled(q.title.as_str(), Theme::title())),
            Line::from(Span::styled(q.description.as_str(), Theme::hint_text())),
        ],
        None => vec![Line::from(Span::styled("お題を読み込み中...", Theme::muted()))],
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn split_body(area: Rect, top: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(top), Constraint::Min(3)])
        .split(area);
    (chunks[0], chunks[1])
}

fn render_japanese(frame: &mut Frame, area: Rect, state: &AppState) {
    let (topic_area, editor_area) = split_body(area, 3);
    render_topic(frame, topic_area, state.wizard.session());
    editor::render(
        frame,
        editor_area,
        "日本語",
        &state.editor,
        "お題について日本語で意見を書いてください",
    );
}

fn render_english(frame: &mut Frame, area: Rect, state: &AppState) {
    let (source_area, editor_area) = split_body(area, 5);
    text_panel(frame, source_area, "あなたの日本語", &state.wizard.session().japanese);
    editor::render(
        frame,
        editor_area,
        "English",
        &state.editor,
        "上の文章を英語にしてみましょう",
    );
}

fn render_review(frame: &mut Frame, area: Rect, session: &StudySession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    text_panel(frame, chunks[0], "あなたの日本語", &session.japanese);
    text_panel(frame, chunks[1], "あなたの英語", &session.english);
    text_panel(frame, chunks[2], "お手本", &session.translation);
}

fn text_panel(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Theme::hint_text())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let paragraph = Paragraph::new(text)
        .style(Theme::text())
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn button<'a>(key: &'a str, label: &'a str, enabled: bool) -> Vec<Span<'a>> {
    let style = if enabled {
        Theme::button_enabled()
    } else {
        Theme::button_disabled()
    };
    vec![
        Span::styled(format!(" {} ", key), Theme::key_hint()),
        Span::styled(format!(" {} ", label), style),
        Span::raw("  "),
    ]
}

fn render_buttons(frame: &mut Frame, area: Rect, step: Step, can_advance: bool) {
    let mut spans = Vec::new();
    match step {
        Step::JapaneseInput => {
            spans.extend(button("Ctrl+N", "次へ進む", can_advance));
        }
        Step::EnglishInput => {
            spans.extend(button("Esc", "日本語入力に戻る", true));
            spans.extend(button("Ctrl+N", "次へ進む", can_advance));
        }
        Step::Review => {
            spans.extend(button("Esc", "英語入力に戻る", true));
            spans.extend(button("Enter", "終了", true));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Right), area);
}

fn render_skip(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Ctrl+S ", Theme::key_hint()),
            Span::styled("skip→", Theme::text()),
        ]),
        Line::from(Span::styled(
            "(※Skipした場合もハートを消費します)",
            Theme::muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Right), area);
}
