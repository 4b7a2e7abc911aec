use crate::study::Step;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render_title(frame: &mut Frame, area: Rect, step: Step) {
    let title = Paragraph::new(Line::from(Span::styled(step.title(), Theme::title())))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// `(1) Japanese ── (2) English ── (3) Review`, with the active step
/// highlighted and completed steps ticked.
pub fn render(frame: &mut Frame, area: Rect, step: Step) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, s) in Step::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(Theme::BORDER_DIM)));
        }
        let (marker, style) = if *s == step {
            (format!("{}", i + 1), Theme::step_active())
        } else if s.index() < step.index() {
            ("✓".to_string(), Theme::step_done())
        } else {
            (format!("{}", i + 1), Theme::muted())
        };
        spans.push(Span::styled(format!(" {} ", marker), style));
        spans.push(Span::styled(format!(" {}", s.label()), style.bg(Color::Reset)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}
