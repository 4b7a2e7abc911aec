use crate::app::state::InputState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, title: &str, input: &InputState, placeholder: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1))
        .style(Theme::panel_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let (line, col) = input.cursor_position();
    // Keep the cursor line in view
    let scroll = (line as u16).saturating_sub(inner.height - 1);

    if input.text.is_empty() {
        let hint = Paragraph::new(Span::styled(placeholder, Theme::muted()));
        frame.render_widget(hint, inner);
    } else {
        let paragraph = Paragraph::new(input.text.as_str())
            .style(Theme::text())
            .scroll((scroll, 0));
        frame.render_widget(paragraph, inner);
    }

    let cursor_x = inner.x + col as u16;
    let cursor_y = inner.y + line as u16 - scroll;
    frame.set_cursor_position((cursor_x.min(inner.right() - 1), cursor_y));
}
