use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the centred study column.
const MAX_CONTENT_WIDTH: u16 = 80;

pub struct StudyLayout {
    pub title: Rect,
    pub stepper: Rect,
    pub body: Rect,
    pub error: Rect,
    pub buttons: Rect,
    pub public_answers: Rect,
    pub skip: Rect,
}

/// Split off the one-line status bar at the bottom.
pub fn split_status(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Horizontally centre a column of at most `MAX_CONTENT_WIDTH`.
pub fn centered_column(area: Rect) -> Rect {
    let width = area.width.min(MAX_CONTENT_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

pub fn compute_study_layout(area: Rect, show_public_answers: bool) -> StudyLayout {
    let column = centered_column(area);
    let public_h = if show_public_answers { 5 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),        // Step title
            Constraint::Length(1),        // Stepper
            Constraint::Min(6),           // Step body
            Constraint::Length(1),        // Error line
            Constraint::Length(1),        // Buttons
            Constraint::Length(public_h), // Public answers
            Constraint::Length(2),        // Skip hint
        ])
        .split(column);

    StudyLayout {
        title: chunks[0],
        stepper: chunks[1],
        body: chunks[2],
        error: chunks[3],
        buttons: chunks[4],
        public_answers: chunks[5],
        skip: chunks[6],
    }
}
