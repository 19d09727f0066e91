use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom: search box, tab bar, list | detail, status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub search: Rect,
    pub tabs: Rect,
    pub list: Rect,
    pub detail: Rect,
    pub status: Rect,
}

pub fn split(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[2]);

    ScreenAreas {
        search: rows[0],
        tabs: rows[1],
        list: body[0],
        detail: body[1],
        status: rows[3],
    }
}
