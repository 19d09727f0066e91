use dex_core::{AppViewModel, LoadState, SelectedRecord};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use super::constants::*;
use super::layout;

pub fn render(frame: &mut Frame, view: &AppViewModel, cursor: usize) {
    let areas = layout::split(frame.area());

    let search = Paragraph::new(Line::from(vec![
        Span::raw(view.search_term.as_str()),
        Span::styled("_", Style::default().fg(ACCENT)),
    ]))
    .block(Block::default().borders(Borders::ALL).title(TITLE_SEARCH));
    frame.render_widget(search, areas.search);

    let titles: Vec<Line> = (0..view.tab_count)
        .map(|index| {
            let label = TAB_LABELS.get(index).copied().unwrap_or("Tab");
            Line::from(format!("{label} ({})", view.tabs.tab(index).len()))
        })
        .collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(TITLE_TABS))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .select(view.active_tab);
    frame.render_widget(tabs, areas.tabs);

    let rows = view.active_rows();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(row.name.as_str()))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(list_title(view)))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    if !rows.is_empty() {
        list_state.select(Some(cursor.min(rows.len() - 1)));
    }
    frame.render_stateful_widget(list, areas.list, &mut list_state);

    let detail = Paragraph::new(detail_lines(view))
        .block(Block::default().borders(Borders::ALL).title(TITLE_DETAIL))
        .wrap(Wrap { trim: true });
    frame.render_widget(detail, areas.detail);

    let status = format!("{} records | {}", view.image_paths.len(), HELP_TEXT);
    frame.render_widget(Paragraph::new(status), areas.status);
}

fn list_title(view: &AppViewModel) -> &'static str {
    match view.load_state {
        LoadState::Idle | LoadState::Pending => "Loading…",
        LoadState::Failed => "Catalog unavailable",
        LoadState::Loaded => "Pokémon",
    }
}

fn detail_lines(view: &AppViewModel) -> Vec<Line<'static>> {
    let Some(selected) = view.selected.as_ref() else {
        return vec![Line::from("Select a Pokémon with Enter.")];
    };

    let mut lines = vec![
        Line::from(Span::styled(
            selected.summary.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Height: {}", field_or_pending(selected.height))),
        Line::from(format!("Types: {}", type_names(selected))),
    ];
    if let Some(element_type) = selected.element_type.as_ref() {
        lines.push(Line::from(format!("Genus: {element_type}")));
    }
    lines.push(Line::from(format!("Image: {}", selected.image)));
    if let Some(background) = view.selected_image_path.as_ref() {
        lines.push(Line::from(format!("Background: {background}")));
    }
    lines
}

fn field_or_pending(value: Option<u32>) -> String {
    value.map_or_else(|| "…".to_string(), |v| v.to_string())
}

fn type_names(selected: &SelectedRecord) -> String {
    if selected.types.is_empty() {
        return "…".to_string();
    }
    selected
        .types
        .iter()
        .map(|slot| slot.type_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
