//! UI rendering logic
//!
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Filter input (3 lines, bordered)
//! - Attribute list (remaining space)
//! - Status line (1 line, fixed)

use attrview_core::FAILURE_MESSAGE;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::app::{App, Row};

/// Height of the filter input box
const FILTER_BOX_HEIGHT: u16 = 3;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                 // Title bar
            Constraint::Length(FILTER_BOX_HEIGHT), // Filter input
            Constraint::Min(1),                    // Attribute list
            Constraint::Length(1),                 // Status line
        ])
        .split(frame.area());

    render_title_bar(frame, chunks[0], app);
    render_filter(frame, chunks[1], app);
    render_list(frame, chunks[2], app);
    render_status(frame, chunks[3], app);
}

fn render_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!("attrview:: {}", app.session().location());
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_filter(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Filter");
    let paragraph = Paragraph::new(app.filter()).block(block);
    frame.render_widget(paragraph, area);

    // Cursor sits after the typed text, inside the border
    let typed = u16::try_from(app.filter().chars().count()).unwrap_or(u16::MAX);
    let x = area.x.saturating_add(1).saturating_add(typed);
    frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
}

fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Attributes");

    if !app.session().is_loaded() {
        let paragraph = Paragraph::new(FAILURE_MESSAGE)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .rows()
        .into_iter()
        .map(|row| match row {
            Row::Header(label) => ListItem::new(Line::from(Span::styled(
                label,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))),
            Row::Attribute(attribute) => ListItem::new(Line::from(vec![
                Span::styled(
                    attribute.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(attribute.value.clone()),
            ])),
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(app.selected_row());
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let text = match app.status() {
        Some(status) => status.to_string(),
        None => format!(
            "{} shown | Enter: copy | Esc: clear/quit | Ctrl+C: quit",
            app.visible_count()
        ),
    };
    let paragraph = Paragraph::new(text).style(Style::default().fg(Color::Gray));
    frame.render_widget(paragraph, area);
}
