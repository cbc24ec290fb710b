//! Browser state and key handling
//!
//! The App struct brings together:
//! - The loaded Session (parsed attributes, read-only)
//! - The filter text typed by the user
//! - The selected attribute and the status line
//!
//! Every filter edit re-filters the cached session synchronously.

use attrview_core::render::condition_label;
use attrview_core::Attribute;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::clipboard::Clipboard;
use crate::session::{Session, SessionView};

/// Rows moved by PageUp/PageDown
const PAGE_SIZE: usize = 10;

/// One visible line of the attribute list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row<'a> {
    /// `Condition: NAME` header; not selectable
    Header(String),
    /// Selectable attribute
    Attribute(&'a Attribute),
}

/// The main application
pub struct App {
    session: Session,
    filter: String,
    /// Index into the selectable attributes of the current view
    selected: usize,
    status: Option<String>,
    clipboard: Box<dyn Clipboard>,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session, filter: impl Into<String>, clipboard: Box<dyn Clipboard>) -> Self {
        App {
            session,
            filter: filter.into(),
            selected: 0,
            status: None,
            clipboard,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Rows for the current filter, in display order
    pub fn rows(&self) -> Vec<Row<'_>> {
        let view = match self.session.render(&self.filter) {
            SessionView::Items(view) => view,
            SessionView::Failed => return Vec::new(),
        };

        let mut rows: Vec<Row<'_>> = view.unconditional().into_iter().map(Row::Attribute).collect();
        for (condition, attributes) in view.groups() {
            rows.push(Row::Header(condition_label(condition)));
            rows.extend(attributes.iter().map(|attribute| Row::Attribute(*attribute)));
        }
        rows
    }

    /// Number of selectable attributes in the current view
    pub fn visible_count(&self) -> usize {
        match self.session.render(&self.filter) {
            SessionView::Items(view) => view.len(),
            SessionView::Failed => 0,
        }
    }

    /// Index of the selected attribute within [`App::rows`]
    pub fn selected_row(&self) -> Option<usize> {
        self.rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| matches!(row, Row::Attribute(_)))
            .nth(self.selected)
            .map(|(index, _)| index)
    }

    /// The attribute under the cursor
    pub fn selected_attribute(&self) -> Option<&Attribute> {
        match self.session.render(&self.filter) {
            SessionView::Items(view) => view.attributes().get(self.selected).copied(),
            SessionView::Failed => None,
        }
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.selected = 0;
        self.status = None;
    }

    fn push_filter(&mut self, c: char) {
        let mut filter = std::mem::take(&mut self.filter);
        filter.push(c);
        self.set_filter(filter);
    }

    fn pop_filter(&mut self) {
        let mut filter = std::mem::take(&mut self.filter);
        filter.pop();
        self.set_filter(filter);
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.visible_count();
        if count == 0 {
            self.selected = 0;
            return;
        }
        let last = count - 1;
        self.selected = if delta < 0 {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            (self.selected + delta as usize).min(last)
        };
    }

    /// Copy the selected value and record the acknowledgment
    pub fn copy_selected(&mut self) {
        let Some(value) = self.selected_attribute().map(|a| a.value.clone()) else {
            return;
        };
        self.status = self
            .session
            .copy(&value, self.clipboard.as_mut())
            .map(str::to_string);
    }

    /// Handle a keyboard event
    ///
    /// Returns whether the state changed (needed for re-rendering)
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc if self.filter.is_empty() => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.set_filter(""),
            KeyCode::Enter => self.copy_selected(),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-(PAGE_SIZE as isize)),
            KeyCode::PageDown => self.move_selection(PAGE_SIZE as isize),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.visible_count().saturating_sub(1),
            KeyCode::Backspace => self.pop_filter(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.push_filter(c)
            }
            _ => return false,
        }
        true
    }
}
