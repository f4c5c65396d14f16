//! # Sidebar Component
//!
//! The navigation rail: an "Overview" entry followed by one entry per
//! stage, in store order. The cursor is presentation state — moving it does
//! not change the navigator. Pressing Enter emits a [`SidebarEvent`], and
//! the run loop decides what to do with it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, ListState};
use unicode_width::UnicodeWidthStr;

use crate::core::navigator::View;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// High-level event emitted when the user activates a sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEvent {
    ShowOverview,
    ShowStage(String),
}

/// Label for the entry that returns to the overview.
const OVERVIEW_ENTRY: &str = "Overview";

pub struct Sidebar {
    /// `OVERVIEW_ENTRY` followed by stage ids, in store order.
    entries: Vec<String>,
    /// Cursor position (index into `entries`).
    pub cursor: usize,
}

impl Sidebar {
    pub fn new(stage_ids: &[&str]) -> Self {
        let mut entries = Vec::with_capacity(stage_ids.len() + 1);
        entries.push(OVERVIEW_ENTRY.to_string());
        entries.extend(stage_ids.iter().map(|id| id.to_string()));
        Self { entries, cursor: 0 }
    }

    /// Move the cursor onto the entry for the active view, so the sidebar
    /// tracks navigation that didn't come from it (Left/Right, Esc).
    pub fn sync_to(&mut self, view: &View) {
        self.cursor = match view {
            View::Overview => 0,
            View::StageDetail(id) => self
                .entries
                .iter()
                .position(|e| e == id)
                .unwrap_or(0),
        };
    }

    /// Column width needed to show every entry plus borders and padding.
    pub fn width(&self) -> u16 {
        let widest = self
            .entries
            .iter()
            .map(|e| e.width())
            .max()
            .unwrap_or(0);
        // 2 border columns + 2 marker columns + 1 padding
        (widest + 5) as u16
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, current: &View) {
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let active = match current {
                    View::Overview => i == 0,
                    View::StageDetail(id) => entry == id,
                };
                let (marker, style) = if active {
                    ("● ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                } else {
                    ("  ", Style::default())
                };
                ListItem::new(format!("{marker}{entry}")).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(Block::bordered().title("Playbook"))
            .highlight_style(Style::default().bg(Color::DarkGray));

        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }
}

impl EventHandler for Sidebar {
    type Event = SidebarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SidebarEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if self.cursor + 1 < self.entries.len() {
                    self.cursor += 1;
                }
                None
            }
            TuiEvent::Submit => {
                if self.cursor == 0 {
                    Some(SidebarEvent::ShowOverview)
                } else {
                    Some(SidebarEvent::ShowStage(self.entries[self.cursor].clone()))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sidebar() -> Sidebar {
        Sidebar::new(&["Business Problem", "Business Model"])
    }

    #[test]
    fn submit_on_first_entry_emits_overview() {
        let mut sb = sidebar();
        assert_eq!(sb.handle_event(&TuiEvent::Submit), Some(SidebarEvent::ShowOverview));
    }

    #[test]
    fn cursor_moves_and_emits_stage() {
        let mut sb = sidebar();
        assert_eq!(sb.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(
            sb.handle_event(&TuiEvent::Submit),
            Some(SidebarEvent::ShowStage("Business Problem".to_string()))
        );
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut sb = sidebar();
        sb.handle_event(&TuiEvent::CursorUp);
        assert_eq!(sb.cursor, 0);
        for _ in 0..10 {
            sb.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(sb.cursor, 2);
    }

    #[test]
    fn sync_to_tracks_the_active_view() {
        let mut sb = sidebar();
        sb.sync_to(&View::StageDetail("Business Model".to_string()));
        assert_eq!(sb.cursor, 2);
        sb.sync_to(&View::Overview);
        assert_eq!(sb.cursor, 0);
    }

    #[test]
    fn width_covers_longest_entry() {
        let sb = sidebar();
        assert!(sb.width() as usize >= "Business Problem".len() + 5);
    }
}
