//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into navigator calls.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! navigator and content store stay UI-agnostic, so a different adapter
//! could drive them without touching the core.
//!
//! ## Redraw Strategy
//!
//! Nothing animates here, so the event loop only redraws after an input
//! event or a terminal resize and otherwise sleeps in `poll` (500ms slices
//! so Ctrl+C stays responsive).

pub mod component;
pub mod components;
pub mod event;
pub mod markdown;
mod ui;

use std::io::stdout;
use std::sync::Arc;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{error, info};
use tui_scrollview::ScrollViewState;

use crate::content::{ContentStore, graph};
use crate::core::config::ResolvedConfig;
use crate::core::navigator::{Navigator, View};
use crate::tui::component::EventHandler;
use crate::tui::components::{Sidebar, SidebarEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of the core navigator).
pub struct TuiState {
    pub sidebar: Sidebar,
    pub scroll_state: ScrollViewState,
    /// Transient text shown in the title bar; cleared on navigation.
    pub status_message: String,
}

impl TuiState {
    pub fn new(store: &ContentStore) -> Self {
        Self {
            sidebar: Sidebar::new(&store.all_stage_ids()),
            scroll_state: ScrollViewState::default(),
            status_message: String::new(),
        }
    }

    /// Re-align presentation state after the navigator moved: sidebar
    /// follows the active view, content scroll starts at the top.
    fn after_navigation(&mut self, view: &View) {
        self.sidebar.sync_to(view);
        self.scroll_state.scroll_to_top();
        self.status_message.clear();
        info!("view: {:?}", view);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    // The store is built once and shared read-only; this session gets its
    // own navigator.
    let store = Arc::new(ContentStore::builtin());
    let mut nav = Navigator::new(store.clone());
    let mut tui = TuiState::new(&store);
    let graph = graph::overview_graph();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &nav, &mut tui, &config, &graph))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));

        // Process first event + drain all pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::Quit => should_quit = true,

                TuiEvent::Back => {
                    nav.reset();
                    tui.after_navigation(&nav.current());
                }
                TuiEvent::NextStage => step_stage(&mut nav, &mut tui, 1),
                TuiEvent::PrevStage => step_stage(&mut nav, &mut tui, -1),

                TuiEvent::ScrollUp => tui.scroll_state.scroll_up(),
                TuiEvent::ScrollDown => tui.scroll_state.scroll_down(),
                TuiEvent::ScrollPageUp => tui.scroll_state.scroll_page_up(),
                TuiEvent::ScrollPageDown => tui.scroll_state.scroll_page_down(),
                TuiEvent::ScrollTop => tui.scroll_state.scroll_to_top(),
                TuiEvent::ScrollBottom => tui.scroll_state.scroll_to_bottom(),

                // Cursor movement and Enter belong to the sidebar
                other => {
                    if let Some(sidebar_event) = tui.sidebar.handle_event(&other) {
                        match sidebar_event {
                            SidebarEvent::ShowOverview => {
                                nav.reset();
                                tui.after_navigation(&nav.current());
                            }
                            SidebarEvent::ShowStage(id) => apply_select(&mut nav, &mut tui, &id),
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Select a stage and surface any failure.
///
/// A failed select means an id reached us that isn't in the store — a
/// programming defect. It is logged and pinned to the title bar rather
/// than silently dropped.
fn apply_select(nav: &mut Navigator, tui: &mut TuiState, id: &str) {
    match nav.select(id) {
        Ok(()) => tui.after_navigation(&nav.current()),
        Err(e) => {
            error!("select failed: {e}");
            tui.status_message = format!("internal error: {e}");
        }
    }
}

/// Move to the adjacent stage detail. From the overview, stepping forward
/// opens the first stage; stepping past either end is a no-op.
fn step_stage(nav: &mut Navigator, tui: &mut TuiState, delta: isize) {
    let ids = nav.store().all_stage_ids();
    let target = match nav.current() {
        View::Overview => {
            if delta > 0 {
                ids.first().copied()
            } else {
                None
            }
        }
        View::StageDetail(current) => ids
            .iter()
            .position(|id| *id == current)
            .and_then(|i| i.checked_add_signed(delta))
            .and_then(|i| ids.get(i).copied()),
    };
    if let Some(id) = target {
        let id = id.to_string();
        apply_select(nav, tui, &id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_navigator;

    #[test]
    fn step_forward_from_overview_opens_first_stage() {
        let mut nav = test_navigator();
        let mut tui = TuiState::new(nav.store());
        step_stage(&mut nav, &mut tui, 1);
        assert_eq!(
            nav.current(),
            View::StageDetail("Business Problem".to_string())
        );
        assert_eq!(tui.sidebar.cursor, 1);
    }

    #[test]
    fn step_backward_from_overview_is_a_noop() {
        let mut nav = test_navigator();
        let mut tui = TuiState::new(nav.store());
        step_stage(&mut nav, &mut tui, -1);
        assert_eq!(nav.current(), View::Overview);
    }

    #[test]
    fn stepping_walks_detail_to_detail_without_overview() {
        let mut nav = test_navigator();
        let mut tui = TuiState::new(nav.store());
        nav.select("Business Problem").unwrap();
        step_stage(&mut nav, &mut tui, 1);
        assert_eq!(
            nav.current(),
            View::StageDetail("Business Motivation".to_string())
        );
        step_stage(&mut nav, &mut tui, -1);
        assert_eq!(
            nav.current(),
            View::StageDetail("Business Problem".to_string())
        );
    }

    #[test]
    fn stepping_clamps_at_the_last_stage() {
        let mut nav = test_navigator();
        let mut tui = TuiState::new(nav.store());
        nav.select("Implement the Business Change").unwrap();
        step_stage(&mut nav, &mut tui, 1);
        assert_eq!(
            nav.current(),
            View::StageDetail("Implement the Business Change".to_string())
        );
    }

    #[test]
    fn failed_select_pins_an_error_to_the_title_bar() {
        let mut nav = test_navigator();
        let mut tui = TuiState::new(nav.store());
        apply_select(&mut nav, &mut tui, "Not A Stage");
        assert!(tui.status_message.contains("internal error"));
        assert_eq!(nav.current(), View::Overview);
    }
}
