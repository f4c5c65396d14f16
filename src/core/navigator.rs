//! # Navigator
//!
//! Per-session view state: which stage, if any, is currently open.
//!
//! The state machine is deliberately tiny — `Overview` plus one
//! `StageDetail` state per stage id, cycling for the life of the session:
//!
//! ```text
//!              select(id)
//!   Overview ────────────▶ StageDetail(id)
//!      ▲                      │    ▲
//!      │ reset()    select(b) │    │ select(a)
//!      └──────────────────────┴────┘
//! ```
//!
//! Every session owns its own `Navigator`; the `ContentStore` behind it is
//! shared read-only. Both mutators are single atomic field replacements, so
//! no partial transition is ever observable.

use std::sync::Arc;

use log::debug;

use crate::content::{ContentStore, UnknownStageError};

/// Which view the rendering layer should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// No stage selected: show the roadmap at a glance.
    Overview,
    /// One stage's full text body.
    StageDetail(String),
}

/// Session-scoped navigation state.
///
/// Created in `Overview`, mutated only by [`select`](Navigator::select) and
/// [`reset`](Navigator::reset), and dropped with the session — nothing is
/// persisted.
pub struct Navigator {
    store: Arc<ContentStore>,
    selected: Option<String>,
}

impl Navigator {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self {
            store,
            selected: None,
        }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Current state, as a pure read.
    pub fn current(&self) -> View {
        match &self.selected {
            Some(id) => View::StageDetail(id.clone()),
            None => View::Overview,
        }
    }

    /// Open a stage. Valid from `Overview` or any other `StageDetail` —
    /// detail-to-detail transitions do not pass through `Overview`.
    ///
    /// The id is validated against the store before the state changes, so a
    /// selection can never dangle. Callers are expected to pass ids sourced
    /// from `all_stage_ids()`; an error here is a programming defect and
    /// must be surfaced, not swallowed.
    pub fn select(&mut self, id: &str) -> Result<(), UnknownStageError> {
        if !self.store.contains(id) {
            return Err(UnknownStageError::new(id));
        }
        debug!("navigator: select {:?}", id);
        self.selected = Some(id.to_string());
        Ok(())
    }

    /// Return to the overview. Idempotent — calling it while already on the
    /// overview is a no-op, not an error.
    pub fn reset(&mut self) {
        if self.selected.is_some() {
            debug!("navigator: reset to overview");
        }
        self.selected = None;
    }

    /// Body of the currently open stage, or `None` on the overview.
    ///
    /// Infallible by construction: `select` already validated the id and
    /// the store never loses entries.
    pub fn selected_body(&self) -> Option<&str> {
        let id = self.selected.as_deref()?;
        self.store.get_body(id).ok()
    }
}
