//! # Content Store
//!
//! The fixed, ordered mapping from stage identifier to markdown body.
//! Built once at startup from a table compiled into the binary (see
//! `build.rs` and the `content/` directory) and immutable for the process
//! lifetime, so it can be shared read-only across sessions behind an `Arc`
//! without locking.
//!
//! This module contains domain data only — nothing in here knows about the
//! terminal.

pub mod graph;
mod stages;

use std::fmt;

/// Lookup of a stage id that is not in the store.
///
/// All valid ids come from [`ContentStore::all_stage_ids`], so hitting this
/// in normal operation is a programming defect. It exists so that a bad
/// lookup is a defined failure instead of a panic or a silent fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStageError {
    id: String,
}

impl UnknownStageError {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The identifier that failed to resolve.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for UnknownStageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown stage: {:?}", self.id)
    }
}

impl std::error::Error for UnknownStageError {}

/// One step of the methodology: a unique human-readable identifier and a
/// fixed markdown body. Declaration order defines display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub id: &'static str,
    pub body: &'static str,
}

/// Ordered, read-only collection of stages.
///
/// The store never gains or loses entries at runtime; the only operations
/// are ordered enumeration and lookup by id. With six entries a linear scan
/// beats any map, and it keeps declaration order for free.
#[derive(Debug)]
pub struct ContentStore {
    stages: Vec<Stage>,
}

impl ContentStore {
    /// Build the store from the embedded stage table.
    pub fn builtin() -> Self {
        let stages = stages::STAGES
            .iter()
            .map(|&(id, body)| Stage { id, body })
            .collect();
        Self { stages }
    }

    /// Stage identifiers in declaration order. Drives the sidebar entries,
    /// so the order must be stable across calls.
    pub fn all_stage_ids(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.id).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.stages.iter().any(|s| s.id == id)
    }

    /// Markdown body for a stage.
    pub fn get_body(&self, id: &str) -> Result<&str, UnknownStageError> {
        self.stages
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.body)
            .ok_or_else(|| UnknownStageError::new(id))
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
