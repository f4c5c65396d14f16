//! # Core Application Logic
//!
//! Session state and configuration. It knows nothing about any specific UI
//! technology — the navigator exposes "which view should be rendered" and
//! the adapter layer decides how to draw it.
//!
//! ```text
//!          ┌───────────────────────────────┐
//!          │            CORE               │
//!          │                               │
//!          │  • Navigator (view state)     │
//!          │  • Config (startup options)   │
//!          │                               │
//!          │  No terminal I/O. No UI.      │
//!          └───────────────┬───────────────┘
//!                          │ current() -> View
//!                          ▼
//!                   ┌────────────┐
//!                   │    TUI     │
//!                   │  Adapter   │
//!                   │ (ratatui)  │
//!                   └────────────┘
//! ```

pub mod config;
pub mod navigator;
