//! # TUI Components
//!
//! Two patterns, matching what each component needs:
//!
//! - Stateless, props-based rendering: `TitleBar`, the overview panel, and
//!   the stage detail panel receive everything they draw as parameters.
//! - Stateful, event-driven: `Sidebar` owns its cursor and emits
//!   `SidebarEvent` values that the run loop turns into navigator calls.
//!
//! Each component file is self-contained: state, events, rendering, and
//! tests live together.

pub mod overview;
pub mod sidebar;
pub mod stage_view;
pub mod title_bar;

pub use sidebar::{Sidebar, SidebarEvent};
pub use title_bar::TitleBar;
