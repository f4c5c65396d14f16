//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::content::ContentStore;
use crate::core::navigator::Navigator;

/// Creates a Navigator over the builtin content store.
pub fn test_navigator() -> Navigator {
    Navigator::new(Arc::new(ContentStore::builtin()))
}
