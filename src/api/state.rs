//! Application state for the compensation estimation API.

use std::sync::Arc;

use crate::config::RateTable;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers. The rate
/// table is read-only, so handlers need no synchronization.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rate table.
    table: Arc<RateTable>,
}

impl AppState {
    /// Creates a new application state with the given rate table.
    pub fn new(table: RateTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Returns a reference to the rate table.
    pub fn table(&self) -> &RateTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state.
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
