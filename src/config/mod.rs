//! Rate table loading and lookup for the compensation estimation engine.
//!
//! This module provides the [`RateTable`] type, which holds the published
//! VA compensation rate schedules loaded from YAML files, and the lookup
//! contract the calculator depends on. The 2024 schedule is embedded at
//! build time, so [`RateTable::builtin`] works without any filesystem
//! access; [`RateTable::load`] exists for out-of-band data refreshes.
//!
//! # Example
//!
//! ```
//! use comp_engine::config::RateTable;
//!
//! let table = RateTable::builtin().unwrap();
//! println!("Loaded schedule: {}", table.metadata().name);
//! ```

mod loader;
mod types;

pub use types::{RateEntry, RateLookup, RateSchedule, RateTable, ScheduleMetadata};
