//! Rate table loading functionality.
//!
//! Loading follows the same directory layout the rate maintainers publish:
//!
//! ```text
//! config/va-compensation/
//! ├── schedule.yaml        # Schedule metadata
//! └── rates/
//!     └── 2023-12-01.yaml  # Rates effective from this date
//! ```
//!
//! The 2024 schedule is also compiled into the binary so the engine never
//! depends on the filesystem at runtime; see [`RateTable::builtin`].

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{EngineError, EngineResult};

use super::types::{RateSchedule, RateTable, ScheduleMetadata};

/// The embedded schedule metadata file.
const BUILTIN_METADATA: &str = include_str!("../../config/va-compensation/schedule.yaml");

/// The embedded 2024 rate schedule.
const BUILTIN_RATES_2024: &str =
    include_str!("../../config/va-compensation/rates/2023-12-01.yaml");

impl RateTable {
    /// Returns the rate table embedded at build time.
    ///
    /// This is the table the engine ships with; updating published rates is
    /// an out-of-band data refresh (drop a new file under `config/` and
    /// rebuild, or use [`RateTable::load`]).
    ///
    /// # Example
    ///
    /// ```
    /// use comp_engine::config::RateTable;
    ///
    /// let table = RateTable::builtin().unwrap();
    /// assert_eq!(table.metadata().version, "2024");
    /// ```
    pub fn builtin() -> EngineResult<Self> {
        let metadata = parse_yaml::<ScheduleMetadata>("builtin:schedule.yaml", BUILTIN_METADATA)?;
        let schedule = parse_yaml::<RateSchedule>("builtin:2023-12-01.yaml", BUILTIN_RATES_2024)?;
        check_completeness(&schedule, "builtin:2023-12-01.yaml");
        Ok(Self::new(metadata, vec![schedule]))
    }

    /// Loads a rate table from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the schedule directory (e.g., "./config/va-compensation")
    ///
    /// # Returns
    ///
    /// Returns a `RateTable` on success, or an error if:
    /// - `schedule.yaml` or the `rates/` directory is missing
    /// - Any file contains invalid YAML
    /// - No rate files are found
    ///
    /// # Example
    ///
    /// ```no_run
    /// use comp_engine::config::RateTable;
    ///
    /// let table = RateTable::load("./config/va-compensation")?;
    /// # Ok::<(), comp_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata_path = path.join("schedule.yaml");
        let metadata = load_yaml::<ScheduleMetadata>(&metadata_path)?;

        let rates_dir = path.join("rates");
        let schedules = load_schedules(&rates_dir)?;

        Ok(Self::new(metadata, schedules))
    }
}

/// Parses a YAML string, labelling errors with the given source name.
fn parse_yaml<T: serde::de::DeserializeOwned>(source: &str, content: &str) -> EngineResult<T> {
    serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
        path: source.to_string(),
        message: e.to_string(),
    })
}

/// Loads and parses a YAML file.
fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    parse_yaml(&path_str, &content)
}

/// Loads all schedule files from the rates directory.
fn load_schedules(rates_dir: &Path) -> EngineResult<Vec<RateSchedule>> {
    let rates_dir_str = rates_dir.display().to_string();

    if !rates_dir.exists() {
        return Err(EngineError::ConfigNotFound {
            path: rates_dir_str,
        });
    }

    let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
        path: rates_dir_str.clone(),
    })?;

    let mut schedules = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "yaml") {
            let schedule = load_yaml::<RateSchedule>(&path)?;
            check_completeness(&schedule, &path.display().to_string());
            schedules.push(schedule);
        }
    }

    if schedules.is_empty() {
        return Err(EngineError::ConfigNotFound {
            path: format!("{} (no rate files found)", rates_dir_str),
        });
    }

    Ok(schedules)
}

/// Warns when a schedule is missing expected tiers.
///
/// A partial table is not a load error: the calculator degrades to
/// `RateDataMissing` at lookup time. The warning makes a bad data drop
/// visible before a veteran hits the gap.
fn check_completeness(schedule: &RateSchedule, source: &str) {
    for tier in [10u32, 20] {
        if !schedule.flat_rates.contains_key(&tier) {
            warn!(source, tier, "rate schedule is missing a flat tier");
        }
    }
    for tier in (30..=100).step_by(10) {
        if !schedule.rates.contains_key(&tier) {
            warn!(source, tier, "rate schedule is missing a rating tier");
        }
    }
}
