//! Rate table types for the compensation estimation engine.
//!
//! This module contains the strongly-typed rate structures that are
//! deserialized from YAML rate schedule files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Metadata about the rate schedule.
///
/// Contains identifying information about the published compensation
/// schedule, including its code, name, version, and source URL.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// The schedule code (e.g., "va-disability-comp").
    pub code: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version or rate year of the schedule.
    pub version: String,
    /// URL to the official published rates.
    pub source_url: String,
}

/// Monthly base and additive amounts for one rating tier (30%–100%).
///
/// Base amounts are keyed by dependent configuration: spouse presence
/// crossed with the number of dependent parents (0, 1, or 2). The additive
/// amounts cover dependent children and spouse Aid and Attendance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateEntry {
    /// Base amount for a veteran with no dependents.
    pub veteran_only: Decimal,
    /// Base amount for a veteran with a spouse.
    pub veteran_with_spouse: Decimal,
    /// Base amount for a veteran with a spouse and one parent.
    pub veteran_with_spouse_and_one_parent: Decimal,
    /// Base amount for a veteran with a spouse and two parents.
    pub veteran_with_spouse_and_two_parents: Decimal,
    /// Base amount for a veteran with one parent and no spouse.
    pub veteran_with_one_parent: Decimal,
    /// Base amount for a veteran with two parents and no spouse.
    pub veteran_with_two_parents: Decimal,
    /// Addition for the first dependent child.
    pub add_for_first_child: Decimal,
    /// Addition for each dependent child after the first.
    pub add_for_additional_child: Decimal,
    /// Addition when a dependent spouse qualifies for Aid and Attendance.
    pub add_for_spouse_aid_and_attendance: Decimal,
}

/// One rate schedule, effective from a specific date.
///
/// A schedule pairs the flat amounts for the 10% and 20% tiers with the
/// dependent-keyed [`RateEntry`] amounts for the 30%–100% tiers.
#[derive(Debug, Clone, Deserialize)]
pub struct RateSchedule {
    /// The date these rates took effect.
    pub effective_date: NaiveDate,
    /// Flat monthly amounts by rating tier (10 and 20); dependents do not
    /// change these.
    pub flat_rates: HashMap<u32, Decimal>,
    /// Dependent-keyed amounts by rating tier (30 through 100, step 10).
    pub rates: HashMap<u32, RateEntry>,
}

/// The result of a rate table lookup for a validated rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLookup<'a> {
    /// The rating is a flat tier; the amount is fixed regardless of
    /// dependents.
    Flat(Decimal),
    /// The rating is a dependent-keyed tier.
    Tiered(&'a RateEntry),
}

/// The complete rate table loaded from YAML schedule files.
///
/// Holds all loaded schedules sorted by effective date. Lookups always use
/// the current (most recent) schedule; older schedules are retained so a
/// rate update is a pure data drop.
#[derive(Debug, Clone)]
pub struct RateTable {
    /// Schedule metadata.
    metadata: ScheduleMetadata,
    /// Rate schedules sorted by effective date (oldest first).
    schedules: Vec<RateSchedule>,
}

impl RateTable {
    /// Creates a new RateTable from its component parts.
    pub fn new(metadata: ScheduleMetadata, schedules: Vec<RateSchedule>) -> Self {
        let mut sorted = schedules;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            schedules: sorted,
        }
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns all loaded schedules, oldest first.
    pub fn schedules(&self) -> &[RateSchedule] {
        &self.schedules
    }

    /// Returns the current (most recently effective) schedule, if any
    /// schedules are loaded.
    pub fn current(&self) -> Option<&RateSchedule> {
        self.schedules.last()
    }

    /// Looks up the amounts for a rating in the current schedule.
    ///
    /// The rating must already be validated (10–100, multiple of 10);
    /// lookup does not validate. Returns `None` when the current schedule
    /// has no entry for the tier, which signals a partial table.
    ///
    /// # Example
    ///
    /// ```
    /// use comp_engine::config::{RateLookup, RateTable};
    ///
    /// let table = RateTable::builtin().unwrap();
    /// assert!(matches!(table.lookup(10), Some(RateLookup::Flat(_))));
    /// assert!(matches!(table.lookup(70), Some(RateLookup::Tiered(_))));
    /// ```
    pub fn lookup(&self, rating: u32) -> Option<RateLookup<'_>> {
        let schedule = self.current()?;
        if let Some(amount) = schedule.flat_rates.get(&rating) {
            return Some(RateLookup::Flat(*amount));
        }
        schedule.rates.get(&rating).map(RateLookup::Tiered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_entry() -> RateEntry {
        RateEntry {
            veteran_only: dec("1716.28"),
            veteran_with_spouse: dec("1838.28"),
            veteran_with_spouse_and_one_parent: dec("1947.28"),
            veteran_with_spouse_and_two_parents: dec("2056.28"),
            veteran_with_one_parent: dec("1825.28"),
            veteran_with_two_parents: dec("1934.28"),
            add_for_first_child: dec("96.00"),
            add_for_additional_child: dec("82.00"),
            add_for_spouse_aid_and_attendance: dec("150.00"),
        }
    }

    fn sample_schedule(effective: NaiveDate) -> RateSchedule {
        let mut flat_rates = HashMap::new();
        flat_rates.insert(10, dec("171.23"));
        flat_rates.insert(20, dec("338.49"));

        let mut rates = HashMap::new();
        rates.insert(70, sample_entry());

        RateSchedule {
            effective_date: effective,
            flat_rates,
            rates,
        }
    }

    fn metadata() -> ScheduleMetadata {
        ScheduleMetadata {
            code: "va-disability-comp".to_string(),
            name: "VA Disability Compensation".to_string(),
            version: "2024".to_string(),
            source_url: "https://example.com".to_string(),
        }
    }

    #[test]
    fn test_lookup_flat_tier() {
        let schedule = sample_schedule(NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        let table = RateTable::new(metadata(), vec![schedule]);

        match table.lookup(10) {
            Some(RateLookup::Flat(amount)) => assert_eq!(amount, dec("171.23")),
            other => panic!("Expected flat lookup, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_tiered() {
        let schedule = sample_schedule(NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        let table = RateTable::new(metadata(), vec![schedule]);

        match table.lookup(70) {
            Some(RateLookup::Tiered(entry)) => {
                assert_eq!(entry.veteran_with_spouse, dec("1838.28"));
            }
            other => panic!("Expected tiered lookup, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_missing_tier_returns_none() {
        let schedule = sample_schedule(NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        let table = RateTable::new(metadata(), vec![schedule]);

        assert!(table.lookup(90).is_none());
    }

    #[test]
    fn test_lookup_with_no_schedules_returns_none() {
        let table = RateTable::new(metadata(), vec![]);
        assert!(table.lookup(70).is_none());
    }

    #[test]
    fn test_current_is_most_recent_schedule() {
        let older = sample_schedule(NaiveDate::from_ymd_opt(2022, 12, 1).unwrap());
        let newer = sample_schedule(NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        // Construct out of order; RateTable::new sorts.
        let table = RateTable::new(metadata(), vec![newer, older]);

        assert_eq!(
            table.current().unwrap().effective_date,
            NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()
        );
        assert_eq!(
            table.schedules()[0].effective_date,
            NaiveDate::from_ymd_opt(2022, 12, 1).unwrap()
        );
    }

    #[test]
    fn test_rate_entry_deserializes_from_yaml() {
        let yaml = r#"
veteran_only: "524.31"
veteran_with_spouse: "582.31"
veteran_with_spouse_and_one_parent: "631.31"
veteran_with_spouse_and_two_parents: "680.31"
veteran_with_one_parent: "573.31"
veteran_with_two_parents: "622.31"
add_for_first_child: "41.00"
add_for_additional_child: "35.00"
add_for_spouse_aid_and_attendance: "64.00"
"#;
        let entry: RateEntry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry.veteran_only, dec("524.31"));
        assert_eq!(entry.add_for_spouse_aid_and_attendance, dec("64.00"));
    }
}
