use std::collections::{BTreeSet, HashMap};
use std::ops::RangeInclusive;

use crate::structs::hour_key;
use crate::LiftTime;

/// Hours shown by the calendar, one row each.
pub const HOURS: RangeInclusive<u32> = 9..=21;

/// Lift times arranged by day and starting hour.
#[derive(Debug, Clone, Default)]
pub struct LiftCalendar {
    /// Every date that has at least one slot, sorted as plain strings.
    ///
    /// `MM/DD/YYYY` only sorts chronologically inside a single year.
    pub days: Vec<String>,
    lift_holder: HashMap<(String, u32), LiftTime>,
}

impl LiftCalendar {
    /// Groups lift times by `(date, start time)`. When two share a key the
    /// later one wins.
    #[must_use]
    pub fn from_lift_times(lift_times: Vec<LiftTime>) -> Self {
        let mut days = BTreeSet::new();
        let mut lift_holder = HashMap::new();

        for lift in lift_times {
            days.insert(lift.date.clone());
            lift_holder.insert((lift.date.clone(), lift.start_key()), lift);
        }

        log::debug!("Calendar spans {} days", days.len());

        Self {
            days: days.into_iter().collect(),
            lift_holder,
        }
    }

    /// The slot starting exactly on `hour` o'clock of `day`, if any.
    #[must_use]
    pub fn get(&self, day: &str, hour: u32) -> Option<&LiftTime> {
        self.lift_holder
            .get(&(day.to_string(), hour_key(f64::from(hour))))
    }

    /// Number of distinct `(date, start time)` slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lift_holder.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lift_holder.is_empty()
    }
}

pub fn build_lift_calendar(lift_times: Vec<LiftTime>) -> LiftCalendar {
    LiftCalendar::from_lift_times(lift_times)
}
