use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Included, Unbounded};

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::{CalendarDate, DateSpan, Marking, MarkingMap, prelude::*};

/// Dates that cannot be booked. Fixed once built.
///
/// Kept ordered so the nearest disabled date after any day is found by
/// position rather than by the order the dates were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, Serialize, Deserialize)]
#[serde(from = "Vec<CalendarDate>", into = "Vec<CalendarDate>")]
pub struct DisabledDateSet(BTreeSet<CalendarDate>);

impl DisabledDateSet {
    /// Builds the index from any list of dates, in any order.
    /// Duplicates collapse into one entry.
    pub fn build<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = CalendarDate>,
    {
        let mut supplied = 0usize;
        let set: BTreeSet<_> = dates.into_iter().inspect(|_| supplied += 1).collect();
        if set.len() < supplied {
            warn!(
                supplied,
                unique = set.len(),
                "duplicate disabled dates collapsed"
            );
        }
        trace!(count = set.len(), "built disabled date index");
        Self(set)
    }

    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        self.0.contains(&date)
    }

    /// The earliest disabled date strictly after `date`.
    pub fn next_after(&self, date: CalendarDate) -> Option<CalendarDate> {
        self.0.range((Excluded(date), Unbounded)).next().copied()
    }

    /// The earliest disabled date inside `span`, ends included.
    pub fn first_within(&self, span: &DateSpan) -> Option<CalendarDate> {
        self.0
            .range((Included(span.start()), Included(span.end())))
            .next()
            .copied()
    }

    pub fn any_within(&self, span: &DateSpan) -> bool {
        self.first_within(span).is_some()
    }

    /// One non-interactive marking per disabled date.
    pub fn markings(&self) -> MarkingMap {
        self.0.iter().map(|date| (*date, Marking::disabled())).collect()
    }
}

impl From<Vec<CalendarDate>> for DisabledDateSet {
    fn from(dates: Vec<CalendarDate>) -> Self {
        Self::build(dates)
    }
}

impl From<DisabledDateSet> for Vec<CalendarDate> {
    fn from(set: DisabledDateSet) -> Self {
        set.0.into_iter().collect()
    }
}

impl FromIterator<CalendarDate> for DisabledDateSet {
    fn from_iter<T: IntoIterator<Item = CalendarDate>>(iter: T) -> Self {
        Self::build(iter)
    }
}
