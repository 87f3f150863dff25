use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{CalendarDate, DateSpan, prelude::*};

/// Display attributes for one calendar day, in the shape calendar widgets
/// expect under `markedDates`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marking {
    #[serde(default, skip_serializing_if = "is_false")]
    pub selected:            bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub starting_day:        bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub ending_day:          bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled:            bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disable_touch_event: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color:               Option<String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

impl Marking {
    /// A sold-out day: greyed and ignoring taps.
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            disable_touch_event: true,
            ..Self::default()
        }
    }

    /// A day inside a selected range.
    pub fn selected(color: &str) -> Self {
        Self {
            selected: true,
            color: Some(color.to_owned()),
            ..Self::default()
        }
    }

    pub fn range_start(color: &str) -> Self {
        Self {
            starting_day: true,
            ..Self::selected(color)
        }
    }

    pub fn range_end(color: &str) -> Self {
        Self {
            ending_day: true,
            ..Self::selected(color)
        }
    }

    /// A one-day selection: both ends of the range at once.
    pub fn single_day(color: &str) -> Self {
        Self {
            starting_day: true,
            ending_day: true,
            ..Self::selected(color)
        }
    }
}

/// Per-date markings, ordered by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkingMap(BTreeMap<CalendarDate, Marking>);

impl MarkingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dates carrying a marking, ascending.
    pub fn dates(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.0.keys().copied()
    }

    /// Lays `overlay` over `self`. Where both mark the same date the overlay's
    /// marking replaces the base one whole.
    #[must_use]
    pub fn overlaid_with(mut self, overlay: &Self) -> Self {
        self.0
            .extend(overlay.0.iter().map(|(date, marking)| (*date, marking.clone())));
        self
    }
}

impl FromIterator<(CalendarDate, Marking)> for MarkingMap {
    fn from_iter<T: IntoIterator<Item = (CalendarDate, Marking)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Markings for a selection starting at `start`.
///
/// Without an end this is a single day marked as both ends. With one, the
/// days strictly between are marked selected and the two ends get their
/// endpoint markings. `end` before `start` is treated as a single day.
pub fn build_range(start: CalendarDate, end: Option<CalendarDate>, color: &str) -> MarkingMap {
    let Some(span) = end.and_then(|end| DateSpan::new(start, end).ok()) else {
        return MarkingMap::from_iter([(start, Marking::single_day(color))]);
    };
    if span.start() == span.end() {
        // Range closed on the day it opened
        return MarkingMap::from_iter([(start, Marking::single_day(color))]);
    }

    let map: MarkingMap = std::iter::once((span.start(), Marking::range_start(color)))
        .chain(span.interior().map(|date| (date, Marking::selected(color))))
        .chain(std::iter::once((span.end(), Marking::range_end(color))))
        .collect();
    trace!(%span, keys = map.len(), "built range markings");
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_SELECTION_COLOR as COLOR;
    use crate::test_utils::{date, dates, span};

    #[test]
    fn test_single_day_without_end() {
        let map = build_range(date("2020-03-10"), None, COLOR);
        assert_eq!(map.len(), 1);
        let marking = &map[&date("2020-03-10")];
        assert!(marking.selected && marking.starting_day && marking.ending_day);
        assert_eq!(marking.color.as_deref(), Some(COLOR));
    }

    #[test]
    fn test_range_keys_are_exactly_the_inclusive_span() {
        let map = build_range(date("2020-03-10"), Some(date("2020-03-15")), COLOR);
        let keys: Vec<_> = map.dates().collect();
        assert_eq!(keys, span("2020-03-10", "2020-03-15").days().collect::<Vec<_>>());
        assert_eq!(keys.len(), 6);
    }

    #[test]
    fn test_range_endpoint_attributes() {
        let map = build_range(date("2020-03-10"), Some(date("2020-03-12")), COLOR);
        assert_eq!(map[&date("2020-03-10")], Marking::range_start(COLOR));
        assert_eq!(map[&date("2020-03-11")], Marking::selected(COLOR));
        assert_eq!(map[&date("2020-03-12")], Marking::range_end(COLOR));
    }

    #[test]
    fn test_adjacent_days_have_no_interior() {
        let map = build_range(date("2020-03-10"), Some(date("2020-03-11")), COLOR);
        assert_eq!(map.dates().collect::<Vec<_>>(), dates(&["2020-03-10", "2020-03-11"]));
    }

    #[test]
    fn test_range_closed_on_start_day() {
        let map = build_range(date("2020-03-10"), Some(date("2020-03-10")), COLOR);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&date("2020-03-10")], Marking::single_day(COLOR));
    }

    #[test]
    fn test_range_across_year_boundary() {
        let map = build_range(date("2019-12-30"), Some(date("2020-01-02")), COLOR);
        assert_eq!(
            map.dates().collect::<Vec<_>>(),
            dates(&["2019-12-30", "2019-12-31", "2020-01-01", "2020-01-02"])
        );
    }

    #[test]
    fn test_overlay_replaces_whole_entry() {
        let base = MarkingMap::from_iter([
            (date("2020-03-18"), Marking::disabled()),
            (date("2020-03-19"), Marking::disabled()),
        ]);
        let overlay = MarkingMap::from_iter([(date("2020-03-18"), Marking::single_day(COLOR))]);

        let merged = base.overlaid_with(&overlay);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[&date("2020-03-18")], Marking::single_day(COLOR));
        assert_eq!(merged[&date("2020-03-19")], Marking::disabled());
    }

    #[test]
    fn test_serializes_like_widget_markings() {
        let map = build_range(date("2020-03-10"), Some(date("2020-03-11")), "#000");
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "2020-03-10": { "selected": true, "startingDay": true, "color": "#000" },
                "2020-03-11": { "selected": true, "endingDay": true, "color": "#000" },
            })
        );

        let disabled = serde_json::to_value(Marking::disabled()).unwrap();
        assert_eq!(
            disabled,
            serde_json::json!({ "disabled": true, "disableTouchEvent": true })
        );
    }
}
