use serde::{Deserialize, Serialize};

use crate::{CalendarDate, MarkingMap, PERIOD_MARKING, RangePicker};

/// The two shapes of calendar screen. Selection behaves the same in both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalendarLayout {
    /// Months stacked in a scrolling list.
    #[default]
    List,
    /// One month at a time.
    SingleMonth,
}

/// Snapshot of what the calendar widget is handed on each render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarProps {
    pub layout:       CalendarLayout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current:      Option<CalendarDate>,
    pub min_date:     CalendarDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date:     Option<CalendarDate>,
    pub marked_dates: MarkingMap,
    pub marking_type: &'static str,
}

impl RangePicker {
    /// Renders the picker's state into widget properties. `today` bounds the
    /// calendar while no range is open.
    pub fn props(&self, today: CalendarDate) -> CalendarProps {
        CalendarProps {
            layout:       self.layout(),
            current:      self.current(),
            min_date:     self.min_date(today),
            max_date:     self.max_date(),
            marked_dates: self.marked_dates(),
            marking_type: PERIOD_MARKING,
        }
    }
}
