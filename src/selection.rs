use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    AfterRange, CalendarDate, CalendarLayout, DEFAULT_SELECTION_COLOR, DateSpan, DisabledDateSet,
    MarkingMap, build_range,
};

/// Where the user's range stands.
///
/// An end date only exists alongside a start date, and the blocking date is
/// always the earliest disabled date after the start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    start_date:    Option<CalendarDate>,
    end_date:      Option<CalendarDate>,
    blocking_date: Option<CalendarDate>,
}

impl SelectionState {
    /// No start, no end, no blocking date.
    pub const fn cleared() -> Self {
        Self {
            start_date:    None,
            end_date:      None,
            blocking_date: None,
        }
    }

    /// The first day of the range, once one is open.
    pub const fn start_date(&self) -> Option<CalendarDate> {
        self.start_date
    }

    /// The last day of the range, once it is closed.
    pub const fn end_date(&self) -> Option<CalendarDate> {
        self.end_date
    }

    /// The nearest disabled date after the start; the range cannot reach past it.
    pub const fn blocking_date(&self) -> Option<CalendarDate> {
        self.blocking_date
    }

    pub const fn is_cleared(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.blocking_date.is_none()
    }

    /// Whether both ends of the range are chosen.
    pub const fn is_complete(&self) -> bool {
        self.end_date.is_some()
    }
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn slot(date: Option<CalendarDate>) -> String {
            date.map_or_else(|| "-".to_owned(), |d| d.to_string())
        }
        write!(
            f,
            "start={} end={} blocking={}",
            slot(self.start_date),
            slot(self.end_date),
            slot(self.blocking_date)
        )
    }
}

/// What a single tap did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// A new range was opened at the tapped date.
    Started,
    /// The open range was closed at the tapped date.
    Completed,
    /// A completed range was dropped and nothing else happened.
    Cleared,
    /// A completed range was dropped and a new one opened at the tapped date.
    Restarted,
}

/// Date-range selection over a calendar with sold-out dates.
///
/// Holds the selection state and the markings derived from it. Every change
/// rebuilds the markings from scratch.
#[derive(Debug, Clone)]
pub struct RangePicker {
    disabled:          DisabledDateSet,
    disabled_markings: MarkingMap,
    color:             String,
    after_range:       AfterRange,
    layout:            CalendarLayout,
    current:           Option<CalendarDate>,
    state:             SelectionState,
    selection:         MarkingMap,
}

impl RangePicker {
    /// A cleared picker over `disabled`, with the default colour, layout and
    /// [`AfterRange`] policy.
    pub fn new(disabled: DisabledDateSet) -> Self {
        let disabled_markings = disabled.markings();
        Self {
            disabled,
            disabled_markings,
            color: DEFAULT_SELECTION_COLOR.to_owned(),
            after_range: AfterRange::default(),
            layout: CalendarLayout::default(),
            current: None,
            state: SelectionState::cleared(),
            selection: MarkingMap::new(),
        }
    }

    /// Sets the colour painted on selected days.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets what a tap does once a range is complete.
    #[must_use]
    pub fn with_after_range(mut self, after_range: AfterRange) -> Self {
        self.after_range = after_range;
        self
    }

    /// Sets the calendar variant.
    #[must_use]
    pub fn with_layout(mut self, layout: CalendarLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the month the calendar opens on.
    #[must_use]
    pub fn with_current(mut self, current: CalendarDate) -> Self {
        self.current = Some(current);
        self
    }

    /// Handles a tap on `date`.
    ///
    /// On a completed range the selection is cleared first (and, under
    /// [`AfterRange::Restart`], the tap then opens a new range). With an open
    /// range, a date on or after the start and before the blocking date closes
    /// it. Otherwise the tap opens a new range at `date`, so the end of a range
    /// never reaches the blocking date.
    ///
    /// Disabled dates are not rejected here; the calendar refuses those taps.
    pub fn pick(&mut self, date: CalendarDate) -> PickOutcome {
        let outcome = if self.state.is_complete() {
            self.clear();
            match self.after_range {
                AfterRange::ClearOnly => PickOutcome::Cleared,
                AfterRange::Restart => {
                    self.start_at(date);
                    PickOutcome::Restarted
                }
            }
        } else if let Some(start) = self
            .state
            .start_date
            .filter(|start| self.can_close(*start, date))
        {
            self.state = SelectionState {
                end_date: Some(date),
                ..self.state
            };
            self.selection = build_range(start, Some(date), &self.color);
            PickOutcome::Completed
        } else {
            self.start_at(date);
            PickOutcome::Started
        };

        debug!(%date, ?outcome, state = %self.state, "picked date");
        outcome
    }

    fn can_close(&self, start: CalendarDate, date: CalendarDate) -> bool {
        date >= start && self.state.blocking_date.is_none_or(|blocking| date < blocking)
    }

    fn start_at(&mut self, date: CalendarDate) {
        self.state = SelectionState {
            start_date:    Some(date),
            end_date:      None,
            blocking_date: self.disabled.next_after(date),
        };
        self.selection = build_range(date, None, &self.color);
    }

    /// Drops the selection entirely.
    pub fn clear(&mut self) {
        self.state = SelectionState::cleared();
        self.selection = MarkingMap::new();
        debug!("cleared selection");
    }

    /// The current start, end and blocking dates.
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Markings for the current selection only.
    pub const fn selection(&self) -> &MarkingMap {
        &self.selection
    }

    /// The sold-out dates this picker was built with.
    pub const fn disabled(&self) -> &DisabledDateSet {
        &self.disabled
    }

    /// Colour painted on selected days.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Which calendar variant the picker drives.
    pub const fn layout(&self) -> CalendarLayout {
        self.layout
    }

    /// The month the calendar opens on, if one was set.
    pub const fn current(&self) -> Option<CalendarDate> {
        self.current
    }

    /// Everything the calendar paints: the disabled markings with the
    /// selection laid over them.
    pub fn marked_dates(&self) -> MarkingMap {
        self.disabled_markings.clone().overlaid_with(&self.selection)
    }

    /// Earliest tappable date: the range start once one is open, else `today`.
    pub fn min_date(&self, today: CalendarDate) -> CalendarDate {
        self.state.start_date.unwrap_or(today)
    }

    /// Latest tappable date, or `None` when the calendar is open-ended.
    pub const fn max_date(&self) -> Option<CalendarDate> {
        self.state.blocking_date
    }

    /// Whether the calendar should accept a tap on `date`.
    pub fn is_selectable(&self, date: CalendarDate, today: CalendarDate) -> bool {
        let min = self.min_date(today);
        let in_window = match self.max_date() {
            Some(max) => DateSpan::new(min, max).is_ok_and(|window| window.contains(date)),
            None => date >= min,
        };
        in_window && !self.disabled.is_disabled(date)
    }

    /// The completed range, once both ends are chosen.
    pub fn selected_span(&self) -> Option<DateSpan> {
        let start = self.state.start_date?;
        let end = self.state.end_date?;
        DateSpan::new(start, end).ok()
    }
}
