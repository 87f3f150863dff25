use crate::{CalendarDate, DateSpan, DisabledDateSet};

pub fn date(text: &str) -> CalendarDate {
    text.parse()
        .unwrap_or_else(|err| panic!("bad test date {text}: {err}"))
}

pub fn dates(texts: &[&str]) -> Vec<CalendarDate> {
    texts.iter().map(|text| date(text)).collect()
}

pub fn span(start: &str, end: &str) -> DateSpan {
    DateSpan::new(date(start), date(end)).expect("failed to construct test span")
}

/// The sold-out dates of the March 2020 booking screen.
pub fn march_sold_out() -> DisabledDateSet {
    DisabledDateSet::build(dates(&[
        "2020-03-18",
        "2020-03-19",
        "2020-03-24",
        "2020-03-25",
        "2020-03-26",
        "2020-03-27",
    ]))
}
