use range_picker::{
    AfterRange, CalendarDate, DisabledDateSet, Marking, PickOutcome, PickerConfig, RangePicker,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn date(text: &str) -> CalendarDate {
    text.parse().expect("valid test date")
}

const SCREEN_CONFIG: &str = r#"{
    "disabledDates": [
        "2020-03-18", "2020-03-19", "2020-03-24",
        "2020-03-25", "2020-03-26", "2020-03-27"
    ],
    "current": "2020-03-01"
}"#;

#[test]
fn booking_flow_over_sold_out_dates() {
    init_tracing();
    let config = PickerConfig::from_json(SCREEN_CONFIG).expect("config parses");
    let mut picker = RangePicker::from_config(&config).expect("config is valid");
    let today = date("2020-03-01");

    assert_eq!(picker.pick(date("2020-03-10")), PickOutcome::Started);
    let props = picker.props(today);
    assert_eq!(props.min_date, date("2020-03-10"));
    assert_eq!(props.max_date, Some(date("2020-03-18")));
    assert!(picker.is_selectable(date("2020-03-17"), today));
    assert!(!picker.is_selectable(date("2020-03-19"), today));

    assert_eq!(picker.pick(date("2020-03-15")), PickOutcome::Completed);
    let span = picker.selected_span().expect("range is complete");
    assert_eq!(span.len_days(), 6);
    assert!(!picker.disabled().any_within(&span));

    let marked = picker.marked_dates();
    assert_eq!(marked.len(), 6 + 6);
    assert!(marked[&date("2020-03-10")].starting_day);
    assert!(marked[&date("2020-03-15")].ending_day);
    assert_eq!(marked[&date("2020-03-24")], Marking::disabled());

    assert_eq!(picker.pick(date("2020-03-20")), PickOutcome::Restarted);
    assert_eq!(picker.state().start_date(), Some(date("2020-03-20")));
    assert_eq!(picker.state().blocking_date(), Some(date("2020-03-24")));

    picker.clear();
    assert!(picker.state().is_cleared());
    assert_eq!(picker.props(today).min_date, today);
}

#[test]
fn unsorted_disabled_list_still_blocks_on_nearest() {
    init_tracing();
    let disabled: DisabledDateSet = ["2020-04-02", "2020-03-27", "2020-03-18"]
        .into_iter()
        .map(date)
        .collect();
    let mut picker = RangePicker::new(disabled);

    picker.pick(date("2020-03-10"));
    assert_eq!(picker.state().blocking_date(), Some(date("2020-03-18")));

    picker.pick(date("2020-03-01"));
    assert_eq!(picker.state().blocking_date(), Some(date("2020-03-18")));

    picker.clear();
    picker.pick(date("2020-03-28"));
    assert_eq!(picker.state().blocking_date(), Some(date("2020-04-02")));
}

#[test]
fn clear_only_policy_needs_an_extra_tap() {
    init_tracing();
    let mut picker = RangePicker::new(DisabledDateSet::default())
        .with_after_range(AfterRange::ClearOnly);

    picker.pick(date("2020-12-30"));
    picker.pick(date("2021-01-02"));
    assert_eq!(picker.selection().len(), 4);

    assert_eq!(picker.pick(date("2021-01-05")), PickOutcome::Cleared);
    assert!(picker.selection().is_empty());
    assert_eq!(picker.pick(date("2021-01-05")), PickOutcome::Started);
    assert_eq!(picker.max_date(), None);
}
