//! Evaluator-level behavior across the full stack.

use chrono::{NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use timeguard_test::component::{canonical_string, Evaluation, RawInput, TemporalKind, TemporalValue};

use super::helpers::strict_evaluator;

#[test_log::test]
fn absence_is_not_an_error_for_any_kind() {
    let evaluator = strict_evaluator(Tz::UTC);

    for kind in [TemporalKind::Date, TemporalKind::Time, TemporalKind::DateTime] {
        assert_eq!(evaluator.evaluate(&RawInput::Absent, kind), Evaluation::Absent);
        assert_eq!(evaluator.evaluate(&"".into(), kind), Evaluation::Absent);
    }
}

#[test_log::test]
fn iso_date_string_evaluates_to_its_date() {
    let evaluator = strict_evaluator(Tz::UTC);

    assert_eq!(
        evaluator.evaluate(&"2012-01-01".into(), TemporalKind::Date),
        Evaluation::Value(TemporalValue::Date(
            NaiveDate::from_ymd_opt(2012, 1, 1).expect("valid date")
        ))
    );
}

#[test_log::test]
fn unrecognized_strings_collapse_to_invalid() {
    let evaluator = strict_evaluator(Tz::UTC);

    for text in ["not valid", "2012/01/01", "2012-13-01", "2012-01-32", "25:00"] {
        for kind in [TemporalKind::Date, TemporalKind::Time, TemporalKind::DateTime] {
            assert_eq!(
                evaluator.evaluate(&text.into(), kind),
                Evaluation::Invalid,
                "{text} as {kind}"
            );
        }
    }
}

#[test_log::test]
fn already_typed_value_passes_through_unchanged() {
    let evaluator = strict_evaluator(Tz::Australia__Melbourne);
    let value = TemporalValue::Date(NaiveDate::from_ymd_opt(2012, 1, 1).expect("valid date"));

    assert_eq!(
        evaluator.evaluate(&value.into(), TemporalKind::Date),
        Evaluation::Value(value)
    );
}

#[test_log::test]
fn times_with_equal_time_of_day_compare_equal() {
    let evaluator = strict_evaluator(Tz::UTC);

    let first = evaluator.evaluate(&"12:30".into(), TemporalKind::Time);
    let second = evaluator.evaluate(&"12:30:00".into(), TemporalKind::Time);

    assert_eq!(first, second);
    assert_eq!(
        first,
        Evaluation::Value(TemporalValue::Time(
            Utc.with_ymd_and_hms(2000, 1, 1, 12, 30, 0).unwrap()
        ))
    );
}

#[test_log::test]
fn offsetless_datetime_carries_the_configured_zone_offset() {
    let evaluator = strict_evaluator(Tz::Australia__Melbourne);

    let value = evaluator
        .evaluate(&"2010-06-01 12:00".into(), TemporalKind::DateTime)
        .value()
        .expect("valid datetime")
        .as_datetime()
        .expect("datetime kind");

    // Melbourne is on AEST (UTC+10) in June
    assert_eq!(value.offset().fix().local_minus_utc(), 10 * 3600);
}

#[test_log::test]
fn canonical_form_reparses_to_an_equal_value() {
    let evaluator = strict_evaluator(Tz::Australia__Melbourne);

    for (text, kind) in [
        ("2012-01-01", TemporalKind::Date),
        ("12:30", TemporalKind::Time),
        ("2010-06-01 12:00", TemporalKind::DateTime),
    ] {
        let value = evaluator
            .evaluate(&text.into(), kind)
            .value()
            .expect("fixture parses");
        assert_eq!(
            evaluator.evaluate(&canonical_string(&value).into(), kind),
            Evaluation::Value(value),
            "round-trip of {text}"
        );
    }
}
