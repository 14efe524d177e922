//! Plugin parser delegation through the record layer.

use std::sync::Arc;

use chrono::NaiveDate;
use chrono_tz::Tz;
use timeguard_test::component::config::{
    IntegrationsConfig, LoggingConfig, ParserConfig, TimezoneConfig,
};
use timeguard_test::component::{
    Evaluator, EvaluatorError, PluginParser, RawInput, Settings, TemporalKind, TemporalValue,
    ValidationFault,
};

use super::helpers::{plugin_record, CountingParser};

fn parsed_date() -> TemporalValue {
    TemporalValue::Date(NaiveDate::from_ymd_opt(2010, 1, 1).expect("valid date"))
}

#[test_log::test]
fn string_assignment_delegates_exactly_once() {
    let parser = CountingParser::returning(Some(parsed_date()));
    let mut record = plugin_record(Arc::clone(&parser), Tz::UTC);

    record
        .assign("publish_date", "2010-01-01")
        .expect("registered field");

    assert_eq!(parser.calls(), 1);
    assert_eq!(
        parser.seen(),
        [("2010-01-01".to_string(), TemporalKind::Date)]
    );
}

#[test_log::test]
fn each_kind_delegates_with_its_own_kind_argument() {
    let parser = CountingParser::returning(None);
    let mut record = plugin_record(Arc::clone(&parser), Tz::UTC);

    record.assign("publish_date", "x").expect("registered field");
    record.assign("publish_time", "x").expect("registered field");
    record
        .assign("publish_datetime", "x")
        .expect("registered field");

    assert_eq!(
        parser.seen(),
        [
            ("x".to_string(), TemporalKind::Date),
            ("x".to_string(), TemporalKind::Time),
            ("x".to_string(), TemporalKind::DateTime),
        ]
    );
}

#[test_log::test]
fn plugin_result_is_stored_verbatim() {
    let parser = CountingParser::returning(Some(parsed_date()));
    let mut record = plugin_record(parser, Tz::UTC);

    // The plugin's answer wins, whatever the text said
    record
        .assign("publish_date", "first of january")
        .expect("registered field");

    assert_eq!(record.value("publish_date"), Some(parsed_date()));
    assert!(record.validate().is_valid());
}

#[test_log::test]
fn plugin_failure_is_stored_as_nil_and_fails_validation() {
    let parser = CountingParser::returning(None);
    let mut record = plugin_record(Arc::clone(&parser), Tz::UTC);

    record
        .assign("publish_date", "not valid")
        .expect("registered field");

    assert_eq!(parser.calls(), 1);
    assert_eq!(record.value("publish_date"), None);
    assert_eq!(
        record.validate().on("publish_date").collect::<Vec<_>>(),
        [ValidationFault::InvalidDate]
    );
    // The rejected raw value stays readable
    assert_eq!(
        record.before_type_cast("publish_date"),
        Some(&RawInput::Text("not valid".to_string()))
    );
}

#[test_log::test]
fn absent_input_never_reaches_the_plugin() {
    let parser = CountingParser::returning(None);
    let mut record = plugin_record(Arc::clone(&parser), Tz::UTC);

    record
        .assign("publish_date", Option::<&str>::None)
        .expect("registered field");
    record.assign("publish_date", "").expect("registered field");

    assert_eq!(parser.calls(), 0);
    assert!(record.validate().is_valid());
}

fn plugin_settings() -> Settings {
    Settings {
        timezone: TimezoneConfig {
            default: "utc".to_string(),
        },
        parser: ParserConfig {
            use_plugin_parser: true,
        },
        integrations: IntegrationsConfig {
            extend_orms: vec!["mongoid".to_string()],
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
    }
}

#[test_log::test]
fn settings_select_the_plugin_strategy() {
    let parser = CountingParser::returning(Some(parsed_date()));
    let evaluator = Evaluator::from_settings(
        &plugin_settings(),
        Some(Arc::clone(&parser) as Arc<dyn PluginParser>),
    )
    .expect("plugin supplied");

    evaluator.evaluate(&"anything".into(), TemporalKind::Date);
    assert_eq!(parser.calls(), 1);
}

#[test_log::test]
fn plugin_strategy_without_a_parser_is_a_construction_fault() {
    assert!(matches!(
        Evaluator::from_settings(&plugin_settings(), None),
        Err(EvaluatorError::MissingPluginParser)
    ));
}
