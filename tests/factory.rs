//! Action Factory Tests
//!
//! End-to-end coverage of the instant and temporal builders: payload shaping,
//! required/optional arguments, metadata stamping, and the error taxonomy.

use actionlog::{instant, temporal, Error, FixedClock, Phase, TemporalConfig, Value};
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Arc;

/// A clock pinned to a known instant so `$timestamp` is deterministic.
fn test_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2026, 8, 26, 9, 30, 0).unwrap(),
    ))
}

const TEST_TIMESTAMP: &str = "2026-08-26T09:30:00.000Z";

fn details(entries: &[(&str, Value)]) -> HashMap<String, Value> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

// ============================================================================
// Instant Builders
// ============================================================================

#[test]
fn instant_builds_the_weight_example() {
    let weight = instant("WEIGHT", &["weight"])
        .unwrap()
        .with_clock(test_clock());

    let action = weight
        .build(&details(&[("weight", Value::Int(220))]))
        .unwrap();

    assert_eq!(action.action_type(), "WEIGHT");
    let payload = action.payload().as_object().unwrap();
    assert_eq!(payload.get("weight"), Some(&Value::Int(220)));
    assert_eq!(
        payload.get("$timestamp"),
        Some(&Value::String(TEST_TIMESTAMP.into()))
    );
    assert_eq!(payload.len(), 2);
}

#[test]
fn instant_with_no_args_stamps_only_timestamp() {
    let ping = instant("PING", &[] as &[&str]).unwrap().with_clock(test_clock());
    let action = ping.build(&HashMap::new()).unwrap();

    let payload = action.payload().as_object().unwrap();
    assert_eq!(payload.len(), 1);
    assert!(payload.contains_key("$timestamp"));
}

#[test]
fn instant_drops_fields_outside_the_argument_list() {
    let weight = instant("WEIGHT", &["weight"]).unwrap();
    let action = weight
        .build(&details(&[
            ("weight", Value::Int(220)),
            ("mood", Value::String("fine".into())),
        ]))
        .unwrap();

    assert!(action.payload().as_object().unwrap().get("mood").is_none());
}

#[test]
fn instant_optional_field_present_keeps_value() {
    let logger = instant("MY_TYPE", &["foo", "bar?"]).unwrap();
    let action = logger
        .build(&details(&[
            ("foo", Value::String("required".into())),
            ("bar", Value::String("optional".into())),
        ]))
        .unwrap();

    let payload = action.payload().as_object().unwrap();
    assert_eq!(payload.get("bar"), Some(&Value::String("optional".into())));
}

#[test]
fn instant_optional_field_absent_becomes_null() {
    let logger = instant("MY_TYPE", &["foo", "bar?"]).unwrap();
    let action = logger
        .build(&details(&[("foo", Value::String("required".into()))]))
        .unwrap();

    let payload = action.payload().as_object().unwrap();
    assert_eq!(payload.get("bar"), Some(&Value::Null));
}

#[test]
fn instant_missing_required_field_is_named() {
    let logger = instant("MY_TYPE", &["foo", "bar?"]).unwrap();
    let err = logger
        .build(&details(&[("bar", Value::String("foo was not set".into()))]))
        .unwrap_err();

    assert_eq!(err, Error::MissingArguments(vec!["foo".into()]));
}

#[test]
fn instant_missing_fields_reported_in_declared_order() {
    let logger = instant("MY_TYPE", &["first", "second", "third"]).unwrap();
    let err = logger.build(&HashMap::new()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "you must provide all required arguments; no values provided for: first|second|third"
    );
}

#[test]
fn instant_rejects_illegal_argument_names() {
    assert!(instant("MY_TYPE", &["this is spaced"]).is_err());
    assert!(instant("MY_TYPE", &["$foo"]).is_err());
    assert!(instant("MY_TYPE", &["foo?bar"]).is_err());
    assert!(instant("MY_TYPE", &["foobar?"]).is_ok());
}

// ============================================================================
// Temporal Builders
// ============================================================================

fn reading_factory() -> actionlog::TemporalFactory {
    temporal(
        "READING",
        TemporalConfig::new("title")
            .start_args(["author"])
            .stop_args(["completed", "rating?"]),
    )
    .unwrap()
    .with_clock(test_clock())
}

#[test]
fn temporal_start_builds_the_reading_example() {
    let reading = reading_factory();
    let action = reading
        .start(
            "Moby Dick",
            Some(&details(&[(
                "author",
                Value::String("Herman Melville".into()),
            )])),
        )
        .unwrap();

    assert_eq!(action.action_type(), "START_READING");
    let payload = action.payload().as_object().unwrap();
    assert_eq!(
        payload.get("author"),
        Some(&Value::String("Herman Melville".into()))
    );
    assert_eq!(payload.get("title"), Some(&Value::String("Moby Dick".into())));
    assert_eq!(payload.get("$key"), Some(&Value::String("Moby Dick".into())));
    assert_eq!(
        payload.get("$timestamp"),
        Some(&Value::String(TEST_TIMESTAMP.into()))
    );
    assert_eq!(payload.len(), 4);
}

#[test]
fn temporal_stop_validates_against_stop_args() {
    let reading = reading_factory();
    let err = reading
        .stop("Moby Dick", Some(&details(&[("rating", Value::Int(5))])))
        .unwrap_err();

    assert_eq!(err, Error::MissingArguments(vec!["completed".into()]));
}

#[test]
fn temporal_stop_builds_with_required_fields_present() {
    let reading = reading_factory();
    let action = reading
        .stop(
            "Moby Dick",
            Some(&details(&[
                ("completed", Value::Bool(true)),
                ("rating", Value::Int(5)),
            ])),
        )
        .unwrap();

    assert_eq!(action.action_type(), "STOP_READING");
    let payload = action.payload().as_object().unwrap();
    assert_eq!(payload.get("completed"), Some(&Value::Bool(true)));
    assert_eq!(payload.get("rating"), Some(&Value::Int(5)));
    assert_eq!(payload.get("title"), Some(&Value::String("Moby Dick".into())));
    assert_eq!(payload.get("$key"), Some(&Value::String("Moby Dick".into())));
}

#[test]
fn temporal_sets_both_key_field_and_alias() {
    let session = temporal("SESSION", TemporalConfig::new("name"))
        .unwrap()
        .with_clock(test_clock());
    let action = session.start("morning", None).unwrap();

    let payload = action.payload().as_object().unwrap();
    assert_eq!(payload.get("name"), Some(&Value::String("morning".into())));
    assert_eq!(payload.get("$key"), Some(&Value::String("morning".into())));
}

#[test]
fn temporal_with_empty_args_accepts_missing_details() {
    let session = temporal("SESSION", TemporalConfig::new("name")).unwrap();
    assert!(session.start("morning", None).is_ok());
    assert!(session.stop("morning", None).is_ok());
}

#[test]
fn temporal_with_args_requires_details() {
    let reading = reading_factory();

    assert_eq!(
        reading.start("Moby Dick", None).unwrap_err(),
        Error::DetailsRequired { phase: Phase::Start }
    );
    assert_eq!(
        reading.stop("Moby Dick", None).unwrap_err(),
        Error::DetailsRequired { phase: Phase::Stop }
    );
}

#[test]
fn temporal_rejects_spaced_type() {
    let err = temporal("not a type", TemporalConfig::new("title")).unwrap_err();
    assert_eq!(err, Error::InvalidType("not a type".into()));
}

#[test]
fn temporal_rejects_key_collisions_on_either_side() {
    let err = temporal(
        "READING",
        TemporalConfig::new("title").start_args(["title"]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::KeyCollision {
            key: "title".into(),
            phase: Phase::Start,
        }
    );

    let err = temporal(
        "READING",
        TemporalConfig::new("title").stop_args(["completed", "title"]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::KeyCollision {
            key: "title".into(),
            phase: Phase::Stop,
        }
    );
}

#[test]
fn temporal_revalidates_on_every_call() {
    let reading = reading_factory();

    // A failed call leaves the factory usable.
    assert!(reading.start("Moby Dick", None).is_err());
    assert!(reading
        .start(
            "Moby Dick",
            Some(&details(&[("author", Value::String("Herman Melville".into()))])),
        )
        .is_ok());
}

// ============================================================================
// Action Shape
// ============================================================================

#[test]
fn actions_are_independent_across_builds() {
    let weight = instant("WEIGHT", &["weight"]).unwrap();
    let a = weight.build(&details(&[("weight", Value::Int(220))])).unwrap();
    let b = weight.build(&details(&[("weight", Value::Int(218))])).unwrap();

    assert_eq!(a.action_type(), b.action_type());
    assert_ne!(a.payload(), b.payload());
}

#[test]
fn action_round_trips_through_json() {
    let weight = instant("WEIGHT", &["weight"])
        .unwrap()
        .with_clock(test_clock());
    let action = weight.build(&details(&[("weight", Value::Int(220))])).unwrap();

    let json = serde_json::to_value(&action).unwrap();
    assert_eq!(json["type"], "WEIGHT");

    let back: actionlog::Action = serde_json::from_value(json).unwrap();
    assert_eq!(back, action);
}
