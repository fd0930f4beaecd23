//! Search options loaded from configuration.

#![cfg(feature = "serde")]

use standout_search::{SearchFlags, SearchMode, SearchOptions};

#[test]
fn options_round_trip_through_json() {
    let options = SearchOptions::new().all().ignore_case(true);
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(json, r#"{"mode":"all","ignore_case":true}"#);
    assert_eq!(serde_json::from_str::<SearchOptions>(&json).unwrap(), options);
}

#[test]
fn missing_keys_use_defaults() {
    let options: SearchOptions = serde_json::from_str(r#"{"ignore_case":true}"#).unwrap();
    assert_eq!(options.mode, SearchMode::Strict);
    assert!(options.ignore_case);

    let options: SearchOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, SearchOptions::default());
}

#[test]
fn unknown_mode_is_rejected() {
    assert!(serde_json::from_str::<SearchOptions>(r#"{"mode":"fuzzy"}"#).is_err());
}

#[test]
fn flags_serialize_as_bits() {
    let flags = SearchFlags::LAX_MODE | SearchFlags::IGNORE_CASE;
    assert_eq!(serde_json::to_string(&flags).unwrap(), "3");
    let options = SearchOptions::from(serde_json::from_str::<SearchFlags>("1").unwrap());
    assert_eq!(options, SearchOptions::new().all());
}
