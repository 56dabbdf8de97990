#![allow(clippy::unwrap_used, clippy::expect_used)]

use sudoers_core::errors::SudoersError;
use sudoers_core::logging_facility::test_capture::init_test_capture;
use sudoers_core::{log_op_end, log_op_error, log_op_start};
use sudoers_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, target_path = "/etc/sudoers");

    let starts: Vec<_> = capture
        .events_for(op_name)
        .into_iter()
        .filter(|e| e.is(op_name, EVENT_START))
        .collect();

    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].target_path.as_deref(), Some("/etc/sudoers"));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42, record_count = 3);

    let ends = capture.events_for(op_name);
    assert_eq!(ends.len(), 1, "Should have exactly one end event");
    assert!(ends[0].is(op_name, EVENT_END));
    assert_eq!(ends[0].fields.get("duration_ms"), Some(&"42".to_string()));
    assert_eq!(ends[0].fields.get("record_count"), Some(&"3".to_string()));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = SudoersError::RecordNotFound {
        name: "ops".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
    let event = &capture.events_for(op_name)[0];
    assert_eq!(event.level, tracing::Level::ERROR);
    assert_eq!(event.fields.get("err.code"), Some(&"ERR_NOT_FOUND".to_string()));
    assert_eq!(event.fields.get("err.kind"), Some(&"NotFound".to_string()));
}

#[test]
fn test_component_is_module_path() {
    let capture = init_test_capture();
    let op_name = "test_component_unique_4";

    log_op_start!(op_name);

    let event = &capture.events_for(op_name)[0];
    assert_eq!(event.component.as_deref(), Some("logging_facility_tests"));
}
