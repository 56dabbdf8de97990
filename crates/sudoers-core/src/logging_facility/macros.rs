//! Canonical logging macros
//!
//! Lifecycle events for target file operations. Every event carries
//! `component`, `op` and `event`; extra fields use the names in
//! `sudoers_core_types::schema` (`target_path`, `record_count`, `changed`,
//! `digest`).

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use sudoers_core::log_op_start;
/// let path = std::path::Path::new("/etc/sudoers");
/// log_op_start!("read_target", target_path = %path.display());
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::sudoers_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::sudoers_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use sudoers_core::log_op_end;
/// log_op_end!("read_target", duration_ms = 3, record_count = 42_usize);
/// log_op_end!("write_target", duration_ms = 5, changed = false, digest = "e3b0c442");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::sudoers_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::sudoers_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `ExError`, including `SudoersError`.
///
/// # Example
///
/// ```
/// # use sudoers_core::{log_op_error, errors::SudoersError};
/// let err = SudoersError::MalformedLine { line_no: Some(7), line: "Defaults".to_string() };
/// log_op_error!("read_target", err, duration_ms = 1, target_path = "/etc/sudoers");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::sudoers_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::sudoers_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($field)*
        );
    }};
}
