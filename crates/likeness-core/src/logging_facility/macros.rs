//! Canonical logging macros
//!
//! Every comparator entry point brackets its work with a start and an end
//! event carrying the same `component` / `op` / `event` keys. Comparisons
//! that produce a [`ComparisonResult`](crate::ComparisonResult) end with
//! [`log_compare_end!`], which adds the outcome fields `equal`,
//! `inequalities` and `ignored`. Field names match the `FIELD_*` constants
//! in `likeness_core_types::schema`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use likeness_core::log_op_start;
/// log_op_start!("compare");
/// log_op_start!("compare_ordered", len_one = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = likeness_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = likeness_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the end of an operation
///
/// # Example
///
/// ```
/// # use likeness_core::log_op_end;
/// log_op_end!("compare_equivalent", duration_ms = 1);
/// log_op_end!("compare_equivalent", duration_ms = 1, equal = true);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = likeness_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = likeness_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log the end of a comparison together with its outcome
///
/// Takes the operation name, the `Instant` the comparison started at and
/// a reference to its result.
///
/// # Example
///
/// ```
/// # use likeness_core::{log_compare_end, ComparisonResult};
/// let start = std::time::Instant::now();
/// let result = ComparisonResult::matching();
/// log_compare_end!("compare", start, &result);
/// ```
#[macro_export]
macro_rules! log_compare_end {
    ($op:expr, $start:expr, $result:expr) => {{
        let result: &$crate::compare::ComparisonResult = $result;
        $crate::log_op_end!(
            $op,
            duration_ms = $start.elapsed().as_millis() as u64,
            equal = result.equal,
            inequalities = result.inequalities.len(),
            ignored = result.ignored_paths.len(),
        );
    }};
}

/// Log an operation error
///
/// The error is converted to an [`ExError`](crate::errors::ExError) tagged
/// with the operation; its code, kind and offending path become fields.
///
/// # Example
///
/// ```
/// # use likeness_core::{log_op_error, errors::LikenessError};
/// let err = LikenessError::UnclosedIndex { path: "Lines[2".to_string() };
/// log_op_error!("compile_policy", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err = $crate::errors::ExError::from($err).with_op($op);
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = likeness_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            path = ex_err.path().unwrap_or_default(),
            message = %ex_err,
            $($field)*
        );
    }};
}
