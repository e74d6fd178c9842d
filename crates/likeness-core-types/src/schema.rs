//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Comparison outcome fields (end events)
pub const FIELD_EQUAL: &str = "equal";
pub const FIELD_INEQUALITIES: &str = "inequalities";
pub const FIELD_IGNORED: &str = "ignored";

// Diagnostic report line (TracingSink)
pub const FIELD_LINE: &str = "line";

// Error fields (end_error events)
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";
pub const FIELD_PATH: &str = "path";
pub const FIELD_MESSAGE: &str = "message";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_DIAGNOSTIC: &str = "diagnostic";

// Canonical operation names
pub const OP_COMPARE: &str = "compare";
pub const OP_COMPARE_ORDERED: &str = "compare_ordered";
pub const OP_COMPARE_EQUIVALENT: &str = "compare_equivalent";
pub const OP_COMPILE_POLICY: &str = "compile_policy";
