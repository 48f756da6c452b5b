use std::time::Duration;

use tracing::{info, warn};

/// Log the outcome of a user action with structured fields.
///
/// `action` is a stable identifier such as `"search"` or `"favorites::add"`.
/// `session` should be the shortened session id, never the full cookie value.
#[inline]
pub fn log_action(action: &str, session: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(action, session, duration_ms, success, "action_completed");
    } else {
        warn!(action, session, duration_ms, success, "action_failed");
    }
}
