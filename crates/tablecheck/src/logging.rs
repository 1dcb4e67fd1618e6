//! Internal logging helpers for structured tablecheck events.

/// Single logging target for tablecheck.
pub(crate) const LOG_TARGET: &str = "tablecheck";

/// Emits `event=<name> <message>` on the crate target when the level is enabled.
macro_rules! check_log {
    ($level:expr, $event:expr, $fmt:expr $(, $args:expr)* $(,)?) => {{
        if log::log_enabled!(target: crate::logging::LOG_TARGET, $level) {
            log::log!(
                target: crate::logging::LOG_TARGET,
                $level,
                "event={} {}",
                $event,
                format_args!($fmt $(, $args)*)
            );
        }
    }};
}

pub(crate) use check_log;
