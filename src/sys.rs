//! Host system clock access.
//!
//! This implementation is backed by [`web_time::SystemTime`], which resolves
//! to `std::time::SystemTime` outside of wasm targets.

use core::time::Duration;
use web_time::{SystemTime, UNIX_EPOCH};

/// Returns the system time in milliseconds since the Unix epoch.
pub(crate) fn get_system_milliseconds() -> i64 {
    system_time_to_milliseconds(SystemTime::now())
}

/// Converts a platform instant into epoch milliseconds. Instants before the
/// epoch map to negative values.
pub(crate) fn system_time_to_milliseconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(duration) => duration.as_millis() as i64,
        Err(before_epoch) => -(before_epoch.duration().as_millis() as i64),
    }
}

/// Converts epoch milliseconds back into a platform instant, saturating at
/// the platform's representable bounds.
pub(crate) fn milliseconds_to_system_time(epoch_ms: i64) -> SystemTime {
    if epoch_ms >= 0 {
        UNIX_EPOCH
            .checked_add(Duration::from_millis(epoch_ms as u64))
            .unwrap_or(UNIX_EPOCH)
    } else {
        UNIX_EPOCH
            .checked_sub(Duration::from_millis(epoch_ms.unsigned_abs()))
            .unwrap_or(UNIX_EPOCH)
    }
}
