// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Backend**: Analysis service location
//! - **Notifications**: Toast lifetimes and stacking
//! - **Loading**: Spinner animation

use std::time::Duration;

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Base URL of the analysis service when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Whether the service health endpoint is probed at startup.
pub const DEFAULT_HEALTH_CHECK: bool = true;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Whether failures are also shown in an inline banner above the results.
pub const DEFAULT_ERROR_BANNER: bool = false;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of toasts visible at once.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

/// Lifetime of success and info toasts.
pub const SHORT_NOTIFICATION_SECS: u64 = 3;

/// Lifetime of warning and error toasts.
pub const LONG_NOTIFICATION_SECS: u64 = 5;

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Interval of the UI tick driving the spinner and toast expiry.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Spinner rotation per tick, in radians.
pub const SPINNER_STEP_RADIANS: f32 = 0.35;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_VISIBLE_NOTIFICATIONS > 0);
    assert!(SHORT_NOTIFICATION_SECS > 0);
    assert!(LONG_NOTIFICATION_SECS >= SHORT_NOTIFICATION_SECS);
    assert!(SPINNER_STEP_RADIANS > 0.0);
    assert!(SPINNER_STEP_RADIANS < std::f32::consts::PI);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_default_is_local_service() {
        assert_eq!(DEFAULT_BACKEND_URL, "http://localhost:8000");
        assert!(DEFAULT_HEALTH_CHECK);
    }

    #[test]
    fn error_banner_is_off_by_default() {
        assert!(!DEFAULT_ERROR_BANNER);
    }

    #[test]
    fn tick_is_fast_enough_for_toast_expiry() {
        assert!(TICK_INTERVAL < Duration::from_secs(SHORT_NOTIFICATION_SECS));
    }
}
