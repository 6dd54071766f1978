// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: toast display duration and exit animation window
//! - **Upload**: endpoint, form field, error reset delay, request timeout
//! - **Diagnostics**: event buffer capacity

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time a toast stays visible (in milliseconds).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3000;

/// Default length of the toast exit animation (in milliseconds).
pub const DEFAULT_EXIT_ANIMATION_MS: u64 = 300;

/// Maximum exit animation window (in milliseconds).
pub const MAX_EXIT_ANIMATION_MS: u64 = 2000;

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Default decoding endpoint.
pub const DEFAULT_UPLOAD_ENDPOINT: &str = "http://localhost:8000/decode";

/// Multipart field carrying the transcoded file.
pub const DEFAULT_UPLOAD_FIELD_NAME: &str = "audio";

/// Delay before the widget clears a failed selection (in milliseconds).
pub const DEFAULT_RESET_DELAY_MS: u64 = 4000;

/// Default upload request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Minimum upload request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum upload request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 3600;

// ==========================================================================
// Drop Handling
// ==========================================================================

/// Window during which consecutive file drop events count as one drop (in milliseconds).
pub const DROP_BATCH_WINDOW_MS: u64 = 50;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default diagnostics buffer capacity (number of events).
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_NOTIFICATION_DURATION_MS > 0);
    assert!(DEFAULT_EXIT_ANIMATION_MS <= MAX_EXIT_ANIMATION_MS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
};
