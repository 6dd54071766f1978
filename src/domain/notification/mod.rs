// SPDX-License-Identifier: MPL-2.0
//! Notification value objects.
//!
//! - [`DisplayDuration`]: how long a toast stays visible before it starts exiting

mod newtypes;

pub use newtypes::{display_duration_bounds, DisplayDuration};
