//! Key generation for stored objects.
//!
//! Key format: `{timestamp_ms}-{sanitized_name}`.
//!
//! Timestamps come from a monotonic generator, so two keys issued by the same
//! generator never share a timestamp even within one millisecond. Separate
//! processes writing to the same bucket can still collide when they upload the
//! same name in the same millisecond.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

const MAX_NAME_LENGTH: usize = 200;
const FALLBACK_NAME: &str = "file";

/// Replace every character outside `[A-Za-z0-9.-]` with `_`.
///
/// The result is never empty and never longer than 200 characters.
pub fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .take(MAX_NAME_LENGTH)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        sanitized
    }
}

/// Issues storage keys with strictly increasing millisecond timestamps.
#[derive(Debug, Default)]
pub struct KeyGenerator {
    last_timestamp: AtomicU64,
}

impl KeyGenerator {
    pub const fn new() -> Self {
        Self {
            last_timestamp: AtomicU64::new(0),
        }
    }

    /// Next timestamp at or after `now_ms`, always greater than the previous one.
    pub fn next_timestamp(&self, now_ms: u64) -> u64 {
        let previous = self
            .last_timestamp
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now_ms.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now_ms.max(previous + 1)
    }

    /// Key for an object named `display_name`, stamped with the current time.
    pub fn generate(&self, display_name: &str) -> String {
        let now_ms = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        self.key_at(now_ms, display_name)
    }

    pub fn key_at(&self, now_ms: u64, display_name: &str) -> String {
        format!(
            "{}-{}",
            self.next_timestamp(now_ms),
            sanitize_filename(display_name)
        )
    }
}
