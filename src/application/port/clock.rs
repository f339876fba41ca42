// SPDX-License-Identifier: MPL-2.0
//! Wall-clock port used for generating upload ids.

/// Source of epoch milliseconds.
///
/// Uploaded subtitle ids embed the admission time, so the ingestor reads
/// time through this trait rather than calling the system clock directly.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}
