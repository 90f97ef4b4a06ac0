//! Time and identifier helpers.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Current time as Unix milliseconds.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Generator for unique, monotonically increasing string identifiers.
///
/// Ids are millisecond timestamps, bumped past the previous value when
/// two are requested within the same millisecond. Each store owns its
/// own source; there is no process-wide singleton.
#[derive(Debug, Default)]
pub struct IdSource {
    last: AtomicI64,
}

impl IdSource {
    /// Create a new source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next identifier.
    pub fn next_id(&self) -> String {
        let now = now_millis();
        let id = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .map(|last| now.max(last + 1))
            .unwrap_or(now);
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let ids = IdSource::new();
        let mut seen = Vec::new();
        for _ in 0..100 {
            seen.push(ids.next_id());
        }
        let parsed: Vec<i64> = seen.iter().map(|s| s.parse().unwrap()).collect();
        for pair in parsed.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn now_millis_is_recent() {
        // Anything after 2020 counts as sane.
        assert!(now_millis() > 1_577_836_800_000);
    }
}
