use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Opaque series identifier.
///
/// Freshly allocated ids are decimal millisecond timestamps, but any string
/// read back from a saved document is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(String);

impl SeriesId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SeriesId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Time-based id source that never hands out the same value twice.
///
/// Each id is `max(now_ms, last + 1)`, so two allocations inside the same
/// millisecond (or after a clock step backwards) still differ.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    #[serde(default)]
    last: u64,
}

impl IdAllocator {
    pub fn last_issued(&self) -> u64 {
        self.last
    }

    /// Allocate an id that differs from every id previously issued and from
    /// every id in `existing`.
    pub fn allocate<'a>(&mut self, existing: impl IntoIterator<Item = &'a SeriesId>) -> SeriesId {
        let existing: Vec<&SeriesId> = existing.into_iter().collect();
        loop {
            let candidate = now_millis().max(self.last.saturating_add(1));
            self.last = candidate;
            let id = SeriesId(candidate.to_string());
            if !existing.contains(&&id) {
                return id;
            }
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
