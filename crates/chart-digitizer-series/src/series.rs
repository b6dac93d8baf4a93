use chart_digitizer_core::ImagePoint;
use serde::{Deserialize, Serialize};

use crate::SeriesId;

/// One digitized curve: a named, colored, ordered list of clicked points.
///
/// Point order is click order and is what the renderer connects into a
/// polyline; it is never re-sorted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: SeriesId,
    pub name: String,
    /// CSS-style color string, e.g. `#ff0000`.
    pub color: String,
    #[serde(default)]
    pub points: Vec<ImagePoint>,
}

impl Series {
    pub fn new(id: SeriesId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            points: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
