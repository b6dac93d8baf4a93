//! Ordered collection of series with an "active" selection.
//!
//! Every mutation is total: operations on ids or indices that do not exist
//! leave the store untouched and report the miss through their return value.

use std::collections::HashSet;

use chart_digitizer_core::ImagePoint;
use serde::{Deserialize, Serialize};

use crate::{IdAllocator, Series, SeriesId};

/// A persisted store that breaks the store's invariants.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("series id {0} is used by more than one series")]
    DuplicateId(SeriesId),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredSeries")]
pub struct SeriesStore {
    series: Vec<Series>,
    active_series_id: Option<SeriesId>,
    ids: IdAllocator,
}

/// Unchecked on-disk shape of [`SeriesStore`].
#[derive(Deserialize)]
struct StoredSeries {
    #[serde(default)]
    series: Vec<Series>,
    #[serde(default)]
    active_series_id: Option<SeriesId>,
    #[serde(default)]
    ids: IdAllocator,
}

impl TryFrom<StoredSeries> for SeriesStore {
    type Error = StoreError;

    fn try_from(raw: StoredSeries) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(raw.series.len());
        if let Some(dup) = raw.series.iter().find(|s| !seen.insert(&s.id)) {
            return Err(StoreError::DuplicateId(dup.id.clone()));
        }
        Ok(Self {
            series: raw.series,
            active_series_id: raw.active_series_id,
            ids: raw.ids,
        })
    }
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn get(&self, id: &SeriesId) -> Option<&Series> {
        self.series.iter().find(|s| &s.id == id)
    }

    fn get_mut(&mut self, id: &SeriesId) -> Option<&mut Series> {
        self.series.iter_mut().find(|s| &s.id == id)
    }

    /// First series whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    pub fn active_series_id(&self) -> Option<&SeriesId> {
        self.active_series_id.as_ref()
    }

    /// The active series, if the active id still names one.
    pub fn active_series(&self) -> Option<&Series> {
        self.active_series_id.as_ref().and_then(|id| self.get(id))
    }

    /// Append an empty series and make it active.
    pub fn add_series(&mut self, name: impl Into<String>, color: impl Into<String>) -> SeriesId {
        let id = self.ids.allocate(self.series.iter().map(|s| &s.id));
        let series = Series::new(id.clone(), name, color);
        log::debug!("add series {} ({:?})", id, series.name);
        self.series.push(series);
        self.active_series_id = Some(id.clone());
        id
    }

    /// Remove a series. Clears the active selection if it pointed at it.
    pub fn delete_series(&mut self, id: &SeriesId) -> Option<Series> {
        let pos = self.series.iter().position(|s| &s.id == id)?;
        let removed = self.series.remove(pos);
        if self.active_series_id.as_ref() == Some(id) {
            self.active_series_id = None;
        }
        log::debug!("delete series {} ({} points)", id, removed.len());
        Some(removed)
    }

    /// Select the series new points go to. The id is not checked here; point
    /// insertion is a no-op while it names no series.
    pub fn set_active_series_id(&mut self, id: Option<SeriesId>) {
        self.active_series_id = id;
    }

    /// Append a point to the active series, returning its index.
    pub fn add_point_to_active_series(&mut self, point: ImagePoint) -> Option<usize> {
        let id = self.active_series_id.clone()?;
        let series = self.get_mut(&id)?;
        series.points.push(point);
        Some(series.points.len() - 1)
    }

    /// Drop all points of a series, keeping the series. Returns how many were
    /// removed, or `None` if the id is unknown.
    pub fn clear_points_from_series(&mut self, id: &SeriesId) -> Option<usize> {
        let series = self.get_mut(id)?;
        let n = series.points.len();
        series.points.clear();
        Some(n)
    }

    /// Remove the point at `index`; later points shift down by one.
    pub fn delete_point(&mut self, id: &SeriesId, index: usize) -> Option<ImagePoint> {
        let series = self.get_mut(id)?;
        if index >= series.points.len() {
            return None;
        }
        Some(series.points.remove(index))
    }

    /// Rename or recolor an existing series.
    pub fn update_series(
        &mut self,
        id: &SeriesId,
        name: Option<String>,
        color: Option<String>,
    ) -> bool {
        let Some(series) = self.get_mut(id) else {
            return false;
        };
        if let Some(name) = name {
            series.name = name;
        }
        if let Some(color) = color {
            series.color = color;
        }
        true
    }
}
