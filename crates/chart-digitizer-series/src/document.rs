use chart_digitizer_core::{AxesConfig, Size};
use serde::{Deserialize, Serialize};

use crate::SeriesStore;

/// What the core needs to know about the loaded chart bitmap.
///
/// Pixels themselves stay with the image provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Where the bitmap came from (path or URL), informational only.
    #[serde(default)]
    pub source: Option<String>,
}

impl ImageInfo {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }
}

/// Root aggregate for one open chart: image, axis calibration and series.
///
/// Views borrow only the part they work on: [`axes`](Self::axes) /
/// [`axes_mut`](Self::axes_mut) for calibration, [`series`](Self::series) /
/// [`series_mut`](Self::series_mut) for digitizing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DigitizationDocument {
    #[serde(default)]
    image: Option<ImageInfo>,
    #[serde(default)]
    axes: AxesConfig,
    #[serde(default)]
    series: SeriesStore,
}

impl DigitizationDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(image: ImageInfo) -> Self {
        Self {
            image: Some(image),
            ..Self::default()
        }
    }

    /// Replace the chart image. Axes and series start over from empty.
    pub fn import_image(&mut self, image: ImageInfo) {
        log::debug!(
            "import image {}x{} (discarding {} series)",
            image.width,
            image.height,
            self.series.len()
        );
        *self = Self::with_image(image);
    }

    pub fn image(&self) -> Option<&ImageInfo> {
        self.image.as_ref()
    }

    pub fn axes(&self) -> &AxesConfig {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut AxesConfig {
        &mut self.axes
    }

    pub fn series(&self) -> &SeriesStore {
        &self.series
    }

    pub fn series_mut(&mut self) -> &mut SeriesStore {
        &mut self.series
    }
}
