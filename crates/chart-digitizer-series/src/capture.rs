use chart_digitizer_core::{AxesConfig, Axis, ImagePoint};

/// Two-click definition of an axis' reference points.
///
/// The first click is held as pending; the second one writes both points to
/// the selected axis and starts over.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisCapture {
    axis: Axis,
    pending: Option<ImagePoint>,
}

impl Default for AxisCapture {
    fn default() -> Self {
        Self::new(Axis::X)
    }
}

impl AxisCapture {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            pending: None,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn pending(&self) -> Option<ImagePoint> {
        self.pending
    }

    /// Switch axes; a half-finished pair is dropped.
    pub fn select_axis(&mut self, axis: Axis) {
        self.axis = axis;
        self.pending = None;
    }

    /// Feed one click. Returns the axis whose points were just set.
    pub fn click(&mut self, axes: &mut AxesConfig, point: ImagePoint) -> Option<Axis> {
        match self.pending.take() {
            None => {
                self.pending = Some(point);
                None
            }
            Some(first) => {
                axes.axis_mut(self.axis).set_points(first, point);
                log::debug!(
                    "{} axis reference points set: ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                    self.axis,
                    first.x,
                    first.y,
                    point.x,
                    point.y
                );
                Some(self.axis)
            }
        }
    }
}
