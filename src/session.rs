//! Interactive viewer state.
//!
//! A [`Session`] owns the volume, the current index of each plane and one
//! [`PlaneView`] per plane holding everything a display layer needs to draw
//! that plane. All changes go through [`Session::dispatch`], which applies
//! one [`Event`] synchronously and reports what changed in a [`StateDelta`].

use ndarray::Array2;
use tracing::{debug, trace};

use crate::crosshair::Crosshair;
use crate::display_range::{apply_clamp, compute_range, DisplayRange};
use crate::event::Event;
use crate::palette::{CrosshairColor, Palette};
use crate::plane::{Orientation, Plane, PlaneMap};
use crate::volume::{PlaneIndex, Volume};

/// Plot widths are capped at this many pixels.
const MAX_PLOT_WIDTH: usize = 405;
/// Pixels per sample when sizing a plot.
const PLOT_SCALE: f64 = 1.8;

/// Plot size and data ranges for drawing one plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureSize {
    pub plot_width: usize,
    pub plot_height: usize,
    pub x_range: (usize, usize),
    pub y_range: (usize, usize),
}

// a disabled range only happens when the slice maximum is zero
fn full_clamp(range: &DisplayRange) -> (f64, f64) {
    if range.enabled {
        (range.min, range.max)
    } else {
        (range.min, 0.0)
    }
}

/// Display state of one plane.
#[derive(Debug, Clone)]
pub struct PlaneView {
    image: Array2<f64>,
    displayed: Array2<f64>,
    range: DisplayRange,
    clamp: (f64, f64),
    crosshair: Crosshair,
}

impl PlaneView {
    fn new(volume: &Volume, plane: Plane, indices: &PlaneIndex) -> Self {
        let image = volume.wrapped_slice(plane, indices.get(plane) as isize).to_owned();
        let range = compute_range(&image);
        let crosshair = Crosshair::compute(plane, indices, image.dim());
        Self {
            displayed: image.clone(),
            clamp: full_clamp(&range),
            image,
            range,
            crosshair,
        }
    }

    /// Replaces the slice and resets the clamp to the slice's full range.
    fn load(&mut self, volume: &Volume, plane: Plane, index: usize) {
        self.image = volume.wrapped_slice(plane, index as isize).to_owned();
        self.range = compute_range(&self.image);
        self.clamp = full_clamp(&self.range);
        self.displayed = self.image.clone();
    }

    /// The unclamped slice.
    pub fn image(&self) -> &Array2<f64> {
        &self.image
    }

    /// The slice after applying the clamp range.
    pub fn displayed(&self) -> &Array2<f64> {
        &self.displayed
    }

    pub fn range(&self) -> DisplayRange {
        self.range
    }

    /// Current (low, high) clamp bounds.
    pub fn clamp(&self) -> (f64, f64) {
        self.clamp
    }

    pub fn crosshair(&self) -> &Crosshair {
        &self.crosshair
    }

    /// (height, width) of the slice.
    pub fn dim(&self) -> (usize, usize) {
        self.image.dim()
    }

    pub fn figure_size(&self) -> FigureSize {
        let (height, width) = self.dim();
        FigureSize {
            plot_width: ((width as f64 * PLOT_SCALE) as usize).min(MAX_PLOT_WIDTH),
            plot_height: (height as f64 * PLOT_SCALE) as usize,
            x_range: (0, width),
            y_range: (0, height),
        }
    }
}

/// What a dispatched event changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateDelta {
    /// Planes whose slice, range and clamp were replaced.
    pub slices: Vec<Plane>,
    /// Planes whose displayed slice was re-clamped.
    pub displayed: Vec<Plane>,
    /// Planes whose crosshair lines were recomputed.
    pub crosshairs: Vec<Plane>,
    /// Palette, crosshair color or a visibility flag changed.
    pub style: bool,
}

impl StateDelta {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
            && self.displayed.is_empty()
            && self.crosshairs.is_empty()
            && !self.style
    }
}

fn mark(planes: &mut Vec<Plane>, plane: Plane) {
    if !planes.contains(&plane) {
        planes.push(plane);
    }
}

/// The state of one viewer over one volume.
#[derive(Debug, Clone)]
pub struct Session {
    volume: Volume,
    indices: PlaneIndex,
    views: PlaneMap<PlaneView>,
    palette: Palette,
    crosshair_color: CrosshairColor,
    crosshair_visible: bool,
    axes_visible: bool,
    index_controls_visible: bool,
    range_controls_visible: bool,
}

impl Session {
    /// Opens every plane at index 0 with the default palette and color,
    /// crosshairs shown and axes hidden.
    pub fn new(volume: Volume) -> Self {
        let indices = PlaneIndex::default();
        let views = PlaneMap::from_fn(|plane| PlaneView::new(&volume, plane, &indices));
        debug!(shape = ?volume.shape(), "opened session");
        Self {
            volume,
            indices,
            views,
            palette: Palette::default(),
            crosshair_color: CrosshairColor::default(),
            crosshair_visible: true,
            axes_visible: false,
            index_controls_visible: false,
            range_controls_visible: false,
        }
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    pub fn indices(&self) -> &PlaneIndex {
        &self.indices
    }

    pub fn index(&self, plane: Plane) -> usize {
        self.indices.get(plane)
    }

    pub fn view(&self, plane: Plane) -> &PlaneView {
        &self.views[plane]
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn crosshair_color(&self) -> CrosshairColor {
        self.crosshair_color
    }

    pub fn crosshair_visible(&self) -> bool {
        self.crosshair_visible
    }

    pub fn axes_visible(&self) -> bool {
        self.axes_visible
    }

    pub fn index_controls_visible(&self) -> bool {
        self.index_controls_visible
    }

    pub fn range_controls_visible(&self) -> bool {
        self.range_controls_visible
    }

    /// Applies one event and reports what changed.
    pub fn dispatch(&mut self, event: Event) -> StateDelta {
        debug!(?event, "dispatch");
        let mut delta = StateDelta::default();
        match event {
            Event::SetIndex { plane, index } => self.set_index(plane, index, &mut delta),
            Event::Scroll { plane, delta: wheel } => {
                let current = self.indices.get(plane) as isize;
                if wheel > 0.0 {
                    self.set_index(plane, current + 1, &mut delta);
                } else if wheel < 0.0 {
                    self.set_index(plane, current - 1, &mut delta);
                }
            }
            Event::Tap { plane, x, y } => {
                let x_plane = plane.crosshair_driver(Orientation::Vertical);
                let y_plane = plane.crosshair_driver(Orientation::Horizontal);
                self.set_index(x_plane, x.trunc() as isize, &mut delta);
                self.set_index(y_plane, y.trunc() as isize, &mut delta);
            }
            Event::SetClampRange { plane, low, high } => {
                let view = &mut self.views[plane];
                if !view.range.enabled {
                    debug!(%plane, "range disabled, clamp ignored");
                    return delta;
                }
                view.clamp = (low, high);
                view.displayed = apply_clamp(&view.image, low, high);
                mark(&mut delta.displayed, plane);
            }
            Event::SelectPalette(palette) => {
                self.palette = palette;
                delta.style = true;
            }
            Event::SelectCrosshairColor(color) => {
                self.crosshair_color = color;
                delta.style = true;
            }
            Event::SetCrosshairVisible(visible) => {
                self.crosshair_visible = visible;
                delta.style = true;
            }
            Event::SetAxesVisible(visible) => {
                self.axes_visible = visible;
                delta.style = true;
            }
            Event::SetIndexControlsVisible(visible) => {
                self.index_controls_visible = visible;
                delta.style = true;
            }
            Event::SetRangeControlsVisible(visible) => {
                self.range_controls_visible = visible;
                delta.style = true;
            }
        }
        delta
    }

    /// Recomputes a plane's own crosshair from the current indices.
    pub fn refresh_crosshair(&mut self, plane: Plane) {
        let view = &mut self.views[plane];
        view.crosshair = Crosshair::compute(plane, &self.indices, view.dim());
    }

    // A plane's index drives one crosshair line on each of the other two
    // planes, so only those are refreshed.
    fn set_index(&mut self, plane: Plane, requested: isize, delta: &mut StateDelta) {
        let index = self.indices.set(&self.volume, plane, requested);
        self.views[plane].load(&self.volume, plane, index);
        trace!(%plane, requested, index, "slice loaded");
        mark(&mut delta.slices, plane);
        for other in Plane::ALL.into_iter().filter(|&p| p != plane) {
            self.refresh_crosshair(other);
            mark(&mut delta.crosshairs, other);
        }
    }
}
