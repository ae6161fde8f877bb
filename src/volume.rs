use ndarray::prelude::*;
use ndarray::Array3;

use crate::error::VolumeError;
use crate::plane::{Plane, PlaneMap};

/// The read-only 3D sample array a session browses.
#[derive(Debug, Clone)]
pub struct Volume {
    data: Array3<f64>,
}

impl Volume {
    /// Wraps a 3D array, rejecting arrays with an empty axis.
    pub fn new(data: Array3<f64>) -> Result<Self, VolumeError> {
        if let Some(axis) = data.shape().iter().position(|&len| len == 0) {
            return Err(VolumeError::EmptyAxis { axis });
        }
        Ok(Self { data })
    }

    pub fn data(&self) -> &Array3<f64> {
        &self.data
    }

    pub fn shape(&self) -> [usize; 3] {
        let (a0, a1, a2) = self.data.dim();
        [a0, a1, a2]
    }

    /// Number of slices available in the given plane.
    pub fn axis_size(&self, plane: Plane) -> usize {
        self.data.len_of(Axis(plane.to_usize()))
    }

    /// Wraps a requested index onto the plane's axis.
    ///
    /// Indices past the end jump to the first slice and negative indices
    /// jump to the last one, so stepping off either end of the stack cycles
    /// around to the opposite end. Anything in range passes through.
    pub fn fix_index(&self, plane: Plane, index: isize) -> usize {
        let axis_size = self.axis_size(plane);
        if index < 0 {
            axis_size - 1
        } else if index as usize >= axis_size {
            0
        } else {
            index as usize
        }
    }

    /// Borrowed 2D slice of the volume in display orientation.
    pub fn slice_view(
        &self,
        plane: Plane,
        index: usize,
    ) -> Result<ArrayView2<'_, f64>, VolumeError> {
        let len = self.axis_size(plane);
        if index >= len {
            return Err(VolumeError::IndexOutOfRange { plane, index, len });
        }
        Ok(self.oriented(plane, index))
    }

    /// Slice at a requested index after wrapping it with [`Volume::fix_index`].
    pub fn wrapped_slice(&self, plane: Plane, requested: isize) -> ArrayView2<'_, f64> {
        self.oriented(plane, self.fix_index(plane, requested))
    }

    // index must already be within the plane's axis
    fn oriented(&self, plane: Plane, index: usize) -> ArrayView2<'_, f64> {
        let view = self.data.index_axis(Axis(plane.to_usize()), index);
        if plane.is_transposed() {
            view.reversed_axes()
        } else {
            view
        }
    }

    /// Owned 2D slice of the volume in display orientation.
    pub fn slice(&self, plane: Plane, index: usize) -> Result<Array2<f64>, VolumeError> {
        Ok(self.slice_view(plane, index)?.to_owned())
    }

    /// Shape (height, width) of every slice taken in the given plane.
    pub fn slice_dim(&self, plane: Plane) -> (usize, usize) {
        let [a0, a1, a2] = self.shape();
        match plane {
            Plane::Transverse => (a1, a2),
            Plane::Sagittal => (a2, a0),
            Plane::Coronal => (a1, a0),
        }
    }
}

/// The current slice index of each plane.
///
/// Writes go through [`Volume::fix_index`], so every stored index is valid
/// for the volume it was set against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaneIndex(PlaneMap<usize>);

impl PlaneIndex {
    pub fn get(&self, plane: Plane) -> usize {
        self.0[plane]
    }

    /// Stores the wrapped index and returns it.
    pub fn set(&mut self, volume: &Volume, plane: Plane, requested: isize) -> usize {
        let index = volume.fix_index(plane, requested);
        self.0[plane] = index;
        index
    }

    pub fn iter(&self) -> impl Iterator<Item = (Plane, usize)> + '_ {
        self.0.iter().map(|(plane, &index)| (plane, index))
    }
}
