//! Reading volumes from nifti files and writing the displayed slices back out.

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use nalgebra::Vector4;
use ndarray::prelude::*;
use ndarray::{ArrayD, Ix3};
use nifti::writer::WriterOptions;
use nifti::{IntoNdArray, NiftiHeader, NiftiObject, ReaderOptions};
use tracing::{debug, info};

use crate::error::LoadError;
use crate::plane::Plane;
use crate::session::Session;
use crate::volume::Volume;

/// A volume together with the header it was read with.
#[derive(Debug)]
pub struct LoadedVolume {
    pub volume: Volume,
    pub header: NiftiHeader,
}

/// Loads a 3D nifti file, or one timepoint of a 4D file.
pub fn load_volume(path: &Path, timepoint: usize) -> Result<LoadedVolume, LoadError> {
    let obj = ReaderOptions::new().read_file(path)?;
    let header = obj.header().clone();
    let img = obj.into_volume().into_ndarray::<f64>()?;
    debug!(path = %path.display(), shape = ?img.shape(), "read nifti");
    let img = match img.ndim() {
        3 => img.into_dimensionality::<Ix3>()?,
        4 => {
            let len = img.shape()[3];
            if timepoint >= len {
                return Err(LoadError::Timepoint { timepoint, len });
            }
            info!("4D image detected, viewing volume {} of {}", timepoint, len);
            img.index_axis_move(Axis(3), timepoint)
                .into_dimensionality::<Ix3>()?
        }
        n => return Err(LoadError::Dimensions(n)),
    };
    Ok(LoadedVolume {
        volume: Volume::new(img)?,
        header,
    })
}

/// Loads a series of 2D slice files matching a glob pattern and stacks them
/// along the transverse axis, ordered by the number in each file name.
pub fn load_series(pattern: &str) -> Result<LoadedVolume, LoadError> {
    let mut paths: Vec<PathBuf> = glob(pattern)?.filter_map(Result::ok).collect();
    if paths.is_empty() {
        return Err(LoadError::NoMatches(pattern.to_string()));
    }
    paths.sort_by_key(|path| extract_number_from_filename(path));

    let mut header = None;
    let mut slices: Vec<Array2<f64>> = Vec::with_capacity(paths.len());
    for path in &paths {
        debug!(path = %path.display(), "loading slice");
        let obj = ReaderOptions::new().read_file(path)?;
        if header.is_none() {
            header = Some(obj.header().clone());
        }
        let img = obj.into_volume().into_ndarray::<f64>()?;
        let slice = into_slice(img, path)?;
        if let Some(first) = slices.first() {
            if first.shape() != slice.shape() {
                return Err(LoadError::SliceShape {
                    path: path.display().to_string(),
                    found: slice.shape().to_vec(),
                    expected: first.shape().to_vec(),
                });
            }
        }
        slices.push(slice);
    }

    let views: Vec<ArrayView2<f64>> = slices.iter().map(|s| s.view()).collect();
    let stacked = ndarray::stack(Axis(Plane::Transverse.to_usize()), &views)?;
    info!("Stacked {} slices into shape {:?}", slices.len(), stacked.shape());
    Ok(LoadedVolume {
        volume: Volume::new(stacked)?,
        header: header.unwrap_or_default(),
    })
}

// drops singleton axes until the image is 2D
fn into_slice(mut img: ArrayD<f64>, path: &Path) -> Result<Array2<f64>, LoadError> {
    while img.ndim() > 2 {
        match img.shape().iter().position(|&len| len == 1) {
            Some(axis) => img = img.index_axis_move(Axis(axis), 0),
            None => break,
        }
    }
    img.into_dimensionality::<Ix2>()
        .map_err(|_| LoadError::NotASlice(path.display().to_string()))
}

fn extract_number_from_filename(path: &Path) -> u128 {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let number_str: String = filename.chars().filter(|c| c.is_ascii_digit()).collect();
    number_str.parse::<u128>().unwrap_or(0)
}

/// Writes each plane's displayed slice as its own nifti file.
///
/// Slices are written in volume orientation with the sliced axis kept as a
/// singleton, and the affine is translated so the slice sits at its
/// position in the original volume. Files are named
/// `<basename>_<plane>-<index>.nii` with a 1-based index.
pub fn export_frame(
    session: &Session,
    header: &NiftiHeader,
    output_dir: &Path,
    basename: &str,
) -> Result<Vec<PathBuf>, LoadError> {
    fs::create_dir_all(output_dir)?;
    let affine = header.affine::<f64>();

    let mut written = Vec::with_capacity(Plane::ALL.len());
    for plane in Plane::ALL {
        let index = session.index(plane);
        let displayed = session.view(plane).displayed();
        let raw = if plane.is_transposed() {
            displayed.t()
        } else {
            displayed.view()
        };
        let slab = raw.insert_axis(Axis(plane.to_usize())).to_owned();

        // world position of the slice's first voxel
        let mut voxel = Vector4::new(0.0, 0.0, 0.0, 1.0);
        voxel[plane.to_usize()] = index as f64;
        let origin = affine * voxel;
        let mut slice_affine = affine;
        for i in 0..3 {
            slice_affine[(i, 3)] = origin[i];
        }
        let mut slice_header = header.clone();
        slice_header.set_affine(&slice_affine);

        let save_index = format!("{:03}", index + 1);
        let output_path = output_dir.join(format!("{basename}_{plane}-{save_index}.nii"));
        info!("Output: {}", output_path.display());
        WriterOptions::new(&output_path)
            .reference_header(&slice_header)
            .write_nifti(&slab)?;
        written.push(output_path);
    }
    Ok(written)
}
