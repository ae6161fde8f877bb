use ndarray::{Array2, Array3, Array4};
use nifti::writer::WriterOptions;
use nifti::{IntoNdArray, NiftiObject, ReaderOptions};
use orthonii::io::{export_frame, load_series, load_volume};
use orthonii::{Event, LoadError, Plane, Session};
use std::path::Path;
use tempfile::tempdir;

fn ramp(shape: (usize, usize, usize)) -> Array3<f64> {
    Array3::from_shape_fn(shape, |(i, j, k)| (i * 100 + j * 10 + k) as f64)
}

fn write(path: &Path, data: &ndarray::ArrayD<f64>) {
    WriterOptions::new(path).write_nifti(data).unwrap();
}

#[test]
fn loads_a_3d_volume() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("volume.nii");
    write(&path, &ramp((3, 4, 5)).into_dyn());

    let loaded = load_volume(&path, 0).unwrap();
    assert_eq!(loaded.volume.shape(), [3, 4, 5]);
    assert_eq!(loaded.volume.data()[[2, 3, 4]], 234.0);
}

#[test]
fn picks_a_timepoint_from_4d_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("series.nii");
    let data = Array4::from_shape_fn((3, 4, 5, 2), |(i, j, k, t)| {
        (t * 1000 + i * 100 + j * 10 + k) as f64
    });
    write(&path, &data.into_dyn());

    let loaded = load_volume(&path, 1).unwrap();
    assert_eq!(loaded.volume.shape(), [3, 4, 5]);
    assert_eq!(loaded.volume.data()[[1, 2, 3]], 1123.0);

    assert!(matches!(
        load_volume(&path, 2),
        Err(LoadError::Timepoint { timepoint: 2, len: 2 })
    ));
}

#[test]
fn stacks_a_series_of_slices_in_numeric_order() {
    let dir = tempdir().unwrap();
    for n in [1usize, 2, 10] {
        let slice = Array2::from_elem((4, 5), n as f64);
        write(&dir.path().join(format!("slice-{n}.nii")), &slice.into_dyn());
    }

    let pattern = format!("{}/slice-*.nii", dir.path().display());
    let loaded = load_series(&pattern).unwrap();
    assert_eq!(loaded.volume.shape(), [3, 4, 5]);
    assert_eq!(loaded.volume.data()[[0, 0, 0]], 1.0);
    assert_eq!(loaded.volume.data()[[1, 0, 0]], 2.0);
    assert_eq!(loaded.volume.data()[[2, 0, 0]], 10.0);
}

#[test]
fn rejects_mismatched_slices() {
    let dir = tempdir().unwrap();
    write(
        &dir.path().join("slice-1.nii"),
        &Array2::<f64>::zeros((4, 5)).into_dyn(),
    );
    write(
        &dir.path().join("slice-2.nii"),
        &Array2::<f64>::zeros((5, 4)).into_dyn(),
    );
    let pattern = format!("{}/slice-*.nii", dir.path().display());
    assert!(matches!(
        load_series(&pattern),
        Err(LoadError::SliceShape { .. })
    ));
}

#[test]
fn empty_pattern_is_an_error() {
    let dir = tempdir().unwrap();
    let pattern = format!("{}/nothing-*.nii", dir.path().display());
    assert!(matches!(load_series(&pattern), Err(LoadError::NoMatches(_))));
}

#[test]
fn exports_the_displayed_slices() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("volume.nii");
    write(&path, &ramp((3, 4, 5)).into_dyn());
    let loaded = load_volume(&path, 0).unwrap();

    let mut session = Session::new(loaded.volume);
    session.dispatch(Event::SetIndex {
        plane: Plane::Transverse,
        index: 2,
    });
    session.dispatch(Event::SetClampRange {
        plane: Plane::Transverse,
        low: 215.0,
        high: 230.0,
    });

    let out = dir.path().join("frame");
    let written = export_frame(&session, &loaded.header, &out, "volume").unwrap();
    assert_eq!(written.len(), 3);
    assert_eq!(written[0], out.join("volume_transverse-003.nii"));
    assert_eq!(written[1], out.join("volume_sagittal-001.nii"));
    assert_eq!(written[2], out.join("volume_coronal-001.nii"));

    let expected_dims = [vec![4, 5], vec![3, 5], vec![3, 4]];
    for (path, expected) in written.iter().zip(expected_dims) {
        let obj = ReaderOptions::new().read_file(path).unwrap();
        let img = obj.into_volume().into_ndarray::<f64>().unwrap();
        let dims: Vec<usize> = img.shape().iter().copied().filter(|&d| d != 1).collect();
        assert_eq!(dims, expected, "{}", path.display());
    }

    let obj = ReaderOptions::new().read_file(&written[0]).unwrap();
    let img = obj.into_volume().into_ndarray::<f64>().unwrap();
    let displayed = session.view(Plane::Transverse).displayed();
    assert!(img.iter().eq(displayed.iter()));
    assert!(img.iter().all(|&v| (215.0..=230.0).contains(&v)));
}
