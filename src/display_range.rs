use ndarray::{Array2, ArrayBase, Data, Ix2};

/// Bounds offered for clamping a displayed slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRange {
    pub min: f64,
    pub max: f64,
    /// False when the slice maximum is exactly zero; range control is then
    /// meaningless and `max` is reported as 1.
    pub enabled: bool,
}

impl DisplayRange {
    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

/// Minimum and maximum sample of a slice, with the degenerate-range flag.
pub fn compute_range<S>(slice: &ArrayBase<S, Ix2>) -> DisplayRange
where
    S: Data<Elem = f64>,
{
    let (min, max) = slice
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    // empty, or nothing but NaN and infinities
    if min > max {
        return DisplayRange {
            min: 0.0,
            max: 1.0,
            enabled: false,
        };
    }
    if max != 0.0 {
        DisplayRange {
            min,
            max,
            enabled: true,
        }
    } else {
        DisplayRange {
            min,
            max: 1.0,
            enabled: false,
        }
    }
}

/// Copy of `slice` saturated to `[low, high]`, both ends inclusive.
///
/// Samples at or above `high` become `high`, then samples at or below `low`
/// become `low`.
pub fn apply_clamp<S>(slice: &ArrayBase<S, Ix2>, low: f64, high: f64) -> Array2<f64>
where
    S: Data<Elem = f64>,
{
    slice.mapv(|v| {
        let v = if v >= high { high } else { v };
        if v <= low {
            low
        } else {
            v
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn range_reports_slice_extremes() {
        let slice = array![[-5.0, 3.0], [100.0, 42.0]];
        let range = compute_range(&slice);
        assert_eq!(range.bounds(), (-5.0, 100.0));
        assert!(range.enabled);
    }

    #[test]
    fn all_zero_slice_disables_range() {
        let slice = Array2::<f64>::zeros((4, 3));
        let range = compute_range(&slice);
        assert_eq!(range.min, 0.0);
        assert_eq!(range.max, 1.0);
        assert!(!range.enabled);
    }

    #[test]
    fn negative_slice_with_zero_max_is_disabled() {
        let slice = array![[-3.0, 0.0], [-1.0, -2.0]];
        let range = compute_range(&slice);
        assert_eq!(range.bounds(), (-3.0, 1.0));
        assert!(!range.enabled);
    }

    #[test]
    fn empty_slice_is_degenerate() {
        let slice = Array2::<f64>::zeros((0, 7));
        assert!(!compute_range(&slice).enabled);
    }

    #[test]
    fn non_finite_samples_are_skipped() {
        let slice = array![[f64::NAN, 4.0], [-2.0, f64::INFINITY]];
        let range = compute_range(&slice);
        assert_eq!(range.bounds(), (-2.0, 4.0));
        assert!(range.enabled);

        let masked = Array2::from_elem((3, 3), f64::NAN);
        assert_eq!(
            compute_range(&masked),
            DisplayRange {
                min: 0.0,
                max: 1.0,
                enabled: false,
            }
        );
    }

    #[test]
    fn clamp_saturates_inclusively() {
        let slice = array![[-5.0, 0.0, 25.0], [50.0, 75.0, 100.0]];
        let clamped = apply_clamp(&slice, 0.0, 50.0);
        assert_eq!(clamped, array![[0.0, 0.0, 25.0], [50.0, 50.0, 50.0]]);
        assert_eq!(compute_range(&clamped).bounds(), (0.0, 50.0));
        assert!(compute_range(&clamped).enabled);
    }

    #[test]
    fn clamp_leaves_input_untouched() {
        let slice = array![[-5.0, 100.0]];
        let _ = apply_clamp(&slice, 0.0, 50.0);
        assert_eq!(slice, array![[-5.0, 100.0]]);
    }

    #[test]
    fn clamp_is_idempotent() {
        let slice = Array2::from_shape_fn((6, 9), |(i, j)| (i as f64 - 2.0) * (j as f64 + 1.5));
        for (low, high) in [(0.0, 10.0), (-4.0, 3.5), (8.0, 2.0)] {
            let once = apply_clamp(&slice, low, high);
            let twice = apply_clamp(&once, low, high);
            assert_eq!(once, twice);
        }
    }
}
