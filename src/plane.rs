use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::ParseError;

/// One of the three orthogonal planes of a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plane {
    Transverse,
    Sagittal,
    Coronal,
}

impl Plane {
    pub const ALL: [Plane; 3] = [Plane::Transverse, Plane::Sagittal, Plane::Coronal];

    /// The volume axis this plane slices along.
    pub fn to_usize(&self) -> usize {
        match self {
            Plane::Transverse => 0,
            Plane::Sagittal => 1,
            Plane::Coronal => 2,
        }
    }

    pub fn from_usize(val: usize) -> Option<Self> {
        match val {
            0 => Some(Plane::Transverse),
            1 => Some(Plane::Sagittal),
            2 => Some(Plane::Coronal),
            _ => None,
        }
    }

    /// Sagittal and coronal slices are displayed transposed.
    pub fn is_transposed(&self) -> bool {
        matches!(self, Plane::Sagittal | Plane::Coronal)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Plane::Transverse => "transverse",
            Plane::Sagittal => "sagittal",
            Plane::Coronal => "coronal",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Plane::Transverse => "Transverse View",
            Plane::Sagittal => "Sagittal View",
            Plane::Coronal => "Coronal View",
        }
    }

    /// The plane whose current index positions the given crosshair line.
    pub fn crosshair_driver(&self, orientation: Orientation) -> Plane {
        CROSSHAIR_LINES[*self][orientation]
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Plane {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "transverse" | "t" | "0" => Ok(Plane::Transverse),
            "sagittal" | "s" | "1" => Ok(Plane::Sagittal),
            "coronal" | "c" | "2" => Ok(Plane::Coronal),
            _ => Err(ParseError::UnknownPlane(s.to_string())),
        }
    }
}

/// Orientation of a crosshair line on a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Planes driving the two crosshair lines of one plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrosshairDrivers {
    pub horizontal: Plane,
    pub vertical: Plane,
}

impl Index<Orientation> for CrosshairDrivers {
    type Output = Plane;

    fn index(&self, orientation: Orientation) -> &Plane {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }
}

/// Which plane's index positions each crosshair line, per plane.
pub const CROSSHAIR_LINES: PlaneMap<CrosshairDrivers> = PlaneMap::new(
    CrosshairDrivers {
        horizontal: Plane::Coronal,
        vertical: Plane::Sagittal,
    },
    CrosshairDrivers {
        horizontal: Plane::Transverse,
        vertical: Plane::Coronal,
    },
    CrosshairDrivers {
        horizontal: Plane::Transverse,
        vertical: Plane::Sagittal,
    },
);

/// A fixed table holding one value per plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaneMap<T>([T; 3]);

impl<T> PlaneMap<T> {
    pub const fn new(transverse: T, sagittal: T, coronal: T) -> Self {
        Self([transverse, sagittal, coronal])
    }

    pub fn from_fn<F: FnMut(Plane) -> T>(f: F) -> Self {
        Self(Plane::ALL.map(f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Plane, &T)> {
        Plane::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T> Index<Plane> for PlaneMap<T> {
    type Output = T;

    fn index(&self, plane: Plane) -> &T {
        &self.0[plane.to_usize()]
    }
}

impl<T> IndexMut<Plane> for PlaneMap<T> {
    fn index_mut(&mut self, plane: Plane) -> &mut T {
        &mut self.0[plane.to_usize()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planes_map_to_distinct_axes() {
        for plane in Plane::ALL {
            assert_eq!(Plane::from_usize(plane.to_usize()), Some(plane));
        }
        assert_eq!(Plane::from_usize(3), None);
    }

    #[test]
    fn only_transverse_is_displayed_untransposed() {
        assert!(!Plane::Transverse.is_transposed());
        assert!(Plane::Sagittal.is_transposed());
        assert!(Plane::Coronal.is_transposed());
    }

    #[test]
    fn crosshair_lines_are_driven_by_other_planes() {
        for plane in Plane::ALL {
            let h = plane.crosshair_driver(Orientation::Horizontal);
            let v = plane.crosshair_driver(Orientation::Vertical);
            assert_ne!(h, plane);
            assert_ne!(v, plane);
            assert_ne!(h, v);
        }
        assert_eq!(
            Plane::Transverse.crosshair_driver(Orientation::Horizontal),
            Plane::Coronal
        );
        assert_eq!(
            Plane::Sagittal.crosshair_driver(Orientation::Vertical),
            Plane::Coronal
        );
        assert_eq!(
            Plane::Coronal.crosshair_driver(Orientation::Horizontal),
            Plane::Transverse
        );
    }

    #[test]
    fn parses_names_and_axis_numbers() {
        assert_eq!("Sagittal".parse::<Plane>(), Ok(Plane::Sagittal));
        assert_eq!("2".parse::<Plane>(), Ok(Plane::Coronal));
        assert_eq!(
            "axial".parse::<Plane>(),
            Err(ParseError::UnknownPlane("axial".to_string()))
        );
    }

    #[test]
    fn plane_map_indexes_by_plane() {
        let mut map = PlaneMap::from_fn(|p| p.to_usize() * 10);
        map[Plane::Coronal] += 1;
        assert_eq!(map[Plane::Transverse], 0);
        assert_eq!(map[Plane::Sagittal], 10);
        assert_eq!(map[Plane::Coronal], 21);
        let planes: Vec<Plane> = map.iter().map(|(p, _)| p).collect();
        assert_eq!(planes, Plane::ALL.to_vec());
    }
}
