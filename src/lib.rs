//! Three synchronized orthogonal views of a 3D volume.
//!
//! The viewer state lives in [`session::Session`]: the volume, the current
//! index of each plane, and per plane the displayed slice, its clamp range
//! and its crosshair. A display layer feeds user interactions in as
//! [`event::Event`]s and redraws whatever the returned
//! [`session::StateDelta`] names.

pub mod crosshair;
pub mod display_range;
pub mod error;
pub mod event;
pub mod io;
pub mod palette;
pub mod plane;
pub mod session;
pub mod volume;

pub use error::{LoadError, ParseError, VolumeError};
pub use event::Event;
pub use plane::{Orientation, Plane};
pub use session::Session;
pub use volume::Volume;
