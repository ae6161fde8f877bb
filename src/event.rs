use std::str::FromStr;

use crate::error::ParseError;
use crate::palette::{CrosshairColor, Palette};
use crate::plane::Plane;

/// A single user interaction with the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Move a plane to a slice index. Out-of-range requests wrap.
    SetIndex { plane: Plane, index: isize },
    /// Mouse wheel over a plane: one slice per event in the wheel's direction.
    Scroll { plane: Plane, delta: f64 },
    /// Click on a plane at data coordinates, moving the two planes that
    /// drive its crosshair lines.
    Tap { plane: Plane, x: f64, y: f64 },
    SetClampRange { plane: Plane, low: f64, high: f64 },
    SelectPalette(Palette),
    SelectCrosshairColor(CrosshairColor),
    SetCrosshairVisible(bool),
    SetAxesVisible(bool),
    SetIndexControlsVisible(bool),
    SetRangeControlsVisible(bool),
}

fn number<T: FromStr>(word: &str) -> Result<T, ParseError> {
    word.parse()
        .map_err(|_| ParseError::InvalidNumber(word.to_string()))
}

fn switch(word: &str) -> Option<bool> {
    match word.to_ascii_lowercase().as_str() {
        "on" | "show" | "true" | "yes" => Some(true),
        "off" | "hide" | "false" | "no" => Some(false),
        _ => None,
    }
}

impl FromStr for Event {
    type Err = ParseError;

    /// Parses the script form of an event, e.g. `index sagittal 12`,
    /// `tap coronal 4 17`, `clamp transverse 0 50`, `palette viridis`,
    /// `crosshair off`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidEvent(s.to_string());
        let words: Vec<&str> = s.split_whitespace().collect();
        let (command, args) = words.split_first().ok_or_else(invalid)?;

        let event = match (command.to_ascii_lowercase().as_str(), args) {
            ("index", [plane, index]) => Event::SetIndex {
                plane: plane.parse()?,
                index: number(index)?,
            },
            ("scroll", [plane, delta]) => Event::Scroll {
                plane: plane.parse()?,
                delta: number(delta)?,
            },
            ("tap", [plane, x, y]) => Event::Tap {
                plane: plane.parse()?,
                x: number(x)?,
                y: number(y)?,
            },
            ("clamp", [plane, low, high]) => Event::SetClampRange {
                plane: plane.parse()?,
                low: number(low)?,
                high: number(high)?,
            },
            // palette names may contain spaces
            ("palette", name) if !name.is_empty() => {
                Event::SelectPalette(name.join(" ").parse()?)
            }
            ("color", [name]) => Event::SelectCrosshairColor(name.parse()?),
            ("crosshair", [state]) => Event::SetCrosshairVisible(switch(state).ok_or_else(invalid)?),
            ("axes", [state]) => Event::SetAxesVisible(switch(state).ok_or_else(invalid)?),
            ("indices", [state]) => {
                Event::SetIndexControlsVisible(switch(state).ok_or_else(invalid)?)
            }
            ("ranges", [state]) => {
                Event::SetRangeControlsVisible(switch(state).ok_or_else(invalid)?)
            }
            _ => return Err(invalid()),
        };
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plane_events() {
        assert_eq!(
            "index sagittal -3".parse::<Event>(),
            Ok(Event::SetIndex {
                plane: Plane::Sagittal,
                index: -3
            })
        );
        assert_eq!(
            "scroll T 1.5".parse::<Event>(),
            Ok(Event::Scroll {
                plane: Plane::Transverse,
                delta: 1.5
            })
        );
        assert_eq!(
            "tap coronal 4 17.9".parse::<Event>(),
            Ok(Event::Tap {
                plane: Plane::Coronal,
                x: 4.0,
                y: 17.9
            })
        );
        assert_eq!(
            "clamp transverse 0 50".parse::<Event>(),
            Ok(Event::SetClampRange {
                plane: Plane::Transverse,
                low: 0.0,
                high: 50.0
            })
        );
    }

    #[test]
    fn parses_display_events() {
        assert_eq!(
            "palette color blind".parse::<Event>(),
            Ok(Event::SelectPalette(Palette::ColorBlind))
        );
        assert_eq!(
            "color red".parse::<Event>(),
            Ok(Event::SelectCrosshairColor(CrosshairColor::Red))
        );
        assert_eq!(
            "crosshair off".parse::<Event>(),
            Ok(Event::SetCrosshairVisible(false))
        );
        assert_eq!("axes on".parse::<Event>(), Ok(Event::SetAxesVisible(true)));
        assert_eq!(
            "indices show".parse::<Event>(),
            Ok(Event::SetIndexControlsVisible(true))
        );
        assert_eq!(
            "ranges hide".parse::<Event>(),
            Ok(Event::SetRangeControlsVisible(false))
        );
    }

    #[test]
    fn rejects_malformed_events() {
        assert_eq!(
            "".parse::<Event>(),
            Err(ParseError::InvalidEvent(String::new()))
        );
        assert_eq!(
            "index sagittal".parse::<Event>(),
            Err(ParseError::InvalidEvent("index sagittal".to_string()))
        );
        assert_eq!(
            "index sagittal two".parse::<Event>(),
            Err(ParseError::InvalidNumber("two".to_string()))
        );
        assert_eq!(
            "index axial 2".parse::<Event>(),
            Err(ParseError::UnknownPlane("axial".to_string()))
        );
        assert!("crosshair maybe".parse::<Event>().is_err());
    }
}
