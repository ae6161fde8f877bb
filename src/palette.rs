use std::fmt;
use std::str::FromStr;

use colorous::Gradient;

use crate::error::ParseError;

/// An RGB color.
pub type Color = [u8; 3];

const fn rgb(hex: u32) -> Color {
    [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8]
}

/// Entries in the continuous palettes.
pub const RAMP_LENGTH: usize = 256;

const SPECTRAL_11: [Color; 11] = [
    rgb(0x5e4fa2),
    rgb(0x3288bd),
    rgb(0x66c2a5),
    rgb(0xabdda4),
    rgb(0xe6f598),
    rgb(0xffffbf),
    rgb(0xfee08b),
    rgb(0xfdae61),
    rgb(0xf46d43),
    rgb(0xd53e4f),
    rgb(0x9e0142),
];

const PURPLES_9: [Color; 9] = [
    rgb(0x3f007d),
    rgb(0x54278f),
    rgb(0x6a51a3),
    rgb(0x807dba),
    rgb(0x9e9ac8),
    rgb(0xbcbddc),
    rgb(0xdadaeb),
    rgb(0xefedf5),
    rgb(0xfcfbfd),
];

const BLUES_9: [Color; 9] = [
    rgb(0x08306b),
    rgb(0x08519c),
    rgb(0x2171b5),
    rgb(0x4292c6),
    rgb(0x6baed6),
    rgb(0x9ecae1),
    rgb(0xc6dbef),
    rgb(0xdeebf7),
    rgb(0xf7fbff),
];

const GREENS_9: [Color; 9] = [
    rgb(0x00441b),
    rgb(0x006d2c),
    rgb(0x238b45),
    rgb(0x41ab5d),
    rgb(0x74c476),
    rgb(0xa1d99b),
    rgb(0xc7e9c0),
    rgb(0xe5f5e0),
    rgb(0xf7fcf5),
];

const ORANGES_9: [Color; 9] = [
    rgb(0x7f2704),
    rgb(0xa63603),
    rgb(0xd94801),
    rgb(0xf16913),
    rgb(0xfd8d3c),
    rgb(0xfdae6b),
    rgb(0xfdd0a2),
    rgb(0xfee6ce),
    rgb(0xfff5eb),
];

const REDS_9: [Color; 9] = [
    rgb(0x67000d),
    rgb(0xa50f15),
    rgb(0xcb181d),
    rgb(0xef3b2c),
    rgb(0xfb6a4a),
    rgb(0xfc9272),
    rgb(0xfcbba1),
    rgb(0xfee0d2),
    rgb(0xfff5f0),
];

const COLORBLIND_8: [Color; 8] = [
    rgb(0x0072b2),
    rgb(0xe69f00),
    rgb(0xf0e442),
    rgb(0x009e73),
    rgb(0x56b4e9),
    rgb(0xd55e00),
    rgb(0xcc79a7),
    rgb(0x000000),
];

/// Samples a gradient at `RAMP_LENGTH` evenly spaced points, lowest value
/// first. Sequential gradients run light to dark, so `dark_first` flips them.
fn ramp(gradient: &Gradient, dark_first: bool) -> Vec<Color> {
    (0..RAMP_LENGTH)
        .map(|i| {
            let i = if dark_first { RAMP_LENGTH - 1 - i } else { i };
            let c = gradient.eval_rational(i, RAMP_LENGTH);
            [c.r, c.g, c.b]
        })
        .collect()
}

/// Named color palettes for mapping samples to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    #[default]
    Spectral,
    Greys,
    Inferno,
    Magma,
    Plasma,
    Viridis,
    Cividis,
    Purples,
    Blues,
    Greens,
    Oranges,
    Reds,
    ColorBlind,
}

impl Palette {
    pub const ALL: [Palette; 13] = [
        Palette::Spectral,
        Palette::Greys,
        Palette::Inferno,
        Palette::Magma,
        Palette::Plasma,
        Palette::Viridis,
        Palette::Cividis,
        Palette::Purples,
        Palette::Blues,
        Palette::Greens,
        Palette::Oranges,
        Palette::Reds,
        Palette::ColorBlind,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Palette::Spectral => "Spectral",
            Palette::Greys => "Greys",
            Palette::Inferno => "Inferno",
            Palette::Magma => "Magma",
            Palette::Plasma => "Plasma",
            Palette::Viridis => "Viridis",
            Palette::Cividis => "Cividis",
            Palette::Purples => "Purples",
            Palette::Blues => "Blues",
            Palette::Greens => "Greens",
            Palette::Oranges => "Oranges",
            Palette::Reds => "Reds",
            Palette::ColorBlind => "Color Blind",
        }
    }

    /// Ordered colors, lowest sample value first.
    pub fn colors(&self) -> Vec<Color> {
        match self {
            Palette::Spectral => SPECTRAL_11.to_vec(),
            Palette::Greys => ramp(&colorous::GREYS, true),
            Palette::Inferno => ramp(&colorous::INFERNO, false),
            Palette::Magma => ramp(&colorous::MAGMA, false),
            Palette::Plasma => ramp(&colorous::PLASMA, false),
            Palette::Viridis => ramp(&colorous::VIRIDIS, false),
            Palette::Cividis => ramp(&colorous::CIVIDIS, false),
            Palette::Purples => PURPLES_9.to_vec(),
            Palette::Blues => BLUES_9.to_vec(),
            Palette::Greens => GREENS_9.to_vec(),
            Palette::Oranges => ORANGES_9.to_vec(),
            Palette::Reds => REDS_9.to_vec(),
            Palette::ColorBlind => COLORBLIND_8.to_vec(),
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Palette {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        Palette::ALL
            .into_iter()
            .find(|p| p.name().replace(' ', "").eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ParseError::UnknownPalette(s.to_string()))
    }
}

/// Colors offered for the crosshair lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrosshairColor {
    #[default]
    Lime,
    Green,
    Black,
    White,
    Red,
    Cyan,
    Yellow,
    Blue,
    Orange,
    Purple,
    Pink,
    Brown,
    Indigo,
    Grey,
}

impl CrosshairColor {
    pub const ALL: [CrosshairColor; 14] = [
        CrosshairColor::Lime,
        CrosshairColor::Green,
        CrosshairColor::Black,
        CrosshairColor::White,
        CrosshairColor::Red,
        CrosshairColor::Cyan,
        CrosshairColor::Yellow,
        CrosshairColor::Blue,
        CrosshairColor::Orange,
        CrosshairColor::Purple,
        CrosshairColor::Pink,
        CrosshairColor::Brown,
        CrosshairColor::Indigo,
        CrosshairColor::Grey,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CrosshairColor::Lime => "Lime",
            CrosshairColor::Green => "Green",
            CrosshairColor::Black => "Black",
            CrosshairColor::White => "White",
            CrosshairColor::Red => "Red",
            CrosshairColor::Cyan => "Cyan",
            CrosshairColor::Yellow => "Yellow",
            CrosshairColor::Blue => "Blue",
            CrosshairColor::Orange => "Orange",
            CrosshairColor::Purple => "Purple",
            CrosshairColor::Pink => "Pink",
            CrosshairColor::Brown => "Brown",
            CrosshairColor::Indigo => "Indigo",
            CrosshairColor::Grey => "Grey",
        }
    }

    /// CSS color keyword handed to the display layer.
    pub fn css(&self) -> String {
        self.name().to_lowercase()
    }

    pub fn rgb(&self) -> Color {
        match self {
            CrosshairColor::Lime => rgb(0x00ff00),
            CrosshairColor::Green => rgb(0x008000),
            CrosshairColor::Black => rgb(0x000000),
            CrosshairColor::White => rgb(0xffffff),
            CrosshairColor::Red => rgb(0xff0000),
            CrosshairColor::Cyan => rgb(0x00ffff),
            CrosshairColor::Yellow => rgb(0xffff00),
            CrosshairColor::Blue => rgb(0x0000ff),
            CrosshairColor::Orange => rgb(0xffa500),
            CrosshairColor::Purple => rgb(0x800080),
            CrosshairColor::Pink => rgb(0xffc0cb),
            CrosshairColor::Brown => rgb(0xa52a2a),
            CrosshairColor::Indigo => rgb(0x4b0082),
            CrosshairColor::Grey => rgb(0x808080),
        }
    }
}

impl fmt::Display for CrosshairColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CrosshairColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let wanted = if wanted.eq_ignore_ascii_case("gray") {
            "grey"
        } else {
            wanted
        };
        CrosshairColor::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownColor(s.to_string()))
    }
}
