use std::{fmt, str::FromStr};

/// The color representations a three channel buffer can be expressed in.
///
/// Every space has exactly three channels; the channel order is fixed and
/// matches [`ColorSpace::channel_names`].
///
/// # Example
///
/// ```
/// use chromascope_image::ColorSpace;
///
/// let space: ColorSpace = "hsv".parse().unwrap();
/// assert_eq!(space, ColorSpace::Hsv);
/// assert_eq!(space.channel_names(), ["H", "S", "V"]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorSpace {
    /// Red, green, blue.
    #[default]
    Rgb,
    /// CIELab: lightness, green–red, blue–yellow.
    Lab,
    /// Hue, saturation, value.
    Hsv,
}

impl ColorSpace {
    /// All supported spaces, in tab order.
    pub const ALL: [ColorSpace; 3] = [ColorSpace::Rgb, ColorSpace::Lab, ColorSpace::Hsv];

    /// Short channel names, as shown on channel selectors.
    pub fn channel_names(&self) -> [&'static str; 3] {
        match self {
            ColorSpace::Rgb => ["R", "G", "B"],
            ColorSpace::Lab => ["L", "a", "b"],
            ColorSpace::Hsv => ["H", "S", "V"],
        }
    }

    /// Channel names used in readout text.
    pub fn channel_labels(&self) -> [&'static str; 3] {
        match self {
            ColorSpace::Rgb => ["Red", "Green", "Blue"],
            ColorSpace::Lab => ["L", "a", "b"],
            ColorSpace::Hsv => ["H", "S", "V"],
        }
    }

    /// Display name of the space.
    pub fn name(&self) -> &'static str {
        match self {
            ColorSpace::Rgb => "RGB",
            ColorSpace::Lab => "CIELab",
            ColorSpace::Hsv => "HSV",
        }
    }

    /// Index of a channel given its short name, case-sensitive for CIELab
    /// (`L`, `a`, `b`) and case-insensitive otherwise.
    pub fn channel_index(&self, name: &str) -> Option<usize> {
        let names = self.channel_names();
        match self {
            ColorSpace::Lab => names.iter().position(|n| *n == name),
            _ => names.iter().position(|n| n.eq_ignore_ascii_case(name)),
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown color space name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown color space: {0}")]
pub struct ParseColorSpaceError(pub String);

impl FromStr for ColorSpace {
    type Err = ParseColorSpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(ColorSpace::Rgb),
            "lab" | "cielab" => Ok(ColorSpace::Lab),
            "hsv" => Ok(ColorSpace::Hsv),
            _ => Err(ParseColorSpaceError(s.to_string())),
        }
    }
}
