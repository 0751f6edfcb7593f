use serde::{Deserialize, Serialize};

use chromascope_image::ColorSpace;

use crate::error::Error;

/// Which channels of a buffer to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelFilter {
    /// All three channels.
    #[default]
    All,
    /// R, L or H.
    First,
    /// G, a or S.
    Second,
    /// B, b or V.
    Third,
}

impl ChannelFilter {
    /// The channel index, or `None` for [`ChannelFilter::All`].
    pub fn index(&self) -> Option<usize> {
        match self {
            ChannelFilter::All => None,
            ChannelFilter::First => Some(0),
            ChannelFilter::Second => Some(1),
            ChannelFilter::Third => Some(2),
        }
    }

    /// The filter selecting channel `index`.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(ChannelFilter::First),
            1 => Some(ChannelFilter::Second),
            2 => Some(ChannelFilter::Third),
            _ => None,
        }
    }

    /// Parse a selector label as shown for `space`: `all` or one of the
    /// space's channel names.
    ///
    /// # Example
    ///
    /// ```
    /// use chromascope::image::ColorSpace;
    /// use chromascope::selection::ChannelFilter;
    ///
    /// assert_eq!(ChannelFilter::parse(ColorSpace::Lab, "a").unwrap(), ChannelFilter::Second);
    /// assert_eq!(ChannelFilter::parse(ColorSpace::Hsv, "ALL").unwrap(), ChannelFilter::All);
    /// assert!(ChannelFilter::parse(ColorSpace::Rgb, "L").is_err());
    /// ```
    pub fn parse(space: ColorSpace, name: &str) -> Result<Self, Error> {
        if name.eq_ignore_ascii_case("all") {
            return Ok(ChannelFilter::All);
        }

        space
            .channel_index(name)
            .and_then(ChannelFilter::from_index)
            .ok_or_else(|| Error::UnknownChannel {
                name: name.to_string(),
                space,
            })
    }

    /// Selector label for `space`.
    pub fn label(&self, space: ColorSpace) -> &'static str {
        match self.index() {
            Some(i) => space.channel_names()[i],
            None => "All",
        }
    }
}

/// How a non-RGB buffer is turned into something viewable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Convert back to RGB.
    #[default]
    Converted,
    /// Stretch the raw numbers of each channel to 0..=255.
    Raw,
}

impl DisplayMode {
    /// Note shown to the user alongside a raw view of all channels.
    pub const RAW_NOTICE: &'static str =
        "Raw data view: each channel is stretched to 0-255 independently, colors are not a faithful reproduction";
}

/// Everything the presentation layer needs to say about what to draw.
///
/// The value is plain data: the rendering functions take it as input and
/// nothing else holds display state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySelection {
    /// Active tab.
    pub space: ColorSpace,
    /// Channel filter.
    pub channel: ChannelFilter,
    /// Display mode; ignored for RGB.
    pub mode: DisplayMode,
}

impl DisplaySelection {
    /// Selection of all channels of `space`, converted back to RGB.
    pub fn new(space: ColorSpace) -> Self {
        Self {
            space,
            ..Default::default()
        }
    }

    /// Replace the channel filter.
    pub fn with_channel(mut self, channel: ChannelFilter) -> Self {
        self.channel = channel;
        self
    }

    /// Replace the display mode.
    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    /// Whether the view shows raw numbers of all channels as if they were RGB.
    pub fn is_raw_composite(&self) -> bool {
        self.space != ColorSpace::Rgb
            && self.channel == ChannelFilter::All
            && self.mode == DisplayMode::Raw
    }
}

#[cfg(test)]
mod tests {
    use super::{ChannelFilter, DisplayMode, DisplaySelection};
    use chromascope_image::ColorSpace;

    #[test]
    fn channel_labels() {
        assert_eq!(ChannelFilter::All.label(ColorSpace::Hsv), "All");
        assert_eq!(ChannelFilter::Third.label(ColorSpace::Lab), "b");
        assert_eq!(ChannelFilter::First.label(ColorSpace::Rgb), "R");
    }

    #[test]
    fn index_round_trip() {
        for i in 0..3 {
            assert_eq!(ChannelFilter::from_index(i).and_then(|c| c.index()), Some(i));
        }
        assert_eq!(ChannelFilter::from_index(3), None);
    }

    #[test]
    fn selection_serde() -> Result<(), serde_json::Error> {
        let selection = DisplaySelection::new(ColorSpace::Hsv)
            .with_channel(ChannelFilter::First)
            .with_mode(DisplayMode::Raw);

        let json = serde_json::to_string(&selection)?;
        assert_eq!(json, r#"{"space":"hsv","channel":"first","mode":"raw"}"#);

        let back: DisplaySelection = serde_json::from_str(&json)?;
        assert_eq!(back, selection);

        let partial: DisplaySelection = serde_json::from_str(r#"{"space":"lab"}"#)?;
        assert_eq!(partial, DisplaySelection::new(ColorSpace::Lab));

        Ok(())
    }

    #[test]
    fn raw_composite() {
        let raw = DisplaySelection::new(ColorSpace::Lab).with_mode(DisplayMode::Raw);
        assert!(raw.is_raw_composite());
        assert!(!raw.with_channel(ChannelFilter::First).is_raw_composite());
        assert!(!DisplaySelection::new(ColorSpace::Rgb)
            .with_mode(DisplayMode::Raw)
            .is_raw_composite());
    }
}
