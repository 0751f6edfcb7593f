mod gray;
mod hsv;
mod lab;

pub use gray::rgb_from_gray;
pub use hsv::{hsv_from_rgb_u8, rgb_from_hsv_u8, HUE_RANGE_U8};
pub use lab::{lab_from_rgb_u8, rgb_from_lab_u8};

/// Round and saturate a value into the `u8` range.
#[inline]
pub(crate) fn saturate_u8(x: f32) -> u8 {
    x.round().clamp(0.0, 255.0) as u8
}
