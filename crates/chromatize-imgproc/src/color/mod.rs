mod gray;
mod hsv;

pub use gray::gray_from_rgb;
pub use hsv::{hsv_from_intensity, rgb_from_hsv};
