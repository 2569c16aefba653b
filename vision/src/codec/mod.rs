//! Image codecs
//!
//! Still-frame encoding for camera captures and decoding of uploaded images
//! for preview. OpenCV stores pixels as BGR; everything above this module
//! works in RGB.

pub mod converters;
pub mod decode;
pub mod jpeg;
pub mod traits;

pub use decode::{DecodedImage, decode_image};
pub use jpeg::JpegEncoder;
pub use traits::StillEncoder;
