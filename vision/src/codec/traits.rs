use crate::error::Result;
use crate::frame::CapturedFrame;

/// Still-image encoder used by still capture
///
/// Implementations must be deterministic for a given frame; an empty output
/// is treated as a failed encode by the caller.
pub trait StillEncoder: Send {
    /// Compresses an RGB frame into the encoder's file format
    fn encode(&self, frame: &CapturedFrame) -> Result<Vec<u8>>;

    /// MIME type of the encoded bytes, e.g. `image/jpeg`
    fn mime_type(&self) -> &'static str;

    /// File extension without the dot
    fn extension(&self) -> &'static str;
}
