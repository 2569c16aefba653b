//! On-demand still capture.

use crate::artifact::ImageFile;
use crate::capture::CaptureSession;
use crate::codec::{JpegEncoder, StillEncoder};
use crate::constants::capture::CAPTURE_FILE_PREFIX;
use crate::error::{Result, VisionError};
use chrono::Utc;
use logging::Logger;

/// Snapshots the current frame of a streaming session into an image file
pub struct StillCapture {
    encoder: Box<dyn StillEncoder>,
    logger: Logger,
}

impl StillCapture {
    pub fn new(encoder: Box<dyn StillEncoder>, logger: Logger) -> Self {
        Self { encoder, logger }
    }

    /// JPEG at the default quality (90)
    pub fn jpeg(logger: Logger) -> Self {
        Self::new(Box::new(JpegEncoder::default()), logger)
    }

    /// Grabs and encodes one frame at the stream's native resolution.
    ///
    /// The file is named `camera-capture-<epoch-millis>.<ext>`.
    ///
    /// # Errors
    /// * `PreconditionFailed` - the session is not streaming; nothing is produced
    /// * `EncodingFailed` - the encoder failed or produced no bytes
    pub fn capture(&self, session: &mut CaptureSession) -> Result<ImageFile> {
        if !session.is_streaming() {
            return Err(VisionError::PreconditionFailed(format!(
                "Cannot capture a photo while the camera is {}",
                session.state()
            )));
        }

        let frame = session.grab_frame()?;
        let (width, height) = (frame.width(), frame.height());
        let bytes = self.encoder.encode(&frame).map_err(|e| match e {
            VisionError::EncodingFailed(_) => e,
            other => VisionError::EncodingFailed(other.to_string()),
        })?;
        if bytes.is_empty() {
            return Err(VisionError::EncodingFailed(
                "Encoder produced an empty image".to_string(),
            ));
        }

        let name = format!(
            "{}-{}.{}",
            CAPTURE_FILE_PREFIX,
            Utc::now().timestamp_millis(),
            self.encoder.extension()
        );
        self.logger.info(&format!(
            "[CAMERA] Captured {} ({}x{}, {} bytes)",
            name,
            width,
            height,
            bytes.len()
        ));

        Ok(ImageFile::new(name, self.encoder.mime_type(), bytes))
    }
}
