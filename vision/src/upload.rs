//! Image upload acceptance.
//!
//! A drop (or file-picker selection) is accepted only when it is exactly one
//! non-empty JPEG, PNG or GIF file. The type is decided by extension; a MIME
//! type reported by the platform, when present, must also be an image type.

use crate::artifact::ImageFile;
use crate::error::{Result, VisionError};
use std::fmt;
use std::fs;
use std::path::Path;

/// Accepted upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
}

impl ImageKind {
    /// Case-insensitive extension lookup (`jpeg`, `jpg`, `png`, `gif`)
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Some(ImageKind::Jpeg),
            "png" => Some(ImageKind::Png),
            "gif" => Some(ImageKind::Gif),
            _ => None,
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        let extension = Path::new(name).extension()?.to_str()?;
        Self::from_extension(extension)
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
            ImageKind::Gif => "image/gif",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageKind::Jpeg => "JPG",
            ImageKind::Png => "PNG",
            ImageKind::Gif => "GIF",
        };
        f.write_str(name)
    }
}

/// A file as delivered by drag-and-drop or a file picker
#[derive(Debug, Clone)]
pub struct DroppedFile {
    pub name: String,
    /// Platform-reported MIME type, if any
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Accepts a drop of exactly one supported image.
///
/// # Errors
/// `UnsupportedFile` for zero or several files, an unsupported extension,
/// a non-image MIME type or an empty payload
pub fn accept_upload(files: Vec<DroppedFile>) -> Result<ImageFile> {
    let mut files = files.into_iter();
    let file = match (files.next(), files.next()) {
        (Some(file), None) => file,
        (None, _) => {
            return Err(VisionError::UnsupportedFile("No file provided".to_string()));
        }
        (Some(_), Some(_)) => {
            return Err(VisionError::UnsupportedFile(
                "Only one image can be uploaded at a time".to_string(),
            ));
        }
    };

    let kind = ImageKind::from_file_name(&file.name).ok_or_else(|| {
        VisionError::UnsupportedFile(format!("'{}' is not a JPG, PNG or GIF image", file.name))
    })?;

    if let Some(mime) = file.mime_type.as_deref()
        && !mime.is_empty()
        && !mime.starts_with("image/")
    {
        return Err(VisionError::UnsupportedFile(format!(
            "'{}' has non-image type {}",
            file.name, mime
        )));
    }

    if file.bytes.is_empty() {
        return Err(VisionError::UnsupportedFile(format!(
            "'{}' is empty",
            file.name
        )));
    }

    Ok(ImageFile::new(file.name, kind.mime_type(), file.bytes))
}

/// Reads a file from disk into a [`DroppedFile`] (no MIME type).
///
/// # Errors
/// `Io` if the file cannot be read
pub fn load_image_file(path: &Path) -> Result<DroppedFile> {
    let bytes = fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(DroppedFile {
        name,
        mime_type: None,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dropped(name: &str, mime: Option<&str>) -> DroppedFile {
        DroppedFile {
            name: name.to_string(),
            mime_type: mime.map(str::to_string),
            bytes: vec![0xFF, 0xD8, 0xFF],
        }
    }

    #[test]
    fn test_accepts_single_image() {
        let file = accept_upload(vec![dropped("photo.JPG", Some("image/jpeg"))]).unwrap();

        assert_eq!(file.name, "photo.JPG");
        assert_eq!(file.mime_type, "image/jpeg");
    }

    #[test]
    fn test_mime_derived_from_extension() {
        let png = accept_upload(vec![dropped("a.png", None)]).unwrap();
        let gif = accept_upload(vec![dropped("b.Gif", None)]).unwrap();
        let jpeg = accept_upload(vec![dropped("c.jpeg", None)]).unwrap();

        assert_eq!(png.mime_type, "image/png");
        assert_eq!(gif.mime_type, "image/gif");
        assert_eq!(jpeg.mime_type, "image/jpeg");
    }

    #[test]
    fn test_rejects_wrong_count() {
        assert!(matches!(
            accept_upload(Vec::new()),
            Err(VisionError::UnsupportedFile(_))
        ));
        assert!(matches!(
            accept_upload(vec![dropped("a.png", None), dropped("b.png", None)]),
            Err(VisionError::UnsupportedFile(_))
        ));
    }

    #[test]
    fn test_rejects_non_images() {
        assert!(accept_upload(vec![dropped("notes.txt", Some("text/plain"))]).is_err());
        assert!(accept_upload(vec![dropped("scan.bmp", Some("image/bmp"))]).is_err());
        assert!(accept_upload(vec![dropped("noext", None)]).is_err());
        assert!(accept_upload(vec![dropped("fake.png", Some("application/pdf"))]).is_err());
    }

    #[test]
    fn test_rejects_empty_payload() {
        let mut file = dropped("a.png", None);
        file.bytes.clear();

        assert!(matches!(
            accept_upload(vec![file]),
            Err(VisionError::UnsupportedFile(msg)) if msg.contains("empty")
        ));
    }

    #[test]
    fn test_load_image_file() {
        let mut tmp = NamedTempFile::with_suffix(".png").unwrap();
        tmp.write_all(&[1, 2, 3]).unwrap();

        let file = load_image_file(tmp.path()).unwrap();

        assert!(file.name.ends_with(".png"));
        assert_eq!(file.bytes, vec![1, 2, 3]);
        assert!(accept_upload(vec![file]).is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_image_file(Path::new("/nonexistent/image.png")),
            Err(VisionError::Io(_))
        ));
    }
}
