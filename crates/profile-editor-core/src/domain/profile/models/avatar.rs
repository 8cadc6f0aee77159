// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use base64::engine::general_purpose;
use base64::Engine;
use image::ImageFormat;
use mime::Mime;
use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;

/// An uploaded avatar image, ready to be inlined into the profile as a data URI.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarImage {
    pub mime_type: Mime,
    pub data: Box<[u8]>,
}

impl AvatarImage {
    /// Sniffs the image format from the leading bytes of `data`. Unknown formats are kept as
    /// `application/octet-stream`.
    pub fn from_bytes(data: impl Into<Box<[u8]>>) -> Self {
        let data = data.into();
        let mime_type = image::guess_format(&data)
            .map(mime_type_for_format)
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);

        AvatarImage { mime_type, data }
    }

    pub fn format(&self) -> Option<ImageFormat> {
        image::guess_format(&self.data).ok()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            general_purpose::STANDARD.encode(&self.data)
        )
    }
}

fn mime_type_for_format(format: ImageFormat) -> Mime {
    let essence = match format {
        ImageFormat::Png => return mime::IMAGE_PNG,
        ImageFormat::Jpeg => return mime::IMAGE_JPEG,
        ImageFormat::Gif => return mime::IMAGE_GIF,
        ImageFormat::Bmp => return mime::IMAGE_BMP,
        ImageFormat::WebP => "image/webp",
        ImageFormat::Tiff => "image/tiff",
        ImageFormat::Ico => "image/x-icon",
        ImageFormat::Avif => "image/avif",
        _ => return mime::APPLICATION_OCTET_STREAM,
    };
    essence.parse().unwrap_or(mime::APPLICATION_OCTET_STREAM)
}

/// File type and size limits for uploaded avatars. Not enforced unless `enforce` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarPolicy {
    pub enforce: bool,
    pub max_bytes: usize,
}

impl AvatarPolicy {
    pub const DEFAULT_MAX_BYTES: usize = 5 * 1024 * 1024;

    pub fn enforced() -> Self {
        AvatarPolicy {
            enforce: true,
            ..Default::default()
        }
    }

    pub fn check(&self, image: &AvatarImage) -> Result<(), ValidationError> {
        if !self.enforce {
            return Ok(());
        }

        if !matches!(image.format(), Some(ImageFormat::Jpeg | ImageFormat::Png)) {
            return Err(ValidationError::AvatarFormat);
        }
        if image.len() > self.max_bytes {
            return Err(ValidationError::AvatarTooLarge);
        }

        Ok(())
    }
}

impl Default for AvatarPolicy {
    fn default() -> Self {
        AvatarPolicy {
            enforce: false,
            max_bytes: Self::DEFAULT_MAX_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const GIF_HEADER: &[u8] = b"GIF89a\x01\0\x01\0";

    #[test]
    fn test_data_uri_uses_sniffed_mime_type() {
        let image = AvatarImage::from_bytes(PNG_HEADER.to_vec());
        assert_eq!(image.mime_type, mime::IMAGE_PNG);
        assert_eq!(
            image.data_uri(),
            format!(
                "data:image/png;base64,{}",
                general_purpose::STANDARD.encode(PNG_HEADER)
            )
        );
    }

    #[test]
    fn test_unknown_bytes_are_kept_as_octet_stream() {
        let image = AvatarImage::from_bytes(b"hello".to_vec());
        assert_eq!(image.mime_type, mime::APPLICATION_OCTET_STREAM);
        assert_eq!(
            image.data_uri(),
            "data:application/octet-stream;base64,aGVsbG8="
        );
    }

    #[test]
    fn test_default_policy_accepts_anything() {
        let policy = AvatarPolicy::default();
        assert_eq!(policy.check(&AvatarImage::from_bytes(GIF_HEADER.to_vec())), Ok(()));
        assert_eq!(policy.check(&AvatarImage::from_bytes(b"x".to_vec())), Ok(()));
    }

    #[test]
    fn test_enforced_policy() {
        let policy = AvatarPolicy {
            enforce: true,
            max_bytes: PNG_HEADER.len(),
        };

        assert_eq!(policy.check(&AvatarImage::from_bytes(PNG_HEADER.to_vec())), Ok(()));
        assert_eq!(
            policy.check(&AvatarImage::from_bytes(GIF_HEADER.to_vec())),
            Err(ValidationError::AvatarFormat)
        );

        let mut oversized = PNG_HEADER.to_vec();
        oversized.push(0);
        assert_eq!(
            policy.check(&AvatarImage::from_bytes(oversized)),
            Err(ValidationError::AvatarTooLarge)
        );
    }
}
