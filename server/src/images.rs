//! Upload validation: format sniffing against an allow-list and a size cap.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

/// Image formats accepted for recipe and blog photos.
pub const ALLOWED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::WebP,
    ImageFormat::Gif,
];

/// Maximum upload size (5MB).
pub const MAX_UPLOAD_SIZE: usize = 5 * 1024 * 1024;

/// Validate uploaded bytes: detect the format from the content (the
/// client-supplied content type is not trusted) and check the allow-list.
/// Returns the detected content type.
pub fn validate_upload(data: &[u8]) -> Result<String, String> {
    if data.len() > MAX_UPLOAD_SIZE {
        return Err("Bestand is te groot (max 5MB)".to_string());
    }

    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| format!("Kon bestand niet lezen: {}", e))?;

    let format = reader
        .format()
        .ok_or_else(|| "Alleen JPG, PNG, WebP en GIF bestanden zijn toegestaan".to_string())?;

    if !ALLOWED_FORMATS.contains(&format) {
        return Err("Alleen JPG, PNG, WebP en GIF bestanden zijn toegestaan".to_string());
    }

    Ok(format.to_mime_type().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Smallest valid 1x1 PNG.
    const PNG_BYTES: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x62, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn test_accepts_png() {
        assert_eq!(validate_upload(PNG_BYTES).unwrap(), "image/png");
    }

    #[test]
    fn test_rejects_non_image_payload() {
        assert!(validate_upload(b"definitely not an image").is_err());
    }

    #[test]
    fn test_rejects_oversized_payload() {
        let oversized = vec![0u8; MAX_UPLOAD_SIZE + 1];
        assert_eq!(
            validate_upload(&oversized).unwrap_err(),
            "Bestand is te groot (max 5MB)"
        );
    }
}
