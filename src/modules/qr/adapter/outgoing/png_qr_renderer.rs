use async_trait::async_trait;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

use crate::qr::application::ports::outgoing::{QrRenderError, QrRenderer};

const DEFAULT_SIZE_PX: u32 = 300;

/// Renders QR codes to PNG with the `qrcode` and `image` crates.
#[derive(Debug, Clone, Copy)]
pub struct PngQrRenderer {
    size_px: u32,
}

impl Default for PngQrRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PngQrRenderer {
    pub fn new() -> Self {
        Self {
            size_px: DEFAULT_SIZE_PX,
        }
    }

    /// Minimum edge length of the rendered image, quiet zone included.
    pub fn with_size(size_px: u32) -> Self {
        Self { size_px }
    }
}

fn render_blocking(text: &str, size_px: u32) -> Result<Vec<u8>, QrRenderError> {
    let code =
        QrCode::new(text.as_bytes()).map_err(|e| QrRenderError::EncodingFailed(e.to_string()))?;

    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(size_px, size_px)
        .quiet_zone(true)
        .build();

    let mut buf = Vec::new();
    DynamicImage::ImageLuma8(image)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| QrRenderError::ImageFailed(e.to_string()))?;

    Ok(buf)
}

#[async_trait]
impl QrRenderer for PngQrRenderer {
    async fn render_png(&self, text: &str) -> Result<Vec<u8>, QrRenderError> {
        let text = text.to_string();
        let size_px = self.size_px;

        tokio::task::spawn_blocking(move || render_blocking(&text, size_px))
            .await
            .map_err(|_| QrRenderError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[tokio::test]
    async fn renders_png_of_at_least_requested_size() {
        let png = PngQrRenderer::new()
            .render_png("http://localhost:3000/event/abc")
            .await
            .unwrap();

        assert_eq!(&png[..8], &PNG_SIGNATURE);

        let decoded = image::load_from_memory(&png).unwrap();
        assert!(decoded.width() >= DEFAULT_SIZE_PX);
        assert_eq!(decoded.width(), decoded.height());
    }

    #[tokio::test]
    async fn renders_data_url() {
        let url = PngQrRenderer::with_size(64)
            .render_data_url(r#"{"id_user":"u1","id_event":"E"}"#)
            .await
            .unwrap();

        assert!(url.starts_with("data:image/png;base64,iVBORw0KGgo"));
    }

    #[tokio::test]
    async fn oversized_payload_is_encoding_error() {
        // Beyond the capacity of a version 40 symbol
        let text = "x".repeat(8_000);
        let result = PngQrRenderer::new().render_png(&text).await;

        assert!(matches!(result, Err(QrRenderError::EncodingFailed(_))));
    }
}
