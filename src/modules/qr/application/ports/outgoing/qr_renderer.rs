use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};

#[derive(Debug, Clone, thiserror::Error)]
pub enum QrRenderError {
    #[error("QR encoding failed: {0}")]
    EncodingFailed(String),

    #[error("PNG encoding failed: {0}")]
    ImageFailed(String),

    #[error("Background task failed")]
    TaskFailed,
}

#[async_trait]
pub trait QrRenderer: Send + Sync {
    /// Render `text` as a PNG image.
    async fn render_png(&self, text: &str) -> Result<Vec<u8>, QrRenderError>;

    /// Render `text` as a `data:image/png;base64,..` URL.
    async fn render_data_url(&self, text: &str) -> Result<String, QrRenderError> {
        let png = self.render_png(text).await?;
        Ok(to_data_url(&png))
    }
}

pub fn to_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}
