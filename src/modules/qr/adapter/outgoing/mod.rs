pub mod png_qr_renderer;

pub use png_qr_renderer::PngQrRenderer;
