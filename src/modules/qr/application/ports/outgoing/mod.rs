pub mod qr_renderer;

pub use qr_renderer::{to_data_url, QrRenderError, QrRenderer};
