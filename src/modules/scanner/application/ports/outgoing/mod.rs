pub mod camera;
pub mod scan_gateway;

pub use camera::{Camera, CaptureError, CaptureSession};
pub use scan_gateway::{GatewayError, ScanGateway};
