use async_trait::async_trait;

/// Why a capture could not be acquired
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    #[error("Camera permission denied")]
    PermissionDenied,

    #[error("No camera found")]
    NotFound,

    #[error("Camera is in use by another application")]
    Busy,

    #[error("Camera failure: {0}")]
    Failed(String),
}

/// Exclusive handle on the capture device.
///
/// `stop` must be idempotent; implementations should also release the
/// device when dropped.
#[async_trait]
pub trait CaptureSession: Send {
    /// Text of the next decoded QR frame, `None` once the stream has ended
    async fn next_frame(&mut self) -> Option<String>;

    fn stop(&mut self);
}

#[async_trait]
pub trait Camera: Send + Sync {
    async fn acquire(&self) -> Result<Box<dyn CaptureSession>, CaptureError>;
}
