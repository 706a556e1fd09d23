use std::time::Duration;

use tracing::{info, warn};

use crate::modules::scanner::application::domain::{Notice, ScanReceipt, ScanState};
use crate::modules::scanner::application::ports::outgoing::{
    Camera, CaptureError, CaptureSession, ScanGateway,
};
use crate::qr;

#[derive(Debug, Clone, Copy)]
pub struct ScanConfig {
    /// Pause after a failed scan before the camera is re-acquired
    pub retry_backoff: Duration,
    /// How long the success state is held before returning to idle
    pub success_delay: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            retry_backoff: Duration::from_secs(2),
            success_delay: Duration::from_millis(1500),
        }
    }
}

/// Drives one door-side check-in flow.
///
/// ```text
/// Idle -> Scanning -> Decoded -> Confirming -> Registered -> Idle
/// ```
///
/// Failed decodes, unknown events and rejected registrations surface a
/// notice and fall back to `Scanning` after `retry_backoff`. Camera
/// acquisition failures park the machine in `PermissionError` or
/// `CameraError` until dismissed or retried.
///
/// At most one capture session is held at any time, and it is released when
/// the orchestrator is dropped.
pub struct ScanOrchestrator<C, G>
where
    C: Camera,
    G: ScanGateway,
{
    camera: C,
    gateway: G,
    config: ScanConfig,
    state: ScanState,
    notice: Option<Notice>,
    session: Option<Box<dyn CaptureSession>>,
}

impl<C, G> ScanOrchestrator<C, G>
where
    C: Camera,
    G: ScanGateway,
{
    pub fn new(camera: C, gateway: G, config: ScanConfig) -> Self {
        Self {
            camera,
            gateway,
            config,
            state: ScanState::Idle,
            notice: None,
            session: None,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn has_capture(&self) -> bool {
        self.session.is_some()
    }

    // ──── Camera ────

    /// Acquire the camera and begin scanning. Ignored unless idle or in an
    /// error state.
    pub async fn start(&mut self) -> &ScanState {
        if !self.state.can_start() {
            return &self.state;
        }

        self.notice = None;
        self.acquire().await;
        &self.state
    }

    /// Guided retry after a permission failure
    pub async fn retry(&mut self) -> &ScanState {
        if self.state != ScanState::PermissionError {
            return &self.state;
        }
        self.start().await
    }

    /// Leave an error state
    pub fn dismiss(&mut self) -> &ScanState {
        if self.state.is_error() {
            self.state = ScanState::Idle;
            self.notice = None;
        }
        &self.state
    }

    /// Back to idle without registering anyone
    pub fn cancel(&mut self) -> &ScanState {
        if matches!(
            self.state,
            ScanState::Scanning | ScanState::Decoded { .. } | ScanState::Confirming { .. }
        ) {
            self.release();
            self.state = ScanState::Idle;
        }
        &self.state
    }

    async fn acquire(&mut self) {
        self.release();

        match self.camera.acquire().await {
            Ok(session) => {
                self.session = Some(session);
                self.state = ScanState::Scanning;
            }
            Err(e @ (CaptureError::PermissionDenied | CaptureError::NotFound)) => {
                warn!("Camera not accessible: {}", e);
                self.state = ScanState::PermissionError;
            }
            Err(e) => {
                warn!("Camera failed to start: {}", e);
                self.state = ScanState::CameraError {
                    message: e.to_string(),
                };
            }
        }
    }

    fn release(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.stop();
        }
    }

    // ──── Scanning ────

    /// Pull the next frame from the active capture and process it
    pub async fn scan_next(&mut self) -> &ScanState {
        if self.state != ScanState::Scanning {
            return &self.state;
        }

        let frame = match self.session.as_mut() {
            Some(session) => session.next_frame().await,
            None => None,
        };

        match frame {
            Some(text) => self.handle_frame(&text).await,
            None => {
                self.release();
                self.state = ScanState::CameraError {
                    message: "Camera stream ended".to_string(),
                };
                &self.state
            }
        }
    }

    /// Process one scanned text: decode it, then look the event up
    pub async fn handle_frame(&mut self, text: &str) -> &ScanState {
        if self.state != ScanState::Scanning {
            return &self.state;
        }

        self.release();

        let payload = match qr::decode(text) {
            Ok(payload) => payload,
            Err(e) => {
                self.fail_and_resume(e.to_string()).await;
                return &self.state;
            }
        };
        self.state = ScanState::Decoded {
            payload: payload.clone(),
        };

        match self.gateway.find_event(&payload.event_id).await {
            Ok(event) => {
                self.notice = Some(Notice::info(format!("Check in to {}?", event.title)));
                self.state = ScanState::Confirming { payload, event };
            }
            Err(e) => self.fail_and_resume(e.to_string()).await,
        }

        &self.state
    }

    // ──── Confirmation ────

    /// Register the scanned attendee. Returns the receipt on success, after
    /// which the machine is back in `Idle`.
    pub async fn confirm(&mut self) -> Option<ScanReceipt> {
        let payload = match &self.state {
            ScanState::Confirming { payload, .. } => payload.clone(),
            _ => return None,
        };

        match self
            .gateway
            .register(&payload.event_id, &payload.user_id)
            .await
        {
            Ok(receipt) => {
                info!(
                    "Checked in user {} to event {}",
                    receipt.user_id, receipt.event_id
                );
                self.notice = Some(Notice::success(format!(
                    "{} checked in to {}",
                    receipt.user_name, receipt.event_title
                )));
                self.state = ScanState::Registered {
                    receipt: receipt.clone(),
                };

                tokio::time::sleep(self.config.success_delay).await;
                self.state = ScanState::Idle;
                Some(receipt)
            }
            Err(e) => {
                warn!(
                    "Check-in of user {} to event {} rejected: {}",
                    payload.user_id, payload.event_id, e
                );
                self.fail_and_resume(e.to_string()).await;
                None
            }
        }
    }

    async fn fail_and_resume(&mut self, message: String) {
        self.notice = Some(Notice::error(message));
        tokio::time::sleep(self.config.retry_backoff).await;
        self.acquire().await;
    }
}

impl<C, G> Drop for ScanOrchestrator<C, G>
where
    C: Camera,
    G: ScanGateway,
{
    fn drop(&mut self) {
        self.release();
    }
}
