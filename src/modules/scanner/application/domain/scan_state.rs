use chrono::{DateTime, NaiveDate, Utc};

use crate::qr::QrPayload;

/// Event shown on the confirmation step
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
    pub city: String,
}

/// Outcome of a confirmed check-in
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReceipt {
    pub attendance_id: String,
    pub event_id: String,
    pub event_title: String,
    pub user_id: String,
    pub user_name: String,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanState {
    Idle,
    Scanning,
    Decoded { payload: QrPayload },
    Confirming { payload: QrPayload, event: ScannedEvent },
    Registered { receipt: ScanReceipt },
    PermissionError,
    CameraError { message: String },
}

impl ScanState {
    /// States from which a capture may be (re)started
    pub fn can_start(&self) -> bool {
        matches!(
            self,
            ScanState::Idle | ScanState::PermissionError | ScanState::CameraError { .. }
        )
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            ScanState::PermissionError | ScanState::CameraError { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Transient message for the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}
