pub mod scan_state;

pub use scan_state::{Notice, NoticeKind, ScanReceipt, ScanState, ScannedEvent};
