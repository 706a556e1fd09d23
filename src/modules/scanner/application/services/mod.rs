pub mod scan_orchestrator;

pub use scan_orchestrator::{ScanConfig, ScanOrchestrator};
