pub mod use_case_scan_gateway;

pub use use_case_scan_gateway::UseCaseScanGateway;
