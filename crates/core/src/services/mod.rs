pub mod aggregator_service;
pub mod dividend_service;
pub mod snapshot_service;
pub mod view_service;
