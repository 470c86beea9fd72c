/// Mock implementations for testing
mod mock_inventory_source;
mod mock_progress_reporter;

pub use mock_inventory_source::MockInventorySource;
pub use mock_progress_reporter::MockProgressReporter;
