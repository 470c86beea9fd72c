/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod report_options;
mod report_response;

pub use report_options::ReportOptions;
pub use report_response::ReportResponse;
