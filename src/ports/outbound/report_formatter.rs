use crate::application::read_models::ReportReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering the package report
pub trait ReportFormatter {
    /// Formats the report read model
    ///
    /// # Arguments
    /// * `model` - Sections and rows already resolved to display strings
    ///
    /// # Returns
    /// Formatted report content as a string
    fn format(&self, model: &ReportReadModel) -> Result<String>;
}
