use crate::inventory::domain::AnnotatedInventory;

/// ReportResponse - Response DTO from the list-packages use case
///
/// Carries the annotated inventory; adapters turn it into a read model
/// and format it.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// Packages with reverse dependencies and root classification attached
    pub inventory: AnnotatedInventory,
}

impl ReportResponse {
    pub fn new(inventory: AnnotatedInventory) -> Self {
        Self { inventory }
    }
}
