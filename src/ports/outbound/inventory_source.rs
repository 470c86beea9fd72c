use crate::inventory::domain::Inventory;
use crate::shared::Result;

/// InventorySource port for obtaining the installed-package snapshot
///
/// This port abstracts the external package manager invocation needed to
/// list installed packages with their declared dependencies.
pub trait InventorySource {
    /// Fetches the raw snapshot document
    ///
    /// # Returns
    /// The snapshot as emitted by the package manager
    ///
    /// # Errors
    /// Returns an error if:
    /// - The package manager executable cannot be found or started
    /// - The package manager exits unsuccessfully
    fn fetch_snapshot(&self) -> Result<String>;

    /// Fetches and decodes the snapshot into an Inventory
    ///
    /// # Errors
    /// Returns an error if fetching fails or the document is malformed.
    /// No partially decoded inventory is ever returned.
    fn fetch_inventory(&self) -> Result<Inventory>;
}
