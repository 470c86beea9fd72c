use crate::application::dto::ReportResponse;
use crate::inventory::domain::{AnnotatedInventory, Inventory};
use crate::inventory::services::DependencyGraphBuilder;
use crate::ports::outbound::{InventorySource, ProgressReporter};
use crate::shared::Result;

/// ListPackagesUseCase - Core use case for the installed-package report
///
/// Orchestrates the single-shot pipeline: fetch the snapshot, invert the
/// dependency relation, surface diagnostics. Infrastructure is injected
/// through generics.
///
/// # Type Parameters
/// * `S` - InventorySource implementation
/// * `PR` - ProgressReporter implementation
pub struct ListPackagesUseCase<S, PR> {
    inventory_source: S,
    progress_reporter: PR,
}

impl<S, PR> ListPackagesUseCase<S, PR>
where
    S: InventorySource,
    PR: ProgressReporter,
{
    /// Creates a new ListPackagesUseCase with injected dependencies
    pub fn new(inventory_source: S, progress_reporter: PR) -> Self {
        Self {
            inventory_source,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Returns
    /// ReportResponse carrying the annotated inventory
    ///
    /// # Errors
    /// Fetch and decode failures are returned unchanged; nothing partial
    /// is produced.
    pub fn execute(&self) -> Result<ReportResponse> {
        // Step 1: Fetch and decode the snapshot
        let inventory = self.fetch_inventory()?;

        // Step 2: Invert dependencies and classify roots
        let annotated = self.build_graph(&inventory);

        Ok(ReportResponse::new(annotated))
    }

    fn fetch_inventory(&self) -> Result<Inventory> {
        self.progress_reporter
            .begin_wait("🍺 Reading installed packages from Homebrew...");

        let inventory = self.inventory_source.fetch_inventory().inspect_err(|_| {
            self.progress_reporter
                .report_error("❌ Failed to read installed packages");
        })?;

        self.progress_reporter.report_completion(&format!(
            "✅ Detected {} formula(e) and {} cask(s)",
            inventory.formulae().len(),
            inventory.casks().len()
        ));

        Ok(inventory)
    }

    fn build_graph(&self, inventory: &Inventory) -> AnnotatedInventory {
        let annotated = DependencyGraphBuilder::build(inventory);

        for name in annotated.self_references() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Package '{}' lists itself as a dependency; the self-reference was ignored.",
                name
            ));
        }

        self.progress_reporter.report(&format!(
            "🔗 Resolved reverse dependencies: {} root package(s)",
            annotated.root_count()
        ));

        annotated
    }
}
