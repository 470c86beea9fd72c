//! brewls - reverse-dependency report for installed Homebrew packages
//!
//! This library reads the installed Homebrew formulae and casks, inverts
//! their dependency relation to find out which packages pulled in which,
//! and renders the result as text tables. It follows hexagonal
//! architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`inventory`): Package model, dependency inversion and root policy
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Homebrew CLI, table formatting and console I/O
//! - **Config** (`config`): Environment-driven runtime configuration
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use brewls::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = AppConfig::from_env();
//!
//! // Create adapters
//! let inventory_source = BrewCommandSource::from_config(&config);
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create and execute use case
//! let use_case = ListPackagesUseCase::new(inventory_source, progress_reporter);
//! let response = use_case.execute()?;
//!
//! // Format output
//! let model = ReportReadModelBuilder::build(&response.inventory, &ReportOptions::from_config(&config));
//! let output = TableFormatter::new().format(&model)?;
//! StdoutPresenter::new().present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        SilentProgressReporter, StderrProgressReporter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::TableFormatter;
    pub use crate::adapters::outbound::homebrew::{BrewCommandSource, SnapshotDecoder};
    pub use crate::application::dto::{ReportOptions, ReportResponse};
    pub use crate::application::factories::{ReporterFactory, ReporterKind};
    pub use crate::application::read_models::{
        ReportReadModel, ReportReadModelBuilder, RowView, SectionView,
    };
    pub use crate::application::use_cases::ListPackagesUseCase;
    pub use crate::config::{AppConfig, Feature, FeatureFlags};
    pub use crate::inventory::domain::{
        AnnotatedInventory, AnnotatedPackage, Category, InstallRecord, Inventory, Package,
        PackageName, Version,
    };
    pub use crate::inventory::policies::RootPolicy;
    pub use crate::inventory::services::DependencyGraphBuilder;
    pub use crate::ports::outbound::{
        InventorySource, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::{BrewLsError, ExitCode};
    pub use crate::shared::Result;
}
