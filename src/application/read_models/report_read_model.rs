//! Report read model
//!
//! Display-ready view of the annotated inventory: every cell is already a
//! string, so formatters only deal with layout.

/// Unified read model for the package report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportReadModel {
    /// One section per inventory category, formulae first
    pub sections: Vec<SectionView>,
}

/// View of one inventory category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    /// Section title (e.g., "Homebrew Formulae")
    pub title: String,
    pub rows: Vec<RowView>,
}

/// View of one package row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Display name, with the root marker appended for root packages
    pub name: String,
    /// Installed version, or the not-available sentinel
    pub version: String,
    /// Comma-joined reverse dependencies, empty when there are none
    pub installed_by: String,
}
