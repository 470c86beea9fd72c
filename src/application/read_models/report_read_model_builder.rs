//! Builder for constructing ReportReadModel from domain objects
//!
//! This module resolves every display rule (root marker, version sentinel,
//! dependent list joining, optional sorting) so formatters only lay out text.

use super::report_read_model::{ReportReadModel, RowView, SectionView};
use crate::application::dto::ReportOptions;
use crate::inventory::domain::{AnnotatedInventory, AnnotatedPackage, Category};

/// Appended to the name of root packages
pub const ROOT_MARKER: &str = " *";

/// Shown in the version column when no install record exists
pub const NOT_AVAILABLE: &str = "N/A";

/// Separator between reverse dependencies in the Installed By column
const INSTALLED_BY_SEPARATOR: &str = ", ";

/// Builder for constructing ReportReadModel from domain objects
pub struct ReportReadModelBuilder;

impl ReportReadModelBuilder {
    /// Builds a ReportReadModel from the annotated inventory
    ///
    /// # Arguments
    /// * `inventory` - Packages with reverse dependencies and root flags
    /// * `options` - Presentation options
    ///
    /// # Returns
    /// A read model with the formulae section followed by the casks section
    pub fn build(inventory: &AnnotatedInventory, options: &ReportOptions) -> ReportReadModel {
        let sections = [Category::Formula, Category::Cask]
            .into_iter()
            .map(|category| SectionView {
                title: Self::section_title(category).to_string(),
                rows: Self::build_rows(inventory.category(category), options),
            })
            .collect();

        ReportReadModel { sections }
    }

    fn section_title(category: Category) -> &'static str {
        match category {
            Category::Formula => "Homebrew Formulae",
            Category::Cask => "Homebrew Casks",
        }
    }

    fn build_rows(packages: &[AnnotatedPackage], options: &ReportOptions) -> Vec<RowView> {
        let mut ordered: Vec<&AnnotatedPackage> = packages.iter().collect();
        if options.sort_rows {
            // Stable, so packages sharing a display name keep inventory order.
            ordered.sort_by(|a, b| a.package().display_name().cmp(b.package().display_name()));
        }

        ordered.into_iter().map(Self::build_row).collect()
    }

    fn build_row(annotated: &AnnotatedPackage) -> RowView {
        let package = annotated.package();

        let mut name = package.display_name().to_string();
        if annotated.is_root() {
            name.push_str(ROOT_MARKER);
        }

        let version = package
            .installed_version()
            .map(|v| v.as_str())
            .unwrap_or(NOT_AVAILABLE)
            .to_string();

        let installed_by = annotated
            .installed_by()
            .iter()
            .map(|dependent| dependent.as_str())
            .collect::<Vec<_>>()
            .join(INSTALLED_BY_SEPARATOR);

        RowView {
            name,
            version,
            installed_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::domain::{InstallRecord, Inventory, Package, PackageName, Version};
    use crate::inventory::services::DependencyGraphBuilder;

    fn name(s: &str) -> PackageName {
        PackageName::new(s.to_string()).unwrap()
    }

    fn version(s: &str) -> Version {
        Version::new(s.to_string()).unwrap()
    }

    fn formula(pkg: &str, ver: &str, requested: bool, runtime: &[&str]) -> Package {
        Package::formula(
            name(pkg),
            vec![],
            vec![InstallRecord::new(
                Some(version(ver)),
                runtime.iter().map(|d| name(d)).collect(),
                requested,
            )],
        )
    }

    fn sample_inventory() -> AnnotatedInventory {
        let inventory = Inventory::new(
            vec![
                formula("packageB", "1.1.0", false, &["packageC"]),
                formula("packageA", "1.0.0", true, &["packageB"]),
                formula("packageC", "1.2.0", false, &[]),
                formula("packageD", "2.0.0", true, &["packageB"]),
            ],
            vec![Package::cask(
                name("caskE"),
                Some("Cask E App".to_string()),
                Some(version("1.0.0")),
            )],
        );
        DependencyGraphBuilder::build(&inventory)
    }

    #[test]
    fn test_build_sections_in_fixed_order() {
        let model = ReportReadModelBuilder::build(&sample_inventory(), &ReportOptions::default());

        assert_eq!(model.sections.len(), 2);
        assert_eq!(model.sections[0].title, "Homebrew Formulae");
        assert_eq!(model.sections[1].title, "Homebrew Casks");
    }

    #[test]
    fn test_build_rows_resolve_display_rules() {
        let model = ReportReadModelBuilder::build(&sample_inventory(), &ReportOptions::default());
        let formulae = &model.sections[0].rows;

        assert_eq!(formulae[0].name, "packageB");
        assert_eq!(formulae[0].version, "1.1.0");
        assert_eq!(formulae[0].installed_by, "packageA, packageD");
        assert_eq!(formulae[1].name, "packageA *");
        assert_eq!(formulae[1].installed_by, "");

        let casks = &model.sections[1].rows;
        assert_eq!(casks[0].name, "Cask E App *");
        assert_eq!(casks[0].version, "1.0.0");
    }

    #[test]
    fn test_build_keeps_inventory_order_by_default() {
        let model = ReportReadModelBuilder::build(&sample_inventory(), &ReportOptions::default());
        let names: Vec<&str> = model.sections[0].rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["packageB", "packageA *", "packageC", "packageD *"]);
    }

    #[test]
    fn test_build_sorted_rows() {
        let model = ReportReadModelBuilder::build(&sample_inventory(), &ReportOptions::new(true));
        let names: Vec<&str> = model.sections[0].rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["packageA *", "packageB", "packageC", "packageD *"]);
    }

    #[test]
    fn test_build_missing_version_uses_sentinel() {
        let inventory = Inventory::new(
            vec![Package::formula(name("no-install-formula"), vec![name("depA")], vec![])],
            vec![Package::cask(name("pending"), None, None)],
        );
        let model = ReportReadModelBuilder::build(
            &DependencyGraphBuilder::build(&inventory),
            &ReportOptions::default(),
        );

        assert_eq!(model.sections[0].rows[0].name, "no-install-formula");
        assert_eq!(model.sections[0].rows[0].version, NOT_AVAILABLE);
        assert_eq!(model.sections[1].rows[0].name, "pending *");
        assert_eq!(model.sections[1].rows[0].version, NOT_AVAILABLE);
    }

    #[test]
    fn test_build_empty_inventory() {
        let model = ReportReadModelBuilder::build(&AnnotatedInventory::default(), &ReportOptions::default());
        assert_eq!(model.sections.len(), 2);
        assert!(model.sections.iter().all(|s| s.rows.is_empty()));
    }
}
