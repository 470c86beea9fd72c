use crate::inventory::domain::{AnnotatedInventory, AnnotatedPackage, Inventory, Package, PackageName};
use crate::inventory::policies::RootPolicy;
use std::collections::{BTreeSet, HashMap, HashSet};

/// DependencyGraphBuilder service for inverting the dependency relation
///
/// Each package in the snapshot lists only its own forward dependencies.
/// This service derives, for every package, the set of installed packages
/// that depend on it, and classifies it as root or non-root.
///
/// Only immediate predecessors are computed, so cyclic dependency data
/// terminates like any other input.
pub struct DependencyGraphBuilder;

impl DependencyGraphBuilder {
    /// Builds the annotated view of an inventory snapshot
    ///
    /// The snapshot itself is left untouched, so building twice from the
    /// same inventory yields equal results.
    ///
    /// # Arguments
    /// * `inventory` - The inventory snapshot, both categories
    ///
    /// # Returns
    /// An AnnotatedInventory in the same category and row order as the input
    pub fn build(inventory: &Inventory) -> AnnotatedInventory {
        let members: HashSet<&str> = inventory
            .packages()
            .map(|package| package.name().as_str())
            .collect();

        let mut dependents: HashMap<&str, BTreeSet<&PackageName>> = HashMap::new();
        let mut self_references: BTreeSet<&PackageName> = BTreeSet::new();

        for package in inventory.packages() {
            for dependency in package.effective_dependencies() {
                // Dangling references are not an error, they just have no reverse edge.
                if !members.contains(dependency.as_str()) {
                    continue;
                }
                if dependency == package.name() {
                    self_references.insert(package.name());
                    continue;
                }
                dependents
                    .entry(dependency.as_str())
                    .or_default()
                    .insert(package.name());
            }
        }

        let annotate = |package: &Package| {
            let installed_by: Vec<PackageName> = dependents
                .get(package.name().as_str())
                .map(|names| names.iter().map(|name| (*name).clone()).collect())
                .unwrap_or_default();
            let is_root = RootPolicy::is_root(package.explicitly_requested(), &installed_by);
            AnnotatedPackage::new(package.clone(), installed_by, is_root)
        };

        AnnotatedInventory::new(
            inventory.formulae().iter().map(&annotate).collect(),
            inventory.casks().iter().map(&annotate).collect(),
            self_references.into_iter().cloned().collect(),
        )
    }
}
