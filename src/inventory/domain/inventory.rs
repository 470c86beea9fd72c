use super::{Category, Package};

/// Inventory snapshot: every installed package, partitioned by category
///
/// Categories exist for reporting only; dependency references cross them
/// freely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    formulae: Vec<Package>,
    casks: Vec<Package>,
}

impl Inventory {
    pub fn new(formulae: Vec<Package>, casks: Vec<Package>) -> Self {
        Self { formulae, casks }
    }

    pub fn formulae(&self) -> &[Package] {
        &self.formulae
    }

    pub fn casks(&self) -> &[Package] {
        &self.casks
    }

    pub fn category(&self, category: Category) -> &[Package] {
        match category {
            Category::Formula => &self.formulae,
            Category::Cask => &self.casks,
        }
    }

    /// All packages, formulae first
    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.formulae.iter().chain(&self.casks)
    }

    pub fn total_package_count(&self) -> usize {
        self.formulae.len() + self.casks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_package_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::domain::PackageName;

    fn name(s: &str) -> PackageName {
        PackageName::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_inventory_empty() {
        let inventory = Inventory::default();
        assert!(inventory.is_empty());
        assert_eq!(inventory.total_package_count(), 0);
        assert_eq!(inventory.packages().count(), 0);
    }

    #[test]
    fn test_inventory_packages_iterates_both_categories() {
        let inventory = Inventory::new(
            vec![Package::formula(name("git"), vec![], vec![])],
            vec![Package::cask(name("firefox"), None, None)],
        );

        let names: Vec<&str> = inventory.packages().map(|p| p.name().as_str()).collect();
        assert_eq!(names, vec!["git", "firefox"]);
        assert_eq!(inventory.category(Category::Cask).len(), 1);
        assert_eq!(inventory.total_package_count(), 2);
    }
}
