use super::{Category, Package, PackageName};

/// A package together with its derived reverse-dependency data
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedPackage {
    package: Package,
    installed_by: Vec<PackageName>,
    is_root: bool,
}

impl AnnotatedPackage {
    pub fn new(package: Package, installed_by: Vec<PackageName>, is_root: bool) -> Self {
        Self {
            package,
            installed_by,
            is_root,
        }
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Installed packages depending on this one, sorted and duplicate-free
    pub fn installed_by(&self) -> &[PackageName] {
        &self.installed_by
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }
}

/// AnnotatedInventory aggregate: the inventory snapshot with reverse
/// dependencies and root classification attached
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotatedInventory {
    formulae: Vec<AnnotatedPackage>,
    casks: Vec<AnnotatedPackage>,
    self_references: Vec<PackageName>,
}

impl AnnotatedInventory {
    pub fn new(
        formulae: Vec<AnnotatedPackage>,
        casks: Vec<AnnotatedPackage>,
        self_references: Vec<PackageName>,
    ) -> Self {
        Self {
            formulae,
            casks,
            self_references,
        }
    }

    pub fn formulae(&self) -> &[AnnotatedPackage] {
        &self.formulae
    }

    pub fn casks(&self) -> &[AnnotatedPackage] {
        &self.casks
    }

    pub fn category(&self, category: Category) -> &[AnnotatedPackage] {
        match category {
            Category::Formula => &self.formulae,
            Category::Cask => &self.casks,
        }
    }

    pub fn packages(&self) -> impl Iterator<Item = &AnnotatedPackage> {
        self.formulae.iter().chain(&self.casks)
    }

    /// Packages whose own dependency data names themselves
    pub fn self_references(&self) -> &[PackageName] {
        &self.self_references
    }

    /// Looks up the first package with the given identifier
    pub fn find(&self, name: &str) -> Option<&AnnotatedPackage> {
        self.packages().find(|p| p.package().name().as_str() == name)
    }

    pub fn root_count(&self) -> usize {
        self.packages().filter(|p| p.is_root()).count()
    }

    pub fn total_package_count(&self) -> usize {
        self.formulae.len() + self.casks.len()
    }
}
