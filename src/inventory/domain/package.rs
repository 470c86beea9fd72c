use crate::shared::error::BrewLsError;
use crate::shared::Result;
use std::borrow::Borrow;
use std::collections::BTreeSet;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// NewType wrapper for a case-sensitive package identifier (formula name or cask token)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(validation("Package name cannot be empty"));
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(validation(format!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            )));
        }

        // Tap-qualified names ("user/tap/foo") and versioned names ("python@3.12")
        // are legal, so only whitespace and control characters are rejected.
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(validation(format!(
                "Package name '{}' contains whitespace or control characters",
                name.escape_debug()
            )));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PackageName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for an installed version string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            return Err(validation("Package version cannot be empty"));
        }

        if version.len() > MAX_VERSION_LENGTH {
            return Err(validation(format!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            )));
        }

        if version.chars().any(char::is_control) {
            return Err(validation(format!(
                "Package version '{}' contains control characters",
                version.escape_debug()
            )));
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn validation(message: impl Into<String>) -> anyhow::Error {
    BrewLsError::Validation {
        message: message.into(),
    }
    .into()
}

/// Inventory category a package was reported under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Formula,
    Cask,
}

impl Category {
    /// Whether packages of this category record "installed on request"
    pub fn tracks_install_request(self) -> bool {
        matches!(self, Category::Formula)
    }
}

/// One install record of a package (a keg, for formulae)
#[derive(Debug, Clone, PartialEq)]
pub struct InstallRecord {
    version: Option<Version>,
    runtime_dependencies: Vec<PackageName>,
    installed_on_request: bool,
}

impl InstallRecord {
    pub fn new(
        version: Option<Version>,
        runtime_dependencies: Vec<PackageName>,
        installed_on_request: bool,
    ) -> Self {
        Self {
            version,
            runtime_dependencies,
            installed_on_request,
        }
    }

    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    pub fn runtime_dependencies(&self) -> &[PackageName] {
        &self.runtime_dependencies
    }

    pub fn installed_on_request(&self) -> bool {
        self.installed_on_request
    }
}

/// Package entity as reported by the inventory source
///
/// Install records are kept in source order; the last one is the
/// current installed state.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    name: PackageName,
    category: Category,
    display_name: Option<String>,
    build_dependencies: Vec<PackageName>,
    install_records: Vec<InstallRecord>,
}

impl Package {
    pub fn formula(
        name: PackageName,
        build_dependencies: Vec<PackageName>,
        install_records: Vec<InstallRecord>,
    ) -> Self {
        Self {
            name,
            category: Category::Formula,
            display_name: None,
            build_dependencies,
            install_records,
        }
    }

    /// Casks carry no dependency lists; an installed version becomes a single
    /// install record.
    pub fn cask(token: PackageName, display_name: Option<String>, installed: Option<Version>) -> Self {
        let install_records = installed
            .map(|version| vec![InstallRecord::new(Some(version), Vec::new(), false)])
            .unwrap_or_default();

        Self {
            name: token,
            category: Category::Cask,
            display_name: display_name.filter(|n| !n.is_empty()),
            build_dependencies: Vec::new(),
            install_records,
        }
    }

    pub fn name(&self) -> &PackageName {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Human-facing name: the cask's display name if present, otherwise the identifier
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(self.name.as_str())
    }

    pub fn build_dependencies(&self) -> &[PackageName] {
        &self.build_dependencies
    }

    pub fn install_records(&self) -> &[InstallRecord] {
        &self.install_records
    }

    pub fn latest_install(&self) -> Option<&InstallRecord> {
        self.install_records.last()
    }

    pub fn installed_version(&self) -> Option<&Version> {
        self.latest_install().and_then(InstallRecord::version)
    }

    /// Build dependencies plus the runtime dependencies of the latest install
    /// record, deduplicated.
    pub fn effective_dependencies(&self) -> BTreeSet<&PackageName> {
        let runtime = self
            .latest_install()
            .map(InstallRecord::runtime_dependencies)
            .unwrap_or_default();

        self.build_dependencies.iter().chain(runtime).collect()
    }

    /// `None` for categories that do not record the flag
    pub fn explicitly_requested(&self) -> Option<bool> {
        if !self.category.tracks_install_request() {
            return None;
        }
        Some(
            self.latest_install()
                .is_some_and(InstallRecord::installed_on_request),
        )
    }
}
