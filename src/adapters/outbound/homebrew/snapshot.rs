use crate::inventory::domain::{InstallRecord, Inventory, Package, PackageName, Version};
use crate::shared::error::BrewLsError;
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;

/// Top-level structure of `brew info --json=v2`
#[derive(Debug, Deserialize)]
struct BrewInfoDocument {
    #[serde(default)]
    formulae: Vec<BrewFormula>,
    #[serde(default)]
    casks: Vec<BrewCask>,
}

#[derive(Debug, Deserialize)]
struct BrewFormula {
    name: String,
    #[serde(default)]
    installed: Option<Vec<BrewInstalled>>,
    /// Build-time dependency names
    #[serde(default)]
    dependencies: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct BrewInstalled {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    runtime_dependencies: Option<Vec<BrewRuntimeDependency>>,
    #[serde(default)]
    installed_on_request: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct BrewRuntimeDependency {
    full_name: String,
}

#[derive(Debug, Deserialize)]
struct BrewCask {
    token: String,
    /// Display names, first one preferred
    #[serde(default)]
    name: Option<Vec<String>>,
    /// Installed version
    #[serde(default)]
    installed: Option<String>,
}

/// SnapshotDecoder for turning a `brew info --json=v2` document into an Inventory
///
/// Decoding is all-or-nothing: any structural or validation error fails
/// the whole document.
pub struct SnapshotDecoder;

impl SnapshotDecoder {
    pub fn decode(content: &str) -> Result<Inventory> {
        let document: BrewInfoDocument = serde_json::from_str(content)
            .map_err(|source| BrewLsError::SnapshotDecode { source })?;

        let formulae = document
            .formulae
            .into_iter()
            .map(Self::convert_formula)
            .collect::<Result<Vec<_>>>()?;

        let casks = document
            .casks
            .into_iter()
            .map(Self::convert_cask)
            .collect::<Result<Vec<_>>>()?;

        Ok(Inventory::new(formulae, casks))
    }

    fn convert_formula(formula: BrewFormula) -> Result<Package> {
        let context = || format!("Invalid formula entry '{}'", formula.name.escape_debug());

        let build_dependencies =
            Self::dependency_names(formula.dependencies.iter().flatten().map(String::as_str));

        let install_records = formula
            .installed
            .iter()
            .flatten()
            .map(Self::convert_install_record)
            .collect::<Result<Vec<_>>>()
            .with_context(context)?;

        let name = PackageName::new(formula.name.clone()).with_context(context)?;

        Ok(Package::formula(name, build_dependencies, install_records))
    }

    fn convert_install_record(installed: &BrewInstalled) -> Result<InstallRecord> {
        let version = Self::optional_version(installed.version.clone())?;

        let runtime_dependencies = Self::dependency_names(
            installed
                .runtime_dependencies
                .iter()
                .flatten()
                .map(|dependency| dependency.full_name.as_str()),
        );

        Ok(InstallRecord::new(
            version,
            runtime_dependencies,
            installed.installed_on_request.unwrap_or(false),
        ))
    }

    fn convert_cask(cask: BrewCask) -> Result<Package> {
        let context = || format!("Invalid cask entry '{}'", cask.token.escape_debug());

        let token = PackageName::new(cask.token.clone()).with_context(context)?;
        let installed = Self::optional_version(cask.installed.clone()).with_context(context)?;
        let display_name = cask.name.as_ref().and_then(|names| names.first().cloned());

        Ok(Package::cask(token, display_name, installed))
    }

    /// Only package keys are validated. A reference that is not a valid
    /// identifier cannot name an installed package, so it is dropped like
    /// any other dangling reference.
    fn dependency_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<PackageName> {
        names
            .filter_map(|name| PackageName::new(name.to_string()).ok())
            .collect()
    }

    /// Empty strings are treated as absent
    fn optional_version(version: Option<String>) -> Result<Option<Version>> {
        version.filter(|v| !v.is_empty()).map(Version::new).transpose()
    }
}
