use crate::inventory::domain::PackageName;

/// RootPolicy for deciding whether a package is a top-level installation
///
/// Rules:
/// 1. If the package's category records "installed on request", the package
///    is root only when it was requested AND nothing installed depends on it.
/// 2. Otherwise it is root when nothing installed depends on it.
pub struct RootPolicy;

impl RootPolicy {
    /// Classifies a package
    ///
    /// # Arguments
    /// * `explicitly_requested` - The request flag, or `None` when the category has none
    /// * `installed_by` - Reverse dependencies of the package
    pub fn is_root(explicitly_requested: Option<bool>, installed_by: &[PackageName]) -> bool {
        let has_dependents = !installed_by.is_empty();
        match explicitly_requested {
            Some(requested) => requested && !has_dependents,
            None => !has_dependents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dependents(names: &[&str]) -> Vec<PackageName> {
        names
            .iter()
            .map(|n| PackageName::new(n.to_string()).unwrap())
            .collect()
    }

    #[test]
    fn test_requested_without_dependents_is_root() {
        assert!(RootPolicy::is_root(Some(true), &[]));
    }

    #[test]
    fn test_requested_with_dependents_is_not_root() {
        assert!(!RootPolicy::is_root(Some(true), &dependents(&["git"])));
    }

    #[test]
    fn test_not_requested_is_never_root() {
        assert!(!RootPolicy::is_root(Some(false), &[]));
        assert!(!RootPolicy::is_root(Some(false), &dependents(&["git"])));
    }

    #[test]
    fn test_unflagged_category_uses_presence_only() {
        assert!(RootPolicy::is_root(None, &[]));
        assert!(!RootPolicy::is_root(None, &dependents(&["a", "b"])));
    }
}
