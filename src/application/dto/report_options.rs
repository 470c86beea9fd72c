use crate::config::AppConfig;

/// ReportOptions - presentation options for building the report read model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Sort rows within each section by display name instead of inventory order
    pub sort_rows: bool,
}

impl ReportOptions {
    pub fn new(sort_rows: bool) -> Self {
        Self { sort_rows }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.sorted_output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FEATURE_FLAGS_ENV;

    #[test]
    fn test_default_keeps_inventory_order() {
        assert!(!ReportOptions::default().sort_rows);
    }

    #[test]
    fn test_from_config_sorted_flag() {
        let config = AppConfig::from_lookup(|key| {
            (key == FEATURE_FLAGS_ENV).then(|| "sorted".to_string())
        });
        assert!(ReportOptions::from_config(&config).sort_rows);
    }
}
