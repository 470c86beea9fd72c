use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
use crate::config::AppConfig;
use crate::ports::outbound::ProgressReporter;

/// Progress reporter implementations selectable at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReporterKind {
    /// Step messages and a spinner on stderr
    Stderr,
    /// Discards every message
    Silent,
}

/// Factory for creating progress reporters
///
/// Selects the stderr reporter or the silent one from the `quiet` feature.
pub struct ReporterFactory;

impl ReporterFactory {
    /// Resolves which reporter the configuration asks for
    pub fn kind_for(config: &AppConfig) -> ReporterKind {
        if config.quiet() {
            ReporterKind::Silent
        } else {
            ReporterKind::Stderr
        }
    }

    /// Creates a reporter instance of the given kind
    ///
    /// # Examples
    /// ```
    /// use brewls::application::factories::{ReporterFactory, ReporterKind};
    /// use brewls::config::AppConfig;
    ///
    /// let kind = ReporterFactory::kind_for(&AppConfig::default());
    /// assert_eq!(kind, ReporterKind::Stderr);
    ///
    /// let reporter = ReporterFactory::create(kind);
    /// reporter.report("hello");
    /// ```
    pub fn create(kind: ReporterKind) -> Box<dyn ProgressReporter> {
        match kind {
            ReporterKind::Stderr => Box::new(StderrProgressReporter::new()),
            ReporterKind::Silent => Box::new(SilentProgressReporter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FEATURE_FLAGS_ENV;

    fn config_with_flags(flags: &'static str) -> AppConfig {
        AppConfig::from_lookup(|key| (key == FEATURE_FLAGS_ENV).then(|| flags.to_string()))
    }

    #[test]
    fn test_default_config_selects_stderr_reporter() {
        assert_eq!(
            ReporterFactory::kind_for(&AppConfig::default()),
            ReporterKind::Stderr
        );
    }

    #[test]
    fn test_quiet_flag_selects_silent_reporter() {
        assert_eq!(
            ReporterFactory::kind_for(&config_with_flags("quiet")),
            ReporterKind::Silent
        );
        assert_eq!(
            ReporterFactory::kind_for(&config_with_flags("sorted, QUIET")),
            ReporterKind::Silent
        );
    }

    #[test]
    fn test_sorted_flag_keeps_stderr_reporter() {
        assert_eq!(
            ReporterFactory::kind_for(&config_with_flags("sorted")),
            ReporterKind::Stderr
        );
    }
}
