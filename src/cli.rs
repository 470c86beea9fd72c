use clap::Parser;

/// List installed Homebrew packages and what installed them
#[derive(Parser, Debug)]
#[command(name = "brewls")]
#[command(version)]
#[command(
    about = "List installed Homebrew formulae and casks with their reverse dependencies",
    long_about = "List installed Homebrew formulae and casks with their reverse dependencies.\n\n\
Packages marked with '*' were installed on request and are not required by any other \
installed package.\n\n\
Environment:\n  \
BREWLS_FEATURE_FLAGS  comma-separated feature flags (sorted, quiet)\n  \
BREWLS_BREW_BIN       path to the brew executable (defaults to PATH lookup)"
)]
pub struct Args {}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_rejects_unknown_option() {
        let result = Args::try_parse_from(["brewls", "--invalid-option"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_accepts_no_arguments() {
        assert!(Args::try_parse_from(["brewls"]).is_ok());
    }
}
