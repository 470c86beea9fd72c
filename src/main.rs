mod cli;

use brewls::adapters::outbound::console::StdoutPresenter;
use brewls::adapters::outbound::formatters::TableFormatter;
use brewls::adapters::outbound::homebrew::BrewCommandSource;
use brewls::application::dto::ReportOptions;
use brewls::application::factories::ReporterFactory;
use brewls::application::read_models::ReportReadModelBuilder;
use brewls::application::use_cases::ListPackagesUseCase;
use brewls::config::AppConfig;
use brewls::ports::outbound::{OutputPresenter, ProgressReporter, ReportFormatter};
use brewls::shared::error::ExitCode;
use brewls::shared::Result;
use cli::Args;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let _args = Args::parse_args();

    // Read configuration once
    let config = AppConfig::from_env();

    let progress_reporter = ReporterFactory::create(ReporterFactory::kind_for(&config));
    warn_unknown_flags(&config, progress_reporter.as_ref());

    // Create adapters (Dependency Injection)
    let inventory_source = BrewCommandSource::from_config(&config);

    // Create use case with injected dependencies
    let use_case = ListPackagesUseCase::new(inventory_source, progress_reporter);

    // Execute use case
    let response = use_case.execute()?;

    // Resolve display rules and render
    let options = ReportOptions::from_config(&config);
    let model = ReportReadModelBuilder::build(&response.inventory, &options);
    let formatted_output = TableFormatter::new().format(&model)?;

    // Present output
    StdoutPresenter::new().present(&formatted_output)?;

    Ok(())
}

fn warn_unknown_flags(config: &AppConfig, reporter: &dyn ProgressReporter) {
    for flag in config.feature_flags.unknown_flags() {
        reporter.report_error(&format!(
            "⚠️  Warning: Unknown feature flag '{}' will be ignored.",
            flag
        ));
    }
}
