/// Console adapters for stderr diagnostics and stdout output
mod progress_reporter;
mod stdout_presenter;

pub use progress_reporter::{SilentProgressReporter, StderrProgressReporter};
pub use stdout_presenter::StdoutPresenter;
