/// Homebrew adapters: CLI invocation and JSON snapshot decoding
mod brew_command;
mod snapshot;

pub use brew_command::{BrewCommandSource, BREW_INFO_ARGS};
pub use snapshot::SnapshotDecoder;
