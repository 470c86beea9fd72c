/// Use cases module containing application business logic orchestration
mod list_packages;

pub use list_packages::ListPackagesUseCase;
