/// Inventory domain - pure business logic for reverse-dependency analysis
///
/// No I/O happens in this layer; it works only on domain objects.
pub mod domain;
pub mod policies;
pub mod services;
