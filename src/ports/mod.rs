/// Ports module defining interfaces for hexagonal architecture
///
/// The CLI drives the application directly, so only outbound (driven)
/// ports are defined.
pub mod outbound;
