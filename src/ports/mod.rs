/// Ports module defining the interfaces of the hexagonal architecture
///
/// Outbound (driven) ports are the traits the traversal and the use case
/// depend on; adapters provide their implementations.
pub mod outbound;
