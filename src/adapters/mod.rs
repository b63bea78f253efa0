/// Adapters - concrete implementations of the port traits
///
/// Document readers on one side, the remote completion service on the other.
pub mod readers;
pub mod services;
