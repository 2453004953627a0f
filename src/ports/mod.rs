/// Ports module defining the interfaces between the application core
/// and the infrastructure (file system, console).
pub mod outbound;
