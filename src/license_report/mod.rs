/// Domain layer - lockfile entries, package records and the pure services
/// that turn yarn.lock text into them.
pub mod domain;
pub mod services;
