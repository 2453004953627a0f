/// Formatter adapters for the license report
mod license_text_formatter;

pub use license_text_formatter::LicenseTextFormatter;
