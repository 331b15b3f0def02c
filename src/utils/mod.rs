// Module exports for utilities

pub mod format_token;

pub use format_token::{normalize_format, scan_token, to_strftime, FormatToken};
