pub mod base64;
pub mod json;
pub mod string;

// Re-export common utilities
pub use self::base64::base64_encode;
pub use json::to_ascii_json;
pub use string::{clean_value, normalize_whitespace, strip_braces, strip_quotes};
