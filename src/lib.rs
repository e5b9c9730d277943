pub mod generator;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;
#[cfg(feature = "web-api")]
pub mod web_handlers;

// Re-export the main entry points for easier access
pub use generator::{convert_all, convert_node, convert_nodes};
pub use models::{NodeValue, ParsedNode, ProxyType};
pub use parser::parse_nodes;
pub use settings::Settings;
