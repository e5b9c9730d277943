//! Core data models
//!
//! This module contains the data structures passed between the parser and
//! the URI generators, separated from the logic that operates on them.
//!
//! ```rust
//! use nodeconv::models::{NodeValue, ParsedNode, ProxyType};
//!
//! let node: ParsedNode = [
//!     ("name", NodeValue::from("A")),
//!     ("type", NodeValue::from("trojan")),
//!     ("port", NodeValue::Integer(443)),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(ProxyType::from_type_field(&node.node_type()), ProxyType::Trojan);
//! assert_eq!(node.text("port").as_deref(), Some("443"));
//! ```

mod node;
mod proxy;

pub use node::*;
pub use proxy::*;
