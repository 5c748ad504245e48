pub mod error;
pub mod http;
pub mod source;
pub mod tree;

pub use error::{RegistryError, Result};
pub use http::{HttpRegistry, DEFAULT_REGISTRY_URL};
pub use source::RegistrySource;
pub use tree::{flatten_tree, OkvedNode};
