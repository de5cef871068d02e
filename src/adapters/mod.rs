//! Adapters - Implementations of port interfaces.
//!
//! - `catalog` - built-in and YAML file catalog sources
//! - `location` - in-memory addressable location

pub mod catalog;
pub mod location;

pub use catalog::{BuiltinCatalog, YamlCatalogFile};
pub use location::InMemoryLocation;
