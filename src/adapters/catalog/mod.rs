//! Catalog source adapters.
//!
//! - `BuiltinCatalog` - one of the compiled-in skill lists
//! - `YamlCatalogFile` - a skill list read from a YAML file

mod builtin;
mod yaml_file;

pub use builtin::BuiltinCatalog;
pub use yaml_file::YamlCatalogFile;
