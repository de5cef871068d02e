//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogSource` - where the skill catalog comes from
//! - `Location` - the addressable location holding the `data` parameter

mod catalog_source;
mod location;

pub use catalog_source::CatalogSource;
pub use location::{Location, DATA_PARAM};
