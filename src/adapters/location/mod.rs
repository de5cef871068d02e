//! Location adapters.
//!
//! - `InMemoryLocation` - an address held in memory (terminal driver, tests)

mod in_memory;

pub use in_memory::InMemoryLocation;
