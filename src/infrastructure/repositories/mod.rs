mod fixtures;
mod memory;

pub use fixtures::Fixtures;
pub use memory::InMemoryStore;
