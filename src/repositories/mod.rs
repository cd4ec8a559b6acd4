mod in_memory;
mod traits;

pub use in_memory::InMemoryContactRepository;
pub use traits::ContactRepository;
