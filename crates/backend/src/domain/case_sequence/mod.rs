pub mod allocator;
pub mod memory;
pub mod repository;
pub mod sqlite;

pub use allocator::{AllocatorError, SequenceAllocator};
pub use memory::InMemorySequenceAllocator;
pub use sqlite::SqliteSequenceAllocator;
