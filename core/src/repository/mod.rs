pub mod file;
pub mod memory;
pub mod traits;

// Re-export
pub use file::FileEntryRepository;
pub use memory::MemoryEntryRepository;
pub use traits::EntryRepository;
