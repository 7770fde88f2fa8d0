// Service exports
pub mod matching;
pub mod memory;
pub mod postgres;
pub mod storage;

pub use matching::MatchService;
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use storage::{JobFilter, Storage, StorageError, DEFAULT_PAGE_LIMIT};
