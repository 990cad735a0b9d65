//! Post repository implementations - in-memory store.
//! The PostgreSQL repository lives in [`crate::database`].

mod memory;

pub use memory::InMemoryPostRepository;
