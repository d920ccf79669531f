//! Data models for the publisher demo

pub mod book;
pub mod publisher;

pub use book::{Book, BookPayload};
pub use publisher::{Publisher, PublisherPayload};

/// A record kept in an in-memory store, identified by a store-assigned id
pub trait Record: Clone + Send + Sync + 'static {
    /// Lowercase name used in client-facing messages ("Invalid book ID")
    const NAME: &'static str;
    /// Capitalized name used in client-facing messages ("Book not found")
    const DISPLAY_NAME: &'static str;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);
}
