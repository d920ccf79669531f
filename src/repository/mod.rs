//! Repository layer: in-memory stores for each resource

pub mod books;
pub mod publishers;
pub mod store;

pub use books::BooksRepository;
pub use publishers::PublishersRepository;
pub use store::MemoryStore;

/// Container for the two independent stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: BooksRepository,
    pub publishers: PublishersRepository,
}

impl Repository {
    /// Stores loaded with the built-in catalog, reloaded fresh on every start
    pub fn seeded() -> Self {
        Self {
            books: MemoryStore::with_seed(books::seed_books()),
            publishers: MemoryStore::with_seed(publishers::seed_publishers()),
        }
    }

    /// Empty stores, ids starting at 1
    pub fn empty() -> Self {
        Self::default()
    }
}
