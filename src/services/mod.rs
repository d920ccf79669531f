//! Business logic services

pub mod books;
pub mod publishers;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub publishers: publishers::PublishersService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BooksService::new(repository.books),
            publishers: publishers::PublishersService::new(repository.publishers),
        }
    }
}
