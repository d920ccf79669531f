//! Books service

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookPayload},
    repository::BooksRepository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: BooksRepository,
}

impl BooksService {
    pub fn new(repository: BooksRepository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.repository.list().await
    }

    /// Number of books currently stored
    pub async fn count(&self) -> usize {
        self.repository.len().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository
            .get_by_id(id)
            .await
            .ok_or_else(AppError::not_found::<Book>)
    }

    pub async fn create(&self, data: BookPayload) -> Book {
        let book = self.repository.create(data.into()).await;
        tracing::info!("Created book id={} publisher_id={}", book.id, book.publisher_id);
        book
    }

    pub async fn update(&self, id: i64, data: BookPayload) -> AppResult<Book> {
        let book = self
            .repository
            .update(id, data.into())
            .await
            .ok_or_else(AppError::not_found::<Book>)?;
        tracing::info!("Updated book id={}", id);
        Ok(book)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repository.delete(id).await {
            return Err(AppError::not_found::<Book>());
        }
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }
}
