//! Publishers service
//!
//! Deleting a publisher leaves books referencing it untouched.

use crate::{
    error::{AppError, AppResult},
    models::{Publisher, PublisherPayload},
    repository::PublishersRepository,
};

#[derive(Clone)]
pub struct PublishersService {
    repository: PublishersRepository,
}

impl PublishersService {
    pub fn new(repository: PublishersRepository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Publisher> {
        self.repository.list().await
    }

    /// Number of publishers currently stored
    pub async fn count(&self) -> usize {
        self.repository.len().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Publisher> {
        self.repository
            .get_by_id(id)
            .await
            .ok_or_else(AppError::not_found::<Publisher>)
    }

    pub async fn create(&self, data: PublisherPayload) -> Publisher {
        let publisher = self.repository.create(data.into()).await;
        tracing::info!("Created publisher id={}", publisher.id);
        publisher
    }

    pub async fn update(&self, id: i64, data: PublisherPayload) -> AppResult<Publisher> {
        let publisher = self
            .repository
            .update(id, data.into())
            .await
            .ok_or_else(AppError::not_found::<Publisher>)?;
        tracing::info!("Updated publisher id={}", id);
        Ok(publisher)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repository.delete(id).await {
            return Err(AppError::not_found::<Publisher>());
        }
        tracing::info!("Deleted publisher id={}", id);
        Ok(())
    }
}
