//! Reviews service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        reviews::{
            errors::ReviewsServiceError, records::ReviewRecord, repository::PgReviewsRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgReviewsService {
    db: Db,
    repository: PgReviewsRepository,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReviewsRepository::new(),
        }
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    async fn list_user_reviews(
        &self,
        user: UserUuid,
    ) -> Result<Vec<ReviewRecord>, ReviewsServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let reviews = self.repository.list_user_reviews(&mut tx, user).await?;

        tx.commit().await?;

        Ok(reviews)
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Reviews written by `user`, newest first.
    async fn list_user_reviews(
        &self,
        user: UserUuid,
    ) -> Result<Vec<ReviewRecord>, ReviewsServiceError>;
}
