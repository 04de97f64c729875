use super::entity::Region;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeographyRepository: Send + Sync {
    /// Every region of the feature collection, in source order.
    async fn find_all(&self) -> Result<Vec<Region>, DomainError>;
}
