use super::dto::{ClassifyRequest, RegionRisk};
use crate::domain::{risk::classifier::RiskProvider, shared::errors::DomainError};
use std::sync::Arc;
use validator::Validate;

pub struct ClassifyRegionUseCase {
    provider: Arc<dyn RiskProvider>,
}

impl ClassifyRegionUseCase {
    pub fn new(provider: Arc<dyn RiskProvider>) -> Self {
        Self { provider }
    }

    pub fn execute(&self, request: ClassifyRequest) -> Result<RegionRisk, DomainError> {
        request
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        let risk = self.provider.risk_for(&request.name);
        Ok(RegionRisk::new(request.name, risk))
    }
}
