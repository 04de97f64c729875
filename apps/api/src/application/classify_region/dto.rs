use crate::domain::risk::level::RiskLevel;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct ClassifyRequest {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegionRisk {
    pub name: String,
    pub risk: RiskLevel,
    pub color: String,
}

impl RegionRisk {
    pub fn new(name: impl Into<String>, risk: RiskLevel) -> Self {
        Self {
            name: name.into(),
            risk,
            color: risk.color().to_string(),
        }
    }
}
