use serde::{Deserialize, Serialize};
use crate::enums::risk_level::RiskLevel;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskItem {
    pub id: String,
    pub description: String,
    pub severity: RiskLevel,
    pub category: String,
}
