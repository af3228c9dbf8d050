use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::risk_level::RiskLevel;
use crate::structs::config::api_config::ApiConfig;
use crate::structs::risk_item::RiskItem;

/// One completed document analysis. Built once from a validated service
/// response and never modified afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub id: String,
    pub file_id: String,
    pub filename: String,
    /// Captured on the client when the response arrived
    pub upload_date: DateTime<Utc>,
    pub risk_score: u8,
    pub top_risks: Vec<RiskItem>,
    pub extracted_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpt_feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
}

impl AnalysisResult {
    pub const fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }

    pub fn has_report(&self) -> bool {
        self.pdf_url.is_some()
    }

    /// The link returned with the analysis, otherwise the download endpoint.
    pub fn report_url(&self, api: &ApiConfig) -> String {
        self.pdf_url
            .clone()
            .unwrap_or_else(|| api.report_url(&self.file_id))
    }
}
