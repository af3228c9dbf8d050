use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use crate::config::constants::MAX_RISK_SCORE;
use crate::enums::risk_level::RiskLevel;
use crate::errors::{SafeworkError, SafeworkResult};
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::risk_item::RiskItem;

/// Body of a successful `POST /upload-document`, as sent by the service.
/// Every field is optional here; `into_analysis_result` decides what is
/// actually required.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(default)]
    pub file_id: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub risk_score: Option<f64>,
    #[serde(default)]
    pub extracted_text: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub top_risks: Option<Vec<WireRiskItem>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireRiskItem {
    #[serde(default)]
    pub id: Option<String>,
    pub description: String,
    pub severity: RiskLevel,
    #[serde(default)]
    pub category: Option<String>,
}

impl UploadResponse {
    pub fn from_slice(body: &[u8]) -> SafeworkResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    pub fn into_analysis_result(self, received_at: DateTime<Utc>) -> SafeworkResult<AnalysisResult> {
        let file_id = required_text(self.file_id, "fileId")?;
        let filename = self
            .filename
            .ok_or_else(|| SafeworkError::malformed("missing field 'filename'"))?;
        let extracted_text = self
            .extracted_text
            .ok_or_else(|| SafeworkError::malformed("missing field 'extractedText'"))?;
        let risk_score = validate_risk_score(self.risk_score)?;

        let top_risks = self
            .top_risks
            .unwrap_or_default()
            .into_iter()
            .map(|item| RiskItem {
                id: item.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                description: item.description,
                severity: item.severity,
                category: item.category.unwrap_or_else(|| "general".to_string()),
            })
            .collect();

        Ok(AnalysisResult {
            id: file_id.clone(),
            file_id,
            filename,
            upload_date: received_at,
            risk_score,
            top_risks,
            extracted_text,
            gpt_feedback: non_empty(self.feedback),
            pdf_url: non_empty(self.pdf_url),
        })
    }
}

fn required_text(value: Option<String>, field: &str) -> SafeworkResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(SafeworkError::malformed(format!("field '{field}' is empty"))),
        None => Err(SafeworkError::malformed(format!("missing field '{field}'"))),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Missing or null scores count as 0; anything else must lie in 0..=100.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn validate_risk_score(score: Option<f64>) -> SafeworkResult<u8> {
    let Some(score) = score else {
        return Ok(0);
    };

    if !score.is_finite() || score < 0.0 || score > f64::from(MAX_RISK_SCORE) {
        return Err(SafeworkError::malformed(format!(
            "riskScore {score} is outside 0..={MAX_RISK_SCORE}"
        )));
    }

    Ok(score.round() as u8)
}
