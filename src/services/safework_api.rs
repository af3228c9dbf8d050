use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use crate::config::constants::UPLOAD_FIELD_NAME;
use crate::errors::{SafeworkError, SafeworkResult};
use crate::structs::config::api_config::ApiConfig;
use crate::structs::document_upload::DocumentUpload;
use crate::structs::service_reply::ServiceReply;
use crate::traits::analysis_client::AnalysisClient;

/// `reqwest` client for the SafeWork analysis service.
#[derive(Clone)]
pub struct SafeworkApi {
    client: Client,
    api: ApiConfig,
}

impl SafeworkApi {
    pub fn new(api: ApiConfig) -> SafeworkResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("safework-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SafeworkError::system_error("build HTTP client", &e.to_string()))?;

        Ok(Self { client, api })
    }

    pub const fn api(&self) -> &ApiConfig {
        &self.api
    }

    fn build_form(document: &DocumentUpload) -> SafeworkResult<Form> {
        let part = Part::bytes(document.bytes.clone())
            .file_name(document.filename.clone())
            .mime_str(&document.mime_type)
            .map_err(|e| SafeworkError::unsupported_document(&document.filename, &format!("invalid MIME type: {e}")))?;

        Ok(Form::new().part(UPLOAD_FIELD_NAME, part))
    }
}

#[async_trait]
impl AnalysisClient for SafeworkApi {
    async fn post_document(&self, document: &DocumentUpload) -> SafeworkResult<ServiceReply> {
        let url = self.api.upload_url();
        let form = Self::build_form(document)?;

        log::debug!("📦 POST {} ({} bytes, {})", url, document.size(), document.mime_type);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SafeworkError::network_error("document upload", Some(&url), &e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SafeworkError::network_error("reading upload response", Some(&url), &e.to_string()))?;

        if !status.is_success() {
            log::debug!("❌ Analysis service replied {}: {}", status, String::from_utf8_lossy(&body));
        }

        Ok(ServiceReply::new(status.as_u16(), url, body.to_vec()))
    }
}
