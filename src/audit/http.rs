use crate::audit::{AuditReport, AuditRunner};
use crate::AuditError;
use async_trait::async_trait;
use reqwest::Client;

/// Audit runner backed by an HTTP audit service
///
/// The service receives the page URL as the `url` query parameter and
/// answers with the report JSON. The request deliberately carries no
/// timeout of its own: a page audit can legitimately take minutes, and the
/// per-page budget is enforced by the orchestrator around this call.
pub struct HttpAuditRunner {
    client: Client,
    endpoint: String,
}

impl HttpAuditRunner {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl AuditRunner for HttpAuditRunner {
    async fn run_audit(&self, url: &str) -> Result<AuditReport, AuditError> {
        tracing::debug!("Requesting audit for {}", url);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("url", url)])
            .send()
            .await
            .map_err(|source| AuditError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<AuditReport>()
            .await
            .map_err(|source| AuditError::Decode {
                url: url.to_string(),
                source,
            })
    }
}
