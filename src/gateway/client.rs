//! Storage gateway HTTP client
//!
//! Talks to the remote Worker that owns all persistence and key naming.
//! The whole API hangs off one URL: multipart POST to upload, GET with
//! `?action=list` to enumerate, DELETE with `?key=` to remove.
//!
//! The gateway reports failures two ways: a non-2xx status, or a 2xx
//! response whose JSON body carries an `error` field. Both are surfaced
//! as [`GatewayError::Rejected`] with the server's text when available.

use std::path::Path;

use reqwest::multipart;

use super::domain::{
    AssetDownload, AssetList, DeleteOutcome, GatewayError, UploadReceipt,
};
use super::{adapter, dto};
use crate::metadata::TrackMetadata;

/// User agent sent with every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Gateway API client
pub struct GatewayClient {
    http_client: reqwest::Client,
    base_url: String,
    public_base_url: String,
}

impl GatewayClient {
    /// Create a new client for the given gateway and public base URLs
    pub fn new(base_url: impl Into<String>, public_base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            http_client: reqwest::Client::new(),
            public_base_url: base.trim_end_matches('/').to_string(),
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    /// Public URL a stored key is served under
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }

    /// Upload a local audio file together with its tags.
    ///
    /// The gateway picks the storage key and returns it as `keyUsed`.
    pub async fn upload_file(
        &self,
        path: &Path,
        tags: &TrackMetadata,
    ) -> Result<UploadReceipt, GatewayError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime = mime_guess::from_path(path).first_or_octet_stream();

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime.essence_str())
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let form = multipart::Form::new()
            .part("file", part)
            .text("title", tags.title.clone())
            .text("artist", tags.artist.clone())
            .text("album", tags.album.clone());

        self.send_upload(form).await
    }

    /// Upload by handing the gateway a source URL to fetch, under an
    /// optional explicit key. Used for cover images.
    pub async fn upload_from_url(
        &self,
        source_url: &str,
        key: Option<&str>,
    ) -> Result<UploadReceipt, GatewayError> {
        let mut form = multipart::Form::new().text("source_url", source_url.to_string());
        if let Some(key) = key {
            form = form.text("key", key.to_string());
        }

        self.send_upload(form).await
    }

    /// Fetch the current asset list snapshot
    pub async fn list(&self) -> Result<AssetList, GatewayError> {
        let url = format!("{}?action=list", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_for_status(status, response).await);
        }

        let body = response
            .json::<dto::ListResponse>()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        if let Some(error) = body.error {
            return Err(GatewayError::Rejected(error));
        }
        if body.assets.is_none() {
            return Err(GatewayError::Parse("response missing assets".to_string()));
        }

        Ok(adapter::to_asset_list(body))
    }

    /// Delete a stored asset by key
    pub async fn delete(&self, key: &str) -> Result<DeleteOutcome, GatewayError> {
        let url = format!("{}?key={}", self.base_url, urlencoding::encode(key));

        let response = self
            .http_client
            .delete(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound(key.to_string()));
        }
        if !status.is_success() {
            return Err(error_for_status(status, response).await);
        }

        let body = response
            .json::<dto::DeleteResponse>()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        if !body.ok {
            return Err(GatewayError::Rejected(
                body.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        Ok(DeleteOutcome {
            remaining: body.remaining,
        })
    }

    /// Download a stored asset's bytes from its public URL
    pub async fn download(&self, key: &str) -> Result<AssetDownload, GatewayError> {
        let url = self.public_url(key);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound(key.to_string()));
        }
        if !status.is_success() {
            return Err(GatewayError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?
            .to_vec();

        Ok(AssetDownload { data, mime_type })
    }

    /// Send a prepared upload form and interpret the receipt
    async fn send_upload(&self, form: multipart::Form) -> Result<UploadReceipt, GatewayError> {
        let response = self
            .http_client
            .post(&self.base_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_for_status(status, response).await);
        }

        let body = response
            .json::<dto::UploadResponse>()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        if let Some(error) = body.error {
            return Err(GatewayError::Rejected(error));
        }

        let key_used = body
            .key_used
            .ok_or_else(|| GatewayError::Parse("response missing keyUsed".to_string()))?;

        Ok(UploadReceipt {
            key_used,
            metadata: body.metadata.map(adapter::to_metadata),
        })
    }
}

/// Turn a non-2xx response into an error, preferring the gateway's own text
async fn error_for_status(status: reqwest::StatusCode, response: reqwest::Response) -> GatewayError {
    // The gateway sends JSON error bodies even on HTTP failures
    if let Ok(text) = response.text().await
        && let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&text)
        && let Some(error) = parsed.get("error").and_then(|e| e.as_str())
    {
        return GatewayError::Rejected(error.to_string());
    }

    GatewayError::Network(format!(
        "HTTP {}: {}",
        status,
        status.canonical_reason().unwrap_or("Unknown")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = GatewayClient::new(
            "https://gateway.example.dev/",
            "https://media.example.dev/",
        );
        assert_eq!(client.base_url, "https://gateway.example.dev");
        assert_eq!(
            client.public_url("song.mp3"),
            "https://media.example.dev/song.mp3"
        );
    }

    #[test]
    fn test_public_url_keeps_key_path() {
        let client = GatewayClient::with_base_url("https://media.example.dev");
        assert_eq!(
            client.public_url("covers/Innuendo.JPG"),
            "https://media.example.dev/covers/Innuendo.JPG"
        );
    }

    #[test]
    fn test_user_agent_format() {
        assert!(USER_AGENT.starts_with("music-courier/"));
    }
}
