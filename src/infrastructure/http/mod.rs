// SPDX-License-Identifier: MPL-2.0
//! `reqwest` adapter implementing the [`AudioUploader`] port.
//!
//! The transcoded WAV is posted as a single-part `multipart/form-data` body.
//! Any 2xx answer counts as success; the response body is ignored.
//!
//! [`AudioUploader`]: crate::application::port::AudioUploader

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Url;

use crate::application::port::{AudioUploader, UploadReceipt};
use crate::config::UploadConfig;
use crate::domain::audio::TranscodedAudio;
use crate::domain::error::UploadError;

const USER_AGENT: &str = concat!("wavedrop/", env!("CARGO_PKG_VERSION"));

/// Posts audio to a fixed endpoint with a reused connection pool.
#[derive(Debug, Clone)]
pub struct HttpUploader {
    client: reqwest::Client,
    endpoint: Url,
    field_name: String,
}

impl HttpUploader {
    /// Builds an uploader for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::InvalidRequest`] if the endpoint is not an
    /// absolute http(s) URL or the client cannot be built.
    pub fn new(
        endpoint: &str,
        field_name: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, UploadError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| UploadError::InvalidRequest(format!("Bad endpoint {endpoint:?}: {e}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(UploadError::InvalidRequest(format!(
                "Unsupported scheme: {}",
                endpoint.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| UploadError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            field_name: field_name.into(),
        })
    }

    /// Builds an uploader from the `[upload]` config section.
    ///
    /// # Errors
    ///
    /// See [`HttpUploader::new`].
    pub fn from_config(config: &UploadConfig) -> Result<Self, UploadError> {
        Self::new(
            config.endpoint(),
            config.field_name(),
            config.request_timeout(),
        )
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }
}

fn map_transport_error(err: &reqwest::Error) -> UploadError {
    if err.is_timeout() {
        UploadError::Timeout
    } else if err.is_builder() {
        UploadError::InvalidRequest(err.to_string())
    } else {
        UploadError::Transport(err.to_string())
    }
}

impl AudioUploader for HttpUploader {
    async fn upload(&self, audio: TranscodedAudio) -> Result<UploadReceipt, UploadError> {
        let part = Part::bytes(audio.bytes)
            .file_name(audio.file_name)
            .mime_str(audio.media_type)
            .map_err(|e| UploadError::InvalidRequest(format!("Bad file part: {e}")))?;
        let form = Form::new().part(self.field_name.clone(), part);

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;

        let status = response.status();
        if status.is_success() {
            Ok(UploadReceipt {
                status: status.as_u16(),
            })
        } else {
            Err(UploadError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
