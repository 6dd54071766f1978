// SPDX-License-Identifier: MPL-2.0
//! Audio upload port definition.

use crate::domain::audio::TranscodedAudio;
use crate::domain::error::UploadError;
use std::future::Future;

/// Successful upload: the endpoint answered with a 2xx status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadReceipt {
    pub status: u16,
}

/// Port for submitting transcoded audio to the decoding endpoint.
///
/// Dropping the returned future aborts the request.
pub trait AudioUploader: Send + Sync {
    /// Sends `audio` as a single-file multipart form.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Rejected`] for any non-2xx status, and the
    /// other variants for transport failures.
    fn upload(
        &self,
        audio: TranscodedAudio,
    ) -> impl Future<Output = Result<UploadReceipt, UploadError>> + Send;
}
