use reqwest::Client;
use shared::{
    domain::{ComboRecord, SortOrder},
    protocol::{NameRequest, StickerCombo},
};
use tracing::{debug, info};

pub mod error;

pub use error::{RequestError, ValidationError};

pub const GENERATE_ENDPOINT: &str = "/api/stickers/generate";

/// Upstream request validation caps names at 20 characters.
pub const MAX_NAME_LEN: usize = 20;

/// A validated, normalized submission. Immutable once built; building one
/// is the only way a name reaches [`StickerApiClient::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionInput {
    name: String,
    sort_order: SortOrder,
}

impl SubmissionInput {
    /// Trims and uppercases the raw name. The service matches names
    /// case-insensitively; the uppercase fold keeps the echoed query
    /// consistent with what result cards display.
    pub fn parse(raw_name: &str, sort_order: SortOrder) -> Result<Self, ValidationError> {
        let trimmed = raw_name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let len = trimmed.chars().count();
        if len > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong {
                max: MAX_NAME_LEN,
                len,
            });
        }
        Ok(Self {
            name: trimmed.to_uppercase(),
            sort_order,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    fn request_body(&self) -> NameRequest {
        NameRequest {
            name: self.name.clone(),
            sort_order: self.sort_order,
        }
    }
}

/// HTTP client for the combination service. One POST per `generate` call,
/// no retry; a non-2xx status and a transport failure are equivalent to
/// callers.
pub struct StickerApiClient {
    http: Client,
    server_url: String,
}

impl StickerApiClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            server_url: server_url.into(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Requests combinations for the given input and normalizes the payload
    /// into fully-defaulted records. An empty array is a success.
    pub async fn generate(
        &self,
        input: &SubmissionInput,
    ) -> Result<Vec<ComboRecord>, RequestError> {
        let url = format!(
            "{}{GENERATE_ENDPOINT}",
            self.server_url.trim_end_matches('/')
        );
        debug!(name = input.name(), url = %url, "requesting sticker combinations");

        let response = self
            .http
            .post(&url)
            .json(&input.request_body())
            .send()
            .await
            .map_err(|err| RequestError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| RequestError::Transport(err.to_string()))?;
        let combos: Vec<StickerCombo> = serde_json::from_slice(&body)
            .map_err(|err| RequestError::MalformedResponse(err.to_string()))?;

        info!(
            name = input.name(),
            combinations = combos.len(),
            "sticker service responded"
        );
        Ok(combos.into_iter().map(ComboRecord::from).collect())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
