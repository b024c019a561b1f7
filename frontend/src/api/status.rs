use shared::dto::status::StatusResponse;

use crate::api::codec::Codec;
use crate::api::{ApiClient, ApiError};

impl<C: Codec> ApiClient<C> {
    /// Liveness probe: `GET /status`, reporting the server's version and
    /// uptime. Nothing beyond the plain GET.
    pub async fn status(&self) -> Result<StatusResponse, ApiError> {
        self.get("/status").await
    }
}
