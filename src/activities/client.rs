use tracing::instrument;

use crate::{activities::model::*, error::Result, http};

/// Provides methods to search experiences.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: http::Client,
}

impl Client {
    pub(crate) fn new(http_client: http::Client) -> Self {
        Self { http_client }
    }

    /// Search experiences at a destination.
    #[instrument(skip(self))]
    pub async fn search(&self, req: ActivitySearchRequest) -> Result<Vec<Experience>> {
        let query_params = serde_qs::to_string(&req)?;
        self.http_client
            .get(format!("/v1/activities/search?{query_params}"))
            .await?
            .json()
            .await
    }
}
