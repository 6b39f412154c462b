use std::fmt;

use tracing::instrument;

use crate::{error::Result, http, reference::model::*};

/// Provides methods to look up reference data.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: http::Client,
}

impl Client {
    pub(crate) fn new(http_client: http::Client) -> Self {
        Self { http_client }
    }

    /// Search locations by free-text query.
    #[instrument(skip(self))]
    pub async fn locations(&self, query: &str) -> Result<Vec<Location>> {
        let query_params = serde_qs::to_string(&LocationQuery { query })?;
        self.http_client
            .get(format!("/v1/reference/locations?{query_params}"))
            .await?
            .json()
            .await
    }

    /// Look up an airline by its IATA code.
    #[instrument(skip(self))]
    pub async fn airline(&self, iata_code: impl fmt::Display + fmt::Debug) -> Result<Airline> {
        self.http_client
            .get(format!("/v1/reference/airlines/{iata_code}"))
            .await?
            .json()
            .await
    }
}
