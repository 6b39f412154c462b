use tracing::instrument;

use crate::{error::Result, http, transfers::model::*, types::Booking};

/// Provides methods to book ground transfers.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: http::Client,
}

impl Client {
    pub(crate) fn new(http_client: http::Client) -> Self {
        Self { http_client }
    }

    /// Book a transfer.
    #[instrument(skip(self, req))]
    pub async fn book(&self, req: TransferBookingRequest) -> Result<Booking> {
        self.http_client
            .post("/v1/transfers/book", &req)
            .await?
            .json()
            .await
    }
}
