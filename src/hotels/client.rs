use tracing::instrument;

use crate::{error::Result, hotels::model::*, http, types::Booking};

/// Provides methods to search and book hotel stays.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: http::Client,
}

impl Client {
    pub(crate) fn new(http_client: http::Client) -> Self {
        Self { http_client }
    }

    /// Search hotel offers.
    #[instrument(skip(self))]
    pub async fn search(&self, req: HotelSearchRequest) -> Result<Vec<HotelOffer>> {
        let query_params = serde_qs::to_string(&req)?;
        self.http_client
            .get(format!("/v1/hotels/search?{query_params}"))
            .await?
            .json()
            .await
    }

    /// Book a hotel offer.
    #[instrument(skip(self, req))]
    pub async fn book(&self, req: HotelBookingRequest) -> Result<Booking> {
        self.http_client
            .post("/v1/hotels/book", &req)
            .await?
            .json()
            .await
    }
}
