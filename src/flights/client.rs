use tracing::instrument;

use crate::{error::Result, flights::model::*, http, types::Booking};

/// Provides methods to search, price and book flights.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: http::Client,
}

impl Client {
    pub(crate) fn new(http_client: http::Client) -> Self {
        Self { http_client }
    }

    /// Search flight offers.
    #[instrument(skip(self))]
    pub async fn search(&self, req: FlightSearchRequest) -> Result<Vec<FlightOffer>> {
        let query_params = serde_qs::to_string(&req)?;
        self.http_client
            .get(format!("/v1/flights/search?{query_params}"))
            .await?
            .json()
            .await
    }

    /// Confirm the price of an offer before booking it.
    #[instrument(skip(self))]
    pub async fn price<I>(&self, offer_id: I) -> Result<FlightPrice>
    where
        I: Into<String> + std::fmt::Debug,
    {
        let req = FlightPriceRequest {
            offer_id: offer_id.into(),
        };
        self.http_client
            .post("/v1/flights/price", &req)
            .await?
            .json()
            .await
    }

    /// Book a priced offer.
    #[instrument(skip(self, req))]
    pub async fn book(&self, req: FlightBookingRequest) -> Result<Booking> {
        self.http_client
            .post("/v1/flights/book", &req)
            .await?
            .json()
            .await
    }
}
