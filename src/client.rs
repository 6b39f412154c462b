//! The top-level client for the Voyago booking API.
use std::env;

use crate::{
    activities,
    error::{Error, Result},
    flights, hotels, http, reference, transfers,
};

/// The URL of the hosted Voyago platform.
static API_URL: &str = "https://api.voyago.travel";

/// The client is the entrypoint for every upstream API call.
///
/// You can create it using [`Client::builder`] or [`Client::new`]. The local
/// session and profile stores are independent of it; see
/// [`SessionStore`](crate::SessionStore) and
/// [`ProfileStore`](crate::ProfileStore).
///
/// # Examples
/// ```no_run
/// use voyago_rs::{Client, Error};
///
/// fn main() -> Result<(), Error> {
///     // Create a new client and read the token from the environment
///     // variable VOYAGO_TOKEN.
///     let client = Client::new()?;
///
///     // Set all available options. Unset options fall back to environment
///     // variables.
///     let client = Client::builder()
///         .with_token("my-token")
///         .build()?;
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    pub flights: flights::Client,
    pub hotels: hotels::Client,
    pub activities: activities::Client,
    pub transfers: transfers::Client,
    pub reference: reference::Client,
}

impl Client {
    /// Creates a new client. If you want to configure it, use [`Client::builder`].
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a new client using a builder.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Get the url (cloned).
    pub fn url(&self) -> String {
        self.url.clone()
    }

    /// Get client version.
    pub fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// This builder is used to create a new client.
pub struct Builder {
    env_fallback: bool,
    url: Option<String>,
    token: Option<String>,
}

impl Builder {
    /// Create a new builder.
    fn new() -> Self {
        Self {
            env_fallback: true,
            url: None,
            token: None,
        }
    }

    /// Don't fall back to environment variables.
    pub fn no_env(mut self) -> Self {
        self.env_fallback = false;
        self
    }

    /// Add a token to the client. If this is not set, the token will be read
    /// from the environment variable `VOYAGO_TOKEN`.
    pub fn with_token<S: Into<String>>(mut self, token: S) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Add an URL to the client. This is only meant for testing purposes, you
    /// don't need to set it.
    #[doc(hidden)]
    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        let env_fallback = self.env_fallback;

        let mut token = self.token.unwrap_or_default();
        if token.is_empty() && env_fallback {
            token = env::var("VOYAGO_TOKEN").unwrap_or_default();
        }
        if token.is_empty() {
            return Err(Error::MissingToken);
        }

        let mut url = self.url.unwrap_or_default();
        if url.is_empty() && env_fallback {
            url = env::var("VOYAGO_URL").unwrap_or_default();
        }
        if url.is_empty() {
            url = API_URL.to_string();
        }

        let http_client = http::Client::new(url.clone(), token)?;

        Ok(Client {
            url,
            flights: flights::Client::new(http_client.clone()),
            hotels: hotels::Client::new(http_client.clone()),
            activities: activities::Client::new(http_client.clone()),
            transfers: transfers::Client::new(http_client.clone()),
            reference: reference::Client::new(http_client),
        })
    }
}
