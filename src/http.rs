use http::header;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use url::Url;

use crate::error::{ApiError, Error, Result};

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Client is a wrapper around `reqwest::Client` which provides automatically
/// prepending the base url and attaching the bearer token.
///
/// Requests are sent exactly once. The upstream booking API is consumed as
/// opaque request/response shapes, without retries or pagination.
#[derive(Debug, Clone)]
pub(crate) struct Client {
    base_url: Url,
    inner: reqwest::Client,
}

impl Client {
    /// Creates a new client.
    pub(crate) fn new<U, T>(base_url: U, token: T) -> Result<Self>
    where
        U: AsRef<str>,
        T: Into<String>,
    {
        let base_url = Url::parse(base_url.as_ref()).map_err(Error::InvalidUrl)?;
        let token = token.into();

        let mut default_headers = header::HeaderMap::new();
        let token_header_value = header::HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_e| Error::InvalidToken)?;
        default_headers.insert(header::AUTHORIZATION, token_header_value);

        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers)
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(Error::HttpClientSetup)?;

        Ok(Self {
            base_url,
            inner: http_client,
        })
    }

    async fn execute<P>(
        &self,
        method: http::Method,
        path: P,
        body: Option<serde_json::Value>,
    ) -> Result<Response>
    where
        P: AsRef<str>,
    {
        let url = self
            .base_url
            .join(path.as_ref().trim_start_matches('/'))
            .map_err(Error::InvalidUrl)?;

        let mut req = self.inner.request(method.clone(), url);
        if let Some(value) = body {
            req = req.json(&value);
        }

        self.inner
            .execute(req.build().map_err(Error::Http)?)
            .await
            .map(|res| Response::new(res, method, path.as_ref().to_string()))
            .map_err(Error::Http)
    }

    pub(crate) async fn get<S>(&self, path: S) -> Result<Response>
    where
        S: AsRef<str>,
    {
        self.execute(http::Method::GET, path.as_ref(), None).await
    }

    pub(crate) async fn post<S, P>(&self, path: S, payload: P) -> Result<Response>
    where
        S: AsRef<str>,
        P: Serialize,
    {
        self.execute(
            http::Method::POST,
            path,
            Some(serde_json::to_value(payload).map_err(Error::Serialize)?),
        )
        .await
    }
}

#[derive(Debug)]
pub(crate) struct Response {
    inner: reqwest::Response,
    method: http::Method,
    path: String,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response, method: http::Method, path: String) -> Self {
        Self {
            inner,
            method,
            path,
        }
    }

    pub(crate) async fn json<T: DeserializeOwned>(self) -> Result<T> {
        self.check_error()
            .await?
            .inner
            .json::<T>()
            .await
            .map_err(Error::Deserialize)
    }

    pub(crate) async fn check_error(self) -> Result<Response> {
        let status = self.inner.status();
        if !status.is_success() {
            // Try to decode the error
            let e = match self.inner.json::<ApiError>().await {
                Ok(mut e) => {
                    e.status = status.as_u16();
                    e.method = self.method;
                    e.path = self.path;
                    Error::Api(e)
                }
                Err(_e) => {
                    // Decoding failed, we still want an ApiError
                    Error::Api(ApiError::new(status.as_u16(), self.method, self.path, None))
                }
            };
            return Err(e);
        }

        Ok(self)
    }
}

impl From<Response> for reqwest::Response {
    fn from(res: Response) -> Self {
        res.inner
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::{Client, Error};

    #[tokio::test]
    async fn test_error_payload_is_decoded() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/reference/airlines/XX");
            then.status(404)
                .json_body(json!({ "message": "unknown airline" }));
        });

        let client = Client::builder()
            .no_env()
            .with_url(server.base_url())
            .with_token("vgo-test")
            .build()?;

        match client.reference.airline("XX").await {
            Err(Error::Api(e)) => {
                assert_eq!(e.status, 404);
                assert_eq!(e.path, "/v1/reference/airlines/XX");
                assert_eq!(e.message.as_deref(), Some("unknown airline"));
            }
            res => panic!("Expected API error, got {res:?}"),
        }

        mock.assert_hits_async(1).await;
        Ok(())
    }

    #[tokio::test]
    async fn test_bearer_token_is_attached() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/reference/locations")
                .header("authorization", "Bearer vgo-test");
            then.status(200).json_body(json!([]));
        });

        let client = Client::builder()
            .no_env()
            .with_url(server.base_url())
            .with_token("vgo-test")
            .build()?;

        let locations = client.reference.locations("paris").await?;
        assert!(locations.is_empty());

        mock.assert_hits_async(1).await;
        Ok(())
    }

    #[tokio::test]
    async fn test_undecodable_error_still_yields_api_error(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/reference/airlines/ZZ");
            then.status(500).body("upstream exploded");
        });

        let client = Client::builder()
            .no_env()
            .with_url(server.base_url())
            .with_token("vgo-test")
            .build()?;

        match client.reference.airline("ZZ").await {
            Err(Error::Api(e)) => {
                assert_eq!(e.status, 500);
                assert!(e.message.is_none());
            }
            res => panic!("Expected API error, got {res:?}"),
        }
        Ok(())
    }
}
