//! HTTP transport for the sign-in service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub returning an error since the request is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures surface as plain description strings. Status and body
//! interpretation is left to the caller so the sign-in flow can be driven by
//! a mock transport in tests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Sign-in endpoint used when no compile-time override is set.
pub const DEFAULT_SIGNIN_ENDPOINT: &str = "https://povshy.github.io/pov24/signin";

/// Resolve the sign-in endpoint, honoring a `WALLET_SIGNIN_URL` build-time override.
pub fn signin_endpoint() -> &'static str {
    option_env!("WALLET_SIGNIN_URL").unwrap_or(DEFAULT_SIGNIN_ENDPOINT)
}

/// Status + unparsed body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Whether the status is in the 2xx range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Text shown for a failed request: the JS error's `message` when there is one,
/// otherwise the error's display form.
#[cfg(any(test, feature = "hydrate"))]
fn failure_description(js_message: Option<String>, display: String) -> String {
    js_message.unwrap_or(display)
}

#[cfg(feature = "hydrate")]
fn transport_description(err: gloo_net::Error) -> String {
    let display = err.to_string();
    let js_message = match err {
        gloo_net::Error::JsError(js) => Some(js.message),
        _ => None,
    };
    failure_description(js_message, display)
}

/// Port for issuing a JSON POST. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait SigninTransport {
    /// POST `body` as `application/json` to `url`.
    ///
    /// # Errors
    ///
    /// Returns a description string if the request never produced a response
    /// (network failure, CORS rejection, unreadable body).
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<RawResponse, String>;
}

#[async_trait::async_trait(?Send)]
impl<T: SigninTransport + ?Sized> SigninTransport for &T {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<RawResponse, String> {
        (**self).post_json(url, body).await
    }
}

/// Browser `fetch` transport backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl SigninTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<RawResponse, String> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(body)
                .map_err(transport_description)?
                .send()
                .await
                .map_err(transport_description)?;
            let status = resp.status();
            let body = resp.text().await.map_err(transport_description)?;
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err("not available on server".to_owned())
        }
    }
}
