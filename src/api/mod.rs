//! Remote Store API
//!
//! One stateless request wrapper per REST resource and verb, organized by domain.

mod carts;
mod products;
mod users;

pub use carts::order_date;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use storefront_core::Endpoints;
use thiserror::Error;

/// Every failure surfaces to the user as "Request failed"
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed")]
    RequestFailed { status: u16 },
    #[error("Request failed")]
    Transport(#[from] gloo_net::Error),
}

#[derive(Debug, Clone, Copy)]
pub struct ApiClient {
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(base: &'static str) -> Self {
        Self {
            endpoints: Endpoints::new(base),
        }
    }
}

// ========================
// Request Helpers
// ========================

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    tracing::debug!(%url, "GET");
    let response = Request::get(url).send().await?;
    decode(url, response).await
}

async fn send_json<B, T>(builder: RequestBuilder, url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    tracing::debug!(%url, "sending JSON body");
    let response = builder.json(body)?.send().await?;
    decode(url, response).await
}

async fn delete(url: &str) -> Result<(), ApiError> {
    tracing::debug!(%url, "DELETE");
    let response = Request::delete(url).send().await?;
    check_status(url, &response)
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    check_status(url, &response)?;
    response.json::<T>().await.map_err(|e| {
        tracing::warn!(%url, error = %e, "response body did not decode");
        ApiError::from(e)
    })
}

fn check_status(url: &str, response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        tracing::warn!(%url, status, "request failed");
        Err(ApiError::RequestFailed { status })
    }
}
