//! Cart Requests

use gloo_net::http::Request;
use storefront_core::CheckoutRequest;

use super::{send_json, ApiClient, ApiError};

impl ApiClient {
    /// Post the order; the response body is not used
    pub async fn check_out(self, order: &CheckoutRequest) -> Result<(), ApiError> {
        let url = self.endpoints.carts();
        let _: serde_json::Value = send_json(Request::post(&url), &url, order).await?;
        Ok(())
    }
}

/// ISO-8601 timestamp for the order date
pub fn order_date() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}
