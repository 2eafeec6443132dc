//! Product Requests

use gloo_net::http::Request;
use storefront_core::{NewProduct, PageRequest, Product, ProductId};

use super::{delete, get_json, send_json, ApiClient, ApiError};

impl ApiClient {
    pub async fn fetch_product(self, id: ProductId) -> Result<Product, ApiError> {
        get_json(&self.endpoints.product(id)).await
    }

    /// Full unpaged product list
    pub async fn fetch_all_products(self) -> Result<Vec<Product>, ApiError> {
        get_json(&self.endpoints.products()).await
    }

    /// One catalog page, all products or a single category
    pub async fn fetch_catalog_page(self, request: &PageRequest) -> Result<Vec<Product>, ApiError> {
        get_json(&self.endpoints.catalog_page(request)).await
    }

    pub async fn fetch_categories(self) -> Result<Vec<String>, ApiError> {
        get_json(&self.endpoints.categories()).await
    }

    pub async fn create_product(self, product: &NewProduct) -> Result<Product, ApiError> {
        let url = self.endpoints.products();
        send_json(Request::post(&url), &url, product).await
    }

    pub async fn update_product(self, id: ProductId, product: &NewProduct) -> Result<Product, ApiError> {
        let url = self.endpoints.product(id);
        send_json(Request::put(&url), &url, product).await
    }

    pub async fn delete_product(self, id: ProductId) -> Result<(), ApiError> {
        delete(&self.endpoints.product(id)).await
    }
}
