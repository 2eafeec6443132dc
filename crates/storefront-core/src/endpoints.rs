//! REST Endpoints
//!
//! URL construction for the remote store API.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::catalog::PageRequest;
use crate::models::{ProductId, UserId};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    base: &'static str,
}

impl Endpoints {
    pub fn new(base: &'static str) -> Self {
        Self {
            base: base.trim_end_matches('/'),
        }
    }

    pub fn base(&self) -> &str {
        self.base
    }

    pub fn products(&self) -> String {
        format!("{}/products", self.base)
    }

    pub fn product(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.base, id)
    }

    pub fn categories(&self) -> String {
        format!("{}/products/categories", self.base)
    }

    /// One catalog page, all products or a single category
    pub fn catalog_page(&self, request: &PageRequest) -> String {
        let query = format!(
            "page={}&limit={}&sort={}",
            request.page,
            request.limit,
            request.sort.as_str()
        );
        match request.category.as_deref() {
            Some(category) => format!(
                "{}/products/category/{}?{}",
                self.base,
                utf8_percent_encode(category, PATH_SEGMENT),
                query
            ),
            None => format!("{}/products?{}", self.base, query),
        }
    }

    pub fn users(&self) -> String {
        format!("{}/users", self.base)
    }

    pub fn user(&self, id: UserId) -> String {
        format!("{}/users/{}", self.base, id)
    }

    pub fn carts(&self) -> String {
        format!("{}/carts", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogPager, SortOrder};

    const API: Endpoints = Endpoints {
        base: "https://fakestoreapi.com",
    };

    #[test]
    fn test_resource_urls() {
        let api = Endpoints::new("https://fakestoreapi.com/");
        assert_eq!(api, API);
        assert_eq!(api.product(ProductId(5)), "https://fakestoreapi.com/products/5");
        assert_eq!(api.categories(), "https://fakestoreapi.com/products/categories");
        assert_eq!(api.user(UserId(2)), "https://fakestoreapi.com/users/2");
        assert_eq!(api.carts(), "https://fakestoreapi.com/carts");
    }

    #[test]
    fn test_catalog_page_urls() {
        let mut pager = CatalogPager::new(None);
        let request = pager.first_request();
        assert_eq!(
            API.catalog_page(&request),
            "https://fakestoreapi.com/products?page=1&limit=50&sort=asc"
        );

        let request = pager.set_category(Some("men's clothing".to_string()));
        let request = PageRequest {
            sort: SortOrder::Desc,
            ..request
        };
        assert_eq!(
            API.catalog_page(&request),
            "https://fakestoreapi.com/products/category/men's%20clothing?page=1&limit=50&sort=desc"
        );
    }
}
