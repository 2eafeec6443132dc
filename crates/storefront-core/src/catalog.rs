//! Catalog Paging
//!
//! Client-side accumulation of sequential product pages, optionally
//! filtered by category and sorted. Paging stops at a fixed page cap;
//! the server's total count is never consulted.

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Products requested per page
pub const PAGE_SIZE: u32 = 50;
/// Hard cap on pages fetched for one listing
pub const MAX_PAGES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// One page fetch issued by the pager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub category: Option<String>,
    pub page: u32,
    pub limit: u32,
    pub sort: SortOrder,
    /// Listing generation; bumps whenever sort or category changes
    pub generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogPager {
    category: Option<String>,
    sort: SortOrder,
    pages: Vec<Vec<Product>>,
    generation: u64,
    in_flight: Option<u32>,
}

impl CatalogPager {
    pub fn new(category: Option<String>) -> Self {
        Self {
            category,
            ..Default::default()
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Drop accumulated pages and request page 1
    pub fn first_request(&mut self) -> PageRequest {
        self.pages.clear();
        self.generation += 1;
        self.request(1)
    }

    /// Request the next page, unless one is in flight or the cap is reached
    pub fn next_request(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() || !self.has_next_page() {
            return None;
        }
        let next = self.pages.len() as u32 + 1;
        Some(self.request(next))
    }

    /// Change sort order; restarts from page 1
    pub fn set_sort(&mut self, sort: SortOrder) -> PageRequest {
        self.sort = sort;
        self.first_request()
    }

    /// Change category filter; restarts from page 1
    pub fn set_category(&mut self, category: Option<String>) -> PageRequest {
        self.category = category;
        self.first_request()
    }

    /// Store a fetched page. Responses from a superseded listing are discarded.
    pub fn accept(&mut self, request: &PageRequest, products: Vec<Product>) -> bool {
        if request.generation != self.generation {
            tracing::debug!(page = request.page, "discarding stale catalog page");
            return false;
        }
        self.pages.push(products);
        self.in_flight = None;
        true
    }

    /// Mark a request as finished without data
    pub fn fail(&mut self, request: &PageRequest) {
        if request.generation == self.generation {
            self.in_flight = None;
        }
    }

    /// All fetched pages flattened in fetch order
    pub fn products(&self) -> Vec<Product> {
        self.pages.iter().flatten().cloned().collect()
    }

    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    pub fn has_next_page(&self) -> bool {
        self.page_count() < MAX_PAGES
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Fetching the first page of the current listing
    pub fn is_loading(&self) -> bool {
        self.in_flight == Some(1)
    }

    fn request(&mut self, page: u32) -> PageRequest {
        self.in_flight = Some(page);
        PageRequest {
            category: self.category.clone(),
            page,
            limit: PAGE_SIZE,
            sort: self.sort,
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductId;
    use rust_decimal::Decimal;

    fn page_of(ids: &[u32]) -> Vec<Product> {
        ids.iter()
            .map(|&id| Product {
                id: ProductId(id),
                title: format!("Product {}", id),
                price: Decimal::ONE,
                description: String::new(),
                category: String::new(),
                image: String::new(),
                rating: None,
            })
            .collect()
    }

    #[test]
    fn test_pages_accumulate_in_order() {
        let mut pager = CatalogPager::new(None);
        let first = pager.first_request();
        assert_eq!(first.page, 1);
        assert_eq!(first.limit, PAGE_SIZE);
        assert!(pager.is_loading());
        assert!(pager.accept(&first, page_of(&[1, 2])));

        let second = pager.next_request().unwrap();
        assert_eq!(second.page, 2);
        assert!(pager.accept(&second, page_of(&[3])));

        let ids: Vec<u32> = pager.products().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_no_sixth_page_is_requested() {
        let mut pager = CatalogPager::new(None);
        let mut request = Some(pager.first_request());
        let mut requested = Vec::new();

        // Server always has more data
        while let Some(req) = request {
            requested.push(req.page);
            pager.accept(&req, page_of(&[req.page]));
            request = pager.next_request();
        }

        assert_eq!(requested, vec![1, 2, 3, 4, 5]);
        assert!(!pager.has_next_page());
        assert!(pager.next_request().is_none());
    }

    #[test]
    fn test_sort_toggle_resets_to_first_page() {
        let mut pager = CatalogPager::new(Some("jewelery".to_string()));
        let first = pager.first_request();
        pager.accept(&first, page_of(&[1]));
        let second = pager.next_request().unwrap();
        pager.accept(&second, page_of(&[2]));

        let fresh = pager.set_sort(pager.sort().toggled());
        assert_eq!(fresh.page, 1);
        assert_eq!(fresh.sort, SortOrder::Desc);
        assert_eq!(fresh.category.as_deref(), Some("jewelery"));
        assert!(pager.products().is_empty());
        assert!(pager.is_fetching());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut pager = CatalogPager::new(None);
        let asc = pager.first_request();
        let desc = pager.set_sort(SortOrder::Desc);

        assert!(!pager.accept(&asc, page_of(&[1])));
        assert!(pager.is_fetching());
        assert!(pager.accept(&desc, page_of(&[20])));
        assert_eq!(pager.products()[0].id, ProductId(20));
    }

    #[test]
    fn test_no_concurrent_load_more() {
        let mut pager = CatalogPager::new(None);
        let first = pager.first_request();
        assert!(pager.next_request().is_none());

        pager.fail(&first);
        assert!(!pager.is_fetching());
        assert_eq!(pager.next_request().unwrap().page, 1);
    }
}
