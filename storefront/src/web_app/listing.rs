// web_app/listing.rs - Filter and pagination state for the list pages
//
// `ListQuery` is a plain state machine with no reactive dependencies.
// The Products and Vendors pages hold one inside a signal and drive
// fetches from it (see pages/list_state.rs).
//
// Request ordering: every fetch takes a ticket stamped with a fresh
// generation. Only the response carrying the latest generation is
// applied; anything older is dropped.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::web_app::api::ApiError;
use crate::web_app::model::{Paginated, Product, Vendor};

pub const PRODUCT_PAGE_SIZE: u32 = 12;
pub const VENDOR_PAGE_SIZE: u32 = 18;

/// Homepage "Trending products" size
pub const HOME_PRODUCT_LIMIT: u32 = 8;
/// Homepage "Featured vendors" size
pub const HOME_VENDOR_LIMIT: u32 = 6;

/// A filter set that can be written as query parameters.
pub trait ListFilters: Clone + Default + PartialEq {
    /// Non-empty fields as `(name, value)` pairs, in wire order.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Tri-state availability filter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockFilter {
    #[default]
    Any,
    InStock,
    OutOfStock,
}

impl StockFilter {
    pub const ALL: [StockFilter; 3] = [StockFilter::Any, StockFilter::InStock, StockFilter::OutOfStock];

    pub fn as_param(self) -> Option<&'static str> {
        match self {
            StockFilter::Any => None,
            StockFilter::InStock => Some("true"),
            StockFilter::OutOfStock => Some("false"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockFilter::Any => "Any",
            StockFilter::InStock => "In stock",
            StockFilter::OutOfStock => "Out of stock",
        }
    }
}

/// Products page filters. Text fields hold raw input; blank means unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilters {
    pub q: String,
    pub category: String,
    pub in_stock: StockFilter,
    pub min_price: String,
    pub max_price: String,
}

impl ListFilters for ProductFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_non_empty(&mut pairs, "category", &self.category);
        push_non_empty(&mut pairs, "q", &self.q);
        if let Some(flag) = self.in_stock.as_param() {
            pairs.push(("in_stock", flag.to_string()));
        }
        push_non_empty(&mut pairs, "min_price", &self.min_price);
        push_non_empty(&mut pairs, "max_price", &self.max_price);
        pairs
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerifiedFilter {
    /// The directory lists verified sellers unless asked otherwise
    #[default]
    VerifiedOnly,
    Any,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorFilters {
    pub verified: VerifiedFilter,
}

impl ListFilters for VendorFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self.verified {
            VerifiedFilter::VerifiedOnly => vec![("verified", "true".to_string())],
            VerifiedFilter::Any => Vec::new(),
        }
    }
}

fn push_non_empty(pairs: &mut Vec<(&'static str, String)>, name: &'static str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        pairs.push((name, value.to_string()));
    }
}

/// Query string for an unpaginated "top N" request.
pub fn top_n_query(limit: u32) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("limit", &limit.to_string())
        .finish()
}

/// Key for one card in a keyed grid.
pub type RowKey = (usize, String);

/// Pair each item with a key that is unique within the list.
///
/// Record ids are not unique after lenient decoding (a missing id reads as
/// `""`, and `1.0` reads the same as `1`), so the position is part of the key.
pub fn keyed_rows<T>(items: Vec<T>, id: impl Fn(&T) -> &str) -> Vec<(RowKey, T)> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let key = (index, id(&item).to_string());
            (key, item)
        })
        .collect()
}

/// Handed out by [`ListQuery::begin_fetch`] and returned with the response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: String,
}

/// Everything that should trigger a new request when it changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestKey {
    pub query: String,
    pub attempt: u32,
}

/// What a list page should render right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Failed(ApiError),
    Empty,
    Ready,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery<F, T> {
    filters: F,
    page: u32,
    pages: u32,
    total: u64,
    limit: u32,
    items: Vec<T>,
    generation: u64,
    in_flight: Option<u64>,
    loaded: bool,
    attempt: u32,
    error: Option<ApiError>,
}

pub type ProductListQuery = ListQuery<ProductFilters, Product>;
pub type VendorListQuery = ListQuery<VendorFilters, Vendor>;

impl<F: ListFilters, T> ListQuery<F, T> {
    pub fn new(limit: u32) -> Self {
        Self {
            filters: F::default(),
            page: 1,
            pages: 1,
            total: 0,
            limit: limit.max(1),
            items: Vec::new(),
            generation: 0,
            in_flight: None,
            loaded: false,
            attempt: 0,
            error: None,
        }
    }

    pub fn filters(&self) -> &F {
        &self.filters
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Replace the filter set. A changed set sends the view back to page 1.
    pub fn set_filters(&mut self, filters: F) -> bool {
        if filters == self.filters {
            return false;
        }
        self.filters = filters;
        self.page = 1;
        true
    }

    /// Edit the filter set in place; same page rule as [`Self::set_filters`].
    pub fn update_filters(&mut self, edit: impl FnOnce(&mut F)) -> bool {
        let mut next = self.filters.clone();
        edit(&mut next);
        self.set_filters(next)
    }

    /// Clear every filter and return to page 1.
    pub fn reset(&mut self) {
        self.filters = F::default();
        self.page = 1;
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.pages
    }

    pub fn prev_page(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn next_page(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Ask for the current query again, e.g. after a failure.
    pub fn retry(&mut self) {
        self.attempt = self.attempt.wrapping_add(1);
    }

    /// Non-empty filters, then `page` and `limit`, form-urlencoded.
    pub fn query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.filters.query_pairs() {
            serializer.append_pair(name, &value);
        }
        serializer
            .append_pair("page", &self.page.to_string())
            .append_pair("limit", &self.limit.to_string());
        serializer.finish()
    }

    pub fn request_key(&self) -> RequestKey {
        RequestKey {
            query: self.query_string(),
            attempt: self.attempt,
        }
    }

    /// Start a request for the current state. Earlier tickets become stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.in_flight = Some(self.generation);
        FetchTicket {
            generation: self.generation,
            query: self.query_string(),
        }
    }

    /// Apply a response. Returns `false` when the ticket has been superseded.
    pub fn apply(&mut self, ticket: &FetchTicket, result: Result<Paginated<T>, ApiError>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Dropping stale response for '{}' (generation {} < {})",
                ticket.query,
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.in_flight = None;
        self.loaded = true;

        match result {
            Ok(page) => {
                self.pages = page.page_count();
                self.total = page.total_count();
                self.items = page.items;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("Listing request '{}' failed: {}", ticket.query, e);
                self.items.clear();
                self.error = Some(e);
            }
        }
        true
    }

    pub fn status(&self) -> ListStatus {
        if self.in_flight.is_some() && (!self.loaded || self.error.is_some()) {
            return ListStatus::Loading;
        }
        if let Some(e) = &self.error {
            return ListStatus::Failed(e.clone());
        }
        if !self.loaded {
            ListStatus::Loading
        } else if self.items.is_empty() {
            ListStatus::Empty
        } else {
            ListStatus::Ready
        }
    }

    /// "Showing page X of Y • N {noun}"
    pub fn summary(&self, noun: &str) -> String {
        format!(
            "Showing page {} of {} \u{2022} {} {}",
            self.page, self.pages, self.total, noun
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            title: format!("Product {}", id),
            ..Product::default()
        }
    }

    fn page_of(ids: &[&str], pages: u32, total: u64) -> Paginated<Product> {
        Paginated {
            items: ids.iter().map(|id| product(id)).collect(),
            pages: Some(pages),
            total: Some(total),
        }
    }

    #[test]
    fn test_initial_state() {
        let query = ProductListQuery::new(PRODUCT_PAGE_SIZE);
        assert_eq!(query.page(), 1);
        assert_eq!(query.pages(), 1);
        assert_eq!(query.total(), 0);
        assert_eq!(query.status(), ListStatus::Loading);
        assert!(!query.can_go_prev());
        assert!(!query.can_go_next());
    }

    #[test]
    fn test_query_string_category_and_price() {
        let mut query = ProductListQuery::new(PRODUCT_PAGE_SIZE);
        query.update_filters(|f| {
            f.category = "electronics".to_string();
            f.min_price = "10".to_string();
        });
        let ticket = query.begin_fetch();
        query.apply(&ticket, Ok(page_of(&["a"], 3, 30)));
        assert!(query.next_page());

        assert_eq!(query.query_string(), "category=electronics&min_price=10&page=2&limit=12");
    }

    #[test]
    fn test_query_string_encodes_values() {
        let mut query = ProductListQuery::new(PRODUCT_PAGE_SIZE);
        query.update_filters(|f| f.q = "red shoes & socks".to_string());
        assert_eq!(query.query_string(), "q=red+shoes+%26+socks&page=1&limit=12");
    }

    #[test]
    fn test_stock_filter_params() {
        let mut query = ProductListQuery::new(PRODUCT_PAGE_SIZE);
        query.update_filters(|f| f.in_stock = StockFilter::OutOfStock);
        assert_eq!(query.query_string(), "in_stock=false&page=1&limit=12");
        query.update_filters(|f| f.in_stock = StockFilter::InStock);
        assert_eq!(query.query_string(), "in_stock=true&page=1&limit=12");
    }

    #[test]
    fn test_unchanged_filters_keep_page() {
        let mut query = ProductListQuery::new(PRODUCT_PAGE_SIZE);
        let ticket = query.begin_fetch();
        query.apply(&ticket, Ok(page_of(&["a"], 5, 50)));
        query.next_page();
        query.next_page();

        assert!(!query.update_filters(|f| f.q = String::new()));
        assert_eq!(query.page(), 3);
    }

    #[test]
    fn test_error_then_retry() {
        let mut query = VendorListQuery::new(VENDOR_PAGE_SIZE);
        let key_before = query.request_key();
        let ticket = query.begin_fetch();
        query.apply(&ticket, Err(ApiError::Network("refused".to_string())));

        assert!(matches!(query.status(), ListStatus::Failed(ApiError::Network(_))));

        query.retry();
        let key_after = query.request_key();
        assert_eq!(key_before.query, key_after.query);
        assert_ne!(key_before, key_after);

        query.begin_fetch();
        assert_eq!(query.status(), ListStatus::Loading);
    }

    #[test]
    fn test_vendor_default_query() {
        let query = VendorListQuery::new(VENDOR_PAGE_SIZE);
        assert_eq!(query.query_string(), "verified=true&page=1&limit=18");
    }

    #[test]
    fn test_top_n_query() {
        assert_eq!(top_n_query(HOME_PRODUCT_LIMIT), "limit=8");
        assert_eq!(top_n_query(HOME_VENDOR_LIMIT), "limit=6");
    }

    #[test]
    fn test_keyed_rows_unique_for_missing_and_repeated_ids() {
        let items = vec![product(""), product(""), product("1"), product("1")];
        let rows = keyed_rows(items, |p| p.id.as_str());

        let keys: Vec<_> = rows.iter().map(|(key, _)| key.clone()).collect();
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), 4);
        assert_eq!(keys[2], (2, "1".to_string()));
    }

    #[test]
    fn test_fetch_bookkeeping_leaves_request_key_alone() {
        let mut query = ProductListQuery::new(PRODUCT_PAGE_SIZE);
        let key = query.request_key();

        let ticket = query.begin_fetch();
        assert_eq!(query.request_key(), key);
        query.apply(&ticket, Ok(page_of(&["a"], 4, 40)));
        assert_eq!(query.request_key(), key);

        let ticket = query.begin_fetch();
        query.apply(&ticket, Err(ApiError::Network("refused".to_string())));
        assert_eq!(query.request_key(), key);
    }
}
