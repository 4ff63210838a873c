//! Listing parameter coercion.
//!
//! The storefront sends everything as query strings. This module is the one
//! place that turns those raw values into validated query options, so the
//! coercion rules live here and nowhere else: numbers that do not parse and
//! flags other than the literal `"true"` are treated as absent, unknown
//! sort parameters fall back to the defaults, and empty strings count as
//! absent.

use std::str::FromStr;

use salvo::{http::StatusError, prelude::Request};

use vermeil::{
    catalog::MetalType,
    queries::{DEFAULT_PAGE_SIZE, ProductListOptions},
};

/// Showcase size when the caller does not pass `limit`.
pub(crate) const DEFAULT_SHOWCASE_LIMIT: usize = 8;

/// Related-products cap when the caller does not pass `limit`.
pub(crate) const DEFAULT_RELATED_LIMIT: usize = 4;

/// Full-search cap when the caller does not pass `limit`.
pub(crate) const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Suggestion cap when the caller does not pass `limit`.
pub(crate) const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Raw listing parameters as they appear on the query string.
#[derive(Debug, Default)]
pub(crate) struct RawListParams {
    pub category: Option<String>,
    pub metal: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub featured: Option<String>,
    pub new_arrival: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl RawListParams {
    pub(crate) fn from_request(req: &mut Request) -> Self {
        Self {
            category: req.query("category"),
            metal: req.query("metal"),
            min_price: req.query("minPrice"),
            max_price: req.query("maxPrice"),
            page: req.query("page"),
            limit: req.query("limit"),
            featured: req.query("featured"),
            new_arrival: req.query("newArrival"),
            sort: req.query("sort"),
            order: req.query("order"),
        }
    }

    /// Coerce the raw strings into validated listing options.
    ///
    /// # Errors
    ///
    /// Returns a 400 when `metal` does not name a known metal type. The
    /// metal set is a fixed enumeration, so a typo would otherwise silently
    /// match nothing.
    pub(crate) fn into_options(self) -> Result<ProductListOptions, StatusError> {
        let metal_type = match present(self.metal) {
            Some(raw) => Some(raw.parse::<MetalType>().map_err(|parse_error| {
                StatusError::bad_request().brief(parse_error.to_string())
            })?),
            None => None,
        };

        Ok(ProductListOptions {
            category_slug: present(self.category),
            metal_type,
            min_price: parse_number(self.min_price),
            max_price: parse_number(self.max_price),
            featured: parse_flag(self.featured),
            new_arrival: parse_flag(self.new_arrival),
            page: parse_count(self.page, 1),
            limit: parse_count(self.limit, DEFAULT_PAGE_SIZE),
            order_by: parse_or_default(self.sort),
            order: parse_or_default(self.order),
        })
    }
}

/// Empty parameters are the same as absent ones.
fn present(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
}

fn parse_number<T: FromStr>(raw: Option<String>) -> Option<T> {
    present(raw).and_then(|value| value.parse().ok())
}

/// Only the literal `"true"` opts into a boolean filter.
fn parse_flag(raw: Option<String>) -> Option<bool> {
    (present(raw).as_deref() == Some("true")).then_some(true)
}

pub(crate) fn parse_count(raw: Option<String>, default: usize) -> usize {
    parse_number(raw).unwrap_or(default)
}

fn parse_or_default<T: FromStr + Default>(raw: Option<String>) -> T {
    present(raw)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}
