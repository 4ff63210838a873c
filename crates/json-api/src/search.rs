//! Search Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vermeil::queries::{ProductSuggestion, SearchResults};

use crate::{
    extensions::*,
    products::{
        models::ProductResponse,
        params::{self, DEFAULT_SEARCH_LIMIT, DEFAULT_SUGGESTION_LIMIT},
    },
};

/// Full search results envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SearchResultsResponse {
    /// Matches, newest first, capped at the requested limit
    pub products: Vec<ProductResponse>,

    /// Number of matches before the cap
    pub total: usize,
}

impl From<SearchResults> for SearchResultsResponse {
    fn from(results: SearchResults) -> Self {
        SearchResultsResponse {
            products: results.products.into_iter().map(Into::into).collect(),
            total: results.total,
        }
    }
}

/// Minimal projection for the search-as-you-type dropdown.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SuggestionResponse {
    /// Product id
    pub id: u32,

    /// Product name
    pub name: String,

    /// Product slug for linking to the detail page
    pub slug: String,

    /// Primary image, when the product has one
    pub image: Option<String>,

    /// Price in major currency units
    pub price: u64,
}

impl From<ProductSuggestion> for SuggestionResponse {
    fn from(suggestion: ProductSuggestion) -> Self {
        SuggestionResponse {
            id: suggestion.id,
            name: suggestion.name,
            slug: suggestion.slug,
            image: suggestion.image,
            price: suggestion.price,
        }
    }
}

/// Search response body: an envelope for full searches, a bare array in
/// suggestion mode.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub(crate) enum SearchResponse {
    Results(SearchResultsResponse),
    Suggestions(Vec<SuggestionResponse>),
}

/// Search Handler
///
/// Full-catalog search, or lightweight suggestions with `mode=suggestions`.
#[endpoint(tags("search"), summary = "Search Products")]
pub(crate) async fn handler(
    q: QueryParam<String, false>,
    mode: QueryParam<String, false>,
    limit: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<SearchResponse>, StatusError> {
    let state = depot.state()?;
    let query = q.into_inner().unwrap_or_default();

    // Too-short queries get the empty envelope whichever mode was asked
    // for, matching the storefront's debounced search box.
    if query.trim().chars().count() < 2 {
        return Ok(Json(SearchResponse::Results(SearchResults::empty().into())));
    }

    let response = match mode.into_inner().as_deref() {
        Some("suggestions") => {
            let limit = params::parse_count(limit.into_inner(), DEFAULT_SUGGESTION_LIMIT);

            SearchResponse::Suggestions(
                state
                    .catalog
                    .search_suggestions(&query, limit)
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            )
        }
        _other => {
            let limit = params::parse_count(limit.into_inner(), DEFAULT_SEARCH_LIMIT);

            SearchResponse::Results(state.catalog.search(&query, limit).into())
        }
    };

    Ok(Json(response))
}
