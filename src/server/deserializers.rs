use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

/// The 1-based `page` query parameter. The first `page` key wins; a missing,
/// empty or non-integer value means page 1. Never rejects the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub i64);

impl Page {
    // query strings are deserialized as raw pairs so repeated keys do not fail
    fn from_query(parts: &Parts) -> Self {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        let page = pairs
            .into_iter()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Page(page)
    }
}

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Page::from_query(parts))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    fn page_of(query: &str) -> i64 {
        let (parts, _) = Request::builder()
            .uri(format!("/questions?{query}"))
            .body(())
            .unwrap()
            .into_parts();
        Page::from_query(&parts).0
    }

    #[test]
    fn parses_integer_page() {
        assert_eq!(page_of("page=3"), 3);
        assert_eq!(page_of("page=-2"), -2);
    }

    #[test]
    fn falls_back_to_first_page() {
        assert_eq!(page_of(""), 1);
        assert_eq!(page_of("page="), 1);
        assert_eq!(page_of("page=abc"), 1);
        assert_eq!(page_of("page=1.5"), 1);
        assert_eq!(page_of("other=7"), 1);
    }

    #[test]
    fn first_page_key_wins() {
        assert_eq!(page_of("page=2&page=1"), 2);
        assert_eq!(page_of("other=x&page=3&page=abc"), 3);
    }
}
